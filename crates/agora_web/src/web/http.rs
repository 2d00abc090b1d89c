use std::future::Future;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use agora_account::{ActivationTransport, TransportError};

/// [`ActivationTransport`] backed by the browser's `fetch`.
#[derive(Debug, Clone, Copy)]
pub(super) struct FetchTransport;

impl ActivationTransport for FetchTransport {
    fn put(&self, url: &str) -> impl Future<Output = Result<u16, TransportError>> {
        let url = url.to_string();
        async move {
            let window =
                web_sys::window().ok_or_else(|| TransportError::new("fetch: no window"))?;

            let init = web_sys::RequestInit::new();
            init.set_method("PUT");
            let request = web_sys::Request::new_with_str_and_init(&url, &init)
                .map_err(|_| TransportError::new("fetch: bad request"))?;

            let response = JsFuture::from(window.fetch_with_request(&request))
                .await
                .map_err(|_| TransportError::new("fetch: network error"))?;
            let response = response
                .dyn_into::<web_sys::Response>()
                .map_err(|_| TransportError::new("fetch: expected Response"))?;

            Ok(response.status())
        }
    }
}
