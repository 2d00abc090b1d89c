use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;
use wasm_bindgen_futures::spawn_local;

use agora_account::{ApiConfig, ConfirmFlow, ConfirmOutcome, LoadingGuard};

use super::http::FetchTransport;
use crate::ui_model::Page;

/// Build-time override for the backend base URL
/// (`AGORA_API_URL=... trunk build`).
const API_URL_OVERRIDE: Option<&str> = option_env!("AGORA_API_URL");

#[derive(Params, PartialEq, Clone, Debug)]
struct ConfirmRouteParams {
    token: Option<String>,
}

/// Account-confirmation page for `/confirm/:token`.
///
/// One click issues one activation request. Success navigates back to the
/// landing page; a rejected token or a failed request raises a blocking
/// notice and leaves the page up so the user can try again.
#[component]
pub(super) fn ConfirmPage() -> impl IntoView {
    let params = use_params::<ConfirmRouteParams>();
    let navigate = StoredValue::new(use_navigate());
    let (loading, set_loading) = signal(false);

    let flow = StoredValue::new(ConfirmFlow::new(
        ApiConfig::resolve(API_URL_OVERRIDE),
        FetchTransport,
    ));

    let do_confirm = move || {
        if loading.get_untracked() {
            return;
        }
        // Params are reactive; event handlers read them untracked.
        let token = params
            .get_untracked()
            .ok()
            .and_then(|p| p.token)
            .unwrap_or_default();
        let flow = flow.get_value();

        spawn_local(async move {
            // try_set: the signal is gone once the page has been disposed.
            let _guard = LoadingGuard::new(move |value| {
                let _ = set_loading.try_set(value);
            });

            let outcome = flow.confirm(&token).await;

            // None means the page was torn down while the request was in
            // flight; no navigation, no notices.
            if loading.try_get_untracked().is_none() {
                return;
            }

            match &outcome {
                ConfirmOutcome::Activated => {
                    log::info!("account activated, returning to landing");
                    navigate.with_value(|nav| {
                        nav(Page::Landing.route_pattern(), Default::default())
                    });
                }
                ConfirmOutcome::Rejected { status } => {
                    log::warn!("activation rejected (status {status})");
                }
                ConfirmOutcome::NetworkFailure { message } => {
                    log::error!("activation request failed: {message}");
                }
            }
            if let Some(notice) = outcome.notice() {
                alert(notice);
            }
        });
    };

    view! {
        <section class="confirm">
            <h1>{Page::Confirm.title()}</h1>
            <p>"Click the button below to activate your account."</p>
            <button on:click=move |_| do_confirm() disabled=move || loading.get()>
                {move || if loading.get() { "Confirming..." } else { "Confirm Account" }}
            </button>
        </section>
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
