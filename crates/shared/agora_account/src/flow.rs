//! One-shot confirmation flow and its loading guard.

use std::future::Future;

use thiserror::Error;

use crate::config::ApiConfig;
use crate::outcome::ConfirmOutcome;

/// Error from a transport that could not complete a request at all.
///
/// Completed responses are never errors; their status codes go through
/// [`ConfirmOutcome::from_status`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Issues a bodiless `PUT` and yields the response status.
///
/// The browser app backs this with `fetch`; tests back it with scripted
/// responses.
pub trait ActivationTransport {
    fn put(&self, url: &str) -> impl Future<Output = Result<u16, TransportError>>;
}

/// Drives account activation against a configured backend.
#[derive(Debug, Clone)]
pub struct ConfirmFlow<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: ActivationTransport> ConfirmFlow<T> {
    /// The backend location is injected here; the flow never reads ambient
    /// configuration.
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issues exactly one activation request for `token`.
    ///
    /// No retries, no timeout: the token goes out as-is and the first answer
    /// (or transport failure) is final.
    pub async fn confirm(&self, token: &str) -> ConfirmOutcome {
        let url = self.config.activation_url(token);
        match self.transport.put(&url).await {
            Ok(status) => ConfirmOutcome::from_status(status),
            Err(err) => ConfirmOutcome::NetworkFailure {
                message: err.to_string(),
            },
        }
    }
}

/// Holds a boolean loading flag `true` for its lifetime.
///
/// Construction sets the flag, `Drop` clears it. Riding on `Drop` means the
/// flag also clears when an in-flight future is dropped, e.g. when the page
/// owning it is torn down mid-request.
pub struct LoadingGuard<F: Fn(bool)> {
    set: F,
}

impl<F: Fn(bool)> LoadingGuard<F> {
    pub fn new(set: F) -> Self {
        set(true);
        Self { set }
    }
}

impl<F: Fn(bool)> Drop for LoadingGuard<F> {
    fn drop(&mut self) {
        (self.set)(false);
    }
}
