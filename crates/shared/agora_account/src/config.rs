//! Backend API configuration.

/// Default backend base URL, matching the API's local development setup.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/v1";

/// Where the backend lives.
///
/// Resolved once at the app edge and handed to
/// [`ConfirmFlow::new`](crate::flow::ConfirmFlow::new); nothing in this crate
/// reads ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Builds the config from an optional override (e.g. a build-time env
    /// value), falling back to [`DEFAULT_API_URL`].
    pub fn resolve(override_url: Option<&str>) -> Self {
        let base = override_url.unwrap_or(DEFAULT_API_URL);
        Self {
            // Tolerate trailing slashes in overrides.
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Activation endpoint for `token`.
    ///
    /// The token is opaque here: no validation, no escaping, exactly what the
    /// route handed us. An empty token yields a URL ending in `/`.
    pub fn activation_url(&self, token: &str) -> String {
        format!("{}/users/activate/{}", self.base_url, token)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}
