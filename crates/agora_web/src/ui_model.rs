//! UI models and metadata that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! page inventory on the host.

/// Top-level pages served by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Confirm,
}

impl Page {
    /// Heading shown on the page itself.
    pub fn title(self) -> &'static str {
        match self {
            Page::Landing => "Agora Social Forum",
            Page::Confirm => "Confirm Your Account",
        }
    }

    /// Pattern the router matches for this page. `Confirm` carries the
    /// activation token as a path parameter.
    pub fn route_pattern(self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::Confirm => "/confirm/:token",
        }
    }

    pub fn all() -> &'static [Page] {
        &[Page::Landing, Page::Confirm]
    }
}
