//! Account-confirmation flow for Agora, independent of any UI toolkit.
//!
//! The browser front end drives this through [`ConfirmFlow`] with a real
//! fetch-backed transport; tests drive it with scripted transports. Nothing
//! here touches wasm-only APIs, so the whole flow is unit-tested on the host.

pub mod config;
pub mod flow;
pub mod outcome;

pub use config::{ApiConfig, DEFAULT_API_URL};
pub use flow::{ActivationTransport, ConfirmFlow, LoadingGuard, TransportError};
pub use outcome::ConfirmOutcome;
