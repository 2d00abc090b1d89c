//! Outcome classification for a confirmation attempt.

/// Notice shown when the backend rejects the token.
pub const REJECTED_NOTICE: &str = "Failed to confirm token";

/// Notice shown when the request never completed.
pub const NETWORK_FAILURE_NOTICE: &str = "Something went wrong";

/// Result of one activation request.
///
/// Exactly one of these is produced per
/// [`ConfirmFlow::confirm`](crate::flow::ConfirmFlow::confirm) call. The
/// payloads feed log lines; the user-visible behavior is three-way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The backend accepted the token; the account is active.
    Activated,
    /// The backend answered outside the 2xx range.
    Rejected { status: u16 },
    /// The request never completed (DNS failure, refused connection, ...).
    NetworkFailure { message: String },
}

impl ConfirmOutcome {
    /// Classifies a completed response by status code. Any 2xx counts as
    /// success (the `Response.ok` range); everything else is a rejection.
    pub fn from_status(status: u16) -> Self {
        if (200..=299).contains(&status) {
            Self::Activated
        } else {
            Self::Rejected { status }
        }
    }

    pub fn is_activated(&self) -> bool {
        matches!(self, Self::Activated)
    }

    /// Blocking notice to show the user, if any. Success carries none; the
    /// app navigates away instead.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Activated => None,
            Self::Rejected { .. } => Some(REJECTED_NOTICE),
            Self::NetworkFailure { .. } => Some(NETWORK_FAILURE_NOTICE),
        }
    }
}
