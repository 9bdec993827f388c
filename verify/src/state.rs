//! The verification attempt state machine.

use crate::display::CertificateDisplay;

/// Generic message for a malformed verification link. Must not reveal
/// whether the id format is otherwise plausible.
pub const INVALID_LINK_MESSAGE: &str = "Invalid verification link";

/// Generic message covering both "no matching record" and "store operation
/// failed". One text for both causes, so the page cannot be used as an
/// oracle distinguishing a wrong token from an unknown id from an outage.
pub const UNVERIFIED_MESSAGE: &str = "Certificate not found or invalid";

/// The state of a single verification attempt.
///
/// `Pending` is the initial state; the other three are terminal. The value
/// is produced by pure transition functions, so any UI layer merely renders
/// the latest state and never mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationState {
    /// Lookup not yet resolved.
    Pending,
    /// The link lacked a public id or token; no store call was made.
    InvalidRequest,
    /// No record matched, or the store operation failed.
    Unverified,
    /// The matching record, shaped for display.
    Verified(CertificateDisplay),
}

impl VerificationState {
    /// Whether this state ends the attempt.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, VerificationState::Pending)
    }

    /// The user-visible failure message, if this is a failure state.
    pub fn failure_message(&self) -> Option<&'static str> {
        match self {
            VerificationState::InvalidRequest => Some(INVALID_LINK_MESSAGE),
            VerificationState::Unverified => Some(UNVERIFIED_MESSAGE),
            VerificationState::Pending | VerificationState::Verified(_) => None,
        }
    }
}
