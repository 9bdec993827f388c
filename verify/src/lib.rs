//! Verification flow for scanned certificate links.
//!
//! A verification attempt is a four-state machine. `Pending` (initial)
//! transitions to exactly one terminal state:
//!
//! - `InvalidRequest` — the link lacks a public id or token; no store call.
//! - `Unverified` — no record matched, or the store operation failed. The
//!   two causes are deliberately indistinguishable to the viewer.
//! - `Verified` — the one record matching `(public_id, token)` was found
//!   and shaped into a display projection.
//!
//! The transitions are pure functions over `(input, store result)`; the only
//! effect is a single bounded read against the store. Re-running the same
//! attempt against an unchanged store yields the same terminal state.

pub mod display;
pub mod flow;
pub mod request;
pub mod state;

pub use display::CertificateDisplay;
pub use flow::VerificationFlow;
pub use request::VerificationRequest;
pub use state::VerificationState;
