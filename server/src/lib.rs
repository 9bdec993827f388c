//! HTTP server for the Credo verification pages.
//!
//! Serves:
//! - `GET /` — landing page explaining how verification works
//! - `GET /verify/:public_id?token=...` — the verification page
//! - `GET /health` — liveness probe
//!
//! The server is presentation-terminal: the verification flow's terminal
//! state is rendered as HTML, never as a machine-readable API response.

pub mod error;
pub mod handlers;
pub mod pages;
pub mod server;

pub use error::ServerError;
pub use server::VerifyServer;
