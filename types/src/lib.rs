//! Fundamental types for the Credo certificate verification service.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: identifiers, the secret verification token, timestamps, and the
//! certificate record itself.

pub mod id;
pub mod record;
pub mod time;
pub mod token;

pub use id::{CertificateId, PublicId};
pub use record::{CertificateRecord, DateValue, TrainingPeriod};
pub use time::Timestamp;
pub use token::VerificationToken;
