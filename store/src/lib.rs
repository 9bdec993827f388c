//! Abstract storage traits for the Credo certificate store.
//!
//! Every storage backend (LMDB, in-memory for testing) implements these
//! traits. The rest of the codebase depends only on the traits.

pub mod certificate;
pub mod error;

pub use certificate::{CertificateStore, CertificateWriter};
pub use error::StoreError;
