//! LMDB storage backend for the Credo certificate store.
//!
//! Implements the storage traits from `credo-store` using the `heed` LMDB
//! bindings. Certificates live in a single database keyed by the composite
//! `(public_id, verification_token)` pair, so the two-field equality match
//! required by the verification flow is one exact-key read.

pub mod certificate;
pub mod environment;
pub mod error;

pub use certificate::LmdbCertificateStore;
pub use environment::LmdbEnvironment;
pub use error::LmdbError;
