//! Nullable infrastructure for deterministic testing.
//!
//! The certificate store is abstracted behind traits; this crate provides a
//! test-friendly implementation that:
//! - Holds records in memory, never touching the filesystem
//! - Counts lookups, so tests can assert that no store call happened
//! - Can be told to fail, so tests can exercise the operational-failure path
//!
//! Usage: swap the real backend for the nullable in tests.

pub mod store;

pub use store::NullCertificateStore;
