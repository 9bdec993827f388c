//! Shared utilities for the Credo service.

pub mod logging;

pub use logging::init_tracing;
