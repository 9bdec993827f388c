//! The verification flow controller.
//!
//! One attempt = parse the link parts, perform at most one bounded store
//! lookup, map the outcome to a terminal state. Store errors, lookup
//! timeouts, and genuine no-matches all land in `Unverified`; only the
//! operator log (which carries the public id, never the token) can tell
//! them apart.

use std::sync::Arc;
use std::time::Duration;

use credo_store::{CertificateStore, StoreError};
use credo_types::CertificateRecord;

use crate::display::CertificateDisplay;
use crate::request::VerificationRequest;
use crate::state::VerificationState;

/// Default bound on a single store lookup.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Drives a single verification attempt against an abstract store.
#[derive(Clone)]
pub struct VerificationFlow {
    store: Arc<dyn CertificateStore>,
    lookup_timeout: Duration,
}

impl VerificationFlow {
    pub fn new(store: Arc<dyn CertificateStore>) -> Self {
        Self::with_timeout(store, DEFAULT_LOOKUP_TIMEOUT)
    }

    pub fn with_timeout(store: Arc<dyn CertificateStore>, lookup_timeout: Duration) -> Self {
        Self {
            store,
            lookup_timeout,
        }
    }

    /// Run one verification attempt from the raw link parts.
    ///
    /// Idempotent against an unchanged store: the same input always yields
    /// the same terminal state, and the store is never mutated.
    pub async fn run(&self, public_id: Option<&str>, token: Option<&str>) -> VerificationState {
        let Some(request) = VerificationRequest::from_link_parts(public_id, token) else {
            return VerificationState::InvalidRequest;
        };

        let lookup = self.lookup(&request).await;
        if let Err(error) = &lookup {
            tracing::warn!(
                public_id = %request.public_id,
                %error,
                "certificate lookup failed; reporting as unverified"
            );
        }
        resolve(lookup)
    }

    /// One bounded, non-blocking read. The store traits are synchronous, so
    /// the call runs on the blocking pool; expiry of the bound and task
    /// failure both fold into the store-error arm.
    async fn lookup(
        &self,
        request: &VerificationRequest,
    ) -> Result<Option<CertificateRecord>, StoreError> {
        let store = Arc::clone(&self.store);
        let public_id = request.public_id.clone();
        let token = request.token.clone();
        let task =
            tokio::task::spawn_blocking(move || store.find_certificate(&public_id, &token));
        match tokio::time::timeout(self.lookup_timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(StoreError::Backend(format!(
                "lookup task failed: {join_error}"
            ))),
            Err(_) => Err(StoreError::Backend("lookup timed out".to_string())),
        }
    }
}

/// Pure transition from a completed lookup to a terminal state.
///
/// `Ok(None)` and `Err(_)` collapse into the same state: the viewer must not
/// be able to distinguish a wrong token from an unknown id from a store
/// outage.
pub fn resolve(
    lookup: Result<Option<CertificateRecord>, StoreError>,
) -> VerificationState {
    match lookup {
        Ok(Some(record)) => VerificationState::Verified(CertificateDisplay::from_record(&record)),
        Ok(None) | Err(_) => VerificationState::Unverified,
    }
}
