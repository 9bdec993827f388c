//! Certificate storage traits.

use crate::StoreError;
use credo_types::{CertificateRecord, PublicId, VerificationToken};

/// Read side of the certificate store: the single matched lookup the
/// verification flow depends on.
pub trait CertificateStore: Send + Sync {
    /// Find the one record whose `public_id` AND `verification_token` both
    /// equal the supplied values.
    ///
    /// Returns `Ok(None)` as the definitive no-match signal. The match is an
    /// equality test on both fields simultaneously through a single code
    /// path — implementations must not look up by `public_id` alone and
    /// compare tokens afterwards. `Err` means the store itself failed
    /// (backend unreachable, corruption), which is distinct from no-match.
    fn find_certificate(
        &self,
        public_id: &PublicId,
        token: &VerificationToken,
    ) -> Result<Option<CertificateRecord>, StoreError>;
}

/// Write side of the certificate store, used only by the issuance-side
/// import path and by test seeding. The verification flow never writes.
pub trait CertificateWriter: Send + Sync {
    /// Insert a record. Fails with [`StoreError::Duplicate`] if a record with
    /// the same `(public_id, verification_token)` pair already exists.
    fn put_certificate(&self, record: &CertificateRecord) -> Result<(), StoreError>;

    /// Number of stored certificates.
    fn certificate_count(&self) -> Result<u64, StoreError>;
}
