//! Nullable store — thread-safe in-memory certificate storage for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use credo_store::{CertificateStore, CertificateWriter, StoreError};
use credo_types::{CertificateRecord, PublicId, VerificationToken};

/// An in-memory certificate store for testing.
/// Thread-safe for use with tokio's multi-threaded runtime.
pub struct NullCertificateStore {
    records: Mutex<HashMap<(String, String), CertificateRecord>>,
    lookups: AtomicU64,
    failing: AtomicBool,
}

impl NullCertificateStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            lookups: AtomicU64::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// Build a store pre-seeded with the given records.
    pub fn with_records(records: impl IntoIterator<Item = CertificateRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.put_certificate(&record).expect("seeding a fresh store");
        }
        store
    }

    /// Number of lookups performed so far.
    pub fn lookup_count(&self) -> u64 {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Make every subsequent lookup fail with a backend error.
    pub fn fail_lookups(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

impl Default for NullCertificateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateStore for NullCertificateStore {
    fn find_certificate(
        &self,
        public_id: &PublicId,
        token: &VerificationToken,
    ) -> Result<Option<CertificateRecord>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected failure".to_string()));
        }
        let key = (public_id.as_str().to_string(), token.as_str().to_string());
        Ok(self.records.lock().unwrap().get(&key).cloned())
    }
}

impl CertificateWriter for NullCertificateStore {
    fn put_certificate(&self, record: &CertificateRecord) -> Result<(), StoreError> {
        let key = (
            record.public_id.as_str().to_string(),
            record.verification_token.as_str().to_string(),
        );
        let mut records = self.records.lock().unwrap();
        if records.contains_key(&key) {
            return Err(StoreError::Duplicate(record.public_id.to_string()));
        }
        records.insert(key, record.clone());
        Ok(())
    }

    fn certificate_count(&self) -> Result<u64, StoreError> {
        Ok(self.records.lock().unwrap().len() as u64)
    }
}
