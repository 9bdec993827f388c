//! LMDB implementation of the certificate store traits.
//!
//! Records are keyed by the composite `(public_id, verification_token)`
//! pair: `u32_be(len(public_id)) ++ public_id ++ token`. The length prefix
//! keeps the field boundary unambiguous for variable-length ids. A lookup is
//! therefore a single exact `get` that matches both fields at once, and pair
//! uniqueness is enforced by the key itself.

use std::sync::Arc;

use credo_store::{CertificateStore, CertificateWriter, StoreError};
use credo_types::{CertificateRecord, PublicId, VerificationToken};

use crate::environment::LmdbEnvironment;
use crate::LmdbError;

pub struct LmdbCertificateStore {
    env: Arc<LmdbEnvironment>,
}

impl LmdbCertificateStore {
    pub fn new(env: Arc<LmdbEnvironment>) -> Self {
        Self { env }
    }
}

/// Build the composite pair key.
fn pair_key(public_id: &PublicId, token: &VerificationToken) -> Vec<u8> {
    let id = public_id.as_str().as_bytes();
    let tok = token.as_str().as_bytes();
    let mut key = Vec::with_capacity(4 + id.len() + tok.len());
    key.extend_from_slice(&(id.len() as u32).to_be_bytes());
    key.extend_from_slice(id);
    key.extend_from_slice(tok);
    key
}

impl CertificateStore for LmdbCertificateStore {
    fn find_certificate(
        &self,
        public_id: &PublicId,
        token: &VerificationToken,
    ) -> Result<Option<CertificateRecord>, StoreError> {
        let key = pair_key(public_id, token);
        let rtxn = self.env.env.read_txn().map_err(LmdbError::from)?;
        let bytes = self
            .env
            .certificates
            .get(&rtxn, &key)
            .map_err(LmdbError::from)?;
        match bytes {
            Some(raw) => {
                let record: CertificateRecord =
                    bincode::deserialize(raw).map_err(LmdbError::from)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }
}

impl CertificateWriter for LmdbCertificateStore {
    fn put_certificate(&self, record: &CertificateRecord) -> Result<(), StoreError> {
        let key = pair_key(&record.public_id, &record.verification_token);
        let value = bincode::serialize(record).map_err(LmdbError::from)?;
        let mut wtxn = self.env.env.write_txn().map_err(LmdbError::from)?;
        let exists = self
            .env
            .certificates
            .get(&wtxn, &key)
            .map_err(LmdbError::from)?
            .is_some();
        if exists {
            return Err(StoreError::Duplicate(record.public_id.to_string()));
        }
        self.env
            .certificates
            .put(&mut wtxn, &key, &value)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn certificate_count(&self) -> Result<u64, StoreError> {
        let rtxn = self.env.env.read_txn().map_err(LmdbError::from)?;
        let count = self
            .env
            .certificates
            .len(&rtxn)
            .map_err(LmdbError::from)?;
        Ok(count)
    }
}
