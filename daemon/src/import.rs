//! Issuance-side certificate import.
//!
//! Reads a JSON array exported by the issuance system and writes the records
//! through the store's write trait. Two export schema variants exist; serde
//! aliases accept both, and the structured-or-text period fields map onto
//! the polymorphic types in `credo-types`.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use credo_store::{CertificateWriter, StoreError};
use credo_types::{
    CertificateId, CertificateRecord, DateValue, PublicId, Timestamp, TrainingPeriod,
    VerificationToken,
};

/// One certificate as exported by the issuance system.
#[derive(Debug, Deserialize)]
pub struct ImportRecord {
    pub id: String,
    #[serde(alias = "qr_code_id")]
    pub public_id: String,
    #[serde(alias = "qr_verification_token")]
    pub verification_token: String,
    #[serde(alias = "fullname")]
    pub recipient_name: String,
    #[serde(alias = "training")]
    pub training_label: String,
    /// Structured variant of the training period.
    #[serde(default)]
    pub training_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub training_end_date: Option<NaiveDate>,
    /// Pre-formatted variant of the training period.
    #[serde(default)]
    pub training_period: Option<String>,
    /// ISO date or free text.
    #[serde(default)]
    pub award_date: Option<String>,
    #[serde(default)]
    pub control_number: Option<String>,
    /// Unix epoch seconds. Defaults to import time when absent.
    #[serde(default, alias = "created_at")]
    pub issued_at: Option<u64>,
}

impl ImportRecord {
    fn into_record(self) -> CertificateRecord {
        let training_period =
            if self.training_start_date.is_some() || self.training_end_date.is_some() {
                Some(TrainingPeriod::Range {
                    start: self.training_start_date,
                    end: self.training_end_date,
                })
            } else {
                self.training_period.filter(|t| !t.is_empty()).map(TrainingPeriod::Text)
            };
        let award_date = self
            .award_date
            .filter(|t| !t.is_empty())
            .map(|raw| match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(date) => DateValue::Date(date),
                Err(_) => DateValue::Text(raw),
            });
        CertificateRecord {
            id: CertificateId::new(self.id),
            public_id: PublicId::new(self.public_id),
            verification_token: VerificationToken::new(self.verification_token),
            recipient_name: self.recipient_name,
            training_label: self.training_label,
            training_period,
            award_date,
            control_number: self.control_number.filter(|c| !c.is_empty()),
            issued_at: self
                .issued_at
                .map(Timestamp::new)
                .unwrap_or_else(Timestamp::now),
        }
    }
}

/// Counts from a completed import run.
#[derive(Debug, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: u64,
    pub skipped: u64,
}

/// Import every certificate from the JSON export at `path`.
///
/// Records whose `(public_id, token)` pair already exists are skipped with a
/// warning; any other store failure aborts the run.
pub fn import_certificates(
    store: &dyn CertificateWriter,
    path: &Path,
) -> anyhow::Result<ImportSummary> {
    let raw = std::fs::read_to_string(path)?;
    let records: Vec<ImportRecord> = serde_json::from_str(&raw)?;

    let mut summary = ImportSummary {
        imported: 0,
        skipped: 0,
    };
    for record in records {
        match store.put_certificate(&record.into_record()) {
            Ok(()) => summary.imported += 1,
            Err(StoreError::Duplicate(public_id)) => {
                tracing::warn!(%public_id, "skipping duplicate certificate pair");
                summary.skipped += 1;
            }
            Err(other) => return Err(other.into()),
        }
    }
    Ok(summary)
}
