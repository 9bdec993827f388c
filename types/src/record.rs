//! The authoritative record of a single issued certificate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::{CertificateId, PublicId};
use crate::time::Timestamp;
use crate::token::VerificationToken;

/// A training period as stored on a certificate.
///
/// Two schema variants exist in the wild: structured start/end dates, and a
/// single pre-rendered text field. Both are carried by one type and resolved
/// to a display string only at display-shaping time, so the verification flow
/// never branches on the variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingPeriod {
    /// Structured dates; either end may be absent.
    Range {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
    /// Pre-formatted text, shown verbatim.
    Text(String),
}

/// A date-valued certificate field that may arrive structured or as
/// pre-formatted text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateValue {
    Date(NaiveDate),
    Text(String),
}

/// The authoritative, immutable-once-issued record of a certificate.
///
/// Created by the external issuance process; the verification flow only ever
/// reads these. The `(public_id, verification_token)` pair is unique across
/// all records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CertificateRecord {
    /// Internal primary key, distinct from the QR identifier. Non-secret;
    /// may be shown as an audit reference.
    pub id: CertificateId,
    /// Identifier embedded in the QR code.
    pub public_id: PublicId,
    /// Secret required to complete a lookup. Never rendered or logged.
    pub verification_token: VerificationToken,
    /// Name of the person the certificate was awarded to.
    pub recipient_name: String,
    /// The training program or course the certificate attests.
    pub training_label: String,
    /// When the training took place, if recorded.
    pub training_period: Option<TrainingPeriod>,
    /// When the certificate was awarded, if recorded.
    pub award_date: Option<DateValue>,
    /// Audit/serial reference, if assigned.
    pub control_number: Option<String>,
    /// When the record was created. Set at issuance, immutable.
    pub issued_at: Timestamp,
}
