//! Display projection of a verified certificate.
//!
//! Shaping happens once, here, after a successful lookup. The two schema
//! variants for period and award fields (structured dates vs. pre-formatted
//! text) collapse to plain strings at this step, so nothing downstream
//! branches on them. The verification token is structurally absent from the
//! projection.

use chrono::NaiveDate;
use credo_types::{CertificateRecord, DateValue, TrainingPeriod};

/// Placeholder for absent optional fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// The fields disclosed on a successful verification, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateDisplay {
    /// Internal certificate id, shown as a non-secret audit reference.
    pub certificate_id: String,
    pub recipient_name: String,
    pub training_label: String,
    /// "`start` to `end`", the pre-formatted text, or "N/A".
    pub training_period: String,
    pub award_date: String,
    /// Issuance timestamp formatted as a locale date.
    pub issued_on: String,
    /// Rendered only when present.
    pub control_number: Option<String>,
}

impl CertificateDisplay {
    pub fn from_record(record: &CertificateRecord) -> Self {
        Self {
            certificate_id: record.id.to_string(),
            recipient_name: record.recipient_name.clone(),
            training_label: record.training_label.clone(),
            training_period: format_period(record.training_period.as_ref()),
            award_date: format_date_value(record.award_date.as_ref()),
            issued_on: record.issued_at.to_display_date(),
            control_number: record.control_number.clone(),
        }
    }
}

fn format_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn format_period(period: Option<&TrainingPeriod>) -> String {
    match period {
        Some(TrainingPeriod::Range {
            start: Some(start),
            end: Some(end),
        }) => format!("{} to {}", format_date(start), format_date(end)),
        Some(TrainingPeriod::Text(text)) if !text.is_empty() => text.clone(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn format_date_value(value: Option<&DateValue>) -> String {
    match value {
        Some(DateValue::Date(date)) => format_date(date),
        Some(DateValue::Text(text)) if !text.is_empty() => text.clone(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
