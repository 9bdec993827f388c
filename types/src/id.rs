//! Certificate identifier types.
//!
//! A certificate carries two identifiers: the internal `CertificateId`
//! (primary key, safe to show as an audit reference) and the `PublicId`
//! embedded in the QR code. Neither is secret; disclosure is gated by the
//! verification token, never by either identifier alone.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The internal primary key of an issued certificate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CertificateId(String);

impl CertificateId {
    /// Create an identifier from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CertificateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CertificateId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// The identifier embedded in a certificate's QR code.
///
/// Discoverable by anyone who scans the code, so it is treated as opaque and
/// non-secret. Unique per certificate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicId(String);

impl PublicId {
    /// Create a public identifier from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is non-empty. The only format constraint this
    /// service imposes; anything further belongs to the issuance process.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for PublicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PublicId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
