//! Parsing of an inbound verification link.

use credo_types::{PublicId, VerificationToken};

/// A well-formed verification request: both link parts present and non-empty.
///
/// Non-emptiness is the only validation performed; both values are otherwise
/// opaque. Format constraints, if any, belong to the issuance process.
#[derive(Clone, Debug)]
pub struct VerificationRequest {
    pub public_id: PublicId,
    pub token: VerificationToken,
}

impl VerificationRequest {
    /// Build a request from the raw link parts: the path parameter carrying
    /// the public id and the `token` query parameter. Returns `None` when
    /// either is missing or empty, in which case no store lookup may happen.
    pub fn from_link_parts(public_id: Option<&str>, token: Option<&str>) -> Option<Self> {
        let public_id = PublicId::new(public_id?);
        let token = VerificationToken::new(token?);
        if !public_id.is_valid() || !token.is_valid() {
            return None;
        }
        Some(Self { public_id, token })
    }
}
