//! The secret verification token.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The high-entropy secret required to complete a verification lookup.
///
/// Generated by the issuance process (out of scope here); this service only
/// consumes it. The token must never reach logs or rendered output, so
/// `Debug` is redacted and there is deliberately no `Display` impl. The serde
/// impls exist only so the storage backend can persist the record.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerificationToken(String);

impl VerificationToken {
    /// Create a token from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw token string. Only the store layer should need this,
    /// to build its lookup key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token is non-empty.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Debug for VerificationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VerificationToken(<redacted>)")
    }
}

impl From<String> for VerificationToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let token = VerificationToken::new("tok-super-secret");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("tok-super-secret"));
        assert!(rendered.contains("redacted"));
    }
}
