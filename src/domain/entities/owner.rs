//! Ownership label attached to every link.

use std::fmt;

/// Caller-supplied token identifying who owns a link.
///
/// This is a label, not a credential: anyone holding the token can manage the
/// links created with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerToken(String);

impl OwnerToken {
    /// Wraps a raw client id, kept byte for byte.
    ///
    /// Returns `None` for an empty or whitespace-only value.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
