//! Photo identifiers.
//!
//! Ids are assigned by the caller and stored as free text, so [`PhotoId`]
//! wraps a `String` rather than a `Uuid`. [`PhotoId::generate`] is there for
//! callers that want a fresh random one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Caller-assigned identifier for a stored photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(String);

impl PhotoId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a new random id (v4 UUID text).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhotoId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for PhotoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PhotoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<PhotoId> for String {
    fn from(id: PhotoId) -> Self {
        id.0
    }
}

impl AsRef<str> for PhotoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_is_uuid_text() {
        let id = PhotoId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn generate_unique() {
        assert_ne!(PhotoId::generate(), PhotoId::generate());
    }

    #[test]
    fn any_text_is_accepted() {
        let id: PhotoId = "walter-1".parse().unwrap();
        assert_eq!(id.to_string(), "walter-1");
        assert_eq!(String::from(id), "walter-1");
    }

    #[test]
    fn serde_transparent() {
        let id = PhotoId::new("abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: PhotoId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
