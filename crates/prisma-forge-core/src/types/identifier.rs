use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// A validated SDL identifier matching `[A-Za-z][A-Za-z0-9_]*`.
///
/// Shared by every named entity: models, enums, fields, data sources and
/// generators. There is no length bound and no reserved-word check.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Creates a new `Identifier`, validating the whole string.
    pub fn new(s: impl Into<String>) -> Result<Self, SchemaError> {
        let s = s.into();
        if !is_identifier(&s) {
            return Err(SchemaError::InvalidName(s));
        }
        Ok(Self(s))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Identifier> for String {
    fn from(n: Identifier) -> String {
        n.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        for name in ["User", "a", "post_id", "Model123", "x_1_y", "DATABASE_URL"] {
            assert!(Identifier::new(name).is_ok(), "expected valid: {name}");
        }
    }

    #[test]
    fn invalid_names() {
        for name in [
            "", "1User", "_private", "my-model", "my model", "Usér", "User!", "user.id",
        ] {
            assert!(Identifier::new(name).is_err(), "expected invalid: {name}");
        }
    }

    #[test]
    fn prefix_match_is_not_enough() {
        // A valid prefix followed by an invalid character must still fail.
        let err = Identifier::new("Valid-Suffix").unwrap_err();
        assert_eq!(err, SchemaError::InvalidName("Valid-Suffix".into()));
    }

    #[test]
    fn display_roundtrip() {
        let name = Identifier::new("Post").unwrap();
        assert_eq!(name.to_string(), "Post");
        assert_eq!(name.as_str(), "Post");
    }

    #[test]
    fn serde_roundtrip() {
        let name = Identifier::new("createdAt").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"createdAt\"");
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(name, back);
    }

    #[test]
    fn serde_rejects_invalid() {
        let result = serde_json::from_str::<Identifier>("\"9lives\"");
        assert!(result.is_err());
    }
}
