use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// The primitive types a scalar field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScalarType {
    /// Variable length text.
    String,
    /// True or false value.
    Boolean,
    /// Integer value.
    Int,
    /// Floating point number.
    Float,
    /// Timestamp.
    DateTime,
    /// JSON document.
    Json,
}

impl ScalarType {
    /// All scalar types, in declaration order.
    pub const ALL: [ScalarType; 6] = [
        Self::String,
        Self::Boolean,
        Self::Int,
        Self::Float,
        Self::DateTime,
        Self::Json,
    ];

    /// Returns the SDL spelling of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::DateTime => "DateTime",
            Self::Json => "Json",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownType(s.to_string()))
    }
}

impl TryFrom<String> for ScalarType {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ScalarType> for String {
    fn from(t: ScalarType) -> String {
        t.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_display_roundtrip() {
        for t in ScalarType::ALL {
            let back: ScalarType = t.to_string().parse().unwrap();
            assert_eq!(t, back);
        }
    }

    #[test]
    fn unknown_type() {
        let err = "Decimal".parse::<ScalarType>().unwrap_err();
        assert_eq!(err, SchemaError::UnknownType("Decimal".into()));
        assert_eq!(err.to_string(), "Unknown type Decimal");
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("string".parse::<ScalarType>().is_err());
        assert!("DATETIME".parse::<ScalarType>().is_err());
    }

    #[test]
    fn serde_uses_sdl_spelling() {
        let json = serde_json::to_string(&ScalarType::DateTime).unwrap();
        assert_eq!(json, "\"DateTime\"");
        let back: ScalarType = serde_json::from_str("\"Json\"").unwrap();
        assert_eq!(back, ScalarType::Json);
        assert!(serde_json::from_str::<ScalarType>("\"Bytes\"").is_err());
    }
}
