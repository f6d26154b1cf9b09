use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::SchemaError;

/// The default value of a scalar field: a literal or a call to one of the
/// zero-argument generator functions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    Literal(Literal),
    Call(DefaultFunction),
}

impl DefaultValue {
    /// A string literal default. Rendered verbatim, so callers own quoting.
    pub fn string(s: impl Into<String>) -> Self {
        Self::Literal(Literal::String(s.into()))
    }

    pub fn boolean(b: bool) -> Self {
        Self::Literal(Literal::Boolean(b))
    }

    pub fn int(i: i64) -> Self {
        Self::Literal(Literal::Int(i))
    }

    /// A float literal default. Fails for NaN and infinities.
    pub fn float(f: f64) -> Result<Self, SchemaError> {
        FloatLiteral::from_f64(f).map(|f| Self::Literal(Literal::Float(f)))
    }

    pub fn call(function: DefaultFunction) -> Self {
        Self::Call(function)
    }

    /// Returns the literal, if this default is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(l) => Some(l),
            Self::Call(_) => None,
        }
    }

    /// Returns the called function, if this default is a call expression.
    pub fn as_call(&self) -> Option<DefaultFunction> {
        match self {
            Self::Call(f) => Some(*f),
            Self::Literal(_) => None,
        }
    }
}

impl From<Literal> for DefaultValue {
    fn from(l: Literal) -> Self {
        Self::Literal(l)
    }
}

impl From<DefaultFunction> for DefaultValue {
    fn from(f: DefaultFunction) -> Self {
        Self::Call(f)
    }
}

/// A literal default value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Literal {
    String(String),
    Boolean(bool),
    Int(i64),
    Float(FloatLiteral),
}

impl Literal {
    /// Returns true for `Int` and `Float` literals.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }
}

/// A finite float stored as its canonical text, keeping `Eq`/`Hash` on the
/// tree and a stable rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FloatLiteral(String);

impl FloatLiteral {
    /// Creates a float literal from a finite `f64`.
    ///
    /// The text is canonical in the JavaScript `Number#toString` sense:
    /// `-0.0` becomes `0`, and magnitudes of at least `1e21` or below `1e-6`
    /// use exponent form (`1e+21`, `1.5e-7`).
    pub fn from_f64(f: f64) -> Result<Self, SchemaError> {
        if !f.is_finite() {
            return Err(SchemaError::InvalidFloatLiteral(f.to_string()));
        }
        Ok(Self(canonical_text(f)))
    }

    /// Returns the canonical text of the number, e.g. `"2.5"` or `"3"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_f64(&self) -> f64 {
        // Constructed only from a finite f64, so the text always parses.
        self.0.parse().unwrap_or_default()
    }
}

fn canonical_text(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return f.to_string();
    }
    let exponent = format!("{f:e}");
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exponent,
    }
}

impl FromStr for FloatLiteral {
    type Err = SchemaError;

    /// Parses number text and canonicalizes it (`"1.50"` becomes `"1.5"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let f: f64 = s
            .trim()
            .parse()
            .map_err(|_| SchemaError::InvalidFloatLiteral(s.to_string()))?;
        Self::from_f64(f).map_err(|_| SchemaError::InvalidFloatLiteral(s.to_string()))
    }
}

impl fmt::Display for FloatLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for FloatLiteral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Zero-argument generator functions usable as call-expression defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DefaultFunction {
    /// Sequence-backed integer ids.
    AutoIncrement,
    /// Timestamp of record creation.
    Now,
    /// Random UUID.
    Uuid,
    /// Collision-resistant cuid.
    Cuid,
}

impl DefaultFunction {
    pub const ALL: [DefaultFunction; 4] = [Self::AutoIncrement, Self::Now, Self::Uuid, Self::Cuid];

    /// Returns the callee name as written in SDL, without parentheses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AutoIncrement => "autoincrement",
            Self::Now => "now",
            Self::Uuid => "uuid",
            Self::Cuid => "cuid",
        }
    }
}

impl fmt::Display for DefaultFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefaultFunction {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|func| func.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownFunction(s.to_string()))
    }
}

impl TryFrom<String> for DefaultFunction {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DefaultFunction> for String {
    fn from(f: DefaultFunction) -> String {
        f.as_str().to_string()
    }
}
