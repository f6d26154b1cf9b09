//! Type-specific shape checks for scalar field defaults.

use crate::error::SchemaError;
use crate::types::{DefaultFunction, DefaultValue, Literal, ScalarType};

/// Checks that a default value has a shape accepted by the declared type.
///
/// | Type     | Accepted                               |
/// |----------|----------------------------------------|
/// | String   | string literal, `uuid()`, `cuid()`     |
/// | Boolean  | boolean literal                        |
/// | Int      | number literal, `autoincrement()`      |
/// | Float    | number literal                         |
/// | DateTime | string literal, `now()`                |
/// | Json     | string literal (not parsed as JSON)    |
///
/// An absent default always passes.
pub fn validate_scalar_default(
    r#type: ScalarType,
    value: Option<&DefaultValue>,
) -> Result<(), SchemaError> {
    let Some(value) = value else {
        return Ok(());
    };

    let accepted = match r#type {
        ScalarType::String => matches!(
            value,
            DefaultValue::Literal(Literal::String(_))
                | DefaultValue::Call(DefaultFunction::Uuid | DefaultFunction::Cuid)
        ),
        ScalarType::Boolean => matches!(value, DefaultValue::Literal(Literal::Boolean(_))),
        ScalarType::Int => match value {
            DefaultValue::Literal(l) => l.is_number(),
            DefaultValue::Call(f) => *f == DefaultFunction::AutoIncrement,
        },
        ScalarType::Float => matches!(value, DefaultValue::Literal(l) if l.is_number()),
        ScalarType::DateTime => matches!(
            value,
            DefaultValue::Literal(Literal::String(_)) | DefaultValue::Call(DefaultFunction::Now)
        ),
        ScalarType::Json => matches!(value, DefaultValue::Literal(Literal::String(_))),
    };

    if accepted {
        Ok(())
    } else {
        Err(mismatch_error(r#type))
    }
}

fn mismatch_error(r#type: ScalarType) -> SchemaError {
    match r#type {
        ScalarType::String => SchemaError::InvalidStringDefault,
        ScalarType::Boolean => SchemaError::InvalidBooleanDefault,
        ScalarType::Int => SchemaError::InvalidIntDefault,
        ScalarType::Float => SchemaError::InvalidFloatDefault,
        ScalarType::DateTime => SchemaError::InvalidDateTimeDefault,
        ScalarType::Json => SchemaError::InvalidJsonDefault,
    }
}
