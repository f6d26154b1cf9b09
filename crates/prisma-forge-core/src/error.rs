use std::fmt;

/// Errors that occur when constructing or validating schema AST nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// Name failed identifier validation.
    InvalidName(String),
    /// A field combined `is_required: false` with `is_list: true`.
    OptionalListNotSupported,
    /// Default of a `String` field is not a string, `uuid()` or `cuid()`.
    InvalidStringDefault,
    /// Default of a `Boolean` field is not a boolean.
    InvalidBooleanDefault,
    /// Default of an `Int` field is not a number or `autoincrement()`.
    InvalidIntDefault,
    /// Default of a `Float` field is not a number.
    InvalidFloatDefault,
    /// Default of a `DateTime` field is not a string or `now()`.
    InvalidDateTimeDefault,
    /// Default of a `Json` field is not a string.
    InvalidJsonDefault,
    /// Scalar type name is not one of the supported scalar types.
    UnknownType(String),
    /// Data source provider is not one of the supported database kinds.
    UnknownProvider(String),
    /// Callee of a call-expression default is not a known generator function.
    UnknownFunction(String),
    /// Float literal text did not parse as a finite number.
    InvalidFloatLiteral(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(
                f,
                "Invalid name: \"{name}\". Name must start with a letter and can contain only letters, numbers and underscores"
            ),
            Self::OptionalListNotSupported => write!(
                f,
                "Invalid modifiers: You cannot combine isRequired: false and isList: true - optional lists are not supported."
            ),
            Self::InvalidStringDefault => write!(
                f,
                "Default must be a string or a call expression to uuid() or cuid()"
            ),
            Self::InvalidBooleanDefault => write!(f, "Default must be a boolean"),
            Self::InvalidIntDefault => write!(
                f,
                "Default must be a number or call expression to autoincrement()"
            ),
            Self::InvalidFloatDefault => write!(f, "Default must be a number"),
            Self::InvalidDateTimeDefault => write!(
                f,
                "Default must be a date-time string or a call expression to now()"
            ),
            Self::InvalidJsonDefault => write!(f, "Default must be a JSON string"),
            Self::UnknownType(t) => write!(f, "Unknown type {t}"),
            Self::UnknownProvider(p) => write!(f, "Unknown data source provider {p}"),
            Self::UnknownFunction(name) => write!(f, "Unknown default function {name}"),
            Self::InvalidFloatLiteral(s) => {
                write!(f, "Invalid float literal {s}: must be a finite number")
            }
        }
    }
}

impl std::error::Error for SchemaError {}
