use std::path::PathBuf;

use prisma_forge_core::SchemaError;
use prisma_forge_dsl::FormatError;

/// Process exit status. `InvalidArguments` matches clap's own usage-error
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    DefinitionError = 3,
    FormatError = 4,
}

/// Everything a command can fail with.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A definition document is not valid JSON/TOML or does not match the
    /// document shape. `span` is a byte range into `source_text`.
    #[error("invalid definition in {}: {message}", file.display())]
    Decode {
        file: PathBuf,
        message: String,
        source_text: String,
        span: Option<(usize, usize)>,
    },

    /// A decoded entity failed validation.
    #[error("{entity} in {}: {source}", file.display())]
    Schema {
        file: PathBuf,
        entity: String,
        source: SchemaError,
    },

    /// Two definition files both declare a data source.
    #[error("data source declared in both {} and {}", first.display(), second.display())]
    DuplicateDataSource { first: PathBuf, second: PathBuf },

    /// One or more files failed `check`; details were already reported.
    #[error("{failed} definition file(s) failed validation")]
    CheckFailed { failed: usize },

    /// The formatter rejected the printed schema.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Reading a definition or config file, or writing `--output`.
    #[error("IO error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// `prisma-forge.toml` exists but does not parse.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// No definition files at the given path.
    #[error("no definition files found in {}", path.display())]
    NoDefinitionFiles { path: PathBuf },

    /// Glob pattern and walk failures.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Decode { .. }
            | Self::Schema { .. }
            | Self::DuplicateDataSource { .. }
            | Self::CheckFailed { .. } => ExitCode::DefinitionError,
            Self::Format(_) => ExitCode::FormatError,
            Self::Config { .. } | Self::NoDefinitionFiles { .. } => ExitCode::InvalidArguments,
            Self::Io { .. } | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// The error object printed to stderr under `--format json`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Decode {
                file,
                message,
                span,
                ..
            } => serde_json::json!({
                "error": "decode_error",
                "file": file.display().to_string(),
                "message": message,
                "span": span.map(|(start, end)| serde_json::json!([start, end])),
            }),
            Self::Schema {
                file,
                entity,
                source,
            } => serde_json::json!({
                "error": "schema_error",
                "file": file.display().to_string(),
                "entity": entity,
                "message": source.to_string(),
            }),
            Self::Format(e) => serde_json::json!({
                "error": "format_error",
                "line": e.line(),
                "message": e.to_string(),
            }),
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Config { message } => serde_json::json!({
                "error": "config_error",
                "message": message,
            }),
            other => serde_json::json!({
                "error": "error",
                "message": other.to_string(),
            }),
        }
    }
}
