use miette::{Diagnostic, NamedSource, SourceSpan};

use crate::error::CliError;

/// A diagnostic for a definition file that failed to decode.
///
/// Renders the offending document with the decoder's error position
/// highlighted.
///
/// The module-level `#[allow(unused_assignments)]` in main.rs is required
/// because miette's derive macro generates assignment patterns that rustc
/// flags as unused.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct DefinitionDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: Option<SourceSpan>,

    message: String,
    label: String,

    #[help]
    suggestion: Option<String>,
}

/// Builds a diagnostic from a decode error. Other errors have no source to
/// point into and return `None`.
pub fn decode_diagnostic(error: &CliError) -> Option<DefinitionDiagnostic> {
    let CliError::Decode {
        file,
        message,
        source_text,
        span,
    } = error
    else {
        return None;
    };

    let span = span.map(|(start, end)| SourceSpan::from((start, end.saturating_sub(start))));
    Some(DefinitionDiagnostic {
        src: NamedSource::new(file.display().to_string(), source_text.clone()),
        span,
        message: format!("invalid definition: {}", first_line(message)),
        label: "here".to_string(),
        suggestion: suggestion_for(message),
    })
}

/// Renders a decode error as a miette report.
pub fn render_diagnostic(error: &CliError) -> Option<miette::Report> {
    decode_diagnostic(error).map(miette::Report::new)
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or(message)
}

fn suggestion_for(message: &str) -> Option<String> {
    if message.contains("unknown field") {
        Some(
            "Keys are snake_case (`binary_targets`, `updated_at`), not the SDL spelling; \
             top-level keys are `datasource`, `generators`, `models` and `enums`."
                .to_string(),
        )
    } else if message.contains("missing field `kind`") || message.contains("unknown variant") {
        Some("Each field needs `kind = \"scalar\"` or `kind = \"object\"`.".to_string())
    } else if message.contains("Unknown type") {
        Some("Scalar types are String, Boolean, Int, Float, DateTime and Json.".to_string())
    } else if message.contains("Unknown data source provider") {
        Some("Providers are postgresql, mysql and sqlite.".to_string())
    } else if message.contains("Unknown default function") {
        Some("Default functions are autoincrement, now, uuid and cuid.".to_string())
    } else {
        None
    }
}
