use std::future::Future;

use prisma_forge_core::types::Schema;

use crate::printer::print_raw;

/// Turns raw SDL text into canonical, human-readable text.
///
/// Implementations are expected to be idempotent on their own output and to
/// preserve statement order and content. The crate ships `Reformatter`; an
/// external tool can be wrapped behind the same trait.
///
/// Uses RPITIT (return position impl Trait in trait) for the async method,
/// avoiding the `async-trait` crate.
pub trait Formatter: Send + Sync {
    /// Failure reported by the formatter. Propagated by `print` unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Format raw SDL text.
    fn format(&self, raw: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Print a schema and pass the text through `formatter`.
///
/// # Errors
///
/// Returns whatever error the formatter reports, unchanged. No partial
/// output is produced.
pub async fn print<F: Formatter>(schema: &Schema, formatter: &F) -> Result<String, F::Error> {
    let raw = print_raw(schema);
    tracing::debug!(
        statements = schema.statement_count(),
        raw_len = raw.len(),
        "printing schema"
    );
    formatter.format(&raw).await
}
