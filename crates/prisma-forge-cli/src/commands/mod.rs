pub mod check;
pub mod completions;
pub mod render;

use std::path::{Path, PathBuf};

use prisma_forge_core::types::Schema;

use crate::config::LOCAL_CONFIG_FILE;
use crate::definition::{decode, DefinitionDocument, MergedDefinitions};
use crate::error::CliError;

const DEFINITION_EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Discover definition files from a list of paths.
///
/// Paths can be files (used directly) or directories (searched recursively
/// for `*.json` and `*.toml`, skipping `prisma-forge.toml`).
pub fn discover_definition_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            for extension in DEFINITION_EXTENSIONS {
                let pattern = path.join("**").join(format!("*.{extension}"));
                let entries = glob::glob(&pattern.to_string_lossy())
                    .map_err(|e| CliError::Other(e.to_string()))?;
                for entry in entries {
                    let entry = entry.map_err(|e| CliError::Other(e.to_string()))?;
                    if entry.file_name().is_some_and(|name| name == LOCAL_CONFIG_FILE) {
                        continue;
                    }
                    files.push(entry);
                }
            }
        } else {
            return Err(CliError::NoDefinitionFiles { path: path.clone() });
        }
    }

    if files.is_empty() {
        let display_path = paths
            .first()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("schemas/"));
        return Err(CliError::NoDefinitionFiles { path: display_path });
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Reads and decodes one definition file.
pub fn read_definition(file: &Path) -> Result<DefinitionDocument, CliError> {
    let text = std::fs::read_to_string(file).map_err(|e| CliError::Io {
        path: file.to_path_buf(),
        source: e,
    })?;
    let document = decode(file, &text)?;
    tracing::debug!(
        file = %file.display(),
        models = document.models.len(),
        enums = document.enums.len(),
        "decoded definition"
    );
    Ok(document)
}

/// Reads every file and merges them, in order, into one schema.
///
/// Shared by `render` and `check`.
pub fn load_schema(files: &[PathBuf]) -> Result<Schema, CliError> {
    let mut merged = MergedDefinitions::default();
    for file in files {
        merged.add(file, read_definition(file)?)?;
    }
    Ok(merged.into_schema())
}
