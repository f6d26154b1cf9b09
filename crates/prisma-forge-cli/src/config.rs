use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Name of the project-local config file.
pub const LOCAL_CONFIG_FILE: &str = "prisma-forge.toml";

/// CLI configuration loaded from `prisma-forge.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub format: FormatSettings,
    #[serde(default)]
    pub cli: CliSettings,
}

/// Formatting settings for `render`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatSettings {
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default)]
    pub raw: bool,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            raw: false,
        }
    }
}

/// CLI-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliSettings {
    #[serde(default = "default_definition_dir")]
    pub default_definition_dir: String,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            default_definition_dir: default_definition_dir(),
        }
    }
}

fn default_indent() -> usize {
    prisma_forge_dsl::reformat::DEFAULT_INDENT
}

fn default_definition_dir() -> String {
    "schemas/".to_string()
}

impl CliConfig {
    /// Paths to read when the command line names none.
    pub fn definition_paths(&self, explicit: &[PathBuf]) -> Vec<PathBuf> {
        if explicit.is_empty() {
            vec![PathBuf::from(&self.cli.default_definition_dir)]
        } else {
            explicit.to_vec()
        }
    }
}

/// Discovery order for config file:
/// 1. `--config <path>` (explicit)
/// 2. `PRISMA_FORGE_CONFIG` env var
/// 3. `./prisma-forge.toml` (project-local)
/// 4. `$XDG_CONFIG_HOME/prisma-forge/config.toml`
/// 5. `~/.config/prisma-forge/config.toml`
pub fn load_config(explicit_path: Option<&Path>) -> Result<CliConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    if let Ok(env_path) = std::env::var("PRISMA_FORGE_CONFIG") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return load_config_from_path(&local);
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("prisma-forge/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/prisma-forge/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok(CliConfig::default())
}

fn load_config_from_path(path: &Path) -> Result<CliConfig, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
