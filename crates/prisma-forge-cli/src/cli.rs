use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::output::OutputMode;

/// Build and render Prisma schema files from structured definitions.
///
/// prisma-forge reads JSON or TOML definition documents describing a data
/// source, generators, models and enums, validates them, and writes
/// canonically formatted Prisma SDL.
#[derive(Parser)]
#[command(
    name = "prisma-forge",
    version,
    about = "Build and render Prisma schema files from structured definitions",
    after_help = "Use 'prisma-forge <command> --help' for more information about a command.",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all subcommands.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: PRISMA_FORGE_CONFIG]
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "PRISMA_FORGE_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Human)]
    pub format: OutputMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", global = true, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render definition files to Prisma SDL
    Render(RenderArgs),

    /// Validate definition files without rendering
    Check(CheckArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Arguments for `prisma-forge render`.
#[derive(Args)]
pub struct RenderArgs {
    /// Definition files or directories (default: the configured definition dir)
    pub paths: Vec<PathBuf>,

    /// Write the schema to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Skip formatting and emit the raw printer output
    #[arg(long = "raw")]
    pub raw: bool,

    /// Spaces per indentation level when formatting
    #[arg(long = "indent")]
    pub indent: Option<usize>,
}

/// Arguments for `prisma-forge check`.
#[derive(Args)]
pub struct CheckArgs {
    /// Definition files or directories (default: the configured definition dir)
    pub paths: Vec<PathBuf>,
}

/// Arguments for `prisma-forge completions`.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
