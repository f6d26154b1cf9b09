use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::CliError;

const BIN_NAME: &str = "prisma-forge";

/// Write a completion script for the requested shell to stdout.
pub fn run(args: CompletionsArgs) -> Result<(), CliError> {
    tracing::debug!(shell = %args.shell, "generating completions");
    clap_complete::generate(
        args.shell,
        &mut Cli::command(),
        BIN_NAME,
        &mut std::io::stdout(),
    );
    Ok(())
}
