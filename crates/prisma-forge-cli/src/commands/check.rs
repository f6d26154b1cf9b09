use crate::cli::{CheckArgs, GlobalOpts};
use crate::commands::{discover_definition_files, read_definition};
use crate::config::load_config;
use crate::definition::MergedDefinitions;
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Entity counts of one definition file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Counts {
    data_sources: usize,
    generators: usize,
    models: usize,
    enums: usize,
}

/// Run the `check` command: decode and validate definition files.
///
/// Every file is checked even after a failure; files are merged as they pass
/// so a second data source is reported against the file that declares it.
pub fn run(
    args: CheckArgs,
    global: &GlobalOpts,
    output: &OutputContext,
) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let files = discover_definition_files(&config.definition_paths(&args.paths))?;

    let mut merged = MergedDefinitions::default();
    let mut totals = Counts::default();
    let mut results: Vec<serde_json::Value> = Vec::new();
    let mut failed = 0usize;

    for file in &files {
        let filename = file.display().to_string();
        let outcome = read_definition(file).and_then(|document| {
            let counts = Counts {
                data_sources: usize::from(document.datasource.is_some()),
                generators: document.generators.len(),
                models: document.models.len(),
                enums: document.enums.len(),
            };
            merged.add(file, document).map(|()| counts)
        });

        match outcome {
            Ok(counts) => {
                totals.data_sources += counts.data_sources;
                totals.generators += counts.generators;
                totals.models += counts.models;
                totals.enums += counts.enums;

                match output.mode {
                    OutputMode::Json => results.push(serde_json::json!({
                        "file": filename,
                        "models": counts.models,
                        "enums": counts.enums,
                        "generators": counts.generators,
                        "datasource": counts.data_sources == 1,
                        "error": null,
                    })),
                    OutputMode::Plain => println!(
                        "{filename}\tok\t{}\t{}",
                        counts.models, counts.enums
                    ),
                    OutputMode::Human => output.status(&format!(
                        "  {filename} .... {} models, {} enums",
                        counts.models, counts.enums
                    )),
                }
            }
            Err(err) => {
                failed += 1;
                tracing::debug!(file = %filename, error = %err, "definition failed");
                match output.mode {
                    OutputMode::Json => results.push(serde_json::json!({
                        "file": filename,
                        "error": err.to_json(),
                    })),
                    OutputMode::Plain => println!("{filename}\terror\t{err}"),
                    OutputMode::Human => output.print_error(&err),
                }
            }
        }
    }

    match output.mode {
        OutputMode::Human => {
            let summary = format!(
                "{} files checked: {} models, {} enums, {} generators, {failed} failed",
                files.len(),
                totals.models,
                totals.enums,
                totals.generators
            );
            if failed > 0 {
                output.warn(&summary);
            } else {
                output.success(&summary);
            }
        }
        OutputMode::Json => {
            output.print_json(&serde_json::json!({
                "files": files.len(),
                "failed": failed,
                "models": totals.models,
                "enums": totals.enums,
                "generators": totals.generators,
                "results": results,
            }));
        }
        OutputMode::Plain => {}
    }

    if failed > 0 {
        Err(CliError::CheckFailed { failed })
    } else {
        Ok(())
    }
}
