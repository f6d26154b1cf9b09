use prisma_forge_dsl::{print, print_raw, Reformatter};

use crate::cli::{GlobalOpts, RenderArgs};
use crate::commands::{discover_definition_files, load_schema};
use crate::config::load_config;
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `render` command: merge definition files and write Prisma SDL.
pub async fn run(
    args: RenderArgs,
    global: &GlobalOpts,
    output: &OutputContext,
) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let paths = config.definition_paths(&args.paths);
    let files = discover_definition_files(&paths)?;
    let schema = load_schema(&files)?;

    let raw = args.raw || config.format.raw;
    let indent = args.indent.unwrap_or(config.format.indent);
    tracing::info!(files = files.len(), raw, indent, "rendering schema");

    let text = if raw {
        let mut text = print_raw(&schema);
        if !text.is_empty() {
            text.push('\n');
        }
        text
    } else {
        print(&schema, &Reformatter::new(indent)).await?
    };

    if let Some(path) = &args.output {
        std::fs::write(path, &text).map_err(|e| CliError::Io {
            path: path.clone(),
            source: e,
        })?;
    }

    match (output.mode, &args.output) {
        (OutputMode::Json, _) => {
            let inline = args.output.is_none().then_some(&text);
            output.print_json(&serde_json::json!({
                "files": files.len(),
                "statements": schema.statement_count(),
                "output": args.output.as_ref().map(|p| p.display().to_string()),
                "schema": inline,
            }));
        }
        (_, None) => print!("{text}"),
        (_, Some(path)) => output.success(&format!(
            "Rendered {} statements from {} files to {}",
            schema.statement_count(),
            files.len(),
            path.display()
        )),
    }

    Ok(())
}
