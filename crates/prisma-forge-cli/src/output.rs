use console::{Style, Term};

use crate::cli::GlobalOpts;
use crate::diagnostic::render_diagnostic;
use crate::error::CliError;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// Styled messages on stderr
    Human,
    /// One JSON document on stdout
    Json,
    /// Tab-separated lines
    Plain,
}

/// Where command messages go and how they look.
///
/// Rendered schemas are written by the commands themselves; this only
/// covers status, summaries and errors.
pub struct OutputContext {
    pub mode: OutputMode,
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    pub fn from_global(global: &GlobalOpts) -> Self {
        let use_color = !global.no_color
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && Term::stderr().is_term();

        Self {
            mode: global.format,
            quiet: global.quiet,
            use_color,
        }
    }

    fn chatty(&self) -> bool {
        !self.quiet && self.mode == OutputMode::Human
    }

    fn label(&self, text: &str, style: Style) -> String {
        if self.use_color {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// `ok <msg>` on stderr; human mode only.
    pub fn success(&self, msg: &str) {
        if self.chatty() {
            eprintln!("{} {msg}", self.label("ok", Style::new().green().bold()));
        }
    }

    /// A progress line on stderr; human mode only.
    pub fn status(&self, msg: &str) {
        if self.chatty() {
            eprintln!("{msg}");
        }
    }

    /// Warnings show in every mode unless `--quiet`.
    pub fn warn(&self, msg: &str) {
        if self.quiet {
            return;
        }
        match self.mode {
            OutputMode::Human => {
                eprintln!("{} {msg}", self.label("warning:", Style::new().yellow().bold()));
            }
            OutputMode::Json => eprintln!("{}", serde_json::json!({ "warning": msg })),
            OutputMode::Plain => eprintln!("warning\t{msg}"),
        }
    }

    /// Errors are never silenced. Decode errors render as a source excerpt
    /// in human mode.
    pub fn print_error(&self, err: &CliError) {
        match self.mode {
            OutputMode::Human => match render_diagnostic(err) {
                Some(report) => eprintln!("{report:?}"),
                None => eprintln!("{} {err}", self.label("error:", Style::new().red().bold())),
            },
            OutputMode::Json => eprintln!("{}", err.to_json()),
            OutputMode::Plain => eprintln!("error\t{err}"),
        }
    }

    /// Pretty-printed JSON on stdout.
    pub fn print_json(&self, value: &serde_json::Value) {
        if let Ok(s) = serde_json::to_string_pretty(value) {
            println!("{s}");
        }
    }
}
