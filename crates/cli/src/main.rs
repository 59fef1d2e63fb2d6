use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use spec_checker::commands::{run_check, write_json_report, write_text_report};
use spec_checker::{is_help_arg, logging, resolve_root};

/// Check that your Elixir functions have their specs specified.
///
/// Only the lib folder is checked, and arity is ignored: this is just to
/// catch a forgotten @spec (or a @spec left behind after its function was
/// removed).
#[derive(Parser, Debug)]
#[command(name = "spec-checker", version)]
struct Cli {
    /// Path to the root of your Elixir project.
    #[arg(default_value = ".")]
    path: String,

    /// Directory under PATH to scan, overriding `.spec-checker.json`.
    #[arg(long)]
    source_dir: Option<String>,

    /// Emit JSON instead of human-readable text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // `-h`/`--help` are handled by clap; a bare `help` lands here as the path.
    if is_help_arg(&cli.path) {
        Cli::command().print_long_help()?;
        return Ok(ExitCode::SUCCESS);
    }

    logging::init_cli_logging();

    let root = resolve_root(&cli.path)?;
    tracing::debug!(root = %root.display(), "checking project");
    let summary = run_check(&root, cli.source_dir)?;

    let mut stdout = io::stdout().lock();
    if cli.json {
        write_json_report(&mut stdout, &summary)?;
    } else {
        write_text_report(&mut stdout, &summary)?;
    }

    Ok(if summary.passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
