use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

pub mod commands;
pub mod logging;

/// Arguments that print usage instead of scanning, when given as the path.
pub const HELP_ARGS: [&str; 3] = ["help", "-h", "--help"];

/// Whether the positional argument asks for usage text.
pub fn is_help_arg(arg: &str) -> bool {
    HELP_ARGS.contains(&arg)
}

/// Resolve the project root to an absolute, canonical directory.
///
/// `.` is the current working directory. A root that does not exist or is not
/// a directory is an error rather than an empty, passing scan.
pub fn resolve_root(root: &str) -> Result<PathBuf> {
    let path = Path::new(root);
    if path == Path::new(".") {
        return env::current_dir().context("Failed to get current directory");
    }

    let resolved = path
        .canonicalize()
        .with_context(|| format!("Project root does not exist: {}", path.display()))?;
    if !resolved.is_dir() {
        bail!("Project root is not a directory: {}", resolved.display());
    }
    Ok(resolved)
}
