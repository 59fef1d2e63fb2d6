//! Filesystem side of the checker: discovering source files and checking
//! them one after another.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::{CheckError, CheckResult};
use crate::report::{check, FileReport};

/// Results for every file visited by a scan, in visiting order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub files_checked: usize,
    pub files_failed: usize,
    pub reports: Vec<FileReport>,
}

impl ScanSummary {
    pub fn push(&mut self, report: FileReport) {
        self.files_checked += 1;
        if !report.passed() {
            self.files_failed += 1;
        }
        self.reports.push(report);
    }

    /// True when no file had a discrepancy (vacuously true for an empty scan).
    pub fn passed(&self) -> bool {
        self.files_failed == 0
    }

    /// Reports that have something to say.
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.reports.iter().filter(|r| !r.passed())
    }
}

/// Find every file under `<root>/<source_dir>` with an accepted extension,
/// sorted by path.
pub fn discover_files(root: &Path, config: &ScanConfig) -> CheckResult<Vec<PathBuf>> {
    let source_root = config.source_root(root);
    if !source_root.is_dir() {
        warn!(path = %source_root.display(), "source directory not found; nothing to check");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&source_root).follow_links(false) {
        let entry = entry?;
        // Symlinked files count; symlinked directories are not descended.
        if entry.path().is_file() && config.accepts(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Read `path` and check it. The report is labelled with the path relative to
/// `root`, or the full path when it lies elsewhere.
pub fn check_file(root: &Path, path: &Path) -> CheckResult<FileReport> {
    let contents = fs::read_to_string(path)
        .map_err(|source| CheckError::Io { path: path.to_path_buf(), source })?;
    let label = path.strip_prefix(root).unwrap_or(path);
    let report = check(&contents, &label.display().to_string());
    debug!(file = %path.display(), passed = report.passed(), "checked file");
    Ok(report)
}

/// Check every discovered file under `root`. Stops at the first read error.
pub fn scan(root: &Path, config: &ScanConfig) -> CheckResult<ScanSummary> {
    let mut summary = ScanSummary::default();
    for path in discover_files(root, config)? {
        summary.push(check_file(root, &path)?);
    }
    info!(
        files_checked = summary.files_checked,
        files_failed = summary.files_failed,
        "scan finished"
    );
    Ok(summary)
}
