use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use spec_check_core::{ScanConfig, ScanSummary};

/// Load config for `root`, apply CLI overrides and scan.
pub fn run_check(root: &Path, source_dir: Option<String>) -> Result<ScanSummary> {
    let config = ScanConfig::load(root)
        .with_context(|| format!("Failed to load config for {}", root.display()))?
        .with_source_dir(source_dir);
    let summary = spec_check_core::scan(root, &config)
        .with_context(|| format!("Failed to check sources under {}", root.display()))?;
    Ok(summary)
}

/// Write one paragraph per failing file.
pub fn write_text_report(out: &mut impl Write, summary: &ScanSummary) -> Result<()> {
    for report in summary.failures() {
        if let Some(message) = report.message() {
            writeln!(out, "{message}").context("Failed to write report")?;
        }
    }
    Ok(())
}

/// Write the whole summary as pretty JSON.
pub fn write_json_report(out: &mut impl Write, summary: &ScanSummary) -> Result<()> {
    let serialized =
        serde_json::to_string_pretty(summary).context("Failed to serialize summary to JSON")?;
    writeln!(out, "{serialized}").context("Failed to write report")?;
    Ok(())
}
