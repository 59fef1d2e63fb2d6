//! Per-file check results and their human-readable rendering.
//!
//! Nothing here prints. Frontends decide where rendered text goes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::reconcile::{Discrepancies, NameSets};

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Label used in messages; usually the file path, possibly empty.
    pub file: String,
    #[serde(flatten)]
    pub discrepancies: Discrepancies,
}

impl FileReport {
    pub fn passed(&self) -> bool {
        self.discrepancies.is_empty()
    }

    /// Rendered message, or `None` if the file is clean.
    pub fn message(&self) -> Option<String> {
        render(&self.discrepancies, &self.file)
    }
}

/// Run the whole pipeline over `text`.
pub fn check(text: &str, file: &str) -> FileReport {
    let discrepancies = NameSets::from_text(text).discrepancies();
    FileReport { file: file.to_string(), discrepancies }
}

fn join(names: &BTreeSet<String>) -> String {
    names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Render discrepancies for `file` as one sentence per non-empty side.
///
/// Returns `None` when there is nothing to report.
pub fn render(discrepancies: &Discrepancies, file: &str) -> Option<String> {
    if discrepancies.is_empty() {
        return None;
    }

    let mut out = String::new();
    if !discrepancies.function_without_spec.is_empty() {
        out.push_str(&format!(
            "The specs are missing for functions in file {file}: {}.\n",
            join(&discrepancies.function_without_spec)
        ));
    }
    if !discrepancies.spec_without_function.is_empty() {
        out.push_str(&format!(
            "The functions are missing for specs in file {file}: {}.\n",
            join(&discrepancies.spec_without_function)
        ));
    }
    Some(out)
}
