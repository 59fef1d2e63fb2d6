//! Identifier extraction from classified lines.

use crate::classify::{ANNOTATION_PREFIXES, DEFINITION_PREFIXES};

/// Strip each prefix in turn from the running remainder. Absent prefixes are
/// skipped.
fn strip_all<'a>(line: &'a str, prefixes: &[&str]) -> &'a str {
    prefixes.iter().fold(line, |rest, prefix| rest.strip_prefix(prefix).unwrap_or(rest))
}

/// Extract the function name from an annotation or definition line.
///
/// Both prefix families are stripped regardless of which one classified the
/// line. That is only sound while no line can start with a prefix from both
/// families. The name is whatever precedes the first `(`; without a `(` the
/// whole remainder is returned.
pub fn identifier(line: &str) -> &str {
    let rest = strip_all(line, &ANNOTATION_PREFIXES);
    let rest = strip_all(rest, &DEFINITION_PREFIXES);
    match rest.find('(') {
        Some(idx) => &rest[..idx],
        None => rest,
    }
}
