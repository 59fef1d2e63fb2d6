//! Building name sets for a file and diffing them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::classify::{relevant_lines, LineKind};
use crate::extract::identifier;

/// Identifiers declared by annotations and by definitions in one file.
///
/// Ordered sets, so everything derived from them iterates alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSets {
    pub annotations: BTreeSet<String>,
    pub definitions: BTreeSet<String>,
}

impl NameSets {
    /// Classify every line of `text` and collect the identifiers.
    pub fn from_text(text: &str) -> Self {
        let mut sets = Self::default();
        for (kind, line) in relevant_lines(text) {
            let name = identifier(line).to_string();
            match kind {
                LineKind::Annotation => {
                    sets.annotations.insert(name);
                }
                LineKind::Definition => {
                    sets.definitions.insert(name);
                }
                LineKind::Irrelevant => {}
            }
        }
        sets
    }

    /// Names present on one side only.
    pub fn discrepancies(&self) -> Discrepancies {
        Discrepancies {
            spec_without_function: self
                .annotations
                .difference(&self.definitions)
                .cloned()
                .collect(),
            function_without_spec: self
                .definitions
                .difference(&self.annotations)
                .cloned()
                .collect(),
        }
    }
}

/// The two one-sided differences for a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancies {
    /// Annotated names with no matching function.
    pub spec_without_function: BTreeSet<String>,
    /// Functions with no matching annotation.
    pub function_without_spec: BTreeSet<String>,
}

impl Discrepancies {
    pub fn is_empty(&self) -> bool {
        self.spec_without_function.is_empty() && self.function_without_spec.is_empty()
    }
}
