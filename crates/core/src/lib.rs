//! spec-check-core
//!
//! Core library for checking that Elixir functions and their `@spec`
//! annotations come in pairs.
//!
//! Checking a file is a pure pipeline over its text:
//! classify each line, extract identifiers, reconcile the two name sets and
//! render whatever is left over. Only the `scan` module touches the
//! filesystem; printing is left to frontends.

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod reconcile;
pub mod report;
pub mod scan;

pub use config::ScanConfig;
pub use error::{CheckError, CheckResult};
pub use reconcile::{Discrepancies, NameSets};
pub use report::{check, render, FileReport};
pub use scan::{check_file, discover_files, scan, ScanSummary};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
