use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, CheckResult};

/// Name of the optional per-project config file, looked up in the root.
pub const CONFIG_FILE_NAME: &str = ".spec-checker.json";

fn default_source_dir() -> String {
    "lib".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["ex".to_string(), "exs".to_string()]
}

/// Which files under a project root get checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory, relative to the root, that is walked recursively.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    /// Accepted file extensions, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { source_dir: default_source_dir(), extensions: default_extensions() }
    }
}

impl ScanConfig {
    /// Path of the config file for a project rooted at `root`.
    pub fn path_for(root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(CONFIG_FILE_NAME)
    }

    /// Load `.spec-checker.json` from `root`, falling back to defaults if it
    /// does not exist.
    pub fn load(root: impl AsRef<Path>) -> CheckResult<Self> {
        let path = Self::path_for(root);
        let body = match fs::read_to_string(&path) {
            Ok(body) => body,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(CheckError::Io { path, source }),
        };
        serde_json::from_str(&body).map_err(|source| CheckError::Config { path, source })
    }

    /// Override the source directory.
    pub fn with_source_dir(mut self, source_dir: Option<String>) -> Self {
        if let Some(dir) = source_dir {
            self.source_dir = dir;
        }
        self
    }

    /// Directory that gets walked for a project rooted at `root`.
    pub fn source_root(&self, root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(&self.source_dir)
    }

    /// Whether `path` carries one of the accepted extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|allowed| allowed == ext))
            .unwrap_or(false)
    }
}
