use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Release version read from the VERSION file. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AppVersion(String);

impl AppVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("VERSION file not readable at {}: {source}", path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads the VERSION file and strips surrounding whitespace.
/// A blank file yields an empty version.
pub fn read_version(path: &Path) -> Result<AppVersion, VersionError> {
    let raw = std::fs::read_to_string(path).map_err(|source| VersionError::Missing {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(AppVersion(raw.trim().to_string()))
}
