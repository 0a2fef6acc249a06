use std::path::PathBuf;

use anyhow::{Context, Result};

/// Location of the VERSION artifact when `VERSION_FILE` is not set,
/// relative to the working directory.
pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// The VERSION file checked in next to Cargo.toml.
#[cfg(test)]
pub const BUNDLED_VERSION_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/VERSION");

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Deployment name from `ENVIRONMENT`. `None` when unset or empty.
    pub environment: Option<String>,
    pub version_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => 8080,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            environment: normalize_environment(lookup("ENVIRONMENT")),
            version_file: lookup("VERSION_FILE")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_VERSION_FILE)),
        })
    }

    /// The environment name as reported to clients.
    pub fn environment_name(&self) -> &str {
        self.environment.as_deref().unwrap_or("unknown")
    }
}

fn normalize_environment(raw: Option<String>) -> Option<String> {
    raw.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.environment.is_none());
        assert_eq!(config.environment_name(), "unknown");
        assert_eq!(config.version_file, PathBuf::from("VERSION"));
        assert!(config.version_file.is_relative());
    }

    #[test]
    fn test_environment_is_passed_through() {
        let config = config_from(&[("ENVIRONMENT", "ci-test")]).unwrap();
        assert_eq!(config.environment.as_deref(), Some("ci-test"));
        assert_eq!(config.environment_name(), "ci-test");
    }

    #[test]
    fn test_empty_environment_counts_as_unset() {
        let config = config_from(&[("ENVIRONMENT", "")]).unwrap();
        assert!(config.environment.is_none());
        assert_eq!(config.environment_name(), "unknown");
    }

    #[test]
    fn test_environment_is_not_trimmed() {
        let config = config_from(&[("ENVIRONMENT", " ci-test ")]).unwrap();
        assert_eq!(config.environment_name(), " ci-test ");

        let config = config_from(&[("ENVIRONMENT", "   ")]).unwrap();
        assert_eq!(config.environment_name(), "   ");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("RUST_LOG", "debug"),
            ("VERSION_FILE", "/srv/app/VERSION"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.version_file, PathBuf::from("/srv/app/VERSION"));
    }
}
