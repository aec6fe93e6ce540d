//! Oracle configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults
//! 2. a JSON file (explicit path, or `<config_dir>/calcvis/config.json` if present)
//! 3. environment variables

use crate::gemini::GeminiOracle;
use crate::oracle::{Oracle, UnavailableOracle};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-thinking-exp-01-21";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables holding the API key, in lookup order.
pub const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "NEXT_PUBLIC_GEMINI_API_KEY"];
pub const MODEL_VAR: &str = "CALCVIS_MODEL";
pub const ENDPOINT_VAR: &str = "CALCVIS_ENDPOINT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Without a key the oracle is unavailable and every analysis falls back.
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    /// Request timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl OracleConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcvis").join("config.json"))
    }

    /// Load from `path`, or from [`default_path`](Self::default_path) when it
    /// exists, then apply the process environment.
    ///
    /// An explicit path must exist; the default one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        config.apply_env_from(|name| std::env::var(name).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from a variable lookup. Empty values are ignored.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = API_KEY_VARS.iter().find_map(|name| lookup(name)) {
            self.api_key = Some(key);
        }
        if let Some(model) = lookup(MODEL_VAR) {
            self.model = model;
        }
        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            self.endpoint = endpoint;
        }
    }
}

/// Build the configured oracle, or an [`UnavailableOracle`] when the Gemini
/// client cannot be constructed.
pub fn oracle_from_config(config: &OracleConfig) -> Box<dyn Oracle> {
    match GeminiOracle::new(config) {
        Ok(oracle) => Box::new(oracle),
        Err(e) => {
            warn!("analysis service disabled ({}); results will use fallback data", e);
            Box::new(UnavailableOracle::new(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = OracleConfig::default();
        assert_eq!(config.api_key, None);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("NEXT_PUBLIC_GEMINI_API_KEY", "legacy"),
            ("CALCVIS_MODEL", "gemini-pro"),
            ("CALCVIS_ENDPOINT", ""),
        ]
        .into_iter()
        .collect();

        let mut config = OracleConfig::default();
        config.apply_env_from(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.api_key.as_deref(), Some("legacy"));
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_primary_key_var_wins() {
        let mut config = OracleConfig::default();
        config.apply_env_from(|name| match name {
            "GEMINI_API_KEY" => Some("primary".to_string()),
            "NEXT_PUBLIC_GEMINI_API_KEY" => Some("legacy".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"model": "custom", "timeout_secs": 30}}"#).unwrap();

        let config = OracleConfig::from_file(file.path()).unwrap();
        assert_eq!(config.model, "custom");
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            OracleConfig::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));

        assert!(matches!(
            OracleConfig::from_file(Path::new("/definitely/not/here.json")),
            Err(ConfigError::Io { .. })
        ));
    }
}
