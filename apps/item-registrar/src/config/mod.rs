//! Configuration module for the item registrar.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates it before anything is wired.
//!
//! # Usage
//!
//! ```rust,ignore
//! use item_registrar::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! println!("catalog: {:?}", config.dealer.catalog);
//! ```

mod dealer;
mod observability;
mod session;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use dealer::DealerConfig;
pub use observability::{LogFormat, LoggingConfig, ObservabilityConfig};
pub use session::{RegistrationConfig, SessionConfig};

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

impl ConfigError {
    /// Whether the error is a missing config file.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ReadError { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,
    /// Simulated dealer configuration.
    #[serde(default)]
    pub dealer: DealerConfig,
    /// Item to register at startup.
    #[serde(default)]
    pub registration: RegistrationConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load `.env` from the working directory or its nearest ancestor that has one.
///
/// Returns the path of the loaded file. Variables already set in the
/// process environment are kept.
pub fn load_dotenv() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    load_dotenv_from(&cwd)
}

/// Load the first `.env` found walking up from `start`.
pub fn load_dotenv_from(start: &Path) -> Option<PathBuf> {
    let path = start
        .ancestors()
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())?;
    dotenvy::from_path(&path).ok()?;
    Some(path)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. Empty variables
/// fall back to the default.
#[allow(clippy::expect_used)] // Regex is a constant pattern
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.session.account.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "session.account must not be empty".to_string(),
        ));
    }

    if config.dealer.catalog.is_empty() {
        return Err(ConfigError::ValidationError(
            "dealer.catalog must list at least one instrument".to_string(),
        ));
    }

    if config.dealer.tick_interval_ms == 0 {
        return Err(ConfigError::ValidationError(
            "dealer.tick_interval_ms must be positive".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.session.account, "A1");
        assert_eq!(config.dealer.catalog, vec!["TXFJ4", "MXFJ4"]);
        assert_eq!(config.dealer.tick_interval_ms, 500);
        assert_eq!(config.registration.item_code, "TXFJ4");
        assert_eq!(config.observability.logging.level, "info");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let config = match load_config_from_string("{}") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert_eq!(config.session.account, "A1");
        assert_eq!(config.dealer.tick_interval_ms, 500);
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r"
session:
  account: B7
dealer:
  catalog: [MXFJ4]
  tick_interval_ms: 250
registration:
  item_code: MXFJ4
observability:
  logging:
    level: debug
    format: compact
";

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };
        assert_eq!(config.session.account, "B7");
        assert_eq!(config.dealer.catalog, vec!["MXFJ4"]);
        assert_eq!(config.dealer.tick_interval(), std::time::Duration::from_millis(250));
        assert_eq!(config.registration.item_code, "MXFJ4");
        assert_eq!(config.observability.logging.level, "debug");
        assert_eq!(config.observability.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "account: ${ITEM_REGISTRAR_TEST_NONEXISTENT_VAR:-A9}";
        assert_eq!(interpolate_env_vars(input), "account: A9");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax
    fn test_env_var_with_default_uses_existing() {
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "account: ${ITEM_REGISTRAR_TEST_UNLIKELY_TO_EXIST}";
        assert_eq!(interpolate_env_vars(input), "account: ");
    }

    #[test]
    fn test_validation_empty_catalog() {
        let yaml = r"
dealer:
  catalog: []
";
        assert!(matches!(
            load_config_from_string(yaml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_zero_interval() {
        let yaml = r"
dealer:
  tick_interval_ms: 0
";
        assert!(matches!(
            load_config_from_string(yaml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_blank_account() {
        let yaml = r#"
session:
  account: "  "
"#;
        assert!(matches!(
            load_config_from_string(yaml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            load_config_from_string("dealer: [unclosed"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "registration:\n  item_code: MXFJ4").unwrap();

        let config = load_config(file.path().to_str()).unwrap();
        assert_eq!(config.registration.item_code, "MXFJ4");
    }

    #[test]
    #[allow(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax
    fn test_dotenv_found_in_ancestor() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join(".env"),
            "ITEM_REGISTRAR_TEST_DOTENV_ACCOUNT=B3\n",
        )
        .unwrap();
        let nested = root.path().join("apps").join("item-registrar");
        std::fs::create_dir_all(&nested).unwrap();

        let loaded = load_dotenv_from(&nested).unwrap();

        assert_eq!(loaded, root.path().join(".env"));
        assert_eq!(
            std::env::var("ITEM_REGISTRAR_TEST_DOTENV_ACCOUNT").unwrap(),
            "B3"
        );
        assert_eq!(
            interpolate_env_vars("${ITEM_REGISTRAR_TEST_DOTENV_ACCOUNT:-A1}"),
            "B3"
        );
    }

    #[test]
    fn test_dotenv_prefers_nearest_file() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("inner");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(".env"), "ITEM_REGISTRAR_TEST_DOTENV_OUTER=1\n").unwrap();
        std::fs::write(nested.join(".env"), "ITEM_REGISTRAR_TEST_DOTENV_INNER=1\n").unwrap();

        assert_eq!(load_dotenv_from(&nested), Some(nested.join(".env")));
        assert!(std::env::var("ITEM_REGISTRAR_TEST_DOTENV_OUTER").is_err());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let err = load_config(path.to_str()).unwrap_err();
        assert!(err.is_not_found());
    }
}
