//! Security configuration.
//!
//! Names the superuser role and, optionally, the rule file to load.
//! Configuration is loaded from environment variables with defaults that
//! match a stock installation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error::SecurityResult;
use crate::ruleset::RuleSet;

/// Role that bypasses all workspace filtering by default.
pub const DEFAULT_SUPERUSER_ROLE: &str = "ROLE_ADMINISTRATOR";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configured rule file does not exist.
    #[error("Rules file not found: {0}")]
    MissingFile(PathBuf),

    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Security configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Role granting unrestricted access.
    pub superuser_role: String,

    /// Rule file in `workspace.layer.mode=roles` form.
    #[serde(default)]
    pub rules_file: Option<PathBuf>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            superuser_role: DEFAULT_SUPERUSER_ROLE.to_string(),
            rules_file: None,
        }
    }
}

impl SecurityConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GEO_SUPERUSER_ROLE`: Superuser role (default: ROLE_ADMINISTRATOR)
    /// - `GEO_RULES_FILE`: Path to the rule file (default: none)
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            superuser_role: std::env::var("GEO_SUPERUSER_ROLE")
                .unwrap_or(default.superuser_role),
            rules_file: std::env::var("GEO_RULES_FILE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Use a different superuser role.
    pub fn with_superuser_role(mut self, role: impl Into<String>) -> Self {
        self.superuser_role = role.into();
        self
    }

    /// Use a rule file.
    pub fn with_rules_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules_file = Some(path.into());
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.superuser_role.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "GEO_SUPERUSER_ROLE".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let Some(path) = &self.rules_file {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.clone()));
            }
        }
        Ok(())
    }

    /// Load the configured rules. No rule file means no rules.
    pub fn load_rules(&self) -> SecurityResult<RuleSet> {
        match &self.rules_file {
            Some(path) => RuleSet::load(path),
            None => {
                debug!("No rules file configured");
                Ok(RuleSet::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_VARS: &[&str] = &["GEO_SUPERUSER_ROLE", "GEO_RULES_FILE"];

    // Serializes env access and clears the variables on both ends
    struct EnvGuard<'a> {
        _lock: std::sync::MutexGuard<'a, ()>,
    }

    impl<'a> EnvGuard<'a> {
        fn new() -> Self {
            let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
            for var in ENV_VARS {
                env::remove_var(var);
            }
            Self { _lock: lock }
        }

        fn set(&self, key: &str, value: &str) {
            env::set_var(key, value);
        }
    }

    impl<'a> Drop for EnvGuard<'a> {
        fn drop(&mut self) {
            for var in ENV_VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_from_env_defaults() {
        let _guard = EnvGuard::new();

        let config = SecurityConfig::from_env();
        assert_eq!(config, SecurityConfig::default());
    }

    #[test]
    fn test_from_env_reads_variables() {
        let guard = EnvGuard::new();
        guard.set("GEO_SUPERUSER_ROLE", "ROLE_ROOT");
        guard.set("GEO_RULES_FILE", "/etc/geo/layers.properties");

        let config = SecurityConfig::from_env();
        assert_eq!(config.superuser_role, "ROLE_ROOT");
        assert_eq!(
            config.rules_file,
            Some(PathBuf::from("/etc/geo/layers.properties"))
        );
    }

    #[test]
    fn test_from_env_ignores_blank_rules_file() {
        let guard = EnvGuard::new();
        guard.set("GEO_RULES_FILE", "   ");

        let config = SecurityConfig::from_env();
        assert!(config.rules_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_env_rules_file_loads() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "cite.*.a=ROLE_CITE_ADMIN\n").unwrap();

        let guard = EnvGuard::new();
        guard.set("GEO_RULES_FILE", &file.path().to_string_lossy());

        let config = SecurityConfig::from_env();
        assert!(config.validate().is_ok());
        assert_eq!(config.load_rules().unwrap().len(), 1);
    }

    #[test]
    fn test_default_config() {
        let config = SecurityConfig::default();
        assert_eq!(config.superuser_role, "ROLE_ADMINISTRATOR");
        assert!(config.rules_file.is_none());
        assert!(config.validate().is_ok());
        assert!(config.load_rules().unwrap().is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_role() {
        let config = SecurityConfig::default().with_superuser_role(" ");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let config = SecurityConfig::default().with_rules_file("/nonexistent/layers.properties");
        assert!(matches!(config.validate(), Err(ConfigError::MissingFile(_))));
        assert!(config.load_rules().is_err());
    }

    #[test]
    fn test_config_deserializes_without_rules_file() {
        let config: SecurityConfig =
            serde_json::from_str(r#"{"superuser_role":"ROLE_ROOT"}"#).unwrap();
        assert_eq!(config.superuser_role, "ROLE_ROOT");
        assert!(config.rules_file.is_none());
    }
}
