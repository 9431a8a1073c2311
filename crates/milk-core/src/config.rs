//! Settings management for milk.
//!
//! Provides TOML-based settings with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder substituted with the area code in the listing URL template.
pub const CODE_PLACEHOLDER: &str = "{code}";

/// Main application settings.
///
/// This is loaded from `~/.config/milk/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listing service and pacing settings
    pub scanning: ScanningConfig,
    /// Tier filter settings
    pub filter: FilterConfig,
    /// Pattern and region definition settings
    pub definitions: DefinitionsConfig,
}

impl AppConfig {
    /// Load settings from the default path, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load settings from an explicit file path.
    ///
    /// Unlike [`AppConfig::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load settings with environment variable overrides.
    ///
    /// When `path` is given that file is loaded, otherwise the default path.
    /// Supports the following environment variables:
    /// - `MILK_URL_TEMPLATE`: Override the listing URL template
    /// - `MILK_TIMEOUT_SECS`: Override the per-code fetch timeout
    /// - `MILK_PRE_FETCH_DELAY_MS`: Override the pause before each fetch
    /// - `MILK_POST_FETCH_DELAY_MS`: Override the pause after each status update
    /// - `MILK_ALL_ALIAS`: Override routing of the `all` filter name
    /// - `MILK_DEFINITIONS_DIR`: Override the definitions directory
    pub fn load_with_env(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `MILK_*` environment overrides in place.
    ///
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(template) = std::env::var("MILK_URL_TEMPLATE") {
            tracing::debug!("Override scanning.url_template from env: {}", template);
            self.scanning.url_template = template;
        }

        if let Ok(val) = std::env::var("MILK_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.scanning.timeout_secs = secs;
                tracing::debug!("Override scanning.timeout_secs from env: {}", secs);
            }
        }

        if let Ok(val) = std::env::var("MILK_PRE_FETCH_DELAY_MS") {
            if let Ok(ms) = val.parse() {
                self.scanning.pre_fetch_delay_ms = ms;
                tracing::debug!("Override scanning.pre_fetch_delay_ms from env: {}", ms);
            }
        }

        if let Ok(val) = std::env::var("MILK_POST_FETCH_DELAY_MS") {
            if let Ok(ms) = val.parse() {
                self.scanning.post_fetch_delay_ms = ms;
                tracing::debug!("Override scanning.post_fetch_delay_ms from env: {}", ms);
            }
        }

        if let Ok(val) = std::env::var("MILK_ALL_ALIAS") {
            match val.parse() {
                Ok(alias) => {
                    self.filter.all_alias = alias;
                    tracing::debug!("Override filter.all_alias from env: {:?}", alias);
                }
                Err(e) => tracing::warn!("Ignoring MILK_ALL_ALIAS: {}", e),
            }
        }

        if let Ok(dir) = std::env::var("MILK_DEFINITIONS_DIR") {
            tracing::debug!("Override definitions.dir from env: {}", dir);
            self.definitions.dir = Some(PathBuf::from(dir));
        }
    }

    /// Validate settings values.
    ///
    /// Checks that:
    /// - the timeout is between 1 second and 10 minutes
    /// - the URL template contains the `{code}` placeholder
    pub fn validate(&self) -> ConfigResult<()> {
        if self.scanning.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scanning.timeout_secs".to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }
        if self.scanning.timeout_secs > 600 {
            return Err(ConfigError::InvalidValue {
                field: "scanning.timeout_secs".to_string(),
                reason: "cannot exceed 10 minutes".to_string(),
            });
        }

        if !self.scanning.url_template.contains(CODE_PLACEHOLDER) {
            return Err(ConfigError::InvalidValue {
                field: "scanning.url_template".to_string(),
                reason: format!("must contain the {CODE_PLACEHOLDER} placeholder"),
            });
        }

        Ok(())
    }

    /// Get the path to the settings file.
    ///
    /// Uses XDG base directories: `~/.config/milk/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the settings directory path.
    ///
    /// Uses XDG base directories: `~/.config/milk`
    pub fn config_dir() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "milk", "milk").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().to_path_buf())
    }
}

/// Listing service and pacing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanningConfig {
    /// Listing URL with a `{code}` placeholder
    pub url_template: String,
    /// Per-code fetch timeout in seconds
    pub timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
    /// Pause before each fetch so the in-flight code is visible
    pub pre_fetch_delay_ms: u64,
    /// Pause after each status update so the change is visible
    pub post_fetch_delay_ms: u64,
}

impl Default for ScanningConfig {
    fn default() -> Self {
        Self {
            url_template: "https://jmp.chat/tels?q={code}".to_string(),
            timeout_secs: 10,
            user_agent: concat!("milk/", env!("CARGO_PKG_VERSION")).to_string(),
            pre_fetch_delay_ms: 500,
            post_fetch_delay_ms: 200,
        }
    }
}

/// Tier filter settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Where the `all` filter name routes matches
    pub all_alias: AllAlias,
}

/// Routing of the `all` tier filter name.
///
/// Historically `all` has only ever selected the Notable bucket. That is kept
/// as the default; `every-tier` makes it select all three tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllAlias {
    /// `all` routes into the Notable bucket only
    #[default]
    NotableOnly,
    /// `all` routes into every tier
    EveryTier,
}

impl std::str::FromStr for AllAlias {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notable-only" => Ok(Self::NotableOnly),
            "every-tier" => Ok(Self::EveryTier),
            other => Err(ConfigError::InvalidValue {
                field: "filter.all_alias".to_string(),
                reason: format!("expected notable-only or every-tier, got '{other}'"),
            }),
        }
    }
}

/// Pattern and region definition settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionsConfig {
    /// Directory holding `patterns.toml` and `regions.toml`
    pub dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.scanning.url_template, "https://jmp.chat/tels?q={code}");
        assert_eq!(config.scanning.timeout_secs, 10);
        assert_eq!(config.scanning.pre_fetch_delay_ms, 500);
        assert_eq!(config.scanning.post_fetch_delay_ms, 200);
        assert!(config.scanning.user_agent.starts_with("milk/"));
        assert_eq!(config.filter.all_alias, AllAlias::NotableOnly);
        assert!(config.definitions.dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("[scanning]"));
        assert!(toml_str.contains("[filter]"));
        assert!(toml_str.contains("all_alias = \"notable-only\""));

        let parsed: AppConfig = toml::from_str(&toml_str).expect("parse serialized config");
        assert_eq!(parsed.scanning.url_template, config.scanning.url_template);
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[scanning]
timeout_secs = 5
pre_fetch_delay_ms = 0

[filter]
all_alias = "every-tier"
"#,
        )
        .expect("write config file");

        let config = AppConfig::load_from(&config_path).expect("load config");
        assert_eq!(config.scanning.timeout_secs, 5);
        assert_eq!(config.scanning.pre_fetch_delay_ms, 0);
        // Untouched fields keep their defaults
        assert_eq!(config.scanning.post_fetch_delay_ms, 200);
        assert_eq!(config.filter.all_alias, AllAlias::EveryTier);
    }

    #[test]
    fn test_load_from_missing_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let result = AppConfig::load_from(&tmp.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "[scanning\ntimeout_secs = ").expect("write config file");

        let result = AppConfig::load_from(&config_path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("MILK_TIMEOUT_SECS", "3");
        std::env::set_var("MILK_ALL_ALIAS", "every-tier");
        std::env::set_var("MILK_DEFINITIONS_DIR", "/tmp/milk-definitions");

        let mut config = AppConfig::default();
        config.apply_env_overrides();
        assert_eq!(config.scanning.timeout_secs, 3);
        assert_eq!(config.filter.all_alias, AllAlias::EveryTier);
        assert_eq!(
            config.definitions.dir,
            Some(PathBuf::from("/tmp/milk-definitions"))
        );

        std::env::remove_var("MILK_TIMEOUT_SECS");
        std::env::remove_var("MILK_ALL_ALIAS");
        std::env::remove_var("MILK_DEFINITIONS_DIR");
    }

    #[test]
    fn test_validate_timeout_bounds() {
        let mut config = AppConfig::default();
        config.scanning.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.scanning.timeout_secs = 601;
        assert!(config.validate().is_err());

        config.scanning.timeout_secs = 600;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_url_template() {
        let mut config = AppConfig::default();
        config.scanning.url_template = "https://example.com/search".to_string();

        let err = config.validate().expect_err("template without placeholder");
        assert!(err.to_string().contains("scanning.url_template"));
    }

    #[test]
    fn test_all_alias_from_str() {
        assert_eq!(
            "notable-only".parse::<AllAlias>().expect("parse"),
            AllAlias::NotableOnly
        );
        assert_eq!(
            "Every-Tier".parse::<AllAlias>().expect("parse"),
            AllAlias::EveryTier
        );
        assert!("everything".parse::<AllAlias>().is_err());
    }
}
