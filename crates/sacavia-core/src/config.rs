use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Base URL used while developing against a local API server.
pub const DEV_BASE_API_URL: &str = "http://localhost:3000";

/// Base URL of the production API.
pub const PROD_BASE_API_URL: &str = "https://sacavia.com";

/// Which API the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn name(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

/// The environment switch and the base API URL derived from it.
///
/// Built once at startup and handed to whatever needs the base URL; there is
/// no global instance and no way to mutate one after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    is_development: bool,
    base_api_url: String,
}

impl EnvironmentConfig {
    /// `true` selects the local development API, `false` production.
    pub fn from_flag(is_development: bool) -> Self {
        let base_api_url = if is_development {
            DEV_BASE_API_URL
        } else {
            PROD_BASE_API_URL
        };
        Self {
            is_development,
            base_api_url: base_api_url.to_string(),
        }
    }

    pub fn development() -> Self {
        Self::from_flag(true)
    }

    pub fn production() -> Self {
        Self::from_flag(false)
    }

    pub fn for_environment(env: Environment) -> Self {
        Self::from_flag(env == Environment::Development)
    }

    /// Debug builds use the development API, release builds production.
    pub fn from_build_profile() -> Self {
        Self::from_flag(cfg!(debug_assertions))
    }

    pub fn is_development(&self) -> bool {
        self.is_development
    }

    pub fn environment(&self) -> Environment {
        if self.is_development {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn environment_name(&self) -> &'static str {
        self.environment().name()
    }

    pub fn base_api_url(&self) -> &str {
        &self.base_api_url
    }
}

/// Log the active environment and base URL. Only emits in development.
pub fn log_api_config(cfg: &EnvironmentConfig) {
    if !cfg.is_development() {
        return;
    }
    tracing::info!(
        environment = cfg.environment_name(),
        base_api_url = cfg.base_api_url(),
        "api configuration"
    );
}

/// Global configuration loaded from `~/.config/sacavia/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SacaviaConfig {
    /// "development" or "production" (default).
    #[serde(default)]
    pub environment: Environment,
}

impl SacaviaConfig {
    pub fn environment_config(&self) -> EnvironmentConfig {
        EnvironmentConfig::for_environment(self.environment)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sacavia")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SacaviaConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<SacaviaConfig> {
    if !path.exists() {
        let default_cfg = SacaviaConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SacaviaConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_selects_base_url() {
        let dev = EnvironmentConfig::from_flag(true);
        assert!(dev.is_development());
        assert_eq!(dev.base_api_url(), "http://localhost:3000");
        assert_eq!(dev.environment_name(), "development");

        let prod = EnvironmentConfig::from_flag(false);
        assert!(!prod.is_development());
        assert_eq!(prod.base_api_url(), "https://sacavia.com");
        assert_eq!(prod.environment_name(), "production");
    }

    #[test]
    fn named_constructors_match_flag() {
        assert_eq!(EnvironmentConfig::development(), EnvironmentConfig::from_flag(true));
        assert_eq!(EnvironmentConfig::production(), EnvironmentConfig::from_flag(false));
        assert_eq!(
            EnvironmentConfig::for_environment(Environment::Development),
            EnvironmentConfig::development()
        );
    }

    #[test]
    fn build_profile_follows_debug_assertions() {
        let cfg = EnvironmentConfig::from_build_profile();
        assert_eq!(cfg.is_development(), cfg!(debug_assertions));
    }

    #[test]
    fn default_config_is_production() {
        let cfg = SacaviaConfig::default();
        assert_eq!(cfg.environment, Environment::Production);
        assert_eq!(cfg.environment_config(), EnvironmentConfig::production());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SacaviaConfig {
            environment: Environment::Development,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        assert!(toml.contains("environment = \"development\""));
        let parsed: SacaviaConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.environment, Environment::Development);
    }

    #[test]
    fn config_toml_missing_environment_defaults() {
        let cfg: SacaviaConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.environment, Environment::Production);
    }

    #[test]
    fn config_toml_rejects_unknown_environment() {
        assert!(toml::from_str::<SacaviaConfig>("environment = \"staging\"").is_err());
    }

    #[test]
    fn load_or_init_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg.environment, Environment::Production);
        assert!(path.exists());
    }

    #[test]
    fn load_or_init_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "environment = \"development\"\n").unwrap();
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg.environment_config().base_api_url(), DEV_BASE_API_URL);
    }
}
