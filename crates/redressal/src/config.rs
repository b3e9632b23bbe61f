//! Configuration management for redressal.
//!
//! Configuration is loaded with figment from TOML config files, environment
//! variables, and defaults. The only tunable section today is the bootstrap
//! admin account that is seeded when the application starts with an empty
//! registry.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const APP_DIR_NAME: &str = "redressal";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `REDRESSAL_`, double underscore
///    separating sections from field names, e.g.
///    `REDRESSAL_BOOTSTRAP__ADMIN_USERNAME`)
/// 2. TOML config file at `~/.config/redressal/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bootstrap configuration.
    pub bootstrap: BootstrapConfig,
}

/// Bootstrap-related configuration.
///
/// A default admin account is seeded at startup so the admin menus are
/// reachable before anyone else registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Seed the default admin account into an empty registry at startup.
    pub seed_default_admin: bool,
    /// Username of the seeded admin.
    pub admin_username: String,
    /// Password of the seeded admin.
    pub admin_password: String,
    /// Email of the seeded admin.
    pub admin_email: String,
    /// Phone number of the seeded admin.
    pub admin_phone: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            seed_default_admin: true,
            admin_username: "admin".to_string(),
            admin_password: "adminpassword".to_string(),
            admin_email: "admin@example.com".to_string(),
            admin_phone: "1234567890".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("REDRESSAL_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.bootstrap.seed_default_admin {
            if self.bootstrap.admin_username.is_empty() {
                return Err(Error::ConfigValidation {
                    message: "bootstrap admin username must not be empty".to_string(),
                });
            }
            if self.bootstrap.admin_password.is_empty() {
                return Err(Error::ConfigValidation {
                    message: "bootstrap admin password must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
