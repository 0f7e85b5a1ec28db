//! # cs-config
//!
//! Layered configuration loading for certsync using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CERTSYNC_*` prefix, `__` as separator)
//! 2. Project-level `.certsync/config.toml`, or an explicit file
//! 3. User-level `~/.config/certsync/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CERTSYNC_LIFECYCLE__THRESHOLD_DAYS` -> `lifecycle.threshold_days`,
//! `CERTSYNC_SCAN__PUBLIC_MARKER` -> `scan.public_marker`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use cs_config::CertsyncConfig;
//!
//! let config = CertsyncConfig::load_with_dotenv(None).expect("config");
//! println!("threshold: {} days", config.lifecycle.threshold_days);
//! ```

mod dns;
mod error;
mod export;
mod lifecycle;
mod scan;

pub use dns::DnsConfig;
pub use error::ConfigError;
pub use export::ExportConfig;
pub use lifecycle::LifecycleConfig;
pub use scan::ScanConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of environment variables read into the configuration.
pub const ENV_PREFIX: &str = "CERTSYNC_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CertsyncConfig {
    #[serde(default)]
    pub lifecycle: LifecycleConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub dns: DnsConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl CertsyncConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `explicit` replaces the project-local file when given.
    ///
    /// # Errors
    ///
    /// Fails when a source cannot be parsed or a value is out of range.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit
            && !path.exists()
        {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current directory.
    ///
    /// # Errors
    ///
    /// See [`CertsyncConfig::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Explicit or project-local config
        match explicit {
            Some(path) => figment = figment.merge(Toml::file_exact(path)),
            None => {
                let local_path = PathBuf::from(".certsync/config.toml");
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the engine cannot work with.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lifecycle.threshold_days < 0 {
            return Err(ConfigError::InvalidValue {
                field: "lifecycle.threshold_days".into(),
                reason: format!("must be >= 0, got {}", self.lifecycle.threshold_days),
            });
        }
        if self.lifecycle.expiring_soon_days < 0 {
            return Err(ConfigError::InvalidValue {
                field: "lifecycle.expiring_soon_days".into(),
                reason: format!("must be >= 0, got {}", self.lifecycle.expiring_soon_days),
            });
        }
        if self.scan.public_marker.is_empty() || self.scan.private_marker.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "scan".into(),
                reason: "scope markers must not be empty".into(),
            });
        }
        if self.scan.public_marker == self.scan.private_marker {
            return Err(ConfigError::InvalidValue {
                field: "scan".into(),
                reason: format!(
                    "public and private markers are both '{}'",
                    self.scan.public_marker
                ),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("certsync").join("config.toml"))
    }
}
