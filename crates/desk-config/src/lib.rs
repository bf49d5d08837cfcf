//! # desk-config
//!
//! Layered configuration loading for the CS insight desk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DESK_*` prefix, `__` as separator)
//! 2. Project-level `.desk/config.toml`
//! 3. User-level `~/.config/desk/config.toml`
//! 4. Built-in defaults
//!
//! Besides plain settings, the config carries the lookup tables the insight
//! engine consults: industry recommendation templates ([`PlaybookConfig`]) and
//! simulated AI accuracy per industry and category ([`AccuracyConfig`]).
//! Teams extend them by adding TOML tables; nested tables merge with the
//! defaults key by key.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DESK_GENERAL__ANALYSIS_WINDOW` -> `general.analysis_window`,
//! `DESK_THRESHOLDS__HUMAN_INTERVENTION_BELOW` -> `thresholds.human_intervention_below`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use desk_config::DeskConfig;
//!
//! let config = DeskConfig::load_with_dotenv().expect("config");
//! println!("accuracy for SaaS billing: {}", config.accuracy.lookup("SaaS", "billing"));
//! ```

mod accuracy;
mod error;
mod general;
mod playbook;
mod thresholds;

pub use accuracy::AccuracyConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use playbook::{CategoryRule, PlaybookConfig};
pub use thresholds::ThresholdConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub playbook: PlaybookConfig,
    #[serde(default)]
    pub accuracy: AccuracyConfig,
}

impl DeskConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if the merged values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".desk/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("DESK_").split("__"))
    }

    /// Reject combinations the engine cannot interpret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = &self.thresholds;
        if thresholds.priority_high_below > thresholds.priority_medium_below {
            return Err(ConfigError::invalid(
                "thresholds.priority_high_below",
                format!(
                    "({}) exceeds thresholds.priority_medium_below ({})",
                    thresholds.priority_high_below, thresholds.priority_medium_below
                ),
            ));
        }
        for (field, rate) in [
            ("thresholds.default_confidence", thresholds.default_confidence),
            ("thresholds.efficiency_upper_rate", thresholds.efficiency_upper_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::invalid(
                    field,
                    format!("({rate}) is outside 0.0..=1.0"),
                ));
            }
        }
        if self.general.analysis_window == 0 {
            return Err(ConfigError::invalid(
                "general.analysis_window",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("desk").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Silently does nothing
    /// if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
