//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default size of the recent-inquiries list.
const fn default_recent_limit() -> u32 {
    10
}

/// Default number of most recent inquiries the insight operations consider.
const fn default_analysis_window() -> u32 {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default limit for the recent-inquiries list.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u32,

    /// How many of the newest inquiries feed industry, benchmark, and
    /// optimization analysis.
    #[serde(default = "default_analysis_window")]
    pub analysis_window: u32,

    /// Snapshot file used by `deskctl` when `--data` is not given.
    #[serde(default)]
    pub data_path: String,
}

impl GeneralConfig {
    /// Snapshot path, if one is configured.
    #[must_use]
    pub fn data_path(&self) -> Option<&str> {
        let trimmed = self.data_path.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            analysis_window: default_analysis_window(),
            data_path: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.recent_limit, 10);
        assert_eq!(config.analysis_window, 1000);
        assert!(config.data_path().is_none());
    }

    #[test]
    fn blank_data_path_is_unset() {
        let config = GeneralConfig {
            data_path: "   ".into(),
            ..GeneralConfig::default()
        };
        assert!(config.data_path().is_none());
    }
}
