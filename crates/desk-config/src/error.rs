//! Failures while loading or checking desk configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `DESK_*` variable could not be read into [`crate::DeskConfig`].
    #[error("failed to load desk config: {0}")]
    Figment(#[from] figment::Error),

    /// Values parsed but contradict each other or their allowed range.
    #[error("desk config field '{field}' {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
