//! Record-level error types.
//!
//! Engine-level errors (`AnalyticsError`) live in `desk-analytics`; config and
//! schema errors in their own crates. The CLI converges them through `anyhow`.

use thiserror::Error;

/// A record or record set breaks a constraint JSON Schema cannot express.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),
}
