//! Engine error types.
//!
//! Every operation degrades gracefully on empty or unfamiliar input; the only
//! engine-level failure is a missing company. Collaborator failures pass
//! through as [`AnalyticsError::Store`].

use desk_core::errors::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// No company matches the requested id.
    #[error("company not found: {company_id}")]
    CompanyNotFound { company_id: String },

    /// A collaborator (directory, inquiry store, QnA store) failed.
    #[error("store error: {0}")]
    Store(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AnalyticsError {
    pub(crate) fn company_not_found(company_id: &str) -> Self {
        Self::CompanyNotFound {
            company_id: company_id.to_string(),
        }
    }
}
