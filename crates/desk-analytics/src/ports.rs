//! Collaborators the engine reads records from.
//!
//! The engine only ever writes the QnA set, during setup. Storage backends
//! implement these traits; [`crate::memory::InMemoryStore`] implements all
//! three over a [`desk_core::snapshot::Snapshot`].

use desk_core::entities::{Company, Inquiry, QnaEntry};

use crate::error::AnalyticsError;

pub trait CompanyDirectory: Send + Sync {
    fn all_companies(&self) -> Result<Vec<Company>, AnalyticsError>;

    fn company_by_id(&self, company_id: &str) -> Result<Option<Company>, AnalyticsError>;

    fn companies_by_industry(&self, industry: &str) -> Result<Vec<Company>, AnalyticsError>;
}

/// Which inquiries to list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InquiryFilter {
    #[default]
    All,
    Company(String),
}

impl InquiryFilter {
    #[must_use]
    pub fn matches(&self, inquiry: &Inquiry) -> bool {
        match self {
            Self::All => true,
            Self::Company(company_id) => inquiry.company_id == *company_id,
        }
    }
}

pub trait InquiryStore: Send + Sync {
    /// Inquiries matching `filter`, in storage order.
    fn list_inquiries(&self, filter: &InquiryFilter) -> Result<Vec<Inquiry>, AnalyticsError>;
}

/// Which QnA entries to list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QnaScope {
    #[default]
    All,
    Company(String),
}

impl QnaScope {
    #[must_use]
    pub fn matches(&self, entry: &QnaEntry) -> bool {
        match self {
            Self::All => true,
            Self::Company(company_id) => entry.company_id.as_deref() == Some(company_id.as_str()),
        }
    }
}

pub trait QnaStore: Send + Sync {
    fn list_qna(&self, scope: &QnaScope) -> Result<Vec<QnaEntry>, AnalyticsError>;

    /// Swap the whole QnA set for `entries`. Returns how many were stored.
    fn replace_qna(&self, entries: Vec<QnaEntry>) -> Result<usize, AnalyticsError>;
}
