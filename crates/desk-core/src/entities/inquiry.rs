use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{InquiryStatus, Urgency};

/// A customer support ticket submitted to a company.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Inquiry {
    pub inquiry_id: String,
    pub company_id: String,
    #[schemars(with = "String")]
    pub status: InquiryStatus,
    pub category: String,
    #[schemars(with = "String")]
    pub urgency: Urgency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Inquiry {
    /// High urgency and not yet resolved.
    #[must_use]
    pub fn is_urgent_open(&self) -> bool {
        self.urgency == Urgency::High && self.status != InquiryStatus::Resolved
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.status == InquiryStatus::Resolved
    }
}
