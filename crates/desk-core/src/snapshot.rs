//! A point-in-time copy of every record the engine reads.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Company, Inquiry, QnaEntry};
use crate::errors::CoreError;

/// Companies, inquiries, and QnA entries as exported by the persistence layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub inquiries: Vec<Inquiry>,
    #[serde(default)]
    pub qna: Vec<QnaEntry>,
}

impl Snapshot {
    /// Check the constraints JSON Schema cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] on a duplicate company id, a negative
    /// or non-finite revenue, or a QnA confidence outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::with_capacity(self.companies.len());
        for company in &self.companies {
            if !seen.insert(company.company_id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "duplicate company_id '{}'",
                    company.company_id
                )));
            }
            if !company.monthly_revenue.is_finite() || company.monthly_revenue < 0.0 {
                return Err(CoreError::Validation(format!(
                    "company '{}' has invalid monthly_revenue {}",
                    company.company_id, company.monthly_revenue
                )));
            }
        }

        self.qna.iter().try_for_each(QnaEntry::validate)
    }
}
