use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A question/answer pair the chatbot is trained on.
///
/// Entries are scoped either to a single company or to a whole industry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QnaEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    /// Model confidence in `0.0..=1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl QnaEntry {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `confidence` lies outside
    /// `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self.confidence {
            Some(confidence) if !(0.0..=1.0).contains(&confidence) => {
                Err(CoreError::Validation(format!(
                    "qna '{}' has confidence {confidence} outside 0.0..=1.0",
                    self.id
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Raw QnA item submitted during initial setup, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QnaSeed {
    pub question: String,
    pub answer: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl QnaSeed {
    /// Materialize the seed as the `position`-th entry (1-based id `qna_N`).
    #[must_use]
    pub fn into_entry(self, position: usize, created_at: DateTime<Utc>) -> QnaEntry {
        QnaEntry {
            id: format!("qna_{position}"),
            company_id: self.company_id,
            industry: self.industry,
            question: self.question,
            answer: self.answer,
            category: self.category,
            created_at,
            confidence: self.confidence,
        }
    }
}
