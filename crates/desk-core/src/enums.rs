//! Inquiry status and urgency, priority tiers, and benchmark labels.
//!
//! Status and urgency are read from free-form records, so both keep any
//! unrecognized value verbatim instead of failing deserialization. The Korean
//! labels used by the admin console (`대기`, `높음`, ...) are accepted as
//! aliases of the canonical `snake_case` values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// InquiryStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a customer inquiry.
///
/// ```text
/// pending → in_progress → resolved
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InquiryStatus {
    Pending,
    InProgress,
    Resolved,
    /// A value outside the recognized set, kept as written.
    Unrecognized(String),
}

impl InquiryStatus {
    /// Parse a stored label. Never fails; unknown labels become
    /// [`InquiryStatus::Unrecognized`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "pending" | "대기" => Self::Pending,
            "in_progress" | "processing" | "처리중" => Self::InProgress,
            "resolved" | "completed" | "완료" => Self::Resolved,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Unrecognized(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for InquiryStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<InquiryStatus> for String {
    fn from(value: InquiryStatus) -> Self {
        match value {
            InquiryStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

/// Ordinal severity of an inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Urgency {
    Low,
    Medium,
    High,
    /// A value outside the recognized set, kept as written.
    Unrecognized(String),
}

impl Urgency {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "low" | "낮음" => Self::Low,
            "medium" | "normal" | "보통" => Self::Medium,
            "high" | "높음" => Self::High,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unrecognized(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for Urgency {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Urgency> for String {
    fn from(value: Urgency) -> Self {
        match value {
            Urgency::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Coarse priority tier derived from an AI accuracy score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort weight: `high = 3`, `medium = 2`, `low = 1`.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Performance
// ---------------------------------------------------------------------------

/// Benchmark label for a company metric relative to its industry peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Performance {
    AboveAverage,
    BelowAverage,
}

impl Performance {
    /// `AboveAverage` only when the company is strictly better.
    #[must_use]
    pub const fn from_strictly_better(better: bool) -> Self {
        if better {
            Self::AboveAverage
        } else {
            Self::BelowAverage
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AboveAverage => "above_average",
            Self::BelowAverage => "below_average",
        }
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
