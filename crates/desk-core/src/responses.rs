//! Derived views returned by the insight engine.
//!
//! Every view is recomputed per call from a record snapshot and never
//! persisted. Breakdown maps use [`IndexMap`] so their JSON key order follows
//! first appearance in the input.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Inquiry;
use crate::enums::{Performance, Priority};

/// Counts per recognized inquiry status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

/// Counts per recognized urgency.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UrgencyBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Dashboard totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatsSummary {
    pub total: usize,
    pub status: StatusBreakdown,
    pub urgency: UrgencyBreakdown,
    /// Occurrences per category, keyed by whatever categories appear.
    pub categories: IndexMap<String, usize>,
}

/// An inquiry decorated with its recency label (`"5분 전"`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimedInquiry {
    #[serde(flatten)]
    pub inquiry: Inquiry,
    pub time_ago: String,
}

/// Open high-urgency inquiries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UrgentAlertSet {
    pub count: usize,
    pub inquiries: Vec<TimedInquiry>,
}

/// Aggregated inquiry patterns for one industry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IndustryInsight {
    pub industry: String,
    pub total_companies: usize,
    pub total_inquiries: usize,
    /// Most frequent category; `None` when the industry has no inquiries.
    pub top_category: Option<String>,
    pub category_breakdown: IndexMap<String, usize>,
    pub urgency_breakdown: IndexMap<String, usize>,
    pub recommendations: Vec<String>,
}

/// Public profile of the benchmarked company.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub size: String,
    pub monthly_revenue: f64,
}

/// A company value next to its industry mean.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MetricComparison<T> {
    pub company: T,
    pub industry_avg: T,
    pub performance: Performance,
}

/// Inquiry counts; volume carries no performance label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VolumeComparison {
    pub company: usize,
    pub industry_avg: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BenchmarkMetrics {
    /// Mean response time in hours. Lower is better.
    pub response_time: MetricComparison<f64>,
    /// Share of resolved inquiries in whole percent. Higher is better.
    pub resolution_rate: MetricComparison<u32>,
    pub inquiry_volume: VolumeComparison,
}

/// One company measured against the mean of its same-industry peers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BenchmarkReport {
    pub company: CompanyProfile,
    pub metrics: BenchmarkMetrics,
    pub insights: Vec<String>,
}

/// Where AI automation should be tuned next, for one industry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OptimizationSuggestion {
    pub industry: String,
    pub category: String,
    pub volume: usize,
    pub ai_accuracy: u32,
    pub recommendation: String,
    pub priority: Priority,
}

/// Mean QnA confidence for one category, as a whole percent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryAccuracy {
    pub category: String,
    pub ai_accuracy: u32,
    pub needs_human_intervention: bool,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QnaAccuracyReport {
    pub company_id: String,
    pub category_accuracy: Vec<CategoryAccuracy>,
}

/// Share of one category within a company's inquiries.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    pub percentage: u32,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyAnalysis {
    pub company_id: String,
    pub industry: String,
    pub total_inquiries: usize,
    pub industry_pattern: Vec<CategoryShare>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DirectoryAverages {
    pub monthly_revenue: u64,
    pub customer_count: u64,
}

/// Company directory composition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total: usize,
    pub industries: IndexMap<String, usize>,
    pub sizes: IndexMap<String, usize>,
    pub averages: DirectoryAverages,
}

/// Whether the initial QnA setup has been done.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SetupStatus {
    pub setup_complete: bool,
    pub has_qna_data: bool,
    pub next_step: String,
    pub message: String,
}
