use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A customer company using the chatbot platform.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Company {
    pub company_id: String,
    pub company_name: String,
    /// Grouping key for industry analysis and benchmarking.
    pub industry: String,
    pub business_type: String,
    pub company_size: String,
    pub monthly_revenue: f64,
    pub customer_count: u64,
    pub cs_team_size: u32,
    pub created_at: DateTime<Utc>,
}
