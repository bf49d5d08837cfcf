//! # desk-analytics
//!
//! Analytics and insight aggregation engine for the CS insight desk.
//!
//! Turns company, inquiry and QnA records into dashboard totals, urgent
//! alerts, industry patterns, peer benchmarks and AI-optimization priorities.
//! Every aggregation is a synchronous pure function of the records passed
//! in; [`InsightService`] wires them to injected collaborators
//! ([`ports`]), a [`Clock`] and a [`ResponseTimeEstimator`].
//!
//! Count maps keep first-seen key order, and "top" selection lets the
//! earliest key win ties. Empty denominators produce 0, never NaN.

pub mod benchmark;
pub mod breakdown;
pub mod clock;
pub mod company;
pub mod error;
pub mod estimator;
mod index;
pub mod industry;
pub mod memory;
pub mod optimization;
pub mod ports;
pub mod qna_accuracy;
pub mod recency;
pub mod service;
pub mod stats;
pub mod urgent;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::AnalyticsError;
pub use estimator::{FixedResponseTime, ResponseTimeEstimator, TimestampDeltaEstimator};
pub use memory::InMemoryStore;
pub use service::{Collaborators, InsightService};
