//! Response time estimation for benchmarking.
//!
//! Benchmarks only need a mean response time per inquiry set, so the
//! computation sits behind [`ResponseTimeEstimator`] and callers choose the
//! strategy. Every estimator returns 0 for an empty set.

use desk_core::entities::Inquiry;

use crate::breakdown::finite_or_zero;

pub trait ResponseTimeEstimator: Send + Sync {
    /// Mean response time in hours.
    fn estimate_hours(&self, inquiries: &[&Inquiry]) -> f64;
}

impl<F> ResponseTimeEstimator for F
where
    F: Fn(&[&Inquiry]) -> f64 + Send + Sync,
{
    fn estimate_hours(&self, inquiries: &[&Inquiry]) -> f64 {
        self(inquiries)
    }
}

/// Reports the same response time for every non-empty set.
#[derive(Debug, Clone, Copy)]
pub struct FixedResponseTime {
    pub hours: f64,
}

impl ResponseTimeEstimator for FixedResponseTime {
    fn estimate_hours(&self, inquiries: &[&Inquiry]) -> f64 {
        if inquiries.is_empty() {
            0.0
        } else {
            finite_or_zero(self.hours)
        }
    }
}

/// Mean of `updated_at - created_at` over inquiries that have been touched
/// since creation, rounded to one decimal hour.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampDeltaEstimator;

impl ResponseTimeEstimator for TimestampDeltaEstimator {
    #[allow(clippy::cast_precision_loss)]
    fn estimate_hours(&self, inquiries: &[&Inquiry]) -> f64 {
        let deltas: Vec<i64> = inquiries
            .iter()
            .filter_map(|inquiry| {
                let updated = inquiry.updated_at?;
                let minutes = updated.signed_duration_since(inquiry.created_at).num_minutes();
                (minutes >= 0).then_some(minutes)
            })
            .collect();

        if deltas.is_empty() {
            return 0.0;
        }

        let mean_minutes = deltas.iter().sum::<i64>() as f64 / deltas.len() as f64;
        let hours = mean_minutes / 60.0;
        finite_or_zero((hours * 10.0).round() / 10.0)
    }
}
