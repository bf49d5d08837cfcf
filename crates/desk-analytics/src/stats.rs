//! Dashboard totals by status, urgency, and category.

use desk_core::entities::Inquiry;
use desk_core::enums::{InquiryStatus, Urgency};
use desk_core::responses::{StatsSummary, StatusBreakdown, UrgencyBreakdown};

use crate::breakdown::increment;

/// Count inquiries per status, urgency, and category.
///
/// Unrecognized status or urgency values count toward `total` only.
#[must_use]
pub fn aggregate(inquiries: &[Inquiry]) -> StatsSummary {
    let mut status = StatusBreakdown::default();
    let mut urgency = UrgencyBreakdown::default();
    let mut summary = StatsSummary {
        total: inquiries.len(),
        ..StatsSummary::default()
    };

    for inquiry in inquiries {
        match inquiry.status {
            InquiryStatus::Pending => status.pending += 1,
            InquiryStatus::InProgress => status.in_progress += 1,
            InquiryStatus::Resolved => status.resolved += 1,
            InquiryStatus::Unrecognized(_) => {}
        }

        match inquiry.urgency {
            Urgency::High => urgency.high += 1,
            Urgency::Medium => urgency.medium += 1,
            Urgency::Low => urgency.low += 1,
            Urgency::Unrecognized(_) => {}
        }

        increment(&mut summary.categories, &inquiry.category);
    }

    let unrecognized = inquiries
        .iter()
        .filter(|inquiry| has_unrecognized_label(inquiry))
        .count();
    if unrecognized > 0 {
        tracing::warn!(
            unrecognized,
            total = summary.total,
            "inquiries with unrecognized status or urgency excluded from breakdowns"
        );
    }

    summary.status = status;
    summary.urgency = urgency;
    summary
}

/// Whether the status or urgency fell outside the recognized labels.
fn has_unrecognized_label(inquiry: &Inquiry) -> bool {
    !inquiry.status.is_recognized() || !inquiry.urgency.is_recognized()
}
