//! Urgent alerts and the recent-inquiries feed.

use chrono::{DateTime, Utc};
use desk_core::entities::Inquiry;
use desk_core::responses::{TimedInquiry, UrgentAlertSet};

use crate::recency::time_ago;

/// Attach the recency label for `now`.
#[must_use]
pub fn decorate(inquiry: &Inquiry, now: DateTime<Utc>) -> TimedInquiry {
    TimedInquiry {
        inquiry: inquiry.clone(),
        time_ago: time_ago(inquiry.created_at, now),
    }
}

/// High-urgency inquiries that are not resolved, in input order.
#[must_use]
pub fn urgent_alerts(inquiries: &[Inquiry], now: DateTime<Utc>) -> UrgentAlertSet {
    let matches: Vec<TimedInquiry> = inquiries
        .iter()
        .filter(|inquiry| inquiry.is_urgent_open())
        .map(|inquiry| decorate(inquiry, now))
        .collect();

    UrgentAlertSet {
        count: matches.len(),
        inquiries: matches,
    }
}

/// Newest first, truncated to `limit` after sorting. Inquiries created at the
/// same instant keep their input order.
#[must_use]
pub fn recent_inquiries(inquiries: &[Inquiry], limit: usize, now: DateTime<Utc>) -> Vec<TimedInquiry> {
    newest_first(inquiries)
        .into_iter()
        .take(limit)
        .map(|inquiry| decorate(inquiry, now))
        .collect()
}

/// Stable sort by `created_at`, newest first.
pub(crate) fn newest_first(inquiries: &[Inquiry]) -> Vec<&Inquiry> {
    let mut sorted: Vec<&Inquiry> = inquiries.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use desk_core::enums::{InquiryStatus, Urgency};
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn inquiry(id: &str, status: InquiryStatus, urgency: Urgency, age: Duration) -> Inquiry {
        Inquiry {
            inquiry_id: id.into(),
            company_id: "hunters-company".into(),
            status,
            category: "기술 문의".into(),
            urgency,
            title: None,
            content: String::new(),
            created_at: now() - age,
            updated_at: None,
        }
    }

    fn console_inquiries() -> Vec<Inquiry> {
        vec![
            inquiry("inq_001", InquiryStatus::Pending, Urgency::High, Duration::hours(2)),
            inquiry("inq_002", InquiryStatus::InProgress, Urgency::Medium, Duration::hours(4)),
            inquiry("inq_003", InquiryStatus::Resolved, Urgency::Low, Duration::hours(24)),
            inquiry("inq_004", InquiryStatus::Pending, Urgency::High, Duration::minutes(30)),
            inquiry("inq_005", InquiryStatus::InProgress, Urgency::Medium, Duration::hours(6)),
            inquiry("inq_006", InquiryStatus::Resolved, Urgency::High, Duration::minutes(5)),
        ]
    }

    #[test]
    fn urgent_alerts_keep_input_order_and_skip_resolved() {
        let alerts = urgent_alerts(&console_inquiries(), now());

        assert_eq!(alerts.count, 2);
        let labels: Vec<(&str, &str)> = alerts
            .inquiries
            .iter()
            .map(|timed| (timed.inquiry.inquiry_id.as_str(), timed.time_ago.as_str()))
            .collect();
        assert_eq!(labels, [("inq_001", "2시간 전"), ("inq_004", "30분 전")]);
    }

    #[test]
    fn urgent_alerts_on_empty_input() {
        assert_eq!(urgent_alerts(&[], now()), UrgentAlertSet::default());
    }

    #[test]
    fn in_progress_high_urgency_is_urgent() {
        let inquiries = [inquiry(
            "inq_010",
            InquiryStatus::InProgress,
            Urgency::High,
            Duration::days(2),
        )];
        let alerts = urgent_alerts(&inquiries, now());
        assert_eq!(alerts.count, 1);
        assert_eq!(alerts.inquiries[0].time_ago, "2일 전");
    }

    #[test]
    fn recent_inquiries_sort_then_limit() {
        let recent = recent_inquiries(&console_inquiries(), 3, now());
        let ids: Vec<&str> = recent
            .iter()
            .map(|timed| timed.inquiry.inquiry_id.as_str())
            .collect();
        assert_eq!(ids, ["inq_006", "inq_004", "inq_001"]);
        assert_eq!(recent[0].time_ago, "5분 전");
    }

    #[test]
    fn recent_inquiries_limit_larger_than_input() {
        assert_eq!(recent_inquiries(&console_inquiries(), 100, now()).len(), 6);
        assert!(recent_inquiries(&console_inquiries(), 0, now()).is_empty());
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let first = inquiry("a", InquiryStatus::Pending, Urgency::Low, Duration::hours(1));
        let second = inquiry("b", InquiryStatus::Pending, Urgency::Low, Duration::hours(1));
        let pair = [first, second];
        let sorted = newest_first(&pair);
        assert_eq!(sorted[0].inquiry_id, "a");
        assert_eq!(sorted[1].inquiry_id, "b");
    }
}
