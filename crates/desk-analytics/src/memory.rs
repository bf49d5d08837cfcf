//! Snapshot-backed implementation of every collaborator trait.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use desk_core::entities::{Company, Inquiry, QnaEntry};
use desk_core::snapshot::Snapshot;

use crate::error::AnalyticsError;
use crate::ports::{CompanyDirectory, InquiryFilter, InquiryStore, QnaScope, QnaStore};

/// Owns one [`Snapshot`] and serves reads from it.
///
/// Only the QnA set changes after construction, through
/// [`QnaStore::replace_qna`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: RwLock<Snapshot>,
}

impl InMemoryStore {
    /// Wrap a snapshot after checking its cross-record constraints.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Core`] if [`Snapshot::validate`] fails.
    pub fn new(snapshot: Snapshot) -> Result<Self, AnalyticsError> {
        snapshot.validate()?;
        Ok(Self {
            snapshot: RwLock::new(snapshot),
        })
    }

    /// A copy of the current records, including any replaced QnA set.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] if a writer panicked mid-update.
    pub fn snapshot(&self) -> Result<Snapshot, AnalyticsError> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Snapshot>, AnalyticsError> {
        self.snapshot.read().map_err(poisoned)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> AnalyticsError {
    AnalyticsError::Store("snapshot lock poisoned".into())
}

impl CompanyDirectory for InMemoryStore {
    fn all_companies(&self) -> Result<Vec<Company>, AnalyticsError> {
        Ok(self.read()?.companies.clone())
    }

    fn company_by_id(&self, company_id: &str) -> Result<Option<Company>, AnalyticsError> {
        Ok(self
            .read()?
            .companies
            .iter()
            .find(|company| company.company_id == company_id)
            .cloned())
    }

    fn companies_by_industry(&self, industry: &str) -> Result<Vec<Company>, AnalyticsError> {
        Ok(self
            .read()?
            .companies
            .iter()
            .filter(|company| company.industry == industry)
            .cloned()
            .collect())
    }
}

impl InquiryStore for InMemoryStore {
    fn list_inquiries(&self, filter: &InquiryFilter) -> Result<Vec<Inquiry>, AnalyticsError> {
        Ok(self
            .read()?
            .inquiries
            .iter()
            .filter(|inquiry| filter.matches(inquiry))
            .cloned()
            .collect())
    }
}

impl QnaStore for InMemoryStore {
    fn list_qna(&self, scope: &QnaScope) -> Result<Vec<QnaEntry>, AnalyticsError> {
        Ok(self
            .read()?
            .qna
            .iter()
            .filter(|entry| scope.matches(entry))
            .cloned()
            .collect())
    }

    fn replace_qna(&self, entries: Vec<QnaEntry>) -> Result<usize, AnalyticsError> {
        let mut snapshot = self.snapshot.write().map_err(poisoned)?;
        snapshot.qna = entries;
        tracing::debug!(count = snapshot.qna.len(), "replaced QnA set");
        Ok(snapshot.qna.len())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use desk_core::entities::QnaSeed;
    use desk_core::enums::{InquiryStatus, Urgency};
    use pretty_assertions::assert_eq;

    use super::*;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn company(id: &str, industry: &str) -> Company {
        Company {
            company_id: id.into(),
            company_name: id.into(),
            industry: industry.into(),
            business_type: "B2B".into(),
            company_size: "스타트업".into(),
            monthly_revenue: 1.0,
            customer_count: 1,
            cs_team_size: 1,
            created_at: at(),
        }
    }

    fn seed(category: &str, company_id: Option<&str>) -> QnaSeed {
        QnaSeed {
            question: "환불 규정이 어떻게 되나요?".into(),
            answer: "구매 후 7일 이내 환불 가능합니다.".into(),
            category: category.into(),
            company_id: company_id.map(str::to_string),
            industry: None,
            confidence: None,
        }
    }

    fn store() -> InMemoryStore {
        InMemoryStore::new(Snapshot {
            companies: vec![company("shop", "이커머스"), company("saas", "SaaS")],
            inquiries: vec![Inquiry {
                inquiry_id: "inq_001".into(),
                company_id: "shop".into(),
                status: InquiryStatus::Pending,
                category: "배송".into(),
                urgency: Urgency::High,
                title: None,
                content: String::new(),
                created_at: at(),
                updated_at: None,
            }],
            qna: Vec::new(),
        })
        .unwrap()
    }

    #[test]
    fn invalid_snapshot_is_rejected() {
        let result = InMemoryStore::new(Snapshot {
            companies: vec![company("dup", "SaaS"), company("dup", "금융")],
            ..Snapshot::default()
        });
        assert!(matches!(result, Err(AnalyticsError::Core(_))));
    }

    #[test]
    fn directory_lookups() {
        let store = store();
        assert_eq!(store.all_companies().unwrap().len(), 2);
        assert_eq!(
            store.company_by_id("saas").unwrap().map(|c| c.industry),
            Some("SaaS".to_string())
        );
        assert!(store.company_by_id("missing").unwrap().is_none());
        assert_eq!(store.companies_by_industry("이커머스").unwrap().len(), 1);
        assert!(store.companies_by_industry("금융").unwrap().is_empty());
    }

    #[test]
    fn inquiry_filter_by_company() {
        let store = store();
        assert_eq!(store.list_inquiries(&InquiryFilter::All).unwrap().len(), 1);
        assert!(
            store
                .list_inquiries(&InquiryFilter::Company("saas".into()))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn replace_qna_swaps_the_whole_set() {
        let store = store();
        let entries = vec![
            seed("refund", Some("shop")).into_entry(1, at()),
            seed("delivery", None).into_entry(2, at()),
        ];
        assert_eq!(store.replace_qna(entries).unwrap(), 2);

        let all = store.list_qna(&QnaScope::All).unwrap();
        let ids: Vec<&str> = all.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, ["qna_1", "qna_2"]);

        let scoped = store.list_qna(&QnaScope::Company("shop".into())).unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].category, "refund");
        assert_eq!(store.snapshot().unwrap().qna.len(), 2);

        assert_eq!(store.replace_qna(Vec::new()).unwrap(), 0);
        assert!(store.list_qna(&QnaScope::All).unwrap().is_empty());
        assert_eq!(store.snapshot().unwrap().inquiries.len(), 1);
    }
}
