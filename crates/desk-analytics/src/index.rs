//! Inquiries grouped by owning company.

use std::collections::HashMap;

use desk_core::entities::Inquiry;

/// Borrowed view of inquiries keyed by `company_id`, each list in input order.
#[derive(Debug, Default)]
pub struct InquiryIndex<'a> {
    by_company: HashMap<&'a str, Vec<&'a Inquiry>>,
}

impl<'a> InquiryIndex<'a> {
    #[must_use]
    pub fn build(inquiries: &'a [Inquiry]) -> Self {
        let mut by_company: HashMap<&'a str, Vec<&'a Inquiry>> = HashMap::new();
        for inquiry in inquiries {
            by_company
                .entry(inquiry.company_id.as_str())
                .or_default()
                .push(inquiry);
        }
        Self { by_company }
    }

    /// Inquiries owned by `company_id`; empty when it has none.
    #[must_use]
    pub fn for_company(&self, company_id: &str) -> &[&'a Inquiry] {
        self.by_company
            .get(company_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
