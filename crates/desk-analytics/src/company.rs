//! Single-company category analysis and directory-wide statistics.

use desk_config::PlaybookConfig;
use desk_core::entities::{Company, Inquiry};
use desk_core::responses::{CategoryShare, CompanyAnalysis, DirectoryAverages, DirectoryStats};

use crate::breakdown::{increment, round_half_up, share_percent, tally};

/// Category shares of `company`'s own inquiries, in first-seen order.
///
/// `inquiries` may contain other companies' records; they are ignored.
#[must_use]
pub fn analyze_company(
    company: &Company,
    inquiries: &[Inquiry],
    playbook: &PlaybookConfig,
) -> CompanyAnalysis {
    let owned: Vec<&Inquiry> = inquiries
        .iter()
        .filter(|inquiry| inquiry.company_id == company.company_id)
        .collect();
    let total = owned.len();
    let categories = tally(owned.iter().map(|inquiry| inquiry.category.as_str()));

    let industry_pattern = categories
        .into_iter()
        .map(|(category, count)| CategoryShare {
            percentage: share_percent(count, total),
            recommendation: playbook.category_recommendation(&company.industry, &category),
            category,
            count,
        })
        .collect();

    CompanyAnalysis {
        company_id: company.company_id.clone(),
        industry: company.industry.clone(),
        total_inquiries: total,
        industry_pattern,
    }
}

/// Composition of the company directory. Averages are 0 for an empty one.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn directory_stats(companies: &[Company]) -> DirectoryStats {
    let mut stats = DirectoryStats {
        total: companies.len(),
        ..DirectoryStats::default()
    };
    let mut revenue = 0.0;
    let mut customers = 0u64;

    for company in companies {
        increment(&mut stats.industries, &company.industry);
        increment(&mut stats.sizes, &company.company_size);
        revenue += company.monthly_revenue;
        customers = customers.saturating_add(company.customer_count);
    }

    if !companies.is_empty() {
        let count = companies.len() as f64;
        stats.averages = DirectoryAverages {
            monthly_revenue: round_half_up(revenue / count),
            customer_count: round_half_up(customers as f64 / count),
        };
    }

    stats
}
