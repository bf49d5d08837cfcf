//! Per-industry inquiry patterns and playbook recommendations.

use desk_config::PlaybookConfig;
use desk_core::entities::{Company, Inquiry};
use desk_core::responses::IndustryInsight;
use indexmap::IndexMap;

use crate::breakdown::{CountMap, increment, share_percent, top_entry};
use crate::index::InquiryIndex;

/// Running totals for one industry while companies are folded in.
#[derive(Debug, Default)]
struct IndustryAccumulator {
    total_companies: usize,
    total_inquiries: usize,
    categories: CountMap,
    urgencies: CountMap,
}

/// Group companies by industry in first-seen order and summarize the
/// inquiries of each group.
///
/// Inquiries whose company is not in `companies` are ignored.
#[must_use]
pub fn analyze_industries(
    companies: &[Company],
    inquiries: &[Inquiry],
    playbook: &PlaybookConfig,
) -> Vec<IndustryInsight> {
    let index = InquiryIndex::build(inquiries);
    let mut industries: IndexMap<&str, IndustryAccumulator> = IndexMap::new();

    for company in companies {
        let acc = industries.entry(company.industry.as_str()).or_default();
        let owned = index.for_company(&company.company_id);

        acc.total_companies += 1;
        acc.total_inquiries += owned.len();
        for inquiry in owned {
            increment(&mut acc.categories, &inquiry.category);
            increment(&mut acc.urgencies, inquiry.urgency.as_str());
        }
    }

    tracing::debug!(
        companies = companies.len(),
        industries = industries.len(),
        "analyzed industry patterns"
    );

    industries
        .into_iter()
        .map(|(industry, acc)| {
            let top_category = top_entry(&acc.categories).map(|(key, _)| key.to_string());
            let recommendations = render_recommendations(
                playbook.industry_templates(industry),
                &acc.categories,
                acc.total_inquiries,
                top_category.as_deref(),
            );
            IndustryInsight {
                industry: industry.to_string(),
                total_companies: acc.total_companies,
                total_inquiries: acc.total_inquiries,
                top_category,
                category_breakdown: acc.categories,
                urgency_breakdown: acc.urgencies,
                recommendations,
            }
        })
        .collect()
}

/// Render every template that can be filled. Templates that mention the top
/// category are dropped when the industry has no inquiries.
fn render_recommendations(
    templates: &[String],
    categories: &CountMap,
    total: usize,
    top_category: Option<&str>,
) -> Vec<String> {
    templates
        .iter()
        .filter_map(|template| render_template(template, categories, total, top_category))
        .collect()
}

/// Substitute `{top_category}`, `{top_share}` and `{share:<category>}`.
///
/// Unknown placeholders are left as written.
pub(crate) fn render_template(
    template: &str,
    categories: &CountMap,
    total: usize,
    top_category: Option<&str>,
) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return Some(out);
        };

        let key = &after[..close];
        match key {
            "top_category" => out.push_str(top_category?),
            "top_share" => {
                let top = top_category?;
                let count = categories.get(top).copied().unwrap_or(0);
                out.push_str(&share_percent(count, total).to_string());
            }
            _ => {
                if let Some(category) = key.strip_prefix("share:") {
                    let count = categories.get(category).copied().unwrap_or(0);
                    out.push_str(&share_percent(count, total).to_string());
                } else {
                    out.push('{');
                    out.push_str(key);
                    out.push('}');
                }
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    Some(out)
}
