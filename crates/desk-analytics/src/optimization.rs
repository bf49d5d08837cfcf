//! Which industry categories to automate or hand to humans next.

use std::cmp::Reverse;
use std::collections::HashSet;

use desk_config::{AccuracyConfig, ThresholdConfig};
use desk_core::entities::{Company, Inquiry};
use desk_core::enums::Priority;
use desk_core::responses::OptimizationSuggestion;
use indexmap::IndexMap;

use crate::breakdown::{tally, top_entry};

/// Priority tier for an accuracy percent.
#[must_use]
pub const fn priority_for(accuracy: u32, thresholds: &ThresholdConfig) -> Priority {
    if accuracy < thresholds.priority_high_below {
        Priority::High
    } else if accuracy < thresholds.priority_medium_below {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// One suggestion per industry, built from its most frequent category, sorted
/// by descending priority. Equal priorities keep industry first-seen order.
///
/// Category counts follow inquiry input order, which decides ties. Industries
/// without inquiries have no top category and are skipped.
#[must_use]
pub fn suggest_optimizations(
    companies: &[Company],
    inquiries: &[Inquiry],
    accuracy: &AccuracyConfig,
    thresholds: &ThresholdConfig,
) -> Vec<OptimizationSuggestion> {
    let mut groups: IndexMap<&str, HashSet<&str>> = IndexMap::new();
    for company in companies {
        groups
            .entry(company.industry.as_str())
            .or_default()
            .insert(company.company_id.as_str());
    }

    let mut suggestions = Vec::with_capacity(groups.len());

    for (industry, company_ids) in groups {
        let categories = tally(
            inquiries
                .iter()
                .filter(|inquiry| company_ids.contains(inquiry.company_id.as_str()))
                .map(|inquiry| inquiry.category.as_str()),
        );
        let Some((category, volume)) = top_entry(&categories) else {
            tracing::warn!(industry, "no inquiries, skipping optimization suggestion");
            continue;
        };

        let ai_accuracy = accuracy.lookup(industry, category);
        let verdict = if ai_accuracy > thresholds.no_training_above {
            "추가 학습 불필요"
        } else {
            "인간 개입 필요"
        };

        suggestions.push(OptimizationSuggestion {
            industry: industry.to_string(),
            category: category.to_string(),
            volume,
            ai_accuracy,
            recommendation: format!("{industry} {category} 문의 → AI 정확도 {ai_accuracy}%, {verdict}"),
            priority: priority_for(ai_accuracy, thresholds),
        });
    }

    // `sort_by_key` is stable.
    suggestions.sort_by_key(|suggestion| Reverse(suggestion.priority.weight()));
    suggestions
}
