//! Mean model confidence per QnA category.

use desk_config::ThresholdConfig;
use desk_core::entities::QnaEntry;
use desk_core::responses::{CategoryAccuracy, QnaAccuracyReport};
use indexmap::IndexMap;

use crate::breakdown::{finite_or_zero, percent};

/// Mean confidence of each category as a whole percent (half-up), in
/// first-seen category order. Entries without a confidence count as
/// `thresholds.default_confidence`.
#[must_use]
pub fn analyze_qna_accuracy(
    company_id: &str,
    entries: &[QnaEntry],
    thresholds: &ThresholdConfig,
) -> QnaAccuracyReport {
    let mut confidences: IndexMap<&str, Vec<f64>> = IndexMap::new();
    for entry in entries {
        confidences
            .entry(entry.category.as_str())
            .or_default()
            .push(entry.confidence.unwrap_or(thresholds.default_confidence));
    }

    let category_accuracy = confidences
        .into_iter()
        .map(|(category, values)| {
            let ai_accuracy = percent(mean(&values));
            let needs_human_intervention = ai_accuracy < thresholds.human_intervention_below;
            CategoryAccuracy {
                category: category.to_string(),
                ai_accuracy,
                needs_human_intervention,
                recommendation: if needs_human_intervention {
                    "인간 개입 필수"
                } else {
                    "AI 정확도 양호"
                }
                .to_string(),
            }
        })
        .collect();

    QnaAccuracyReport {
        company_id: company_id.to_string(),
        category_accuracy,
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    finite_or_zero(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn entry(category: &str, confidence: Option<f64>) -> QnaEntry {
        QnaEntry {
            id: format!("qna-{category}"),
            company_id: Some("hunters-company".into()),
            industry: None,
            question: "질문".into(),
            answer: "답변".into(),
            category: category.into(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            confidence,
        }
    }

    #[test]
    fn delivery_and_payment_example() {
        let entries = [
            entry("배송", Some(0.95)),
            entry("결제", Some(0.40)),
            entry("배송", Some(0.90)),
        ];
        let report = analyze_qna_accuracy("hunters-company", &entries, &ThresholdConfig::default());

        assert_eq!(
            report.category_accuracy,
            [
                CategoryAccuracy {
                    category: "배송".into(),
                    ai_accuracy: 93,
                    needs_human_intervention: false,
                    recommendation: "AI 정확도 양호".into(),
                },
                CategoryAccuracy {
                    category: "결제".into(),
                    ai_accuracy: 40,
                    needs_human_intervention: true,
                    recommendation: "인간 개입 필수".into(),
                },
            ]
        );
    }

    #[rstest]
    #[case(0.70, false)]
    #[case(0.69, true)]
    fn threshold_is_strict(#[case] confidence: f64, #[case] needs_human: bool) {
        let report = analyze_qna_accuracy(
            "c",
            &[entry("general", Some(confidence))],
            &ThresholdConfig::default(),
        );
        assert_eq!(report.category_accuracy[0].needs_human_intervention, needs_human);
    }

    #[test]
    fn missing_confidence_uses_default() {
        let report = analyze_qna_accuracy("c", &[entry("general", None)], &ThresholdConfig::default());
        assert_eq!(report.category_accuracy[0].ai_accuracy, 50);
        assert!(report.category_accuracy[0].needs_human_intervention);
    }

    #[test]
    fn no_entries_yield_empty_report() {
        let report = analyze_qna_accuracy("c", &[], &ThresholdConfig::default());
        assert_eq!(report.company_id, "c");
        assert!(report.category_accuracy.is_empty());
    }
}
