//! Recommendation text, keyed by industry and by (industry, category).
//!
//! Industry templates may reference computed values:
//! - `{top_category}`: the industry's most frequent category
//! - `{top_share}`: that category's share of the industry's inquiries, in percent
//! - `{share:<category>}`: the share of a named category, in percent
//!
//! Rendering happens in `desk-analytics`; this module only holds the data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A fixed piece of advice for one category within one industry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryRule {
    pub industry: String,
    pub category: String,
    pub recommendation: String,
}

fn default_industries() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([
        (
            "이커머스".to_string(),
            vec![
                "{top_category} 문의가 {top_share}%를 차지합니다".to_string(),
                "배송 추적 API 개선으로 문의 60% 감소 가능".to_string(),
                "주말 문의 200% 증가 예상 - 인력 배치 조정 필요".to_string(),
            ],
        ),
        (
            "SaaS".to_string(),
            vec![
                "기술문의가 {share:technical}%".to_string(),
                "온보딩 튜토리얼 추가로 기술문의 40% 감소 가능".to_string(),
                "사용자 가이드 강화 필요".to_string(),
            ],
        ),
        (
            "금융".to_string(),
            vec![
                "보안 관련 문의는 AI보다 인간 개입 필수".to_string(),
                "규제 준수 관련 FAQ 강화 필요".to_string(),
                "고객 이탈 방지를 위한 신속 대응 체계 구축".to_string(),
            ],
        ),
    ])
}

fn default_category_rules() -> Vec<CategoryRule> {
    vec![CategoryRule {
        industry: "이커머스".to_string(),
        category: "배송".to_string(),
        recommendation: "물류 최적화 필요 - 배송 추적 API 개선 권장".to_string(),
    }]
}

fn default_category_fallback() -> String {
    "{category} 카테고리 개선 필요".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybookConfig {
    /// Ordered recommendation templates per industry. Industries not listed
    /// get no recommendations.
    #[serde(default = "default_industries")]
    pub industries: BTreeMap<String, Vec<String>>,

    /// Per-category advice used by company analysis.
    #[serde(default = "default_category_rules")]
    pub category_rules: Vec<CategoryRule>,

    /// Advice for categories without a rule; `{category}` is substituted.
    #[serde(default = "default_category_fallback")]
    pub category_fallback: String,
}

impl PlaybookConfig {
    /// Templates for `industry`, empty when the industry is not in the playbook.
    #[must_use]
    pub fn industry_templates(&self, industry: &str) -> &[String] {
        self.industries
            .get(industry)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Advice for one category of a company in `industry`.
    #[must_use]
    pub fn category_recommendation(&self, industry: &str, category: &str) -> String {
        self.category_rules
            .iter()
            .find(|rule| rule.industry == industry && rule.category == category)
            .map_or_else(
                || self.category_fallback.replace("{category}", category),
                |rule| rule.recommendation.clone(),
            )
    }
}

impl Default for PlaybookConfig {
    fn default() -> Self {
        Self {
            industries: default_industries(),
            category_rules: default_category_rules(),
            category_fallback: default_category_fallback(),
        }
    }
}
