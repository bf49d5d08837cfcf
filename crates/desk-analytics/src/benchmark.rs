//! One company measured against the mean of its same-industry peers.

use std::collections::HashSet;

use desk_config::ThresholdConfig;
use desk_core::entities::{Company, Inquiry};
use desk_core::enums::Performance;
use desk_core::responses::{
    BenchmarkMetrics, BenchmarkReport, CompanyProfile, MetricComparison, VolumeComparison,
};

use crate::breakdown::{finite_or_zero, percent, ratio, round_half_up};
use crate::error::AnalyticsError;
use crate::estimator::ResponseTimeEstimator;

/// Compare `company_id` against every company sharing its industry,
/// itself included.
///
/// # Errors
///
/// Returns [`AnalyticsError::CompanyNotFound`] if no company has `company_id`.
pub fn benchmark(
    company_id: &str,
    companies: &[Company],
    inquiries: &[Inquiry],
    estimator: &dyn ResponseTimeEstimator,
    thresholds: &ThresholdConfig,
) -> Result<BenchmarkReport, AnalyticsError> {
    let company = companies
        .iter()
        .find(|company| company.company_id == company_id)
        .ok_or_else(|| AnalyticsError::company_not_found(company_id))?;

    let peers: HashSet<&str> = companies
        .iter()
        .filter(|peer| peer.industry == company.industry)
        .map(|peer| peer.company_id.as_str())
        .collect();

    let own: Vec<&Inquiry> = inquiries
        .iter()
        .filter(|inquiry| inquiry.company_id == company_id)
        .collect();
    let industry: Vec<&Inquiry> = inquiries
        .iter()
        .filter(|inquiry| peers.contains(inquiry.company_id.as_str()))
        .collect();

    tracing::debug!(
        company_id,
        peers = peers.len(),
        company_inquiries = own.len(),
        industry_inquiries = industry.len(),
        "benchmarking company"
    );

    let company_hours = finite_or_zero(estimator.estimate_hours(&own));
    let industry_hours = finite_or_zero(estimator.estimate_hours(&industry));
    let faster = company_hours < industry_hours;

    let company_rate = resolution_rate(&own);
    let industry_rate = resolution_rate(&industry);

    let metrics = BenchmarkMetrics {
        response_time: MetricComparison {
            company: company_hours,
            industry_avg: industry_hours,
            performance: Performance::from_strictly_better(faster),
        },
        resolution_rate: MetricComparison {
            company: percent(company_rate),
            industry_avg: percent(industry_rate),
            performance: Performance::from_strictly_better(company_rate > industry_rate),
        },
        inquiry_volume: VolumeComparison {
            company: own.len(),
            industry_avg: round_half_up(ratio(industry.len(), peers.len())),
        },
    };

    let insights = vec![
        format!(
            "{} 업종 평균 대비 {} 응답속도",
            company.industry,
            if faster { "빠른" } else { "느린" }
        ),
        format!(
            "월매출 {}만원 규모 치고 CS효율성 {} 수준",
            round_half_up(company.monthly_revenue / 10_000.0),
            if company_rate > thresholds.efficiency_upper_rate {
                "상위"
            } else {
                "하위"
            }
        ),
        format!(
            "CS팀 {}명으로 고객 {}명 대응 중",
            company.cs_team_size, company.customer_count
        ),
    ];

    Ok(BenchmarkReport {
        company: CompanyProfile {
            name: company.company_name.clone(),
            industry: company.industry.clone(),
            size: company.company_size.clone(),
            monthly_revenue: company.monthly_revenue,
        },
        metrics,
        insights,
    })
}

/// Share of resolved inquiries; 0 for an empty set.
fn resolution_rate(inquiries: &[&Inquiry]) -> f64 {
    let resolved = inquiries.iter().filter(|inquiry| inquiry.is_resolved()).count();
    ratio(resolved, inquiries.len())
}
