//! End-to-end tests of `InsightService` over an in-memory snapshot.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use desk_analytics::{
    AnalyticsError, Collaborators, FixedClock, FixedResponseTime, InMemoryStore, InsightService,
};
use desk_config::DeskConfig;
use desk_core::entities::{Company, Inquiry, QnaEntry, QnaSeed};
use desk_core::enums::{InquiryStatus, Performance, Priority, Urgency};
use desk_core::snapshot::Snapshot;
use pretty_assertions::assert_eq;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
}

fn company(id: &str, name: &str, industry: &str, revenue: f64, customers: u64, team: u32) -> Company {
    Company {
        company_id: id.into(),
        company_name: name.into(),
        industry: industry.into(),
        business_type: "B2C".into(),
        company_size: "중소기업".into(),
        monthly_revenue: revenue,
        customer_count: customers,
        cs_team_size: team,
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
    }
}

fn inquiry(
    id: &str,
    company_id: &str,
    category: &str,
    status: &str,
    urgency: &str,
    age: Duration,
) -> Inquiry {
    Inquiry {
        inquiry_id: id.into(),
        company_id: company_id.into(),
        status: InquiryStatus::parse(status),
        category: category.into(),
        urgency: Urgency::parse(urgency),
        title: None,
        content: format!("{category} 문의"),
        created_at: now() - age,
        updated_at: None,
    }
}

fn qna(id: &str, company_id: &str, category: &str, confidence: f64) -> QnaEntry {
    QnaEntry {
        id: id.into(),
        company_id: Some(company_id.into()),
        industry: None,
        question: "배송은 얼마나 걸리나요?".into(),
        answer: "영업일 기준 2-3일 소요됩니다.".into(),
        category: category.into(),
        created_at: now(),
        confidence: Some(confidence),
    }
}

fn console_snapshot() -> Snapshot {
    Snapshot {
        companies: vec![
            company("hunters-company", "헌터스 쇼핑몰", "이커머스", 50_000_000.0, 1500, 2),
            company("tech-saas", "테크 SaaS", "SaaS", 30_000_000.0, 500, 1),
            company("fin-bank", "핀 은행", "금융", 200_000_000.0, 10_000, 8),
            company("mall-two", "두번째 몰", "이커머스", 20_000_000.0, 800, 1),
        ],
        inquiries: vec![
            inquiry("inq_001", "hunters-company", "배송", "pending", "high", Duration::hours(2)),
            inquiry("inq_002", "hunters-company", "배송", "resolved", "low", Duration::hours(5)),
            inquiry("inq_003", "hunters-company", "결제", "pending", "medium", Duration::minutes(30)),
            inquiry("inq_004", "tech-saas", "technical", "처리중", "높음", Duration::minutes(125)),
            inquiry("inq_005", "tech-saas", "billing", "완료", "낮음", Duration::days(3)),
            inquiry("inq_006", "fin-bank", "technical", "escalated", "critical", Duration::days(1)),
            inquiry("inq_007", "mall-two", "배송", "resolved", "medium", Duration::minutes(1)),
        ],
        qna: vec![
            qna("qna_1", "hunters-company", "배송", 0.95),
            qna("qna_2", "hunters-company", "결제", 0.40),
            qna("qna_3", "hunters-company", "배송", 0.90),
            qna("qna_4", "tech-saas", "billing", 0.99),
        ],
    }
}

fn service_for(snapshot: Snapshot, config: DeskConfig) -> InsightService {
    let store = Arc::new(InMemoryStore::new(snapshot).unwrap());
    let deps = Collaborators::in_memory(store)
        .with_clock(Arc::new(FixedClock(now())))
        .with_estimator(Arc::new(FixedResponseTime { hours: 4.0 }));
    InsightService::new(deps, config)
}

fn service() -> InsightService {
    service_for(console_snapshot(), DeskConfig::default())
}

#[test]
fn dashboard_stats_cover_all_inquiries() {
    let stats = service().dashboard_stats().unwrap();

    assert_eq!(stats.total, 7);
    assert_eq!(stats.categories.get("배송"), Some(&3));
    assert_eq!(stats.categories.get("결제"), Some(&1));
    assert_eq!(stats.status.pending, 2);
    assert_eq!(stats.status.in_progress, 1);
    assert_eq!(stats.status.resolved, 3);
    let recognized = stats.status.pending + stats.status.in_progress + stats.status.resolved;
    assert!(recognized <= stats.total);
    assert_eq!(stats.urgency.high, 2);
}

#[test]
fn three_inquiry_example_breakdown() {
    let snapshot = Snapshot {
        companies: vec![company("hunters-company", "헌터스 쇼핑몰", "이커머스", 1.0, 1, 1)],
        inquiries: vec![
            inquiry("a", "hunters-company", "배송", "pending", "low", Duration::hours(1)),
            inquiry("b", "hunters-company", "배송", "resolved", "low", Duration::hours(1)),
            inquiry("c", "hunters-company", "결제", "pending", "low", Duration::hours(1)),
        ],
        qna: Vec::new(),
    };
    let stats = service_for(snapshot, DeskConfig::default())
        .dashboard_stats()
        .unwrap();

    assert_eq!(stats.categories.get("배송"), Some(&2));
    assert_eq!(stats.categories.get("결제"), Some(&1));
    assert_eq!(stats.status.pending, 2);
    assert_eq!(stats.status.resolved, 1);
}

#[test]
fn urgent_alerts_use_injected_clock() {
    let alerts = service().urgent_alerts().unwrap();
    let labels: Vec<(&str, &str)> = alerts
        .inquiries
        .iter()
        .map(|timed| (timed.inquiry.inquiry_id.as_str(), timed.time_ago.as_str()))
        .collect();

    assert_eq!(alerts.count, 2);
    assert_eq!(labels, [("inq_001", "2시간 전"), ("inq_004", "2시간 전")]);
}

#[test]
fn recent_inquiries_default_and_explicit_limit() {
    let service = service();

    let all = service.recent_inquiries(None).unwrap();
    assert_eq!(all.len(), 7);
    assert_eq!(all[0].inquiry.inquiry_id, "inq_007");
    assert_eq!(all[0].time_ago, "1분 전");
    assert_eq!(all[6].time_ago, "3일 전");

    let two = service.recent_inquiries(Some(2)).unwrap();
    let ids: Vec<&str> = two.iter().map(|t| t.inquiry.inquiry_id.as_str()).collect();
    assert_eq!(ids, ["inq_007", "inq_003"]);
}

#[test]
fn industry_analysis_groups_and_recommends() {
    let insights = service().industry_analysis().unwrap();
    let names: Vec<&str> = insights.iter().map(|i| i.industry.as_str()).collect();
    assert_eq!(names, ["이커머스", "SaaS", "금융"]);

    let shop = &insights[0];
    assert_eq!(shop.total_companies, 2);
    assert_eq!(shop.total_inquiries, 4);
    assert_eq!(shop.top_category.as_deref(), Some("배송"));
    assert_eq!(shop.recommendations[0], "배송 문의가 75%를 차지합니다");

    let saas = &insights[1];
    assert_eq!(saas.recommendations[0], "기술문의가 50%");

    for insight in &insights {
        let sum: usize = insight.category_breakdown.values().sum();
        assert_eq!(sum, insight.total_inquiries, "{}", insight.industry);
    }
}

#[test]
fn analysis_window_limits_insight_input() {
    let mut config = DeskConfig::default();
    config.general.analysis_window = 1;
    let insights = service_for(console_snapshot(), config)
        .industry_analysis()
        .unwrap();

    let total: usize = insights.iter().map(|i| i.total_inquiries).sum();
    assert_eq!(total, 1);
    assert_eq!(insights[0].top_category.as_deref(), Some("배송"));
}

#[test]
fn benchmark_against_industry_peers() {
    let report = service().company_benchmark("hunters-company").unwrap();

    assert_eq!(report.company.name, "헌터스 쇼핑몰");
    assert_eq!(report.metrics.response_time.performance, Performance::BelowAverage);
    assert_eq!(report.metrics.resolution_rate.company, 33);
    assert_eq!(report.metrics.resolution_rate.industry_avg, 50);
    assert_eq!(report.metrics.resolution_rate.performance, Performance::BelowAverage);
    assert_eq!(report.metrics.inquiry_volume.company, 3);
    assert_eq!(report.metrics.inquiry_volume.industry_avg, 2);
    assert_eq!(
        report.insights,
        [
            "이커머스 업종 평균 대비 느린 응답속도",
            "월매출 5000만원 규모 치고 CS효율성 하위 수준",
            "CS팀 2명으로 고객 1500명 대응 중",
        ]
    );
}

#[test]
fn benchmark_unknown_company_is_not_found() {
    let err = service().company_benchmark("ghost").unwrap_err();
    assert!(matches!(err, AnalyticsError::CompanyNotFound { .. }));
    assert_eq!(err.to_string(), "company not found: ghost");
}

#[test]
fn optimization_suggestions_are_priority_sorted() {
    let suggestions = service().ai_optimization_suggestions().unwrap();
    let order: Vec<(&str, &str, Priority)> = suggestions
        .iter()
        .map(|s| (s.industry.as_str(), s.category.as_str(), s.priority))
        .collect();

    // SaaS ties technical/billing 1:1; the newest-first window sees technical first.
    assert_eq!(
        order,
        [
            ("금융", "technical", Priority::High),
            ("이커머스", "배송", Priority::Medium),
            ("SaaS", "technical", Priority::Medium),
        ]
    );
    assert_eq!(suggestions[1].volume, 3);
    assert_eq!(suggestions[1].ai_accuracy, 80);
}

#[test]
fn company_analysis_and_not_found() {
    let service = service();
    let analysis = service.company_analysis("hunters-company").unwrap();
    assert_eq!(analysis.total_inquiries, 3);
    assert_eq!(analysis.industry_pattern[0].category, "배송");
    assert_eq!(analysis.industry_pattern[0].percentage, 67);

    assert!(matches!(
        service.company_analysis("ghost"),
        Err(AnalyticsError::CompanyNotFound { .. })
    ));
}

#[test]
fn qna_accuracy_rounds_half_up() {
    let report = service().qna_accuracy("hunters-company").unwrap();
    let delivery = &report.category_accuracy[0];
    assert_eq!(delivery.category, "배송");
    assert_eq!(delivery.ai_accuracy, 93);
    assert!(!delivery.needs_human_intervention);

    let payment = &report.category_accuracy[1];
    assert!(payment.ai_accuracy <= 70);
    assert!(payment.needs_human_intervention);
}

#[test]
fn directory_stats_summarize_companies() {
    let stats = service().directory_stats().unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.industries.get("이커머스"), Some(&2));
    assert_eq!(stats.sizes.get("중소기업"), Some(&4));
    assert_eq!(stats.averages.monthly_revenue, 75_000_000);
    assert_eq!(stats.averages.customer_count, 3200);
}

fn refund_seed(confidence: Option<f64>) -> QnaSeed {
    QnaSeed {
        question: "환불 되나요?".into(),
        answer: "7일 이내 가능합니다.".into(),
        category: "결제".into(),
        company_id: Some("hunters-company".into()),
        industry: None,
        confidence,
    }
}

#[test]
fn setup_status_follows_qna_data() {
    let done = service().setup_status().unwrap();
    assert!(done.setup_complete);
    assert_eq!(done.next_step, "dashboard");

    let service = service_for(
        Snapshot {
            qna: Vec::new(),
            ..console_snapshot()
        },
        DeskConfig::default(),
    );
    let pending = service.setup_status().unwrap();
    assert!(!pending.has_qna_data);
    assert_eq!(pending.next_step, "qna-setup");
    assert_eq!(pending.message, "QnA 데이터를 설정해주세요.");

    let seeded = service
        .setup_qna(vec![refund_seed(Some(0.6)), refund_seed(None)])
        .unwrap();
    assert!(seeded.setup_complete);
    assert_eq!(seeded.message, "설정이 완료되었습니다. 대시보드로 이동하세요.");

    let report = service.qna_accuracy("hunters-company").unwrap();
    assert_eq!(report.category_accuracy.len(), 1);
    assert_eq!(report.category_accuracy[0].ai_accuracy, 55);
}

#[test]
fn setup_qna_numbers_entries_and_stamps_the_clock() {
    let store = Arc::new(
        InMemoryStore::new(Snapshot {
            qna: Vec::new(),
            ..console_snapshot()
        })
        .unwrap(),
    );
    let deps = Collaborators::in_memory(store.clone()).with_clock(Arc::new(FixedClock(now())));
    let service = InsightService::new(deps, DeskConfig::default());

    service
        .setup_qna(vec![refund_seed(None), refund_seed(Some(0.9))])
        .unwrap();

    let qna = store.snapshot().unwrap().qna;
    let ids: Vec<&str> = qna.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, ["qna_1", "qna_2"]);
    assert!(qna.iter().all(|entry| entry.created_at == now()));
}

#[test]
fn setup_qna_rejects_out_of_range_confidence_without_storing() {
    let err = service()
        .setup_qna(vec![refund_seed(Some(0.8)), refund_seed(Some(1.2))])
        .unwrap_err();
    assert!(matches!(err, AnalyticsError::Core(_)));
    assert!(err.to_string().contains("qna_2"));

    let service = service();
    assert!(service.setup_qna(vec![refund_seed(Some(-0.1))]).is_err());
    assert_eq!(
        service.qna_accuracy("hunters-company").unwrap().category_accuracy[0].ai_accuracy,
        93
    );
}

#[test]
fn empty_snapshot_degrades_to_zero() {
    let service = service_for(Snapshot::default(), DeskConfig::default());

    assert_eq!(service.dashboard_stats().unwrap().total, 0);
    assert_eq!(service.urgent_alerts().unwrap().count, 0);
    assert!(service.recent_inquiries(None).unwrap().is_empty());
    assert!(service.industry_analysis().unwrap().is_empty());
    assert!(service.ai_optimization_suggestions().unwrap().is_empty());
    assert_eq!(service.directory_stats().unwrap().averages.monthly_revenue, 0);
}
