//! Facade exposing every insight operation over injected collaborators.
//!
//! `InsightService` holds no record state of its own. Each call reads a fresh
//! copy of the records from its collaborators and runs one pure aggregation
//! over it, so concurrent callers never share accumulators.

use std::sync::Arc;

use desk_config::DeskConfig;
use desk_core::entities::{Inquiry, QnaEntry, QnaSeed};
use desk_core::responses::{
    BenchmarkReport, CompanyAnalysis, DirectoryStats, IndustryInsight, OptimizationSuggestion,
    QnaAccuracyReport, SetupStatus, StatsSummary, TimedInquiry, UrgentAlertSet,
};

use crate::clock::{Clock, SystemClock};
use crate::error::AnalyticsError;
use crate::estimator::{ResponseTimeEstimator, TimestampDeltaEstimator};
use crate::memory::InMemoryStore;
use crate::ports::{CompanyDirectory, InquiryFilter, InquiryStore, QnaScope, QnaStore};
use crate::urgent::newest_first;
use crate::{benchmark, company, industry, optimization, qna_accuracy, stats, urgent};

/// Everything the service reads from or asks for.
#[derive(Clone)]
pub struct Collaborators {
    pub companies: Arc<dyn CompanyDirectory>,
    pub inquiries: Arc<dyn InquiryStore>,
    pub qna: Arc<dyn QnaStore>,
    pub clock: Arc<dyn Clock>,
    pub estimator: Arc<dyn ResponseTimeEstimator>,
}

impl Collaborators {
    /// One store in every record role, the system clock, and the
    /// timestamp-delta estimator.
    #[must_use]
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            companies: store.clone(),
            inquiries: store.clone(),
            qna: store,
            clock: Arc::new(SystemClock),
            estimator: Arc::new(TimestampDeltaEstimator),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_estimator(mut self, estimator: Arc<dyn ResponseTimeEstimator>) -> Self {
        self.estimator = estimator;
        self
    }
}

pub struct InsightService {
    deps: Collaborators,
    config: DeskConfig,
}

impl InsightService {
    #[must_use]
    pub const fn new(deps: Collaborators, config: DeskConfig) -> Self {
        Self { deps, config }
    }

    #[must_use]
    pub const fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// Status, urgency and category totals over every inquiry.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] if the inquiry store fails.
    pub fn dashboard_stats(&self) -> Result<StatsSummary, AnalyticsError> {
        let inquiries = self.deps.inquiries.list_inquiries(&InquiryFilter::All)?;
        Ok(stats::aggregate(&inquiries))
    }

    /// Open high-urgency inquiries in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] if the inquiry store fails.
    pub fn urgent_alerts(&self) -> Result<UrgentAlertSet, AnalyticsError> {
        let inquiries = self.deps.inquiries.list_inquiries(&InquiryFilter::All)?;
        Ok(urgent::urgent_alerts(&inquiries, self.deps.clock.now()))
    }

    /// Newest inquiries first. `None` uses `general.recent_limit`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] if the inquiry store fails.
    pub fn recent_inquiries(&self, limit: Option<usize>) -> Result<Vec<TimedInquiry>, AnalyticsError> {
        let limit = limit.unwrap_or(self.config.general.recent_limit as usize);
        let inquiries = self.deps.inquiries.list_inquiries(&InquiryFilter::All)?;
        Ok(urgent::recent_inquiries(&inquiries, limit, self.deps.clock.now()))
    }

    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] if a collaborator fails.
    pub fn industry_analysis(&self) -> Result<Vec<IndustryInsight>, AnalyticsError> {
        let companies = self.deps.companies.all_companies()?;
        let inquiries = self.analysis_window()?;
        Ok(industry::analyze_industries(
            &companies,
            &inquiries,
            &self.config.playbook,
        ))
    }

    /// # Errors
    ///
    /// Returns [`AnalyticsError::CompanyNotFound`] for an unknown id, or
    /// [`AnalyticsError::Store`] if a collaborator fails.
    pub fn company_benchmark(&self, company_id: &str) -> Result<BenchmarkReport, AnalyticsError> {
        let company = self
            .deps
            .companies
            .company_by_id(company_id)?
            .ok_or_else(|| AnalyticsError::company_not_found(company_id))?;
        let mut peers = self.deps.companies.companies_by_industry(&company.industry)?;
        if !peers.iter().any(|peer| peer.company_id == company.company_id) {
            peers.push(company);
        }

        let inquiries = self.analysis_window()?;
        benchmark::benchmark(
            company_id,
            &peers,
            &inquiries,
            self.deps.estimator.as_ref(),
            &self.config.thresholds,
        )
    }

    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] if a collaborator fails.
    pub fn ai_optimization_suggestions(&self) -> Result<Vec<OptimizationSuggestion>, AnalyticsError> {
        let companies = self.deps.companies.all_companies()?;
        let inquiries = self.analysis_window()?;
        Ok(optimization::suggest_optimizations(
            &companies,
            &inquiries,
            &self.config.accuracy,
            &self.config.thresholds,
        ))
    }

    /// Category shares over all of one company's inquiries.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::CompanyNotFound`] for an unknown id, or
    /// [`AnalyticsError::Store`] if a collaborator fails.
    pub fn company_analysis(&self, company_id: &str) -> Result<CompanyAnalysis, AnalyticsError> {
        let company = self
            .deps
            .companies
            .company_by_id(company_id)?
            .ok_or_else(|| AnalyticsError::company_not_found(company_id))?;
        let inquiries = self
            .deps
            .inquiries
            .list_inquiries(&InquiryFilter::Company(company_id.to_string()))?;
        Ok(company::analyze_company(
            &company,
            &inquiries,
            &self.config.playbook,
        ))
    }

    /// Mean QnA confidence per category for one company's QnA entries.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] if the QnA store fails.
    pub fn qna_accuracy(&self, company_id: &str) -> Result<QnaAccuracyReport, AnalyticsError> {
        let entries = self
            .deps
            .qna
            .list_qna(&QnaScope::Company(company_id.to_string()))?;
        Ok(qna_accuracy::analyze_qna_accuracy(
            company_id,
            &entries,
            &self.config.thresholds,
        ))
    }

    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] if the company directory fails.
    pub fn directory_stats(&self) -> Result<DirectoryStats, AnalyticsError> {
        let companies = self.deps.companies.all_companies()?;
        Ok(company::directory_stats(&companies))
    }

    /// Setup is complete once any QnA entry exists.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Store`] if the QnA store fails.
    pub fn setup_status(&self) -> Result<SetupStatus, AnalyticsError> {
        let has_qna_data = !self.deps.qna.list_qna(&QnaScope::All)?.is_empty();
        let (next_step, message) = if has_qna_data {
            ("dashboard", "설정이 완료되었습니다. 대시보드로 이동하세요.")
        } else {
            ("qna-setup", "QnA 데이터를 설정해주세요.")
        };
        Ok(SetupStatus {
            setup_complete: has_qna_data,
            has_qna_data,
            next_step: next_step.to_string(),
            message: message.to_string(),
        })
    }

    /// Replace the QnA set with `seeds`, numbered `qna_1..qna_n` in order and
    /// stamped with the clock, then report the resulting setup status.
    ///
    /// Nothing is stored when any seed fails validation.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Core`] for a confidence outside `0.0..=1.0`,
    /// or [`AnalyticsError::Store`] if the QnA store fails.
    pub fn setup_qna(&self, seeds: Vec<QnaSeed>) -> Result<SetupStatus, AnalyticsError> {
        let now = self.deps.clock.now();
        let entries: Vec<QnaEntry> = seeds
            .into_iter()
            .enumerate()
            .map(|(index, seed)| seed.into_entry(index + 1, now))
            .collect();
        entries.iter().try_for_each(QnaEntry::validate)?;

        let stored = self.deps.qna.replace_qna(entries)?;
        tracing::info!(stored, "QnA setup applied");
        self.setup_status()
    }

    /// The `general.analysis_window` newest inquiries, newest first.
    fn analysis_window(&self) -> Result<Vec<Inquiry>, AnalyticsError> {
        let inquiries = self.deps.inquiries.list_inquiries(&InquiryFilter::All)?;
        let window = self.config.general.analysis_window as usize;
        if inquiries.len() > window {
            tracing::debug!(
                total = inquiries.len(),
                window,
                "restricting analysis to the newest inquiries"
            );
        }
        Ok(newest_first(&inquiries)
            .into_iter()
            .take(window)
            .cloned()
            .collect())
    }
}
