//! Central schema registry for desk record and view types.
//!
//! The `SchemaRegistry` builds JSON Schemas from desk-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas for desk records and derived views.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty))
                .map_err(|e| SchemaError::Generation(format!("{}: {e}", $name)))?,
        );
    };
}

impl SchemaRegistry {
    /// Build a registry containing every record, snapshot, and view schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Generation`] if a generated schema cannot be
    /// converted to JSON.
    pub fn new() -> Result<Self, SchemaError> {
        let mut schemas = HashMap::new();

        // --- Records (5) ---
        register!(schemas, "company", desk_core::entities::Company);
        register!(schemas, "inquiry", desk_core::entities::Inquiry);
        register!(schemas, "qna_entry", desk_core::entities::QnaEntry);
        register!(schemas, "qna_seed", desk_core::entities::QnaSeed);
        register!(schemas, "snapshot", desk_core::snapshot::Snapshot);

        // --- Derived views (10) ---
        register!(
            schemas,
            "stats_summary",
            desk_core::responses::StatsSummary
        );
        register!(
            schemas,
            "urgent_alert_set",
            desk_core::responses::UrgentAlertSet
        );
        register!(
            schemas,
            "timed_inquiry",
            desk_core::responses::TimedInquiry
        );
        register!(
            schemas,
            "industry_insight",
            desk_core::responses::IndustryInsight
        );
        register!(
            schemas,
            "benchmark_report",
            desk_core::responses::BenchmarkReport
        );
        register!(
            schemas,
            "optimization_suggestion",
            desk_core::responses::OptimizationSuggestion
        );
        register!(
            schemas,
            "qna_accuracy_report",
            desk_core::responses::QnaAccuracyReport
        );
        register!(
            schemas,
            "company_analysis",
            desk_core::responses::CompanyAnalysis
        );
        register!(
            schemas,
            "directory_stats",
            desk_core::responses::DirectoryStats
        );
        register!(schemas, "setup_status", desk_core::responses::SetupStatus);

        Ok(Self { schemas })
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema: name.to_string(),
                errors,
            })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}
