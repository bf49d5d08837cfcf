//! Simulated AI accuracy per (industry, category).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn default_table() -> BTreeMap<String, BTreeMap<String, u32>> {
    let row = |technical: u32, billing: u32, general: u32| {
        BTreeMap::from([
            ("technical".to_string(), technical),
            ("billing".to_string(), billing),
            ("general".to_string(), general),
        ])
    };

    BTreeMap::from([
        ("이커머스".to_string(), row(95, 85, 90)),
        ("SaaS".to_string(), row(70, 95, 85)),
        ("금융".to_string(), row(40, 60, 75)),
    ])
}

const fn default_accuracy() -> u32 {
    80
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccuracyConfig {
    /// Industry → category → accuracy percent.
    #[serde(default = "default_table")]
    pub table: BTreeMap<String, BTreeMap<String, u32>>,

    /// Accuracy for pairs missing from the table.
    #[serde(default = "default_accuracy")]
    pub default_accuracy: u32,
}

impl AccuracyConfig {
    #[must_use]
    pub fn lookup(&self, industry: &str, category: &str) -> u32 {
        self.table
            .get(industry)
            .and_then(|categories| categories.get(category))
            .copied()
            .unwrap_or(self.default_accuracy)
    }
}

impl Default for AccuracyConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            default_accuracy: default_accuracy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pairs_resolve() {
        let config = AccuracyConfig::default();
        assert_eq!(config.lookup("이커머스", "technical"), 95);
        assert_eq!(config.lookup("SaaS", "billing"), 95);
        assert_eq!(config.lookup("금융", "technical"), 40);
    }

    #[test]
    fn unknown_pairs_fall_back_to_default() {
        let config = AccuracyConfig::default();
        assert_eq!(config.lookup("금융", "배송"), 80);
        assert_eq!(config.lookup("헬스케어", "technical"), 80);
    }
}
