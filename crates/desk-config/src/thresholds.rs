//! Cutoffs used when turning scores into tiers and labels.

use serde::{Deserialize, Serialize};

const fn default_human_intervention_below() -> u32 {
    70
}

const fn default_priority_high_below() -> u32 {
    70
}

const fn default_priority_medium_below() -> u32 {
    90
}

const fn default_no_training_above() -> u32 {
    90
}

const fn default_efficiency_upper_rate() -> f64 {
    0.8
}

const fn default_confidence() -> f64 {
    0.5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThresholdConfig {
    /// Mean QnA accuracy (percent) strictly below which a category needs a human.
    #[serde(default = "default_human_intervention_below")]
    pub human_intervention_below: u32,

    /// Accuracy strictly below this is `high` priority.
    #[serde(default = "default_priority_high_below")]
    pub priority_high_below: u32,

    /// Accuracy strictly below this (and not high) is `medium` priority.
    #[serde(default = "default_priority_medium_below")]
    pub priority_medium_below: u32,

    /// Accuracy strictly above this needs no further training.
    #[serde(default = "default_no_training_above")]
    pub no_training_above: u32,

    /// Resolution rate strictly above this places a company in the upper
    /// CS-efficiency tier.
    #[serde(default = "default_efficiency_upper_rate")]
    pub efficiency_upper_rate: f64,

    /// Confidence assumed for QnA entries that carry none.
    #[serde(default = "default_confidence")]
    pub default_confidence: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            human_intervention_below: default_human_intervention_below(),
            priority_high_below: default_priority_high_below(),
            priority_medium_below: default_priority_medium_below(),
            no_training_above: default_no_training_above(),
            efficiency_upper_rate: default_efficiency_upper_rate(),
            default_confidence: default_confidence(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_console_behavior() {
        let config = ThresholdConfig::default();
        assert_eq!(config.human_intervention_below, 70);
        assert_eq!(config.priority_high_below, 70);
        assert_eq!(config.priority_medium_below, 90);
        assert_eq!(config.no_training_above, 90);
        assert!((config.efficiency_upper_rate - 0.8).abs() < f64::EPSILON);
        assert!((config.default_confidence - 0.5).abs() < f64::EPSILON);
    }
}
