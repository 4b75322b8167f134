// shared vocabulary: weight tiers and per-model status
use serde::{Deserialize, Serialize};

/// Risk-tier assigned to a benchmark category in the association table.
///
/// The tier value is the total mapping weight a category distributes across
/// its matched indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightTier {
    High,
    Medium,
    Low,
}

impl WeightTier {
    //tier values are fixed: high 1.0, medium 0.6, low 0.3
    pub fn value(self) -> f64 {
        match self {
            WeightTier::High => 1.0,
            WeightTier::Medium => 0.6,
            WeightTier::Low => 0.3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeightTier::High => "high",
            WeightTier::Medium => "medium",
            WeightTier::Low => "low",
        }
    }
}

/// Pass/fail verdict for one (model, category) cell of the status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    Pass,
    Fail,
}

impl ModelStatus {
    pub fn is_fail(self) -> bool {
        matches!(self, ModelStatus::Fail)
    }
}
