use serde::{Deserialize, Serialize};

/// Hazard a [`RiskAlert`] warns about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskType {
    TemperatureDrop,
    HighWind,
    RainChance,
    ExtremeCold,
    ExtremeHeat,
}

/// Ordered alert severity. `Low` is reserved and not emitted by the current rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
}

impl RiskSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            RiskSeverity::Low => "low",
            RiskSeverity::Medium => "medium",
            RiskSeverity::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAlert {
    pub kind: RiskType,
    pub severity: RiskSeverity,
    pub message: String,
    pub recommendation: String,
}
