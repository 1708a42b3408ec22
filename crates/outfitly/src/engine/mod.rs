//! Pure decision logic: outfit scoring, recommendation tips and risk alerts.

mod config;
mod recommender;
mod risk;
mod rules;
pub mod thresholds;
mod tips;

#[cfg(test)]
mod tests;

pub use config::ScoringConfig;
pub use recommender::{OutfitRecommendation, OutfitRecommender, ScoredOutfit};
pub use risk::RiskAlertAnalyzer;
pub use tips::{recommendation_tips, FeelsLikeGap, TemperatureBand, WindBand};

use serde::{Deserialize, Serialize};

use crate::domain::{Outfit, Weather};

/// Stateless scorer rating how well an outfit suits the (effective) weather.
#[derive(Debug, Clone, Default)]
pub struct OutfitScorer {
    config: ScoringConfig,
}

impl OutfitScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score `outfit` against weather that already carries the thermal offset.
    pub fn score(&self, outfit: &Outfit, effective: &Weather) -> i32 {
        self.score_card(outfit, effective).total
    }

    pub fn score_card(&self, outfit: &Outfit, effective: &Weather) -> ScoreCard {
        let (components, total) = rules::score_outfit(outfit, effective, &self.config);
        ScoreCard { total, components }
    }
}

/// Rule that contributed points to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Base,
    BelowRange,
    AboveRange,
    RainExposure,
    RainReady,
    WindExposure,
    WindReady,
    FeelsColderBuffer,
}

/// Discrete contribution to a score, kept for audits and debugging output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: i32,
}

/// Score plus the rules that produced it. Totals are not clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub total: i32,
    pub components: Vec<ScoreComponent>,
}
