use serde::{Deserialize, Serialize};

use super::tips::recommendation_tips;
use super::OutfitScorer;
use crate::domain::{Outfit, ThermalProfile, Weather};

/// Maximum number of alternatives offered next to the best outfit.
pub const MAX_ALTERNATIVES: usize = 3;

/// Best outfit, runners-up and tips for one weather snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    /// `None` only when there were no candidates.
    pub best: Option<Outfit>,
    pub alternatives: Vec<Outfit>,
    pub tips: Vec<String>,
}

/// Candidate paired with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOutfit {
    pub outfit: Outfit,
    pub score: i32,
}

/// Picks the best candidate for the effective weather and explains the day.
#[derive(Debug, Clone, Default)]
pub struct OutfitRecommender {
    scorer: OutfitScorer,
}

impl OutfitRecommender {
    pub fn new(scorer: OutfitScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &OutfitScorer {
        &self.scorer
    }

    /// Candidates sorted by descending score; ties keep input order.
    pub fn rank(
        &self,
        candidates: &[Outfit],
        weather: &Weather,
        profile: ThermalProfile,
    ) -> Vec<ScoredOutfit> {
        let effective = weather.with_offset(profile.offset());
        let mut ranked: Vec<ScoredOutfit> = candidates
            .iter()
            .map(|outfit| ScoredOutfit {
                score: self.scorer.score(outfit, &effective),
                outfit: outfit.clone(),
            })
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    pub fn recommend(
        &self,
        candidates: &[Outfit],
        weather: &Weather,
        profile: ThermalProfile,
    ) -> OutfitRecommendation {
        let tips = recommendation_tips(weather, profile);

        let best = self
            .rank(candidates, weather, profile)
            .into_iter()
            .next()
            .map(|scored| scored.outfit);

        let alternatives = match &best {
            Some(best) => candidates
                .iter()
                .filter(|outfit| *outfit != best)
                .take(MAX_ALTERNATIVES)
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        OutfitRecommendation {
            best,
            alternatives,
            tips,
        }
    }
}
