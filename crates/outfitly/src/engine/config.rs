use serde::{Deserialize, Serialize};

/// Weights applied by the outfit scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_score: i32,
    /// Points lost per degree outside the outfit's band.
    pub out_of_range_penalty_per_degree: i32,
    pub rain_exposure_penalty: i32,
    pub rain_ready_bonus: i32,
    pub wind_exposure_penalty: i32,
    pub wind_ready_bonus: i32,
    pub feels_colder_buffer_bonus: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 100,
            out_of_range_penalty_per_degree: 5,
            rain_exposure_penalty: 30,
            rain_ready_bonus: 20,
            wind_exposure_penalty: 20,
            wind_ready_bonus: 15,
            feels_colder_buffer_bonus: 10,
        }
    }
}
