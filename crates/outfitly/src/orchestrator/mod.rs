//! Recommendation entry point and its reactive combine-latest loop.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::catalog::{CatalogError, CatalogQuery, OutfitCatalog};
use crate::domain::{Conditions, Gender, RiskAlert, ThermalProfile, UserPreferences, Weather};
use crate::engine::{OutfitRecommendation, OutfitRecommender, RiskAlertAnalyzer};
use crate::weather::Resource;

/// One emission of the reactive loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationUpdate {
    pub recommendation: OutfitRecommendation,
    pub alerts: Vec<RiskAlert>,
    pub gender: Gender,
    pub thermal_profile: ThermalProfile,
}

#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error("could not load outfit candidates: {0}")]
    Catalog(#[from] CatalogError),
}

pub struct RecommendationOrchestrator<C: ?Sized> {
    catalog: Arc<C>,
    recommender: OutfitRecommender,
    analyzer: RiskAlertAnalyzer,
}

impl<C> RecommendationOrchestrator<C>
where
    C: OutfitCatalog + ?Sized,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            recommender: OutfitRecommender::default(),
            analyzer: RiskAlertAnalyzer::new(),
        }
    }

    pub fn with_recommender(mut self, recommender: OutfitRecommender) -> Self {
        self.recommender = recommender;
        self
    }

    /// Filters the catalog for the weather and gender, then ranks the candidates.
    pub fn get_recommendation(
        &self,
        weather: &Weather,
        gender: Gender,
        profile: ThermalProfile,
    ) -> Result<OutfitRecommendation, OrchestratorError> {
        let query = CatalogQuery::for_weather(weather, gender);
        let candidates = self.catalog.outfits_for_weather(&query)?;
        debug!(
            candidates = candidates.len(),
            temperature = query.temperature,
            raining = query.is_raining,
            windy = query.is_windy,
            "scoring outfit candidates"
        );
        Ok(self.recommender.recommend(&candidates, weather, profile))
    }

    /// Recommendation plus risk alerts for one (conditions, preferences) pair.
    pub fn recommend(
        &self,
        conditions: &Conditions,
        preferences: &UserPreferences,
    ) -> Result<RecommendationUpdate, OrchestratorError> {
        let recommendation = self.get_recommendation(
            &conditions.weather,
            preferences.gender,
            preferences.thermal_profile,
        )?;
        let alerts = self
            .analyzer
            .analyze(&conditions.weather, conditions.forecast.as_ref());

        Ok(RecommendationUpdate {
            recommendation,
            alerts,
            gender: preferences.gender,
            thermal_profile: preferences.thermal_profile,
        })
    }

    /// Recomputes whenever either input publishes a new value, once both have
    /// been seen. A failed computation is emitted as [`Resource::Error`] and the
    /// loop keeps waiting for the next input. Returns when both inputs are closed
    /// or `updates` is dropped.
    pub async fn run(
        &self,
        mut conditions: watch::Receiver<Option<Conditions>>,
        mut preferences: watch::Receiver<Option<UserPreferences>>,
        updates: mpsc::Sender<Resource<RecommendationUpdate>>,
    ) {
        let mut latest_conditions = conditions.borrow_and_update().clone();
        let mut latest_preferences = preferences.borrow_and_update().clone();
        let mut conditions_open = true;
        let mut preferences_open = true;
        let mut pending = true;

        loop {
            if pending {
                pending = false;
                if let (Some(current), Some(prefs)) = (&latest_conditions, &latest_preferences) {
                    let emitted = match self.recommend(current, prefs) {
                        Ok(update) => Resource::Success(update),
                        Err(err) => {
                            warn!(error = %err, "recommendation failed; waiting for the next input");
                            Resource::Error(err.to_string())
                        }
                    };
                    if updates.send(emitted).await.is_err() {
                        info!("recommendation receiver dropped; stopping");
                        return;
                    }
                }
            }

            if !conditions_open && !preferences_open {
                info!("recommendation inputs closed; stopping");
                return;
            }

            tokio::select! {
                changed = conditions.changed(), if conditions_open => match changed {
                    Ok(()) => {
                        latest_conditions = conditions.borrow_and_update().clone();
                        pending = true;
                    }
                    Err(_) => conditions_open = false,
                },
                changed = preferences.changed(), if preferences_open => match changed {
                    Ok(()) => {
                        latest_preferences = preferences.borrow_and_update().clone();
                        pending = true;
                    }
                    Err(_) => preferences_open = false,
                },
                _ = updates.closed() => {
                    info!("recommendation receiver dropped; stopping");
                    return;
                }
            }
        }
    }
}
