//! Outfit catalog port, the in-memory adapter and the built-in seed data.

mod importer;
mod parser;
mod seed;

use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::domain::{Gender, Outfit, OutfitDraft, OutfitId, Weather};
use crate::engine::thresholds::is_windy;

pub use importer::{CatalogImportError, CatalogImporter};
pub use seed::builtin_outfits;

/// Filter applied when the orchestrator asks for candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogQuery {
    pub gender: Gender,
    /// Whole degrees, truncated toward zero.
    pub temperature: i32,
    pub is_raining: bool,
    pub is_windy: bool,
}

impl CatalogQuery {
    pub fn for_weather(weather: &Weather, gender: Gender) -> Self {
        Self {
            gender,
            temperature: weather.whole_degrees(),
            is_raining: weather.is_raining,
            is_windy: is_windy(weather.wind_speed),
        }
    }

    pub fn matches(&self, outfit: &Outfit) -> bool {
        outfit.suits_gender(self.gender)
            && outfit.covers_temperature(self.temperature)
            && (!self.is_raining || outfit.rain_compatible)
            && (!self.is_windy || outfit.wind_compatible)
    }
}

/// Storage abstraction for outfits so the orchestrator can run against any backend.
pub trait OutfitCatalog: Send + Sync {
    fn outfits_for_weather(&self, query: &CatalogQuery) -> Result<Vec<Outfit>, CatalogError>;
    fn all_outfits(&self) -> Result<Vec<Outfit>, CatalogError>;
    /// Stores the drafts and returns them with their assigned ids.
    fn insert_outfits(&self, drafts: Vec<OutfitDraft>) -> Result<Vec<Outfit>, CatalogError>;
    fn count(&self) -> Result<usize, CatalogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Inserts `drafts` only when the catalog is empty. Returns how many were stored.
pub fn seed_if_empty<C>(catalog: &C, drafts: Vec<OutfitDraft>) -> Result<usize, CatalogError>
where
    C: OutfitCatalog + ?Sized,
{
    if catalog.count()? > 0 {
        debug!("catalog already populated; skipping seed");
        return Ok(0);
    }

    let stored = catalog.insert_outfits(drafts)?.len();
    info!(outfits = stored, "seeded outfit catalog");
    Ok(stored)
}

#[derive(Debug, Default)]
struct CatalogState {
    outfits: Vec<Outfit>,
    next_id: u32,
}

/// Catalog kept in memory; ids are assigned sequentially from 1 and listing keeps insertion order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryOutfitCatalog {
    state: Arc<Mutex<CatalogState>>,
}

impl InMemoryOutfitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-populated with the built-in outfits.
    pub fn seeded() -> Self {
        let catalog = Self::new();
        catalog.store(builtin_outfits());
        catalog
    }

    fn store(&self, drafts: Vec<OutfitDraft>) -> Vec<Outfit> {
        let mut guard = self.state.lock().expect("catalog mutex poisoned");
        let mut stored = Vec::with_capacity(drafts.len());
        for draft in drafts {
            guard.next_id += 1;
            let outfit = draft.into_outfit(OutfitId(guard.next_id));
            guard.outfits.push(outfit.clone());
            stored.push(outfit);
        }
        stored
    }
}

impl OutfitCatalog for InMemoryOutfitCatalog {
    fn outfits_for_weather(&self, query: &CatalogQuery) -> Result<Vec<Outfit>, CatalogError> {
        let guard = self.state.lock().expect("catalog mutex poisoned");
        Ok(guard
            .outfits
            .iter()
            .filter(|outfit| query.matches(outfit))
            .cloned()
            .collect())
    }

    fn all_outfits(&self) -> Result<Vec<Outfit>, CatalogError> {
        let guard = self.state.lock().expect("catalog mutex poisoned");
        Ok(guard.outfits.clone())
    }

    fn insert_outfits(&self, drafts: Vec<OutfitDraft>) -> Result<Vec<Outfit>, CatalogError> {
        Ok(self.store(drafts))
    }

    fn count(&self) -> Result<usize, CatalogError> {
        let guard = self.state.lock().expect("catalog mutex poisoned");
        Ok(guard.outfits.len())
    }
}
