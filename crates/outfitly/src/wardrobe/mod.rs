//! Wardrobe store port and its in-memory adapter.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{ClothingCategory, Season, WardrobeItem, WardrobeItemDraft, WardrobeItemId};

/// Storage abstraction for the user's garments. Every listing is newest first.
pub trait WardrobeRepository: Send + Sync {
    fn all_items(&self) -> Result<Vec<WardrobeItem>, WardrobeError>;
    fn items_by_category(
        &self,
        category: ClothingCategory,
    ) -> Result<Vec<WardrobeItem>, WardrobeError>;
    /// Items for `season` plus year-round items.
    fn items_by_season(&self, season: Season) -> Result<Vec<WardrobeItem>, WardrobeError>;
    /// Season filter plus the optional temperature band of each item.
    fn items_for_weather(
        &self,
        season: Season,
        temperature: i32,
    ) -> Result<Vec<WardrobeItem>, WardrobeError>;
    fn add(&self, draft: WardrobeItemDraft) -> Result<WardrobeItemId, WardrobeError>;
    fn update(&self, item: WardrobeItem) -> Result<(), WardrobeError>;
    fn delete(&self, id: WardrobeItemId) -> Result<(), WardrobeError>;
    fn count(&self) -> Result<usize, WardrobeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WardrobeError {
    #[error("wardrobe item {0:?} not found")]
    NotFound(WardrobeItemId),
    #[error("wardrobe unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
struct WardrobeState {
    items: Vec<WardrobeItem>,
    next_id: u32,
}

type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

#[derive(Clone)]
pub struct InMemoryWardrobeRepository {
    state: Arc<Mutex<WardrobeState>>,
    clock: Clock,
}

impl Default for InMemoryWardrobeRepository {
    fn default() -> Self {
        Self::with_clock(Utc::now)
    }
}

impl InMemoryWardrobeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository stamping new items with `clock` instead of the wall clock.
    pub fn with_clock<F>(clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self {
            state: Arc::new(Mutex::new(WardrobeState::default())),
            clock: Arc::new(clock),
        }
    }

    fn select<P>(&self, predicate: P) -> Vec<WardrobeItem>
    where
        P: Fn(&WardrobeItem) -> bool,
    {
        let guard = self.state.lock().expect("wardrobe mutex poisoned");
        let mut items: Vec<WardrobeItem> = guard
            .items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        items
    }
}

impl std::fmt::Debug for InMemoryWardrobeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryWardrobeRepository")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl WardrobeRepository for InMemoryWardrobeRepository {
    fn all_items(&self) -> Result<Vec<WardrobeItem>, WardrobeError> {
        Ok(self.select(|_| true))
    }

    fn items_by_category(
        &self,
        category: ClothingCategory,
    ) -> Result<Vec<WardrobeItem>, WardrobeError> {
        Ok(self.select(|item| item.category == category))
    }

    fn items_by_season(&self, season: Season) -> Result<Vec<WardrobeItem>, WardrobeError> {
        Ok(self.select(|item| item.season.matches(season)))
    }

    fn items_for_weather(
        &self,
        season: Season,
        temperature: i32,
    ) -> Result<Vec<WardrobeItem>, WardrobeError> {
        Ok(self.select(|item| item.season.matches(season) && item.covers_temperature(temperature)))
    }

    fn add(&self, draft: WardrobeItemDraft) -> Result<WardrobeItemId, WardrobeError> {
        let created_at = (self.clock)();
        let mut guard = self.state.lock().expect("wardrobe mutex poisoned");
        guard.next_id += 1;
        let id = WardrobeItemId(guard.next_id);
        guard.items.push(WardrobeItem {
            id,
            name: draft.name,
            category: draft.category,
            season: draft.season,
            color: draft.color,
            image_ref: draft.image_ref,
            min_temp: draft.min_temp,
            max_temp: draft.max_temp,
            created_at,
        });
        debug!(item_id = id.0, "wardrobe item added");
        Ok(id)
    }

    fn update(&self, item: WardrobeItem) -> Result<(), WardrobeError> {
        let mut guard = self.state.lock().expect("wardrobe mutex poisoned");
        match guard.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                *existing = item;
                Ok(())
            }
            None => Err(WardrobeError::NotFound(item.id)),
        }
    }

    fn delete(&self, id: WardrobeItemId) -> Result<(), WardrobeError> {
        let mut guard = self.state.lock().expect("wardrobe mutex poisoned");
        let before = guard.items.len();
        guard.items.retain(|item| item.id != id);
        if guard.items.len() == before {
            return Err(WardrobeError::NotFound(id));
        }
        debug!(item_id = id.0, "wardrobe item deleted");
        Ok(())
    }

    fn count(&self) -> Result<usize, WardrobeError> {
        let guard = self.state.lock().expect("wardrobe mutex poisoned");
        Ok(guard.items.len())
    }
}
