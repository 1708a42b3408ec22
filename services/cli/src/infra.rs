use std::path::Path;
use std::sync::Arc;

use outfitly::catalog::{
    builtin_outfits, seed_if_empty, CatalogImporter, InMemoryOutfitCatalog, OutfitCatalog,
};
use outfitly::config::{AppConfig, StorageConfig};
use outfitly::domain::{Gender, ThermalProfile, UserPreferences};
use outfitly::error::AppError;
use outfitly::preferences::PreferencesStore;
use outfitly::telemetry;
use outfitly::weather::{Location, OpenWeatherClient};
use tokio::sync::watch;
use tracing::{debug, info};

/// Loads configuration and installs the tracing subscriber.
pub(crate) fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "outfitly starting");
    Ok(config)
}

/// Catalog seeded from `csv_override`, the configured CSV, or the built-in set.
pub(crate) fn catalog(
    storage: &StorageConfig,
    csv_override: Option<&Path>,
) -> Result<Arc<InMemoryOutfitCatalog>, AppError> {
    let drafts = match csv_override.or(storage.catalog_csv.as_deref()) {
        Some(path) => CatalogImporter::from_path(path)?,
        None => builtin_outfits(),
    };

    let catalog = Arc::new(InMemoryOutfitCatalog::new());
    let inserted = seed_if_empty(catalog.as_ref(), drafts)?;
    info!(inserted, total = catalog.count()?, "outfit catalog ready");
    Ok(catalog)
}

pub(crate) fn preferences(storage: &StorageConfig) -> Result<PreferencesStore, AppError> {
    let store = match &storage.preferences_path {
        Some(path) => PreferencesStore::json_file(path)?,
        None => PreferencesStore::in_memory(),
    };
    Ok(store)
}

pub(crate) fn weather_client(config: &AppConfig) -> Result<Arc<OpenWeatherClient>, AppError> {
    Ok(Arc::new(OpenWeatherClient::new(config.weather.clone())?))
}

/// Coordinates win over a city name; the stored last city is the fallback.
pub(crate) fn resolve_location(
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    store: &PreferencesStore,
) -> Result<Location, AppError> {
    if let (Some(lat), Some(lon)) = (lat, lon) {
        return Ok(Location::Coordinates { lat, lon });
    }

    city.map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .or_else(|| store.snapshot().last_city)
        .map(Location::City)
        .ok_or(AppError::MissingLocation)
}

/// Per-invocation flags layered over the stored preferences; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Overrides {
    pub(crate) gender: Option<Gender>,
    pub(crate) thermal_profile: Option<ThermalProfile>,
}

impl Overrides {
    pub(crate) fn apply(&self, mut preferences: UserPreferences) -> UserPreferences {
        preferences.gender = self.gender.unwrap_or(preferences.gender);
        preferences.thermal_profile = self.thermal_profile.unwrap_or(preferences.thermal_profile);
        preferences
    }
}

/// Mirrors `stored` with `overrides` applied. The returned channel closes once
/// `stored` does.
pub(crate) fn with_overrides(
    mut stored: watch::Receiver<Option<UserPreferences>>,
    overrides: Overrides,
) -> watch::Receiver<Option<UserPreferences>> {
    let initial = stored.borrow_and_update().clone().map(|p| overrides.apply(p));
    let (sender, receiver) = watch::channel(initial);
    tokio::spawn(async move {
        while stored.changed().await.is_ok() {
            let next = stored.borrow_and_update().clone().map(|p| overrides.apply(p));
            if sender.send(next).is_err() {
                break;
            }
        }
        debug!("preference override forwarding stopped");
    });
    receiver
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_take_precedence_over_city() {
        let store = PreferencesStore::in_memory();

        let location =
            resolve_location(Some("Oslo".to_string()), Some(59.91), Some(10.75), &store)
                .expect("location");

        assert_eq!(
            location,
            Location::Coordinates {
                lat: 59.91,
                lon: 10.75
            }
        );
    }

    #[test]
    fn falls_back_to_last_city() {
        let store = PreferencesStore::in_memory();
        assert!(matches!(
            resolve_location(Some("  ".to_string()), Some(1.0), None, &store),
            Err(AppError::MissingLocation)
        ));

        store.update_last_city("Tallinn").expect("store city");
        let location = resolve_location(None, None, None, &store).expect("location");

        assert_eq!(location, Location::City("Tallinn".to_string()));
    }

    #[test]
    fn overrides_replace_only_the_given_fields() {
        let stored = UserPreferences {
            gender: Gender::Female,
            thermal_profile: ThermalProfile::Pigeon,
            last_city: Some("Riga".to_string()),
            ..UserPreferences::default()
        };

        let applied = Overrides {
            gender: Some(Gender::Male),
            thermal_profile: None,
        }
        .apply(stored.clone());

        assert_eq!(applied.gender, Gender::Male);
        assert_eq!(applied.thermal_profile, ThermalProfile::Pigeon);
        assert_eq!(applied.last_city, stored.last_city);
        assert_eq!(Overrides::default().apply(stored.clone()), stored);
    }

    #[tokio::test]
    async fn overridden_view_tracks_the_store_without_writing_to_it() {
        let store = PreferencesStore::in_memory();
        let overrides = Overrides {
            gender: None,
            thermal_profile: Some(ThermalProfile::WarmBlooded),
        };
        let mut view = with_overrides(store.subscribe(), overrides);

        assert_eq!(
            view.borrow_and_update().as_ref().map(|p| p.thermal_profile),
            Some(ThermalProfile::WarmBlooded)
        );
        assert_eq!(store.snapshot().thermal_profile, ThermalProfile::Normal);

        store.update_gender(Gender::Female).expect("write");
        view.changed().await.expect("forwarded");
        let current = view.borrow_and_update().clone().expect("preferences");
        assert_eq!(current.gender, Gender::Female);
        assert_eq!(current.thermal_profile, ThermalProfile::WarmBlooded);

        drop(store);
        assert!(view.changed().await.is_err(), "view closes with the store");
    }

    #[test]
    fn builtin_catalog_when_no_csv_configured() {
        let catalog = catalog(&StorageConfig::default(), None).expect("catalog");
        assert_eq!(catalog.count().expect("count"), builtin_outfits().len());
    }
}
