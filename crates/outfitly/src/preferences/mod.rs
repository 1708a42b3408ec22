//! Key-value preferences store with a live `watch` snapshot.
//!
//! Values are kept as strings under stable keys and decoded into
//! [`UserPreferences`] on every change. The backend is either process memory or
//! a JSON object on disk.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::domain::{parse_flag, DarkMode, Gender, ThermalProfile, UserPreferences};

/// Stable storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    Gender,
    LastCity,
    IsPremium,
    ThermalProfile,
    NotificationsEnabled,
    DarkMode,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 6] = [
        PreferenceKey::Gender,
        PreferenceKey::LastCity,
        PreferenceKey::IsPremium,
        PreferenceKey::ThermalProfile,
        PreferenceKey::NotificationsEnabled,
        PreferenceKey::DarkMode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::Gender => "gender",
            PreferenceKey::LastCity => "last_city",
            PreferenceKey::IsPremium => "is_premium",
            PreferenceKey::ThermalProfile => "thermal_profile",
            PreferenceKey::NotificationsEnabled => "notifications_enabled",
            PreferenceKey::DarkMode => "dark_mode",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceKey {
    type Err = PreferencesError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().replace('-', "_");
        PreferenceKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| PreferencesError::UnknownKey(value.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("unknown preference key '{0}'")]
    UnknownKey(String),
    #[error("invalid value '{value}' stored for preference '{key}'")]
    InvalidValue { key: PreferenceKey, value: String },
    #[error("preferences file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the key-value pairs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferencesBackend {
    Memory,
    JsonFile(PathBuf),
}

impl PreferencesBackend {
    fn read(&self) -> Result<BTreeMap<String, String>, PreferencesError> {
        match self {
            PreferencesBackend::Memory => Ok(BTreeMap::new()),
            PreferencesBackend::JsonFile(path) => match std::fs::read_to_string(path) {
                Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
                Ok(raw) => Ok(serde_json::from_str(&raw)?),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(err) => Err(err.into()),
            },
        }
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<(), PreferencesError> {
        match self {
            PreferencesBackend::Memory => Ok(()),
            PreferencesBackend::JsonFile(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, serde_json::to_string_pretty(values)?)?;
                Ok(())
            }
        }
    }
}

pub struct PreferencesStore {
    backend: PreferencesBackend,
    values: Mutex<BTreeMap<String, String>>,
    sender: watch::Sender<Option<UserPreferences>>,
}

impl PreferencesStore {
    pub fn in_memory() -> Self {
        let (sender, _) = watch::channel(Some(UserPreferences::default()));
        Self {
            backend: PreferencesBackend::Memory,
            values: Mutex::new(BTreeMap::new()),
            sender,
        }
    }

    pub fn json_file(path: impl AsRef<Path>) -> Result<Self, PreferencesError> {
        Self::open(PreferencesBackend::JsonFile(path.as_ref().to_path_buf()))
    }

    /// Loads persisted values and publishes the decoded snapshot.
    pub fn open(backend: PreferencesBackend) -> Result<Self, PreferencesError> {
        let values = backend.read()?;
        let preferences = decode(&values)?;
        info!(backend = ?backend, keys = values.len(), "preferences loaded");

        let (sender, _) = watch::channel(Some(preferences));
        Ok(Self {
            backend,
            values: Mutex::new(values),
            sender,
        })
    }

    /// Live view; the current value is available immediately.
    pub fn subscribe(&self) -> watch::Receiver<Option<UserPreferences>> {
        self.sender.subscribe()
    }

    pub fn snapshot(&self) -> UserPreferences {
        self.sender.borrow().clone().unwrap_or_default()
    }

    pub fn update_gender(&self, gender: Gender) -> Result<bool, PreferencesError> {
        self.write(PreferenceKey::Gender, gender.as_str().to_string())
    }

    pub fn update_last_city(&self, city: impl Into<String>) -> Result<bool, PreferencesError> {
        self.write(PreferenceKey::LastCity, city.into())
    }

    pub fn update_premium(&self, is_premium: bool) -> Result<bool, PreferencesError> {
        self.write(PreferenceKey::IsPremium, is_premium.to_string())
    }

    pub fn update_thermal_profile(&self, profile: ThermalProfile) -> Result<bool, PreferencesError> {
        self.write(PreferenceKey::ThermalProfile, profile.as_str().to_string())
    }

    pub fn update_notifications(&self, enabled: bool) -> Result<bool, PreferencesError> {
        self.write(PreferenceKey::NotificationsEnabled, enabled.to_string())
    }

    pub fn update_dark_mode(&self, mode: DarkMode) -> Result<bool, PreferencesError> {
        self.write(PreferenceKey::DarkMode, mode.as_str().to_string())
    }

    /// Parses `raw` for `key` and stores its canonical form.
    pub fn set_raw(&self, key: PreferenceKey, raw: &str) -> Result<bool, PreferencesError> {
        let invalid = || PreferencesError::InvalidValue {
            key,
            value: raw.to_string(),
        };
        match key {
            PreferenceKey::Gender => self.update_gender(raw.parse().map_err(|_| invalid())?),
            PreferenceKey::LastCity => {
                let city = raw.trim();
                if city.is_empty() {
                    return Err(invalid());
                }
                self.update_last_city(city)
            }
            PreferenceKey::IsPremium => self.update_premium(parse_flag(raw).ok_or_else(invalid)?),
            PreferenceKey::ThermalProfile => {
                self.update_thermal_profile(raw.parse().map_err(|_| invalid())?)
            }
            PreferenceKey::NotificationsEnabled => {
                self.update_notifications(parse_flag(raw).ok_or_else(invalid)?)
            }
            PreferenceKey::DarkMode => self.update_dark_mode(raw.parse().map_err(|_| invalid())?),
        }
    }

    /// Returns whether the published snapshot changed. Unchanged values are not persisted.
    fn write(&self, key: PreferenceKey, value: String) -> Result<bool, PreferencesError> {
        let mut guard = self.values.lock().expect("preferences mutex poisoned");
        if guard.get(key.as_str()) == Some(&value) {
            return Ok(false);
        }

        let mut next = guard.clone();
        next.insert(key.as_str().to_string(), value);
        let preferences = decode(&next)?;
        self.backend.write(&next)?;
        *guard = next;

        debug!(key = key.as_str(), "preference updated");
        Ok(self.sender.send_if_modified(|current| {
            if current.as_ref() == Some(&preferences) {
                false
            } else {
                *current = Some(preferences);
                true
            }
        }))
    }
}

impl fmt::Debug for PreferencesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferencesStore")
            .field("backend", &self.backend)
            .field("current", &*self.sender.borrow())
            .finish()
    }
}

fn decode(values: &BTreeMap<String, String>) -> Result<UserPreferences, PreferencesError> {
    let defaults = UserPreferences::default();

    Ok(UserPreferences {
        gender: field(values, PreferenceKey::Gender, |raw| raw.parse().ok())?
            .unwrap_or(defaults.gender),
        last_city: values
            .get(PreferenceKey::LastCity.as_str())
            .filter(|city| !city.trim().is_empty())
            .cloned(),
        is_premium: field(values, PreferenceKey::IsPremium, parse_flag)?
            .unwrap_or(defaults.is_premium),
        thermal_profile: field(values, PreferenceKey::ThermalProfile, |raw| raw.parse().ok())?
            .unwrap_or(defaults.thermal_profile),
        notifications_enabled: field(values, PreferenceKey::NotificationsEnabled, parse_flag)?
            .unwrap_or(defaults.notifications_enabled),
        dark_mode: field(values, PreferenceKey::DarkMode, |raw| raw.parse().ok())?
            .unwrap_or(defaults.dark_mode),
    })
}

fn field<T>(
    values: &BTreeMap<String, String>,
    key: PreferenceKey,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, PreferencesError> {
    match values.get(key.as_str()) {
        None => Ok(None),
        Some(raw) => parse(raw).map(Some).ok_or_else(|| PreferencesError::InvalidValue {
            key,
            value: raw.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_with_dashes_or_underscores() {
        assert_eq!(
            "thermal-profile".parse::<PreferenceKey>().expect("key"),
            PreferenceKey::ThermalProfile
        );
        assert_eq!(
            "DARK_MODE".parse::<PreferenceKey>().expect("key"),
            PreferenceKey::DarkMode
        );
        assert!(matches!(
            "shoe_size".parse::<PreferenceKey>(),
            Err(PreferencesError::UnknownKey(_))
        ));
    }

    #[test]
    fn decode_reports_bad_enum_strings() {
        let mut values = BTreeMap::new();
        values.insert("thermal_profile".to_string(), "LIZARD".to_string());

        match decode(&values) {
            Err(PreferencesError::InvalidValue { key, value }) => {
                assert_eq!(key, PreferenceKey::ThermalProfile);
                assert_eq!(value, "LIZARD");
            }
            other => panic!("unexpected decode result: {other:?}"),
        }
    }

    #[test]
    fn empty_map_decodes_to_defaults() {
        assert_eq!(decode(&BTreeMap::new()).expect("decode"), UserPreferences::default());
    }
}
