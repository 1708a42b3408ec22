use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Gender, ThermalProfile, UnknownVariant};

/// Colour scheme selection, persisted as `light`, `dark` or `system`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    Light,
    Dark,
    #[default]
    System,
}

impl DarkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DarkMode::Light => "light",
            DarkMode::Dark => "dark",
            DarkMode::System => "system",
        }
    }
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DarkMode {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(DarkMode::Light),
            "dark" => Ok(DarkMode::Dark),
            "system" => Ok(DarkMode::System),
            _ => Err(UnknownVariant {
                kind: "dark mode",
                value: value.to_string(),
            }),
        }
    }
}

/// User settings snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub gender: Gender,
    pub last_city: Option<String>,
    pub is_premium: bool,
    pub thermal_profile: ThermalProfile,
    pub notifications_enabled: bool,
    pub dark_mode: DarkMode,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            gender: Gender::Unisex,
            last_city: None,
            is_premium: false,
            thermal_profile: ThermalProfile::Normal,
            notifications_enabled: true,
            dark_mode: DarkMode::System,
        }
    }
}
