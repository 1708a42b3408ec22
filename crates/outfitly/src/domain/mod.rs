mod alert;
mod outfit;
mod preferences;
mod wardrobe;
mod weather;

pub use alert::{RiskAlert, RiskSeverity, RiskType};
pub use outfit::{Gender, Outfit, OutfitDraft, OutfitId, ThermalProfile};
pub use preferences::{DarkMode, UserPreferences};
pub use wardrobe::{ClothingCategory, Season, WardrobeItem, WardrobeItemDraft, WardrobeItemId};
pub use weather::{
    Conditions, DailyForecast, HourlyForecast, TemperatureCategory, TimeSlot, TimeSlotForecast,
    Weather, WeatherCondition,
};

use std::fmt;

/// Raised when a persisted or user-supplied label does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

/// Reads a yes/no style flag as used in catalog files and stored preferences.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}
