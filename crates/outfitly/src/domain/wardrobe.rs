use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WardrobeItemId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClothingCategory {
    Tops,
    Bottoms,
    Outerwear,
    Shoes,
    Accessories,
}

impl ClothingCategory {
    pub const ALL: [ClothingCategory; 5] = [
        ClothingCategory::Tops,
        ClothingCategory::Bottoms,
        ClothingCategory::Outerwear,
        ClothingCategory::Shoes,
        ClothingCategory::Accessories,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ClothingCategory::Tops => "Tops",
            ClothingCategory::Bottoms => "Bottoms",
            ClothingCategory::Outerwear => "Outerwear",
            ClothingCategory::Shoes => "Shoes",
            ClothingCategory::Accessories => "Accessories",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ClothingCategory::Tops => "👕",
            ClothingCategory::Bottoms => "👖",
            ClothingCategory::Outerwear => "🧥",
            ClothingCategory::Shoes => "👟",
            ClothingCategory::Accessories => "🧣",
        }
    }
}

impl FromStr for ClothingCategory {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ClothingCategory::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "clothing category",
                value: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    /// Wearable year round; matches every season filter.
    All,
}

impl Season {
    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
            Season::All => "All seasons",
        }
    }

    pub fn matches(&self, requested: Season) -> bool {
        *self == requested || *self == Season::All
    }
}

/// Garment owned by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeItem {
    pub id: WardrobeItemId,
    pub name: String,
    pub category: ClothingCategory,
    pub season: Season,
    pub color: Option<String>,
    pub image_ref: Option<String>,
    pub min_temp: Option<i32>,
    pub max_temp: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl WardrobeItem {
    /// Missing bounds are open.
    pub fn covers_temperature(&self, temperature: i32) -> bool {
        self.min_temp.map_or(true, |min| min <= temperature)
            && self.max_temp.map_or(true, |max| max >= temperature)
    }
}

/// Garment awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeItemDraft {
    pub name: String,
    pub category: ClothingCategory,
    pub season: Season,
    pub color: Option<String>,
    pub image_ref: Option<String>,
    pub min_temp: Option<i32>,
    pub max_temp: Option<i32>,
}

impl WardrobeItemDraft {
    pub fn new(name: impl Into<String>, category: ClothingCategory, season: Season) -> Self {
        Self {
            name: name.into(),
            category,
            season,
            color: None,
            image_ref: None,
            min_temp: None,
            max_temp: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_temperature_band(mut self, min_temp: Option<i32>, max_temp: Option<i32>) -> Self {
        self.min_temp = min_temp;
        self.max_temp = max_temp;
        self
    }
}
