use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownVariant;

/// Identifier assigned by the catalog when an outfit is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OutfitId(pub u32);

/// Gender an outfit is styled for. `Unisex` outfits match every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unisex,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unisex];

    /// Stable persisted name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Unisex => "UNISEX",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unisex => "Unisex",
        }
    }
}

impl FromStr for Gender {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            "UNISEX" => Ok(Gender::Unisex),
            _ => Err(UnknownVariant {
                kind: "gender",
                value: value.to_string(),
            }),
        }
    }
}

/// How sensitive the user is to temperature.
///
/// The offset is added to the measured temperature to get the effective
/// temperature used for every comfort decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThermalProfile {
    /// Feels the cold quickly.
    Pigeon,
    #[default]
    Normal,
    /// Runs warm and sweats easily.
    WarmBlooded,
}

impl ThermalProfile {
    pub const ALL: [ThermalProfile; 3] = [
        ThermalProfile::Pigeon,
        ThermalProfile::Normal,
        ThermalProfile::WarmBlooded,
    ];

    /// Offset in whole degrees Celsius.
    pub fn offset(&self) -> i32 {
        match self {
            ThermalProfile::Pigeon => -3,
            ThermalProfile::Normal => 0,
            ThermalProfile::WarmBlooded => 3,
        }
    }

    pub fn effective_temperature(&self, temperature: f64) -> f64 {
        temperature + f64::from(self.offset())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThermalProfile::Pigeon => "PIGEON",
            ThermalProfile::Normal => "NORMAL",
            ThermalProfile::WarmBlooded => "WARM_BLOODED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThermalProfile::Pigeon => "I get cold easily",
            ThermalProfile::Normal => "Normal",
            ThermalProfile::WarmBlooded => "I get warm easily",
        }
    }
}

impl FromStr for ThermalProfile {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "PIGEON" => Ok(ThermalProfile::Pigeon),
            "NORMAL" => Ok(ThermalProfile::Normal),
            "WARM_BLOODED" => Ok(ThermalProfile::WarmBlooded),
            _ => Err(UnknownVariant {
                kind: "thermal profile",
                value: value.to_string(),
            }),
        }
    }
}

/// Catalog outfit as stored, immutable once seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: OutfitId,
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
    pub gender: Gender,
    /// Inclusive lower bound in whole degrees Celsius.
    pub min_temp: i32,
    /// Inclusive upper bound in whole degrees Celsius.
    pub max_temp: i32,
    pub rain_compatible: bool,
    pub wind_compatible: bool,
}

impl Outfit {
    pub fn covers_temperature(&self, temperature: i32) -> bool {
        self.min_temp <= temperature && temperature <= self.max_temp
    }

    pub fn suits_gender(&self, requested: Gender) -> bool {
        self.gender == requested || self.gender == Gender::Unisex
    }
}

/// Outfit awaiting insertion; the catalog assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitDraft {
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
    pub gender: Gender,
    pub min_temp: i32,
    pub max_temp: i32,
    pub rain_compatible: bool,
    pub wind_compatible: bool,
}

impl OutfitDraft {
    pub fn into_outfit(self, id: OutfitId) -> Outfit {
        Outfit {
            id,
            title: self.title,
            description: self.description,
            items: self.items,
            gender: self.gender,
            min_temp: self.min_temp,
            max_temp: self.max_temp,
            rain_compatible: self.rain_compatible,
            wind_compatible: self.wind_compatible,
        }
    }
}
