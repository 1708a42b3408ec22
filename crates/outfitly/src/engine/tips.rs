use serde::{Deserialize, Serialize};

use super::thresholds::{
    is_windy, DRY_AIR_PERCENT, FEELS_COLDER_DELTA, FEELS_MUCH_COLDER_DELTA, HUMID_HEAT_C,
    HUMID_PERCENT, SEVERE_WIND_KMH, STRONG_WIND_KMH,
};
use crate::domain::{ThermalProfile, Weather};

/// Effective-temperature band driving the temperature tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    /// Below -10 °C.
    Arctic,
    /// -10 °C up to 0 °C.
    Freezing,
    /// 0 °C up to 5 °C.
    VeryCold,
    /// 5 °C up to 10 °C.
    Cold,
    /// 10 °C up to 15 °C.
    Chilly,
    /// 15 °C up to 20 °C.
    Mild,
    /// 20 °C up to 25 °C.
    Pleasant,
    /// 25 °C up to 30 °C.
    Warm,
    /// 30 °C up to 35 °C.
    Hot,
    /// 35 °C and above.
    Scorching,
}

impl TemperatureBand {
    pub fn for_effective(temperature: f64) -> Self {
        if temperature < -10.0 {
            TemperatureBand::Arctic
        } else if temperature < 0.0 {
            TemperatureBand::Freezing
        } else if temperature < 5.0 {
            TemperatureBand::VeryCold
        } else if temperature < 10.0 {
            TemperatureBand::Cold
        } else if temperature < 15.0 {
            TemperatureBand::Chilly
        } else if temperature < 20.0 {
            TemperatureBand::Mild
        } else if temperature < 25.0 {
            TemperatureBand::Pleasant
        } else if temperature < 30.0 {
            TemperatureBand::Warm
        } else if temperature < 35.0 {
            TemperatureBand::Hot
        } else {
            TemperatureBand::Scorching
        }
    }

    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            TemperatureBand::Arctic => &[
                "Dangerously cold! Limit time outdoors and cover every bit of skin.",
                "Thermal base layers, a down coat, gloves, a hat and a scarf are all essential.",
            ],
            TemperatureBand::Freezing => &[
                "Freezing out there. Bundle up in a thick coat.",
                "Don't forget gloves and a beanie.",
            ],
            TemperatureBand::VeryCold => &[
                "Very cold. A heavy coat is a must today.",
                "A scarf will keep the chill off your neck.",
            ],
            TemperatureBand::Cold => &["Cold day. Wear a warm jacket over a sweater."],
            TemperatureBand::Chilly => &["Chilly. A light jacket or a thick sweater will do."],
            TemperatureBand::Mild => &["Mild weather. Layers you can take off are ideal."],
            TemperatureBand::Pleasant => &["Pleasant temperatures. A T-shirt with a light layer is enough."],
            TemperatureBand::Warm => &[
                "Warm day. Pick breathable fabrics like cotton or linen.",
            ],
            TemperatureBand::Hot => &[
                "Hot! Drink plenty of water.",
                "Light colours will keep you cooler.",
            ],
            TemperatureBand::Scorching => &[
                "Extreme heat. Avoid the midday sun if you can.",
                "Wear loose, light-coloured clothing and a hat, and keep water with you.",
            ],
        }
    }
}

/// How far the perceived temperature departs from the measured one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeelsLikeGap {
    MuchColder,
    Colder,
    Warmer,
}

impl FeelsLikeGap {
    /// Compares raw (not profile-adjusted) readings.
    pub fn classify(temperature: f64, feels_like: f64) -> Option<Self> {
        let delta = temperature - feels_like;
        if delta > FEELS_MUCH_COLDER_DELTA {
            Some(FeelsLikeGap::MuchColder)
        } else if delta > FEELS_COLDER_DELTA {
            Some(FeelsLikeGap::Colder)
        } else if delta < -FEELS_COLDER_DELTA {
            Some(FeelsLikeGap::Warmer)
        } else {
            None
        }
    }

    pub fn tip(&self) -> &'static str {
        match self {
            FeelsLikeGap::MuchColder => {
                "It's much colder than it looks. Dress for the feels-like temperature."
            }
            FeelsLikeGap::Colder => "It feels colder than it is. Add an extra layer.",
            FeelsLikeGap::Warmer => "It feels warmer than it is. Dress a little lighter.",
        }
    }
}

/// Wind strength band for tips; the highest matching band wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindBand {
    Light,
    Strong,
    Severe,
}

impl WindBand {
    pub fn classify(wind_speed_kmh: f64) -> Option<Self> {
        if wind_speed_kmh > SEVERE_WIND_KMH {
            Some(WindBand::Severe)
        } else if wind_speed_kmh > STRONG_WIND_KMH {
            Some(WindBand::Strong)
        } else if is_windy(wind_speed_kmh) {
            Some(WindBand::Light)
        } else {
            None
        }
    }

    pub fn tip(&self) -> &'static str {
        match self {
            WindBand::Severe => "Severe wind warning! Avoid going out if you can; secure loose clothing.",
            WindBand::Strong => "Strong wind. A windproof jacket and a hood are a good idea.",
            WindBand::Light => "It's breezy. Consider a windbreaker.",
        }
    }
}

const RAIN_TIP: &str = "Take an umbrella and waterproof shoes!";
const HUMID_HEAT_TIP: &str = "Humid and hot. Choose moisture-wicking, loose clothes.";
const DRY_AIR_TIP: &str = "The air is dry. Moisturise and stay hydrated.";

fn profile_tip(profile: ThermalProfile) -> Option<String> {
    match profile {
        ThermalProfile::Normal => None,
        ThermalProfile::Pigeon => Some(format!(
            "You get cold easily, so suggestions assume it feels {}°C cooler. Dress a bit warmer.",
            profile.offset().abs()
        )),
        ThermalProfile::WarmBlooded => Some(format!(
            "You run warm, so suggestions assume it feels {}°C warmer. Dress a bit lighter.",
            profile.offset()
        )),
    }
}

/// Advisory tips for the weather, independent of any candidate list.
///
/// Order: profile, temperature band, feels-like gap, rain, wind, humidity.
pub fn recommendation_tips(weather: &Weather, profile: ThermalProfile) -> Vec<String> {
    let mut tips = Vec::new();
    let effective = profile.effective_temperature(weather.temperature);

    if let Some(tip) = profile_tip(profile) {
        tips.push(tip);
    }

    tips.extend(
        TemperatureBand::for_effective(effective)
            .tips()
            .iter()
            .map(|tip| tip.to_string()),
    );

    if let Some(gap) = FeelsLikeGap::classify(weather.temperature, weather.feels_like) {
        tips.push(gap.tip().to_string());
    }

    if weather.is_raining {
        tips.push(RAIN_TIP.to_string());
    }

    if let Some(wind) = WindBand::classify(weather.wind_speed) {
        tips.push(wind.tip().to_string());
    }

    if weather.humidity > HUMID_PERCENT && effective > HUMID_HEAT_C {
        tips.push(HUMID_HEAT_TIP.to_string());
    }
    if weather.humidity < DRY_AIR_PERCENT {
        tips.push(DRY_AIR_TIP.to_string());
    }

    tips
}
