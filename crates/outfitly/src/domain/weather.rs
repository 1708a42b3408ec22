use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse sky condition reported by the weather provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Thunderstorm,
    Mist,
    Unknown,
}

impl WeatherCondition {
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Mist => "Mist",
            WeatherCondition::Unknown => "Unknown",
        }
    }
}

/// Snapshot of the current conditions, captured once per fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Degrees Celsius.
    pub feels_like: f64,
    pub condition: WeatherCondition,
    /// Kilometres per hour.
    pub wind_speed: f64,
    /// Relative humidity in percent.
    pub humidity: u8,
    pub city_name: String,
    pub is_raining: bool,
    pub captured_at: DateTime<Utc>,
}

impl Weather {
    /// Whole-degree temperature, truncated toward zero.
    pub fn whole_degrees(&self) -> i32 {
        self.temperature.trunc() as i32
    }

    /// Copy of this snapshot with the temperature shifted by `offset` degrees.
    pub fn with_offset(&self, offset: i32) -> Weather {
        Weather {
            temperature: self.temperature + f64::from(offset),
            ..self.clone()
        }
    }

    pub fn category(&self) -> TemperatureCategory {
        TemperatureCategory::for_temperature(self.temperature)
    }
}

/// Broad temperature classification used for labelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemperatureCategory {
    Freezing,
    Cold,
    Cool,
    Warm,
    Hot,
}

impl TemperatureCategory {
    /// Boundary values belong to the warmer category.
    pub fn for_temperature(temperature: f64) -> Self {
        if temperature < 0.0 {
            TemperatureCategory::Freezing
        } else if temperature < 10.0 {
            TemperatureCategory::Cold
        } else if temperature < 18.0 {
            TemperatureCategory::Cool
        } else if temperature < 25.0 {
            TemperatureCategory::Warm
        } else {
            TemperatureCategory::Hot
        }
    }
}

/// A single forecast reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Local hour of day, 0-23.
    pub hour: u8,
    pub temperature: f64,
    pub feels_like: f64,
    pub condition: WeatherCondition,
    pub wind_speed: f64,
    /// Probability of precipitation in percent, 0-100.
    pub rain_probability: u8,
    pub timestamp: DateTime<Utc>,
}

/// Part of the day a forecast reading is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeSlot {
    Morning,
    Noon,
    Evening,
    Night,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Noon,
        TimeSlot::Evening,
        TimeSlot::Night,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Noon => "Noon",
            TimeSlot::Evening => "Evening",
            TimeSlot::Night => "Night",
        }
    }

    pub fn start_hour(&self) -> u8 {
        match self {
            TimeSlot::Morning => 6,
            TimeSlot::Noon => 11,
            TimeSlot::Evening => 17,
            TimeSlot::Night => 21,
        }
    }

    /// Exclusive end hour; night wraps past midnight.
    pub fn end_hour(&self) -> u8 {
        match self {
            TimeSlot::Morning => 11,
            TimeSlot::Noon => 17,
            TimeSlot::Evening => 21,
            TimeSlot::Night => 6,
        }
    }

    pub fn contains_hour(&self, hour: u8) -> bool {
        let (start, end) = (self.start_hour(), self.end_hour());
        if start < end {
            start <= hour && hour < end
        } else {
            hour >= start || hour < end
        }
    }

    pub fn for_hour(hour: u8) -> TimeSlot {
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.contains_hour(hour))
            .unwrap_or(TimeSlot::Night)
    }
}

/// A populated slot of a [`DailyForecast`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlotForecast {
    pub slot: TimeSlot,
    pub forecast: HourlyForecast,
}

/// Forecast for the day, one optional reading per time slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub morning: Option<HourlyForecast>,
    pub noon: Option<HourlyForecast>,
    pub evening: Option<HourlyForecast>,
    pub night: Option<HourlyForecast>,
}

impl DailyForecast {
    /// Groups chronologically ordered readings by slot, keeping the first
    /// reading that falls into each slot.
    pub fn from_hourly<I>(readings: I) -> Self
    where
        I: IntoIterator<Item = HourlyForecast>,
    {
        let mut daily = DailyForecast::default();
        for reading in readings {
            let entry = match TimeSlot::for_hour(reading.hour) {
                TimeSlot::Morning => &mut daily.morning,
                TimeSlot::Noon => &mut daily.noon,
                TimeSlot::Evening => &mut daily.evening,
                TimeSlot::Night => &mut daily.night,
            };
            if entry.is_none() {
                *entry = Some(reading);
            }
        }
        daily
    }

    pub fn slot(&self, slot: TimeSlot) -> Option<&HourlyForecast> {
        match slot {
            TimeSlot::Morning => self.morning.as_ref(),
            TimeSlot::Noon => self.noon.as_ref(),
            TimeSlot::Evening => self.evening.as_ref(),
            TimeSlot::Night => self.night.as_ref(),
        }
    }

    /// Populated slots in morning-to-night order.
    pub fn time_slots(&self) -> Vec<TimeSlotForecast> {
        TimeSlot::ALL
            .into_iter()
            .filter_map(|slot| {
                self.slot(slot).map(|forecast| TimeSlotForecast {
                    slot,
                    forecast: forecast.clone(),
                })
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        TimeSlot::ALL.iter().all(|slot| self.slot(*slot).is_none())
    }
}

/// Current weather plus the optional forecast it was fetched with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    pub weather: Weather,
    pub forecast: Option<DailyForecast>,
}

impl Conditions {
    pub fn current(weather: Weather) -> Self {
        Self {
            weather,
            forecast: None,
        }
    }
}
