//! OpenWeatherMap wire types and their mapping into the domain model.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::domain::{HourlyForecast, Weather, WeatherCondition};

/// The API reports wind in m/s; the domain works in km/h.
pub const MS_TO_KMH: f64 = 3.6;

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    pub main: MainDto,
    #[serde(default)]
    pub weather: Vec<ConditionDto>,
    pub wind: WindDto,
    #[serde(rename = "name")]
    pub city_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainDto {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionDto {
    pub id: u16,
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindDto {
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastItemDto>,
    pub city: CityDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastItemDto {
    /// Unix seconds, UTC.
    pub dt: i64,
    pub main: MainDto,
    #[serde(default)]
    pub weather: Vec<ConditionDto>,
    pub wind: WindDto,
    /// Probability of precipitation, 0.0-1.0.
    #[serde(default)]
    pub pop: f64,
    #[serde(default)]
    pub dt_txt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityDto {
    pub name: String,
    #[serde(default)]
    pub country: String,
    /// Shift from UTC in seconds.
    #[serde(default)]
    pub timezone: i32,
}

/// Error body returned with non-2xx statuses. `cod` is sometimes a string.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub cod: serde_json::Value,
    pub message: String,
}

pub fn condition_for_id(id: u16) -> WeatherCondition {
    match id {
        200..=232 => WeatherCondition::Thunderstorm,
        300..=531 => WeatherCondition::Rain,
        600..=622 => WeatherCondition::Snow,
        701..=781 => WeatherCondition::Mist,
        800 => WeatherCondition::Clear,
        801..=804 => WeatherCondition::Cloudy,
        _ => WeatherCondition::Unknown,
    }
}

/// Thunderstorm, drizzle and rain groups all count as rain.
pub fn is_rain_id(id: u16) -> bool {
    (200..=531).contains(&id)
}

fn primary_id(conditions: &[ConditionDto]) -> u16 {
    conditions.first().map(|condition| condition.id).unwrap_or(0)
}

impl CurrentWeatherResponse {
    pub fn into_weather(self, captured_at: DateTime<Utc>) -> Weather {
        let id = primary_id(&self.weather);
        Weather {
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            condition: condition_for_id(id),
            wind_speed: self.wind.speed * MS_TO_KMH,
            humidity: self.main.humidity,
            city_name: self.city_name,
            is_raining: is_rain_id(id),
            captured_at,
        }
    }
}

impl ForecastResponse {
    /// Maps entries in API order; entries with an unrepresentable timestamp are dropped.
    pub fn into_hourly(self) -> Vec<HourlyForecast> {
        let offset = i64::from(self.city.timezone);
        self.list
            .into_iter()
            .filter_map(|item| {
                let timestamp = Utc.timestamp_opt(item.dt, 0).single()?;
                let local_seconds = (item.dt + offset).rem_euclid(86_400);
                Some(HourlyForecast {
                    hour: (local_seconds / 3_600) as u8,
                    temperature: item.main.temp,
                    feels_like: item.main.feels_like,
                    condition: condition_for_id(primary_id(&item.weather)),
                    wind_speed: item.wind.speed * MS_TO_KMH,
                    rain_probability: (item.pop * 100.0).round().clamp(0.0, 100.0) as u8,
                    timestamp,
                })
            })
            .collect()
    }
}
