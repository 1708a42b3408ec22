//! Weather provider port, the OpenWeatherMap adapter and the refresh feed.

pub mod dto;
mod feed;
mod openweather;

use std::fmt;

use async_trait::async_trait;

use crate::domain::{HourlyForecast, Weather};

pub use feed::{fetch_conditions, RefreshOutcome, WeatherFeed, WeatherState};
pub use openweather::OpenWeatherClient;

/// Where to fetch weather for.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Coordinates { lat: f64, lon: f64 },
    City(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Coordinates { lat, lon } => write!(f, "{lat:.4},{lon:.4}"),
            Location::City(name) => f.write_str(name),
        }
    }
}

/// Remote source of current conditions and hourly forecasts.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, location: &Location) -> Result<Weather, WeatherError>;

    /// Readings in chronological order.
    async fn forecast(&self, location: &Location) -> Result<Vec<HourlyForecast>, WeatherError>;
}

/// Weather fetch failure. The display string is shown to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("weather service is not configured: {0}")]
    Configuration(String),
    #[error("weather request timed out after {secs}s")]
    Timeout { secs: u64 },
    #[error("could not reach the weather service: {0}")]
    Transport(String),
    #[error("weather service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("unexpected weather response: {0}")]
    Decode(String),
}

/// Boundary view of an async fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> Resource<T> {
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Resource::Success(value),
            Err(err) => Resource::Error(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Resource::Error(message) => Some(message),
            _ => None,
        }
    }
}
