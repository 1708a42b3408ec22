use crate::catalog::{CatalogError, CatalogImportError};
use crate::config::ConfigError;
use crate::orchestrator::OrchestratorError;
use crate::preferences::PreferencesError;
use crate::telemetry::TelemetryError;
use crate::weather::WeatherError;
use std::fmt;

/// Everything a host can fail with, one variant per layer.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Catalog(CatalogError),
    CatalogImport(CatalogImportError),
    Preferences(PreferencesError),
    Weather(WeatherError),
    Orchestrator(OrchestratorError),
    /// No city or coordinates were given and no last city is stored.
    MissingLocation,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::CatalogImport(err) => write!(f, "catalog import error: {}", err),
            AppError::Preferences(err) => write!(f, "preferences error: {}", err),
            AppError::Weather(err) => write!(f, "weather error: {}", err),
            AppError::Orchestrator(err) => write!(f, "recommendation error: {}", err),
            AppError::MissingLocation => {
                write!(f, "no location given and no last city is stored")
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::CatalogImport(err) => Some(err),
            AppError::Preferences(err) => Some(err),
            AppError::Weather(err) => Some(err),
            AppError::Orchestrator(err) => Some(err),
            AppError::MissingLocation => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<CatalogImportError> for AppError {
    fn from(value: CatalogImportError) -> Self {
        Self::CatalogImport(value)
    }
}

impl From<PreferencesError> for AppError {
    fn from(value: PreferencesError) -> Self {
        Self::Preferences(value)
    }
}

impl From<WeatherError> for AppError {
    fn from(value: WeatherError) -> Self {
        Self::Weather(value)
    }
}

impl From<OrchestratorError> for AppError {
    fn from(value: OrchestratorError) -> Self {
        Self::Orchestrator(value)
    }
}
