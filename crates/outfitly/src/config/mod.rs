use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Distinguishes runtime behavior for different stages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub weather: WeatherApiConfig,
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("OUTFITLY_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let base_url = env::var("OUTFITLY_WEATHER_BASE_URL")
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_WEATHER_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        let timeout_secs = env::var("OUTFITLY_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidTimeout)?;

        let forecast_count = env::var("OUTFITLY_FORECAST_COUNT")
            .unwrap_or_else(|_| "16".to_string())
            .parse::<u8>()
            .map_err(|_| ConfigError::InvalidForecastCount)?;

        let weather = WeatherApiConfig {
            base_url,
            api_key: env::var("OUTFITLY_WEATHER_API_KEY").unwrap_or_default(),
            lang: env::var("OUTFITLY_WEATHER_LANG").unwrap_or_else(|_| "en".to_string()),
            timeout: Duration::from_secs(timeout_secs),
            forecast_count,
        };

        let storage = StorageConfig {
            preferences_path: non_empty_path("OUTFITLY_PREFERENCES_PATH"),
            catalog_csv: non_empty_path("OUTFITLY_CATALOG_CSV"),
        };

        let log_level = env::var("OUTFITLY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            weather,
            storage,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn non_empty_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Settings for the OpenWeatherMap client.
#[derive(Clone)]
pub struct WeatherApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub lang: String,
    pub timeout: Duration,
    /// Number of 3-hour forecast entries to request.
    pub forecast_count: u8,
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            api_key: String::new(),
            lang: "en".to_string(),
            timeout: Duration::from_secs(10),
            forecast_count: 16,
        }
    }
}

impl fmt::Debug for WeatherApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherApiConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" },
            )
            .field("lang", &self.lang)
            .field("timeout", &self.timeout)
            .field("forecast_count", &self.forecast_count)
            .finish()
    }
}

/// Local persistence locations. `None` selects the in-memory or built-in default.
#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    pub preferences_path: Option<PathBuf>,
    pub catalog_csv: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBaseUrl(String),
    InvalidTimeout,
    InvalidForecastCount,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl(value) => write!(
                f,
                "OUTFITLY_WEATHER_BASE_URL must be an http(s) URL, got '{}'",
                value
            ),
            ConfigError::InvalidTimeout => {
                write!(f, "OUTFITLY_HTTP_TIMEOUT_SECS must be a positive integer")
            }
            ConfigError::InvalidForecastCount => {
                write!(f, "OUTFITLY_FORECAST_COUNT must be a valid u8")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
