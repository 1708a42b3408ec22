use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{ApiErrorBody, CurrentWeatherResponse, ForecastResponse};
use super::{Location, WeatherError, WeatherProvider};
use crate::config::WeatherApiConfig;
use crate::domain::{HourlyForecast, Weather};

/// OpenWeatherMap client for the `/weather` and `/forecast` endpoints, metric units.
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherApiConfig,
}

impl OpenWeatherClient {
    /// Fails when no API key is configured.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherError> {
        if config.api_key.trim().is_empty() {
            return Err(WeatherError::Configuration(
                "OUTFITLY_WEATHER_API_KEY is not set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| WeatherError::Configuration(err.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn query(&self, location: &Location) -> Vec<(&'static str, String)> {
        let mut params = match location {
            Location::Coordinates { lat, lon } => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
            Location::City(name) => vec![("q", name.clone())],
        };
        params.push(("appid", self.config.api_key.clone()));
        params.push(("units", "metric".to_string()));
        params.push(("lang", self.config.lang.clone()));
        params
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(self.endpoint(path))
            .query(params)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| WeatherError::Decode(err.to_string()))
    }

    fn transport_error(&self, err: reqwest::Error) -> WeatherError {
        if err.is_timeout() {
            WeatherError::Timeout {
                secs: self.config.timeout.as_secs(),
            }
        } else {
            // Without the URL so the API key never reaches logs or users.
            WeatherError::Transport(err.without_url().to_string())
        }
    }

    async fn check_status(response: Response) -> Result<Response, WeatherError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|parsed| parsed.message)
            .ok()
            .filter(|message| !message.is_empty())
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "request failed".to_string());

        warn!(status = status.as_u16(), %message, "weather API rejected request");
        Err(WeatherError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, location: &Location) -> Result<Weather, WeatherError> {
        debug!(%location, "fetching current weather");
        let params = self.query(location);
        let response: CurrentWeatherResponse = self.get("weather", &params).await?;
        Ok(response.into_weather(Utc::now()))
    }

    async fn forecast(&self, location: &Location) -> Result<Vec<HourlyForecast>, WeatherError> {
        debug!(%location, "fetching forecast");
        let mut params = self.query(location);
        params.push(("cnt", self.config.forecast_count.to_string()));
        let response: ForecastResponse = self.get("forecast", &params).await?;
        Ok(response.into_hourly())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenWeatherClient {
        OpenWeatherClient::new(WeatherApiConfig {
            base_url: "http://localhost:9999/data/2.5/".to_string(),
            api_key: "key-123".to_string(),
            lang: "ru".to_string(),
            ..WeatherApiConfig::default()
        })
        .expect("client builds")
    }

    #[test]
    fn missing_api_key_is_a_configuration_error() {
        let result = OpenWeatherClient::new(WeatherApiConfig::default());
        assert!(matches!(result, Err(WeatherError::Configuration(_))));
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        assert_eq!(
            client().endpoint("weather"),
            "http://localhost:9999/data/2.5/weather"
        );
    }

    #[test]
    fn query_carries_location_key_units_and_language() {
        let params = client().query(&Location::City("Almaty".to_string()));
        assert_eq!(
            params,
            vec![
                ("q", "Almaty".to_string()),
                ("appid", "key-123".to_string()),
                ("units", "metric".to_string()),
                ("lang", "ru".to_string()),
            ]
        );

        let coordinates = client().query(&Location::Coordinates {
            lat: 51.5,
            lon: -0.12,
        });
        assert_eq!(coordinates[0], ("lat", "51.5".to_string()));
        assert_eq!(coordinates[1], ("lon", "-0.12".to_string()));
    }
}
