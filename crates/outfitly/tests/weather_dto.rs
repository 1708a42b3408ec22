use chrono::{TimeZone, Utc};

use outfitly::domain::{DailyForecast, WeatherCondition};
use outfitly::weather::dto::{ApiErrorBody, CurrentWeatherResponse, ForecastResponse};

const CURRENT: &str = r#"{
  "coord": {"lon": 76.95, "lat": 43.25},
  "weather": [{"id": 501, "main": "Rain", "description": "moderate rain", "icon": "10d"}],
  "main": {"temp": 7.4, "feels_like": 4.9, "temp_min": 6.0, "temp_max": 8.1, "pressure": 1012, "humidity": 87},
  "wind": {"speed": 5.0, "deg": 240},
  "name": "Almaty",
  "cod": 200
}"#;

// Almaty is UTC+5: 04:00Z is 09:00 local.
const FORECAST: &str = r#"{
  "cod": "200",
  "cnt": 4,
  "list": [
    {"dt": 1761969600, "main": {"temp": 3.1, "feels_like": 0.2, "humidity": 80},
     "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds"}],
     "wind": {"speed": 2.5}, "pop": 0.12, "dt_txt": "2025-11-01 04:00:00"},
    {"dt": 1761980400, "main": {"temp": 9.8, "feels_like": 8.0, "humidity": 60},
     "weather": [{"id": 500, "main": "Rain", "description": "light rain"}],
     "wind": {"speed": 4.0}, "pop": 0.68, "dt_txt": "2025-11-01 07:00:00"},
    {"dt": 1761991200, "main": {"temp": 6.5, "feels_like": 4.0, "humidity": 70},
     "weather": [{"id": 800, "main": "Clear", "description": "clear sky"}],
     "wind": {"speed": 3.0}, "pop": 0, "dt_txt": "2025-11-01 10:00:00"},
    {"dt": 1762002000, "main": {"temp": 2.0, "feels_like": -1.0, "humidity": 75},
     "weather": [],
     "wind": {"speed": 1.0}, "dt_txt": "2025-11-01 13:00:00"}
  ],
  "city": {"name": "Almaty", "country": "KZ", "timezone": 18000}
}"#;

#[test]
fn current_weather_maps_units_and_rain_flag() {
    let response: CurrentWeatherResponse = serde_json::from_str(CURRENT).expect("valid payload");
    let captured_at = Utc
        .with_ymd_and_hms(2025, 11, 1, 6, 0, 0)
        .single()
        .expect("valid timestamp");

    let weather = response.into_weather(captured_at);

    assert_eq!(weather.city_name, "Almaty");
    assert_eq!(weather.condition, WeatherCondition::Rain);
    assert!(weather.is_raining);
    assert!((weather.wind_speed - 18.0).abs() < 1e-9);
    assert_eq!(weather.humidity, 87);
    assert_eq!(weather.captured_at, captured_at);
}

#[test]
fn forecast_uses_city_local_hours_and_percent_probabilities() {
    let response: ForecastResponse = serde_json::from_str(FORECAST).expect("valid payload");

    let hourly = response.into_hourly();

    let hours: Vec<u8> = hourly.iter().map(|reading| reading.hour).collect();
    assert_eq!(hours, vec![9, 12, 15, 18]);
    let rain: Vec<u8> = hourly.iter().map(|reading| reading.rain_probability).collect();
    assert_eq!(rain, vec![12, 68, 0, 0]);
    assert_eq!(hourly[3].condition, WeatherCondition::Unknown);
    assert!((hourly[1].wind_speed - 14.4).abs() < 1e-9);

    let daily = DailyForecast::from_hourly(hourly);
    assert_eq!(daily.morning.as_ref().map(|r| r.temperature), Some(3.1));
    assert_eq!(daily.noon.as_ref().map(|r| r.temperature), Some(9.8));
    assert_eq!(daily.evening.as_ref().map(|r| r.temperature), Some(2.0));
    assert!(daily.night.is_none());
}

#[test]
fn error_body_accepts_string_or_numeric_code() {
    let text: ApiErrorBody =
        serde_json::from_str(r#"{"cod": "404", "message": "city not found"}"#).expect("parse");
    assert_eq!(text.message, "city not found");

    let numeric: ApiErrorBody =
        serde_json::from_str(r#"{"cod": 401, "message": "Invalid API key"}"#).expect("parse");
    assert_eq!(numeric.cod, serde_json::json!(401));
}
