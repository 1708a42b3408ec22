use chrono::{TimeZone, Utc};

use crate::domain::{
    DailyForecast, Gender, HourlyForecast, Outfit, OutfitId, Weather, WeatherCondition,
};

pub(super) fn weather(temperature: f64) -> Weather {
    Weather {
        temperature,
        feels_like: temperature,
        condition: WeatherCondition::Clear,
        wind_speed: 10.0,
        humidity: 50,
        city_name: "Test City".to_string(),
        is_raining: false,
        captured_at: Utc
            .with_ymd_and_hms(2025, 10, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

pub(super) fn rainy(mut weather: Weather) -> Weather {
    weather.is_raining = true;
    weather.condition = WeatherCondition::Rain;
    weather
}

pub(super) fn windy(mut weather: Weather, wind_speed: f64) -> Weather {
    weather.wind_speed = wind_speed;
    weather
}

pub(super) fn feeling(mut weather: Weather, feels_like: f64) -> Weather {
    weather.feels_like = feels_like;
    weather
}

pub(super) fn humid(mut weather: Weather, humidity: u8) -> Weather {
    weather.humidity = humidity;
    weather
}

pub(super) fn outfit(id: u32, min_temp: i32, max_temp: i32) -> Outfit {
    Outfit {
        id: OutfitId(id),
        title: format!("Outfit {id}"),
        description: "test outfit".to_string(),
        items: vec!["Shirt".to_string(), "Trousers".to_string()],
        gender: Gender::Unisex,
        min_temp,
        max_temp,
        rain_compatible: false,
        wind_compatible: false,
    }
}

pub(super) fn rain_ready(mut outfit: Outfit) -> Outfit {
    outfit.rain_compatible = true;
    outfit
}

pub(super) fn wind_ready(mut outfit: Outfit) -> Outfit {
    outfit.wind_compatible = true;
    outfit
}

pub(super) fn reading(hour: u8, temperature: f64, rain_probability: u8) -> HourlyForecast {
    HourlyForecast {
        hour,
        temperature,
        feels_like: temperature,
        condition: WeatherCondition::Cloudy,
        wind_speed: 12.0,
        rain_probability,
        timestamp: Utc
            .with_ymd_and_hms(2025, 10, 1, u32::from(hour), 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

pub(super) fn forecast(morning: (f64, u8), night: (f64, u8)) -> DailyForecast {
    DailyForecast {
        morning: Some(reading(8, morning.0, morning.1)),
        noon: None,
        evening: None,
        night: Some(reading(22, night.0, night.1)),
    }
}
