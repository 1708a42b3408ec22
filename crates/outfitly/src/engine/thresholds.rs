//! Weather thresholds shared by candidate filtering, scoring, tips and alerts.

/// Above this wind speed (km/h) it counts as windy.
pub const WINDY_KMH: f64 = 25.0;
/// Above this wind speed (km/h) tips call the wind strong.
pub const STRONG_WIND_KMH: f64 = 30.0;
/// Above this wind speed (km/h) wind alerts escalate to high severity.
pub const HIGH_WIND_ALERT_KMH: f64 = 40.0;
/// Above this wind speed (km/h) tips warn against going out.
pub const SEVERE_WIND_KMH: f64 = 50.0;

/// Perceived temperature this far below the measured one counts as feeling colder.
pub const FEELS_COLDER_DELTA: f64 = 3.0;
/// Perceived temperature this far below the measured one is much colder than it looks.
pub const FEELS_MUCH_COLDER_DELTA: f64 = 5.0;

pub const EXTREME_COLD_C: f64 = -10.0;
pub const EXTREME_HEAT_C: f64 = 35.0;

/// Spread (°C) between forecast slots that triggers a temperature swing alert.
pub const TEMPERATURE_SWING_C: f64 = 10.0;
pub const RAIN_CHANCE_PERCENT: u8 = 50;
pub const HEAVY_RAIN_CHANCE_PERCENT: u8 = 70;

pub const HUMID_PERCENT: u8 = 80;
pub const HUMID_HEAT_C: f64 = 25.0;
pub const DRY_AIR_PERCENT: u8 = 30;

pub fn is_windy(wind_speed_kmh: f64) -> bool {
    wind_speed_kmh > WINDY_KMH
}
