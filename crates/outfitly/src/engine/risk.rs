use super::thresholds::{
    EXTREME_COLD_C, EXTREME_HEAT_C, HEAVY_RAIN_CHANCE_PERCENT, HIGH_WIND_ALERT_KMH,
    RAIN_CHANCE_PERCENT, TEMPERATURE_SWING_C, WINDY_KMH,
};
use crate::domain::{DailyForecast, RiskAlert, RiskSeverity, RiskType, Weather};

/// Flags hazardous conditions in the current weather and the day's forecast.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskAlertAnalyzer;

impl RiskAlertAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Alerts sorted by severity, highest first; equal severities keep emission order.
    pub fn analyze(&self, current: &Weather, forecast: Option<&DailyForecast>) -> Vec<RiskAlert> {
        let mut alerts = Vec::new();

        if let Some(daily) = forecast {
            forecast_alerts(daily, &mut alerts);
        }

        if current.wind_speed > HIGH_WIND_ALERT_KMH {
            alerts.push(RiskAlert {
                kind: RiskType::HighWind,
                severity: RiskSeverity::High,
                message: format!("Very strong wind: {} km/h", current.wind_speed as i32),
                recommendation: "A windbreaker or a heavy coat is recommended".to_string(),
            });
        } else if current.wind_speed > WINDY_KMH {
            alerts.push(RiskAlert {
                kind: RiskType::HighWind,
                severity: RiskSeverity::Medium,
                message: format!("Strong wind: {} km/h", current.wind_speed as i32),
                recommendation: "Consider a windbreaker".to_string(),
            });
        }

        if current.temperature < EXTREME_COLD_C {
            alerts.push(RiskAlert {
                kind: RiskType::ExtremeCold,
                severity: RiskSeverity::High,
                message: format!("Extreme cold: {}°C", current.temperature as i32),
                recommendation: "Dress in warm layers before heading out".to_string(),
            });
        }

        if current.temperature > EXTREME_HEAT_C {
            alerts.push(RiskAlert {
                kind: RiskType::ExtremeHeat,
                severity: RiskSeverity::High,
                message: format!("Extreme heat: {}°C", current.temperature as i32),
                recommendation: "Drink plenty of water and wear light colours".to_string(),
            });
        }

        alerts.sort_by(|a, b| b.severity.cmp(&a.severity));
        alerts
    }
}

fn forecast_alerts(daily: &DailyForecast, alerts: &mut Vec<RiskAlert>) {
    let slots = daily.time_slots();

    let temperatures = slots.iter().map(|slot| slot.forecast.temperature);
    let extremes = temperatures.fold(None, |range: Option<(f64, f64)>, temp| match range {
        Some((low, high)) => Some((low.min(temp), high.max(temp))),
        None => Some((temp, temp)),
    });
    if let Some((low, high)) = extremes {
        let spread = high - low;
        if spread >= TEMPERATURE_SWING_C {
            alerts.push(RiskAlert {
                kind: RiskType::TemperatureDrop,
                severity: RiskSeverity::High,
                message: format!("{}°C temperature swing during the day", spread as i32),
                recommendation: "Dress in layers you can add or remove".to_string(),
            });
        }
    }

    let max_rain = slots
        .iter()
        .map(|slot| slot.forecast.rain_probability)
        .max()
        .unwrap_or(0);
    if max_rain >= RAIN_CHANCE_PERCENT {
        let severity = if max_rain >= HEAVY_RAIN_CHANCE_PERCENT {
            RiskSeverity::High
        } else {
            RiskSeverity::Medium
        };
        alerts.push(RiskAlert {
            kind: RiskType::RainChance,
            severity,
            message: format!("{max_rain}% chance of rain"),
            recommendation: "Don't forget an umbrella".to_string(),
        });
    }
}
