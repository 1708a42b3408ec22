use super::config::ScoringConfig;
use super::thresholds::{is_windy, FEELS_COLDER_DELTA};
use super::{ScoreComponent, ScoreFactor};
use crate::domain::{Outfit, Weather};

/// Applies every scoring rule to `outfit`; returns the components and their total.
pub(crate) fn score_outfit(
    outfit: &Outfit,
    weather: &Weather,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, i32) {
    let mut components = vec![ScoreComponent {
        factor: ScoreFactor::Base,
        points: config.base_score,
    }];

    let temp = weather.whole_degrees();
    if temp < outfit.min_temp {
        components.push(ScoreComponent {
            factor: ScoreFactor::BelowRange,
            points: -(outfit.min_temp - temp) * config.out_of_range_penalty_per_degree,
        });
    }
    if temp > outfit.max_temp {
        components.push(ScoreComponent {
            factor: ScoreFactor::AboveRange,
            points: -(temp - outfit.max_temp) * config.out_of_range_penalty_per_degree,
        });
    }

    if weather.is_raining && !outfit.rain_compatible {
        components.push(ScoreComponent {
            factor: ScoreFactor::RainExposure,
            points: -config.rain_exposure_penalty,
        });
    }
    if weather.is_raining && outfit.rain_compatible {
        components.push(ScoreComponent {
            factor: ScoreFactor::RainReady,
            points: config.rain_ready_bonus,
        });
    }

    let windy = is_windy(weather.wind_speed);
    if windy && !outfit.wind_compatible {
        components.push(ScoreComponent {
            factor: ScoreFactor::WindExposure,
            points: -config.wind_exposure_penalty,
        });
    }
    if windy && outfit.wind_compatible {
        components.push(ScoreComponent {
            factor: ScoreFactor::WindReady,
            points: config.wind_ready_bonus,
        });
    }

    if weather.feels_like < weather.temperature - FEELS_COLDER_DELTA && outfit.min_temp < temp {
        components.push(ScoreComponent {
            factor: ScoreFactor::FeelsColderBuffer,
            points: config.feels_colder_buffer_bonus,
        });
    }

    let total = components.iter().map(|component| component.points).sum();
    (components, total)
}
