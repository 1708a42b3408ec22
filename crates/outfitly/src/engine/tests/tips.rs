use std::collections::HashSet;

use super::common::*;
use crate::domain::ThermalProfile;
use crate::engine::{recommendation_tips, FeelsLikeGap, TemperatureBand, WindBand};

#[test]
fn temperature_bands_split_at_documented_boundaries() {
    let cases = [
        (-10.01, TemperatureBand::Arctic),
        (-10.0, TemperatureBand::Freezing),
        (-0.01, TemperatureBand::Freezing),
        (0.0, TemperatureBand::VeryCold),
        (5.0, TemperatureBand::Cold),
        (10.0, TemperatureBand::Chilly),
        (15.0, TemperatureBand::Mild),
        (20.0, TemperatureBand::Pleasant),
        (25.0, TemperatureBand::Warm),
        (30.0, TemperatureBand::Hot),
        (34.99, TemperatureBand::Hot),
        (35.0, TemperatureBand::Scorching),
    ];

    for (temperature, expected) in cases {
        assert_eq!(
            TemperatureBand::for_effective(temperature),
            expected,
            "temperature {temperature}"
        );
    }

    let distinct: HashSet<TemperatureBand> = (-20..=40)
        .map(|t| TemperatureBand::for_effective(f64::from(t)))
        .collect();
    assert_eq!(distinct.len(), 10);
}

#[test]
fn feels_like_gap_thresholds_are_exclusive() {
    assert_eq!(FeelsLikeGap::classify(15.0, 9.5), Some(FeelsLikeGap::MuchColder));
    assert_eq!(FeelsLikeGap::classify(15.0, 10.0), Some(FeelsLikeGap::Colder));
    assert_eq!(FeelsLikeGap::classify(15.0, 12.0), None);
    assert_eq!(FeelsLikeGap::classify(15.0, 18.0), None);
    assert_eq!(FeelsLikeGap::classify(15.0, 18.5), Some(FeelsLikeGap::Warmer));
}

#[test]
fn wind_band_highest_threshold_wins() {
    assert_eq!(WindBand::classify(25.0), None);
    assert_eq!(WindBand::classify(30.0), Some(WindBand::Light));
    assert_eq!(WindBand::classify(31.0), Some(WindBand::Strong));
    assert_eq!(WindBand::classify(50.0), Some(WindBand::Strong));
    assert_eq!(WindBand::classify(50.5), Some(WindBand::Severe));
}

#[test]
fn wind_tip_at_thirty_is_light_and_at_thirty_one_is_strong() {
    let at_thirty = recommendation_tips(&windy(weather(15.0), 30.0), ThermalProfile::Normal);
    assert!(at_thirty.iter().any(|tip| tip == WindBand::Light.tip()));
    assert!(at_thirty.iter().all(|tip| tip != WindBand::Strong.tip()));

    let at_thirty_one = recommendation_tips(&windy(weather(15.0), 31.0), ThermalProfile::Normal);
    assert!(at_thirty_one.iter().any(|tip| tip == WindBand::Strong.tip()));
    assert!(at_thirty_one.iter().all(|tip| tip != WindBand::Light.tip()));
}

#[test]
fn normal_profile_starts_with_the_temperature_band() {
    let tips = recommendation_tips(&weather(22.0), ThermalProfile::Normal);
    assert_eq!(tips, vec![TemperatureBand::Pleasant.tips()[0].to_string()]);
}

#[test]
fn non_normal_profiles_lead_with_a_direction_tip() {
    let pigeon = recommendation_tips(&weather(22.0), ThermalProfile::Pigeon);
    assert!(pigeon[0].contains("warmer"));

    let warm = recommendation_tips(&weather(22.0), ThermalProfile::WarmBlooded);
    assert!(warm[0].contains("lighter"));
    // 22 + 3 lands in the warm band.
    assert_eq!(warm[1], TemperatureBand::Warm.tips()[0]);
}

#[test]
fn rain_tip_is_always_present_when_raining() {
    for temperature in [-25.0, 3.0, 17.0, 38.0] {
        for profile in ThermalProfile::ALL {
            let snapshot = humid(windy(rainy(weather(temperature)), 55.0), 90);
            let tips = recommendation_tips(&snapshot, profile);
            assert!(
                tips.iter().any(|tip| tip.contains("umbrella")),
                "missing rain tip at {temperature} for {profile:?}"
            );
        }
    }
}

#[test]
fn humidity_tips_fire_independently() {
    let humid_hot = recommendation_tips(&humid(weather(26.0), 85), ThermalProfile::Normal);
    assert!(humid_hot.iter().any(|tip| tip.contains("Humid")));

    let humid_mild = recommendation_tips(&humid(weather(24.0), 85), ThermalProfile::Normal);
    assert!(humid_mild.iter().all(|tip| !tip.contains("Humid")));

    // The warm-blooded offset pushes 24 °C over the humid-heat threshold.
    let humid_warm = recommendation_tips(&humid(weather(24.0), 85), ThermalProfile::WarmBlooded);
    assert!(humid_warm.iter().any(|tip| tip.contains("Humid")));

    let dry = recommendation_tips(&humid(weather(15.0), 20), ThermalProfile::Normal);
    assert!(dry.iter().any(|tip| tip.contains("dry")));
}

#[test]
fn tips_follow_check_order() {
    let snapshot = humid(windy(rainy(feeling(weather(15.0), 10.0)), 31.0), 20);

    let tips = recommendation_tips(&snapshot, ThermalProfile::Pigeon);

    assert_eq!(tips.len(), 6);
    assert!(tips[0].contains("cold easily"));
    assert_eq!(tips[1], TemperatureBand::Chilly.tips()[0]);
    assert_eq!(tips[2], FeelsLikeGap::Colder.tip());
    assert!(tips[3].contains("umbrella"));
    assert_eq!(tips[4], WindBand::Strong.tip());
    assert!(tips[5].contains("dry"));
}
