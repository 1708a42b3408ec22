use outfitly::domain::{Conditions, Outfit, TimeSlot, UserPreferences, Weather};
use outfitly::orchestrator::RecommendationUpdate;
use outfitly::preferences::PreferenceKey;

pub(crate) fn print_weather(weather: &Weather) {
    println!(
        "{}: {:.1}°C (feels like {:.1}°C), {} | wind {:.0} km/h | humidity {}%{}",
        weather.city_name,
        weather.temperature,
        weather.feels_like,
        weather.condition.label(),
        weather.wind_speed,
        weather.humidity,
        if weather.is_raining { " | raining" } else { "" }
    );
}

pub(crate) fn print_forecast(conditions: &Conditions) {
    let Some(forecast) = &conditions.forecast else {
        return;
    };
    println!("Forecast:");
    for slot in TimeSlot::ALL {
        match forecast.slot(slot) {
            Some(reading) => println!(
                "  - {:<8} {:>5.1}°C {} | rain {}%",
                slot.label(),
                reading.temperature,
                reading.condition.label(),
                reading.rain_probability
            ),
            None => println!("  - {:<8} n/a", slot.label()),
        }
    }
}

pub(crate) fn print_update(update: &RecommendationUpdate) {
    println!(
        "\nRecommendation for {} ({})",
        update.gender.label(),
        update.thermal_profile.label()
    );

    match &update.recommendation.best {
        Some(best) => {
            println!("Best match: {}", best.title);
            println!("  {}", best.description);
            println!("  Wear: {}", best.items.join(", "));
        }
        None => println!("No outfit in the catalog fits this weather."),
    }

    if !update.recommendation.alternatives.is_empty() {
        println!("Alternatives:");
        for outfit in &update.recommendation.alternatives {
            println!("  - {}", outfit.title);
        }
    }

    if !update.recommendation.tips.is_empty() {
        println!("Tips:");
        for tip in &update.recommendation.tips {
            println!("  - {tip}");
        }
    }

    if !update.alerts.is_empty() {
        println!("Alerts:");
        for alert in &update.alerts {
            println!(
                "  - [{}] {} -> {}",
                alert.severity.label(),
                alert.message,
                alert.recommendation
            );
        }
    }
}

pub(crate) fn print_outfits(outfits: &[Outfit]) {
    println!("{} outfits", outfits.len());
    for outfit in outfits {
        let mut flags = Vec::new();
        if outfit.rain_compatible {
            flags.push("rain");
        }
        if outfit.wind_compatible {
            flags.push("wind");
        }
        println!(
            "  #{:<3} {:<22} {:<7} {:>3}..{:<3}°C {}",
            outfit.id.0,
            outfit.title,
            outfit.gender.label(),
            outfit.min_temp,
            outfit.max_temp,
            flags.join(",")
        );
    }
}

pub(crate) fn print_preferences(preferences: &UserPreferences) {
    for key in PreferenceKey::ALL {
        let value = match key {
            PreferenceKey::Gender => preferences.gender.as_str().to_string(),
            PreferenceKey::LastCity => preferences.last_city.clone().unwrap_or_default(),
            PreferenceKey::IsPremium => preferences.is_premium.to_string(),
            PreferenceKey::ThermalProfile => preferences.thermal_profile.as_str().to_string(),
            PreferenceKey::NotificationsEnabled => preferences.notifications_enabled.to_string(),
            PreferenceKey::DarkMode => preferences.dark_mode.as_str().to_string(),
        };
        println!("{key} = {value}");
    }
}
