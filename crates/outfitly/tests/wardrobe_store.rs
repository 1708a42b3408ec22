use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use outfitly::domain::{ClothingCategory, Season, WardrobeItemDraft, WardrobeItemId};
use outfitly::wardrobe::{InMemoryWardrobeRepository, WardrobeError, WardrobeRepository};

/// Repository whose clock advances one minute per insert.
fn repository() -> InMemoryWardrobeRepository {
    let start = Utc
        .with_ymd_and_hms(2025, 10, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp");
    let ticks = Arc::new(AtomicI64::new(0));
    InMemoryWardrobeRepository::with_clock(move || {
        start + Duration::minutes(ticks.fetch_add(1, Ordering::SeqCst))
    })
}

fn names(items: &[outfitly::domain::WardrobeItem]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

fn stocked() -> InMemoryWardrobeRepository {
    let repo = repository();
    repo.add(
        WardrobeItemDraft::new("Linen Shirt", ClothingCategory::Tops, Season::Summer)
            .with_temperature_band(Some(20), None),
    )
    .expect("add");
    repo.add(
        WardrobeItemDraft::new("Parka", ClothingCategory::Outerwear, Season::Winter)
            .with_color("Olive")
            .with_temperature_band(None, Some(5)),
    )
    .expect("add");
    repo.add(WardrobeItemDraft::new(
        "White Sneakers",
        ClothingCategory::Shoes,
        Season::All,
    ))
    .expect("add");
    repo.add(
        WardrobeItemDraft::new("Rain Shell", ClothingCategory::Outerwear, Season::Fall)
            .with_temperature_band(Some(5), Some(15)),
    )
    .expect("add");
    repo
}

#[test]
fn listings_are_newest_first() {
    let repo = stocked();

    let all = repo.all_items().expect("list");

    assert_eq!(
        names(&all),
        vec!["Rain Shell", "White Sneakers", "Parka", "Linen Shirt"]
    );
    assert_eq!(all[2].color.as_deref(), Some("Olive"));
    assert_eq!(repo.count().expect("count"), 4);
}

#[test]
fn category_and_season_filters() {
    let repo = stocked();

    let outerwear = repo
        .items_by_category(ClothingCategory::Outerwear)
        .expect("category");
    assert_eq!(names(&outerwear), vec!["Rain Shell", "Parka"]);

    let winter = repo.items_by_season(Season::Winter).expect("season");
    assert_eq!(names(&winter), vec!["White Sneakers", "Parka"]);
}

#[test]
fn weather_filter_honours_open_and_closed_bands() {
    let repo = stocked();

    let chilly_fall = repo.items_for_weather(Season::Fall, 10).expect("weather");
    assert_eq!(names(&chilly_fall), vec!["Rain Shell", "White Sneakers"]);

    let cold_fall = repo.items_for_weather(Season::Fall, 2).expect("weather");
    assert_eq!(names(&cold_fall), vec!["White Sneakers"]);

    let hot_summer = repo.items_for_weather(Season::Summer, 28).expect("weather");
    assert_eq!(names(&hot_summer), vec!["White Sneakers", "Linen Shirt"]);
}

#[test]
fn update_and_delete_require_existing_ids() {
    let repo = stocked();
    let mut parka = repo
        .all_items()
        .expect("list")
        .into_iter()
        .find(|item| item.name == "Parka")
        .expect("parka stored");

    parka.color = Some("Black".to_string());
    repo.update(parka.clone()).expect("update");
    let stored = repo
        .items_by_season(Season::Winter)
        .expect("season")
        .into_iter()
        .find(|item| item.id == parka.id)
        .expect("still present");
    assert_eq!(stored.color.as_deref(), Some("Black"));

    repo.delete(parka.id).expect("delete");
    assert_eq!(repo.count().expect("count"), 3);
    assert!(matches!(
        repo.delete(parka.id),
        Err(WardrobeError::NotFound(id)) if id == parka.id
    ));

    let mut ghost = stored;
    ghost.id = WardrobeItemId(999);
    assert!(matches!(repo.update(ghost), Err(WardrobeError::NotFound(_))));
}
