use proptest::prelude::*;

use super::common::*;
use crate::domain::{Outfit, ThermalProfile};
use crate::engine::{OutfitRecommender, TemperatureBand};

#[test]
fn empty_candidates_still_produce_tips() {
    let recommender = OutfitRecommender::default();

    let recommendation = recommender.recommend(&[], &rainy(weather(20.0)), ThermalProfile::Normal);

    assert!(recommendation.best.is_none());
    assert!(recommendation.alternatives.is_empty());
    assert!(!recommendation.tips.is_empty());
}

#[test]
fn picks_highest_scoring_candidate() {
    let recommender = OutfitRecommender::default();
    let candidates = vec![outfit(1, 0, 10), outfit(2, 10, 18), outfit(3, 18, 25)];

    let recommendation = recommender.recommend(&candidates, &weather(15.0), ThermalProfile::Normal);

    assert_eq!(recommendation.best, Some(candidates[1].clone()));
    assert_eq!(
        recommendation.alternatives,
        vec![candidates[0].clone(), candidates[2].clone()]
    );
}

#[test]
fn ties_go_to_the_first_candidate() {
    let recommender = OutfitRecommender::default();
    let candidates = vec![outfit(1, 10, 18), outfit(2, 12, 20)];

    let recommendation = recommender.recommend(&candidates, &weather(15.0), ThermalProfile::Normal);

    assert_eq!(recommendation.best.map(|o| o.id), Some(candidates[0].id));
    assert_eq!(recommendation.alternatives, vec![candidates[1].clone()]);
}

#[test]
fn alternatives_are_capped_and_keep_input_order() {
    let recommender = OutfitRecommender::default();
    let candidates = vec![
        outfit(1, 0, 5),
        outfit(2, 0, 8),
        outfit(3, 10, 18),
        outfit(4, 20, 30),
        outfit(5, 25, 40),
    ];

    let recommendation = recommender.recommend(&candidates, &weather(12.0), ThermalProfile::Normal);

    assert_eq!(recommendation.best.map(|o| o.id), Some(candidates[2].id));
    let ids: Vec<u32> = recommendation.alternatives.iter().map(|o| o.id.0).collect();
    assert_eq!(ids, vec![1, 2, 4]);
}

#[test]
fn thermal_profile_shifts_the_winner() {
    let recommender = OutfitRecommender::default();
    let candidates = vec![outfit(1, 0, 10), outfit(2, 10, 18)];

    let normal = recommender.recommend(&candidates, &weather(11.0), ThermalProfile::Normal);
    let pigeon = recommender.recommend(&candidates, &weather(11.0), ThermalProfile::Pigeon);

    assert_eq!(normal.best.map(|o| o.id.0), Some(2));
    assert_eq!(pigeon.best.map(|o| o.id.0), Some(1));
}

#[test]
fn scorer_and_tips_share_the_effective_temperature() {
    let recommender = OutfitRecommender::default();
    let candidates = vec![outfit(1, 0, 10), outfit(2, 10, 18)];

    let recommendation = recommender.recommend(&candidates, &weather(11.0), ThermalProfile::Pigeon);

    // 11 °C with the pigeon offset is 8 °C for both the ranking and the tips.
    let cold_tip = TemperatureBand::Cold.tips()[0];
    assert!(recommendation.tips.iter().any(|tip| tip == cold_tip));
    let chilly_tip = TemperatureBand::Chilly.tips()[0];
    assert!(recommendation.tips.iter().all(|tip| tip != chilly_tip));
    assert_eq!(recommendation.best.map(|o| o.id.0), Some(1));
}

#[test]
fn rank_reports_scores_in_descending_order() {
    let recommender = OutfitRecommender::default();
    let candidates = vec![outfit(1, 0, 10), outfit(2, 10, 18), outfit(3, 18, 25)];

    let ranked = recommender.rank(&candidates, &weather(15.0), ThermalProfile::Normal);

    let scores: Vec<i32> = ranked.iter().map(|scored| scored.score).collect();
    assert_eq!(scores, vec![100, 85, 75]);
    assert_eq!(ranked[1].outfit.id.0, 3);
}

fn arb_outfit() -> impl Strategy<Value = Outfit> {
    (1u32..1000, -30i32..40, 0i32..25, any::<bool>(), any::<bool>()).prop_map(
        |(id, min_temp, span, rain, wind)| {
            let mut candidate = outfit(id, min_temp, min_temp + span);
            candidate.rain_compatible = rain;
            candidate.wind_compatible = wind;
            candidate
        },
    )
}

fn arb_profile() -> impl Strategy<Value = ThermalProfile> {
    prop_oneof![
        Just(ThermalProfile::Pigeon),
        Just(ThermalProfile::Normal),
        Just(ThermalProfile::WarmBlooded),
    ]
}

proptest! {
    #[test]
    fn recommendation_invariants_hold(
        candidates in prop::collection::vec(arb_outfit(), 0..12),
        temperature in -35.0f64..45.0,
        wind_speed in 0.0f64..70.0,
        raining in any::<bool>(),
        profile in arb_profile(),
    ) {
        let recommender = OutfitRecommender::default();
        let mut snapshot = windy(weather(temperature), wind_speed);
        if raining {
            snapshot = rainy(snapshot);
        }

        let recommendation = recommender.recommend(&candidates, &snapshot, profile);

        prop_assert_eq!(recommendation.best.is_none(), candidates.is_empty());
        prop_assert!(recommendation.alternatives.len() <= 3);

        if let Some(best) = &recommendation.best {
            prop_assert!(!recommendation.alternatives.contains(best));

            let effective = snapshot.with_offset(profile.offset());
            let scorer = recommender.scorer();
            let best_score = scorer.score(best, &effective);
            let first_max = candidates
                .iter()
                .find(|c| scorer.score(c, &effective) == best_score)
                .expect("best is a candidate");
            prop_assert_eq!(first_max, best);
            prop_assert!(candidates.iter().all(|c| scorer.score(c, &effective) <= best_score));

            let expected: Vec<&Outfit> = candidates
                .iter()
                .filter(|c| *c != best)
                .take(3)
                .collect();
            let actual: Vec<&Outfit> = recommendation.alternatives.iter().collect();
            prop_assert_eq!(actual, expected);
        }

        if raining {
            prop_assert!(recommendation.tips.iter().any(|tip| tip.contains("umbrella")));
        }
    }
}
