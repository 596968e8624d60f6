use crate::assessment::recommendations::{anxiety_suggestions, depression_suggestions};
use crate::assessment::{recommend, ScoreBand};

#[test]
fn band_boundaries_are_inclusive_on_the_low_side() {
    assert_eq!(ScoreBand::from_total(0), ScoreBand::Low);
    assert_eq!(ScoreBand::from_total(5), ScoreBand::Low);
    assert_eq!(ScoreBand::from_total(6), ScoreBand::Moderate);
    assert_eq!(ScoreBand::from_total(10), ScoreBand::Moderate);
    assert_eq!(ScoreBand::from_total(11), ScoreBand::High);
    assert_eq!(ScoreBand::from_total(u32::MAX), ScoreBand::High);
}

#[test]
fn zero_totals_map_to_low_band_for_both_dimensions() {
    let recommendations = recommend(0, 0);
    assert_eq!(
        recommendations.depression,
        vec![
            "Maintain regular physical activity",
            "Practice mindfulness for 10 minutes daily",
            "Keep a gratitude journal",
        ]
    );
    assert_eq!(
        recommendations.anxiety,
        vec![
            "Practice deep breathing exercises",
            "Limit exposure to negative news",
            "Maintain regular physical activity",
        ]
    );
}

#[test]
fn dimensions_are_bucketed_independently() {
    let recommendations = recommend(11, 6);
    assert_eq!(
        recommendations.depression,
        depression_suggestions(ScoreBand::High)
    );
    assert_eq!(
        recommendations.anxiety,
        anxiety_suggestions(ScoreBand::Moderate)
    );
    assert_eq!(recommendations.depression[1], "Join a support group");
    assert_eq!(
        recommendations.anxiety[2],
        "Keep a worry journal to identify patterns"
    );
}

#[test]
fn boundary_totals_select_expected_lists() {
    assert_eq!(recommend(5, 0).depression, depression_suggestions(ScoreBand::Low));
    assert_eq!(
        recommend(6, 0).depression,
        depression_suggestions(ScoreBand::Moderate)
    );
    assert_eq!(
        recommend(10, 0).depression,
        depression_suggestions(ScoreBand::Moderate)
    );
    assert_eq!(recommend(11, 0).depression, depression_suggestions(ScoreBand::High));
    assert_eq!(recommend(0, 11).anxiety, anxiety_suggestions(ScoreBand::High));
}

#[test]
fn recommend_is_deterministic() {
    for (depression, anxiety) in [(0, 0), (7, 3), (12, 15)] {
        assert_eq!(recommend(depression, anxiety), recommend(depression, anxiety));
    }
}

#[test]
fn bucket_lists_hold_three_or_four_entries() {
    for band in [ScoreBand::Low, ScoreBand::Moderate, ScoreBand::High] {
        assert!((3..=4).contains(&depression_suggestions(band).len()));
        assert!((3..=4).contains(&anxiety_suggestions(band).len()));
    }
}
