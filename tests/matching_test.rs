use recipe_nutrition_rs::catalog::{Catalog, parse_csv};
use recipe_nutrition_rs::matcher::{
    AUTO_ACCEPT_SCORE, Acceptance, FuzzyMatcher, MIN_MATCH_SCORE, MatchThresholds, Matcher,
    classify_match,
};

const FOODS_CSV: &str = "description,calories,protein,carbs,fat
Butter Salted,717,0.85,0.06,81.11
Cheese Cheddar,403,24.9,1.28,33.1
Chicken Breast,165,31,0,3.6
Bananas Raw,89,1.09,22.84,0.33
Oats,389,16.9,66.3,6.9
Milk Whole,61,3.15,4.8,3.25
";

fn catalog() -> Catalog {
    Catalog::new(parse_csv(FOODS_CSV).unwrap())
}

fn decide(query: &str) -> (Option<usize>, Acceptance) {
    let catalog = catalog();
    let result = FuzzyMatcher.best_match(query, &catalog, MIN_MATCH_SCORE);
    let acceptance = classify_match(result.as_ref(), &MatchThresholds::default());
    (result.map(|m| m.index), acceptance)
}

#[test]
fn test_exact_name_auto_accepts() {
    assert_eq!(decide("oats"), (Some(4), Acceptance::AutoAccept));
    assert_eq!(decide("  CHICKEN BREAST "), (Some(2), Acceptance::AutoAccept));
}

#[test]
fn test_reordered_words_auto_accept() {
    assert_eq!(decide("breast chicken"), (Some(2), Acceptance::AutoAccept));
    assert_eq!(decide("whole milk"), (Some(5), Acceptance::AutoAccept));
}

#[test]
fn test_typos() {
    // Missing letters in a long name are still trusted.
    assert_eq!(decide("chiken breast"), (Some(2), Acceptance::AutoAccept));
    assert_eq!(decide("chickn brest"), (Some(2), Acceptance::AutoAccept));
    assert_eq!(decide("cheddar chese"), (Some(1), Acceptance::AutoAccept));
    // An extra letter in a short name needs confirmation.
    assert_eq!(decide("oatss"), (Some(4), Acceptance::PendingConfirm));
    assert_eq!(decide("chedar"), (None, Acceptance::Rejected));
}

#[test]
fn test_partial_name_needs_confirmation() {
    assert_eq!(decide("banana"), (Some(3), Acceptance::PendingConfirm));
}

#[test]
fn test_unrelated_query_has_no_candidate() {
    assert_eq!(decide("salmon"), (None, Acceptance::Rejected));
    assert_eq!(decide("zzz"), (None, Acceptance::Rejected));
}

#[test]
fn test_scores_stay_in_range() {
    let catalog = catalog();
    for query in ["a", "butter", "cheddar cheese sharp", "milk", "x y z"] {
        if let Some(m) = FuzzyMatcher.best_match(query, &catalog, 0.0) {
            assert!((0.0..=100.0).contains(&m.score), "{} scored {}", query, m.score);
        }
    }
    assert!(AUTO_ACCEPT_SCORE > MIN_MATCH_SCORE);
}
