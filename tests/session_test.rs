use assert_float_eq::*;

use recipe_nutrition_rs::catalog::{Catalog, FoodCatalog};
use recipe_nutrition_rs::interface::{ScriptedTerminal, render_report};
use recipe_nutrition_rs::matcher::{FuzzyMatcher, MatchResult, MatchThresholds, Matcher};
use recipe_nutrition_rs::models::{FoodEntry, NutrientTotals};
use recipe_nutrition_rs::session::{
    CONFIRM_PROMPT, DECLINED_MESSAGE, INVALID_MASS_MESSAGE, Session, SessionReport, SkipReason,
    StepOutcome,
};

/// Matcher that always proposes entry 0 with a fixed score.
struct FixedScoreMatcher(f64);

impl Matcher for FixedScoreMatcher {
    fn best_match(
        &self,
        _query: &str,
        catalog: &dyn FoodCatalog,
        _min_score: f64,
    ) -> Option<MatchResult> {
        Some(MatchResult {
            matched_name: catalog.name(0)?.to_string(),
            score: self.0,
            index: 0,
        })
    }
}

fn apple_catalog() -> Catalog {
    Catalog::new(vec![FoodEntry::new("apple", 52.0, 0.3, 14.0, 0.2)])
}

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        FoodEntry::new("apple", 52.0, 0.3, 14.0, 0.2),
        FoodEntry::new("banana", 89.0, 1.1, 23.0, 0.3),
        FoodEntry::new("butter, salted", 717.0, 0.85, 0.06, 81.11),
        FoodEntry::new("chicken breast", 165.0, 31.0, 0.0, 3.6),
    ])
}

fn run_with<M: Matcher>(
    catalog: &Catalog,
    matcher: M,
    answers: &[&str],
) -> (SessionReport, ScriptedTerminal) {
    let mut term = ScriptedTerminal::new(answers.iter().copied());
    let report = Session::new(catalog, matcher, MatchThresholds::default())
        .run(&mut term)
        .unwrap();
    (report, term)
}

#[test]
fn test_apple_200g_end_to_end() {
    let catalog = apple_catalog();
    let (report, term) = run_with(&catalog, FuzzyMatcher, &["apple", "200", "done"]);

    assert!(!term.prompts().iter().any(|p| p == CONFIRM_PROMPT));
    assert_eq!(
        render_report(&report.totals),
        "Final Nutrition Totals:\n\
         Energy: 104.00 kcal\n\
         Protein: 0.60g\n\
         Carbohydrate: 28.00g\n\
         Fat: 0.40g"
    );
    assert_eq!(report.ingredients.len(), 1);
    assert_eq!(report.ingredients[0].grams, 200.0);
}

#[test]
fn test_declined_confirmation_leaves_totals_zero() {
    let catalog = apple_catalog();
    let (report, term) = run_with(&catalog, FixedScoreMatcher(85.0), &["aple", "n", "done"]);

    assert_eq!(term.prompts().iter().filter(|p| *p == CONFIRM_PROMPT).count(), 1);
    assert!(term.output().contains("Is 'apple' the right food? (score: 85.0)"));
    assert!(term.output().contains(DECLINED_MESSAGE));
    assert_eq!(report.totals, NutrientTotals::default());
    assert!(report.ingredients.is_empty());
    // Declining never asks for a mass.
    assert!(!term.prompts().iter().any(|p| p.starts_with("Enter grams")));
}

#[test]
fn test_two_typo_query_is_offered_for_confirmation() {
    let catalog = Catalog::new(vec![FoodEntry::new("chicken", 239.0, 27.0, 0.0, 14.0)]);
    let (report, term) = run_with(&catalog, FuzzyMatcher, &["chikn", "y", "100", "done"]);

    assert!(term.output().contains("Is 'chicken' the right food? (score: 83.3)"));
    assert!(!term.output().contains("No good match"));
    assert_float_absolute_eq!(report.totals.energy, 239.0, 1e-9);
}

#[test]
fn test_confirmed_match_accumulates() {
    let catalog = apple_catalog();
    let (report, _) = run_with(&catalog, FixedScoreMatcher(85.0), &["aple", "y", "100", "done"]);
    assert_float_absolute_eq!(report.totals.energy, 52.0, 1e-9);
    assert_float_absolute_eq!(report.totals.carbohydrate, 14.0, 1e-9);
}

#[test]
fn test_score_91_is_auto_accepted() {
    let catalog = apple_catalog();
    let (report, term) = run_with(&catalog, FixedScoreMatcher(91.0), &["apple", "100", "done"]);
    assert!(!term.prompts().iter().any(|p| p == CONFIRM_PROMPT));
    assert_float_absolute_eq!(report.totals.energy, 52.0, 1e-9);
}

#[test]
fn test_score_90_requires_confirmation() {
    let catalog = apple_catalog();
    let (report, term) = run_with(&catalog, FixedScoreMatcher(90.0), &["apple", "n", "done"]);
    assert!(term.prompts().iter().any(|p| p == CONFIRM_PROMPT));
    assert!(report.totals.is_zero());
}

#[test]
fn test_score_80_is_a_candidate() {
    let catalog = apple_catalog();
    let (report, term) = run_with(&catalog, FixedScoreMatcher(80.0), &["apple", "yes", "10", "done"]);
    assert!(term.prompts().iter().any(|p| p == CONFIRM_PROMPT));
    assert_eq!(report.ingredients.len(), 1);
}

#[test]
fn test_score_79_is_no_match() {
    let catalog = apple_catalog();
    let (report, term) = run_with(&catalog, FixedScoreMatcher(79.0), &["apple", "done"]);
    assert!(term.output().contains("No good match found for 'apple'"));
    assert!(!term.prompts().iter().any(|p| p == CONFIRM_PROMPT));
    assert!(report.totals.is_zero());
}

#[test]
fn test_malformed_mass_then_done_reports_zero() {
    let catalog = apple_catalog();
    let (report, term) = run_with(&catalog, FuzzyMatcher, &["apple", "invalid", "done"]);

    assert!(term.output().contains(INVALID_MASS_MESSAGE));
    assert_eq!(report.ingredients.len(), 1);
    assert_eq!(report.ingredients[0].grams, 0.0);
    assert_eq!(
        render_report(&report.totals),
        "Final Nutrition Totals:\n\
         Energy: 0.00 kcal\n\
         Protein: 0.00g\n\
         Carbohydrate: 0.00g\n\
         Fat: 0.00g"
    );
}

#[test]
fn test_done_immediately_reports_zero() {
    let catalog = sample_catalog();
    let (report, term) = run_with(&catalog, FuzzyMatcher, &["done"]);
    assert_eq!(report.totals, NutrientTotals::default());
    assert_eq!(term.prompts().len(), 1);
}

#[test]
fn test_rejections_leave_totals_bit_identical() {
    let catalog = sample_catalog();
    let mut session = Session::new(&catalog, FuzzyMatcher, MatchThresholds::default());
    let mut term = ScriptedTerminal::new(["banana", "123.4", "zzzzqqq", "", "done"]);

    assert!(matches!(session.step(&mut term).unwrap(), StepOutcome::Added(_)));
    let before = *session.totals();

    assert_eq!(
        session.step(&mut term).unwrap(),
        StepOutcome::Skipped(SkipReason::NoMatch)
    );
    assert_eq!(
        session.step(&mut term).unwrap(),
        StepOutcome::Skipped(SkipReason::EmptyQuery)
    );

    let after = *session.totals();
    assert_eq!(before.energy.to_bits(), after.energy.to_bits());
    assert_eq!(before.protein.to_bits(), after.protein.to_bits());
    assert_eq!(before.carbohydrate.to_bits(), after.carbohydrate.to_bits());
    assert_eq!(before.fat.to_bits(), after.fat.to_bits());

    assert_eq!(session.step(&mut term).unwrap(), StepOutcome::Finished);
}

#[test]
fn test_totals_equal_sum_of_contributions() {
    let catalog = sample_catalog();
    let (report, _) = run_with(
        &catalog,
        FuzzyMatcher,
        &[
            "Apple", "200", "chicken breast", "150.5", "breast chicken", "20", "banana", "abc",
            "done",
        ],
    );

    assert_eq!(report.ingredients.len(), 4);

    let mut expected = NutrientTotals::default();
    for item in &report.ingredients {
        let (_, entry) = catalog.find_exact(&item.name).unwrap();
        assert_eq!(item.contribution, entry.scaled(item.grams));
        expected.add(&entry.scaled(item.grams));
    }
    assert_float_absolute_eq!(report.totals.energy, expected.energy, 1e-9);
    assert_float_absolute_eq!(report.totals.protein, expected.protein, 1e-9);
    assert_float_absolute_eq!(report.totals.carbohydrate, expected.carbohydrate, 1e-9);
    assert_float_absolute_eq!(report.totals.fat, expected.fat, 1e-9);

    // 104 + 248.325 + 33 + 0
    assert_float_absolute_eq!(report.totals.energy, 385.325, 1e-6);
}

#[test]
fn test_partial_name_goes_through_confirmation() {
    let catalog = Catalog::new(vec![FoodEntry::new("bananas, raw", 89.0, 1.1, 23.0, 0.3)]);
    let (report, term) = run_with(&catalog, FuzzyMatcher, &["banana", "y", "100", "done"]);
    assert!(term.prompts().iter().any(|p| p == CONFIRM_PROMPT));
    assert_float_absolute_eq!(report.totals.energy, 89.0, 1e-9);
}

#[test]
fn test_report_serializes_to_json() {
    let catalog = apple_catalog();
    let (report, _) = run_with(&catalog, FuzzyMatcher, &["apple", "100", "done"]);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["ingredients"][0]["name"], "apple");
    assert_eq!(json["totals"]["energy"], 52.0);
}
