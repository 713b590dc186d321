pub mod constants;
pub mod policy;
pub mod scoring;

use log::debug;
use serde::Serialize;

use crate::catalog::FoodCatalog;

pub use constants::*;
pub use policy::{Acceptance, MatchThresholds, classify, classify_match, resolve_confirmation};
pub use scoring::{normalize_query, weighted_ratio};

/// Best catalog candidate for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub matched_name: String,
    /// Similarity in `[0, 100]`.
    pub score: f64,
    /// Position of the entry in the catalog.
    pub index: usize,
}

/// Resolves free text to a catalog entry.
pub trait Matcher {
    /// Best candidate scoring at least `min_score`, or `None`.
    fn best_match(
        &self,
        query: &str,
        catalog: &dyn FoodCatalog,
        min_score: f64,
    ) -> Option<MatchResult>;
}

/// Exhaustive fuzzy matcher over every catalog name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatcher;

impl Matcher for FuzzyMatcher {
    fn best_match(
        &self,
        query: &str,
        catalog: &dyn FoodCatalog,
        min_score: f64,
    ) -> Option<MatchResult> {
        let query = normalize_query(query);
        if query.is_empty() {
            return None;
        }

        let mut best: Option<(usize, f64)> = None;
        for index in 0..catalog.len() {
            let Some(name) = catalog.name(index) else {
                continue;
            };
            let score = weighted_ratio(&query, name);
            // Strictly greater keeps the first of equal scores.
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((index, score));
            }
        }

        let (index, score) = best?;
        debug!("Best match for '{}': index {} score {:.1}", query, index, score);
        if score < min_score {
            return None;
        }

        Some(MatchResult {
            matched_name: catalog.name(index)?.to_string(),
            score,
            index,
        })
    }
}
