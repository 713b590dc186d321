use log::{debug, info, warn};
use serde::Serialize;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::interface::Terminal;
use crate::matcher::{
    Acceptance, DONE_TOKEN, MatchResult, MatchThresholds, Matcher, classify_match,
    normalize_query, resolve_confirmation,
};
use crate::models::NutrientTotals;
use crate::session::mass::parse_mass;

pub const QUERY_PROMPT: &str = "Enter food item (or 'done')";
pub const CONFIRM_PROMPT: &str = "Type y for yes, or n for no";
pub const INVALID_MASS_MESSAGE: &str = "Invalid input - using 0 grams";
pub const DECLINED_MESSAGE: &str = "Let's try again.";

/// An ingredient folded into the totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedIngredient {
    pub name: String,
    pub grams: f64,
    pub score: f64,
    pub contribution: NutrientTotals,
}

/// Why an iteration left the totals untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyQuery,
    NoMatch,
    Declined,
}

/// Result of one loop iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Added(AcceptedIngredient),
    Skipped(SkipReason),
    Finished,
}

/// Totals and ingredient log at the end of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionReport {
    pub totals: NutrientTotals,
    pub ingredients: Vec<AcceptedIngredient>,
}

/// Interactive match-and-accumulate loop.
pub struct Session<'a, M: Matcher> {
    catalog: &'a dyn FoodCatalog,
    matcher: M,
    thresholds: MatchThresholds,
    totals: NutrientTotals,
    ingredients: Vec<AcceptedIngredient>,
}

impl<'a, M: Matcher> Session<'a, M> {
    pub fn new(catalog: &'a dyn FoodCatalog, matcher: M, thresholds: MatchThresholds) -> Self {
        Self {
            catalog,
            matcher,
            thresholds,
            totals: NutrientTotals::default(),
            ingredients: Vec::new(),
        }
    }

    pub fn totals(&self) -> &NutrientTotals {
        &self.totals
    }

    pub fn ingredients(&self) -> &[AcceptedIngredient] {
        &self.ingredients
    }

    /// Run iterations until the done token is entered.
    ///
    /// Only terminal failures end the loop early.
    pub fn run(mut self, terminal: &mut dyn Terminal) -> Result<SessionReport> {
        loop {
            match self.step(terminal)? {
                StepOutcome::Finished => break,
                StepOutcome::Added(item) => debug!("Added {} ({} g)", item.name, item.grams),
                StepOutcome::Skipped(reason) => debug!("Skipped iteration: {:?}", reason),
            }
        }
        Ok(self.into_report())
    }

    pub fn into_report(self) -> SessionReport {
        SessionReport {
            totals: self.totals,
            ingredients: self.ingredients,
        }
    }

    /// Run one query → match → confirm → mass → accumulate iteration.
    pub fn step(&mut self, terminal: &mut dyn Terminal) -> Result<StepOutcome> {
        let query = normalize_query(&terminal.read_line(QUERY_PROMPT)?);

        if query == DONE_TOKEN {
            return Ok(StepOutcome::Finished);
        }
        if query.is_empty() {
            terminal.say("Please enter a food name.");
            return Ok(StepOutcome::Skipped(SkipReason::EmptyQuery));
        }

        let candidate = self
            .matcher
            .best_match(&query, self.catalog, self.thresholds.min_score);

        let candidate = match (classify_match(candidate.as_ref(), &self.thresholds), candidate) {
            (Acceptance::AutoAccept, Some(m)) => m,
            (Acceptance::PendingConfirm, Some(m)) => {
                if !self.confirm(terminal, &m)? {
                    terminal.say(DECLINED_MESSAGE);
                    return Ok(StepOutcome::Skipped(SkipReason::Declined));
                }
                m
            }
            _ => return Ok(self.no_match(terminal, &query)),
        };

        let Some(entry) = self.catalog.get(candidate.index) else {
            warn!(
                "Matcher returned index {} outside a catalog of {} entries",
                candidate.index,
                self.catalog.len()
            );
            return Ok(self.no_match(terminal, &query));
        };

        terminal.say(&format!(
            "Matched: {} (confidence: {:.1}%)",
            entry.name, candidate.score
        ));

        let mass_text = terminal.read_line(&format!("Enter grams for {}", entry.name))?;
        let grams = match parse_mass(&mass_text) {
            Ok(grams) => grams,
            Err(e) => {
                debug!("{}", e);
                terminal.say(INVALID_MASS_MESSAGE);
                0.0
            }
        };

        let contribution = entry.scaled(grams);
        self.totals.add(&contribution);
        info!("Accepted {} g of {}", grams, entry.name);

        let item = AcceptedIngredient {
            name: entry.name.clone(),
            grams,
            score: candidate.score,
            contribution,
        };
        self.ingredients.push(item.clone());
        Ok(StepOutcome::Added(item))
    }

    fn confirm(&self, terminal: &mut dyn Terminal, candidate: &MatchResult) -> Result<bool> {
        terminal.say(&format!(
            "Is '{}' the right food? (score: {:.1})",
            candidate.matched_name, candidate.score
        ));
        let answer = terminal.read_line(CONFIRM_PROMPT)?;
        Ok(resolve_confirmation(&answer) == Acceptance::AutoAccept)
    }

    fn no_match(&self, terminal: &mut dyn Terminal, query: &str) -> StepOutcome {
        terminal.say(&format!("No good match found for '{}'. Try again.", query));
        StepOutcome::Skipped(SkipReason::NoMatch)
    }
}
