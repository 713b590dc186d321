use clap::Parser;

use crate::error::Result;
use crate::matcher::{AUTO_ACCEPT_SCORE, MIN_MATCH_SCORE, MatchThresholds};

/// Recipe Nutrition Calculator — totals the nutrients of a recipe, one ingredient at a time.
#[derive(Parser, Debug)]
#[command(name = "recipe_nutrition")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the food catalog (CSV, or JSON with a .json extension).
    #[arg(short, long, default_value = "cleaned_usda_foods.csv")]
    pub file: String,

    /// Minimum similarity (0-100) for a food to be offered as a match.
    #[arg(long, default_value_t = MIN_MATCH_SCORE)]
    pub min_score: f64,

    /// Similarity (0-100) at or above which a match is used without confirmation.
    #[arg(long, default_value_t = AUTO_ACCEPT_SCORE)]
    pub auto_accept: f64,

    /// Print the final report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Skip the welcome banner.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn thresholds(&self) -> Result<MatchThresholds> {
        MatchThresholds::new(self.min_score, self.auto_accept)
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
