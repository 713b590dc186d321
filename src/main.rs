use clap::Parser;
use log::info;
use std::path::Path;

use recipe_nutrition_rs::catalog::{FoodCatalog, load_catalog};
use recipe_nutrition_rs::cli::Cli;
use recipe_nutrition_rs::error::{NutriError, Result};
use recipe_nutrition_rs::interface::{DialoguerTerminal, greeting, render_report};
use recipe_nutrition_rs::matcher::FuzzyMatcher;
use recipe_nutrition_rs::session::Session;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let thresholds = cli.thresholds()?;
    let path = Path::new(&cli.file);

    if !path.exists() {
        eprintln!("Food catalog not found: {}", cli.file);
        eprintln!("Pass the path to a food catalog with --file.");
        return Ok(());
    }

    let catalog = load_catalog(path)?;
    if catalog.is_empty() {
        return Err(NutriError::EmptyCatalog);
    }
    info!(
        "Matching with min score {} and auto-accept {}",
        thresholds.min_score, thresholds.auto_accept
    );

    if !cli.quiet {
        println!("{}", greeting());
        println!();
    }

    let mut terminal = DialoguerTerminal;
    let report = Session::new(&catalog, FuzzyMatcher, thresholds).run(&mut terminal)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        println!("{}", render_report(&report.totals));
    }

    Ok(())
}
