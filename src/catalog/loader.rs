use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::FoodEntry;

/// One row of the reference dataset as stored on disk.
#[derive(Debug, Default, Deserialize)]
pub struct FoodRecord {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
}

/// CSV variant: unparseable numbers become `None` instead of failing the row.
#[derive(Debug, Deserialize)]
struct CsvFoodRecord {
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    calories: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    protein: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    carbs: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    fat: Option<f64>,
}

impl From<CsvFoodRecord> for FoodRecord {
    fn from(r: CsvFoodRecord) -> Self {
        Self {
            description: r.description,
            calories: r.calories,
            protein: r.protein,
            carbs: r.carbs,
            fat: r.fat,
        }
    }
}

impl FoodRecord {
    /// Convert to a catalog entry: missing description becomes `""`, missing
    /// or invalid numbers become `0.0`.
    pub fn into_entry(self) -> FoodEntry {
        let name = self.description.unwrap_or_default();
        let energy = coerce(&name, "calories", self.calories);
        let protein = coerce(&name, "protein", self.protein);
        let carbohydrate = coerce(&name, "carbs", self.carbs);
        let fat = coerce(&name, "fat", self.fat);
        FoodEntry::new(&name, energy, protein, carbohydrate, fat)
    }
}

fn coerce(name: &str, field: &str, value: Option<f64>) -> f64 {
    match value {
        None => 0.0,
        Some(v) if v.is_finite() && v >= 0.0 => v,
        Some(v) => {
            warn!("'{}': {} value {} is not a non-negative number, using 0", name, field, v);
            0.0
        }
    }
}

/// Parse CSV text with a header row.
pub fn parse_csv(content: &str) -> Result<Vec<FoodEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut entries = Vec::new();
    for row in reader.deserialize::<CsvFoodRecord>() {
        entries.push(FoodRecord::from(row?).into_entry());
    }
    Ok(entries)
}

/// Parse a JSON array of records.
pub fn parse_json(content: &str) -> Result<Vec<FoodEntry>> {
    let records: Vec<FoodRecord> = serde_json::from_str(content)?;
    Ok(records.into_iter().map(FoodRecord::into_entry).collect())
}

/// Load the reference catalog from a `.json` or CSV file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let entries = if is_json {
        parse_json(&content)?
    } else {
        parse_csv(&content)?
    };

    info!("Loaded {} foods from {}", entries.len(), path.display());
    Ok(Catalog::new(entries))
}
