use serde::{Deserialize, Serialize};

use crate::models::NutrientTotals;

/// A reference food with nutrient values per 100 grams.
///
/// Names are stored lowercase so matching never has to care about case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,

    /// Energy in kcal per 100 g.
    pub energy: f64,

    /// Protein in grams per 100 g.
    pub protein: f64,

    /// Carbohydrate in grams per 100 g.
    pub carbohydrate: f64,

    /// Fat in grams per 100 g.
    pub fat: f64,
}

impl FoodEntry {
    pub fn new(name: &str, energy: f64, protein: f64, carbohydrate: f64, fat: f64) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            energy,
            protein,
            carbohydrate,
            fat,
        }
    }

    /// Nutrient contribution of `mass_g` grams of this food.
    ///
    /// Each value is `(per_100g / 100.0) * mass_g`.
    pub fn scaled(&self, mass_g: f64) -> NutrientTotals {
        NutrientTotals {
            energy: (self.energy / 100.0) * mass_g,
            protein: (self.protein / 100.0) * mass_g,
            carbohydrate: (self.carbohydrate / 100.0) * mass_g,
            fat: (self.fat / 100.0) * mass_g,
        }
    }
}
