use serde::{Deserialize, Serialize};

/// The four tracked nutrients, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Energy,
    Protein,
    Carbohydrate,
    Fat,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Carbohydrate,
        Nutrient::Fat,
    ];

    /// Capitalized name used in the report.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Energy => "Energy",
            Nutrient::Protein => "Protein",
            Nutrient::Carbohydrate => "Carbohydrate",
            Nutrient::Fat => "Fat",
        }
    }

    /// Suffix appended directly after the formatted value.
    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Energy => " kcal",
            _ => "g",
        }
    }
}

/// Running per-nutrient totals for a recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub energy: f64,
    pub protein: f64,
    pub carbohydrate: f64,
    pub fat: f64,
}

impl NutrientTotals {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Protein => self.protein,
            Nutrient::Carbohydrate => self.carbohydrate,
            Nutrient::Fat => self.fat,
        }
    }

    /// Merge a contribution into these totals.
    pub fn add(&mut self, other: &NutrientTotals) {
        self.energy += other.energy;
        self.protein += other.protein;
        self.carbohydrate += other.carbohydrate;
        self.fat += other.fat;
    }

    pub fn is_zero(&self) -> bool {
        Nutrient::ALL.iter().all(|&n| self.get(n) == 0.0)
    }
}
