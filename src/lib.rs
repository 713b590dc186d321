pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod matcher;
pub mod models;
pub mod session;

pub use catalog::{Catalog, FoodCatalog};
pub use error::{NutriError, Result};
pub use models::{FoodEntry, Nutrient, NutrientTotals};
