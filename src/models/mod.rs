mod food;
mod nutrients;

pub use food::FoodEntry;
pub use nutrients::{Nutrient, NutrientTotals};
