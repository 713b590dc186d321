mod loader;
mod store;

pub use loader::{FoodRecord, load_catalog, parse_csv, parse_json};
pub use store::{Catalog, FoodCatalog};
