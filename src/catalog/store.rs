use crate::models::FoodEntry;

/// Read-only, index-addressable view of the reference foods.
///
/// An index must resolve to the same entry for as long as the catalog lives.
pub trait FoodCatalog {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&FoodEntry>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalized (lowercase) name of the entry at `index`.
    fn name(&self, index: usize) -> Option<&str> {
        self.get(index).map(|f| f.name.as_str())
    }

    /// Names in index order.
    fn names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new((0..self.len()).filter_map(move |i| self.name(i)))
    }
}

/// In-memory catalog backed by a vector.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<FoodEntry>,
}

impl Catalog {
    /// Create a catalog, normalizing every name to trimmed lowercase.
    pub fn new(entries: Vec<FoodEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|mut f| {
                f.name = f.name.trim().to_lowercase();
                f
            })
            .collect();
        Self { entries }
    }

    /// First entry whose name equals `name` after normalization.
    pub fn find_exact(&self, name: &str) -> Option<(usize, &FoodEntry)> {
        let key = name.trim().to_lowercase();
        self.entries.iter().enumerate().find(|(_, f)| f.name == key)
    }
}

impl FoodCatalog for Catalog {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, index: usize) -> Option<&FoodEntry> {
        self.entries.get(index)
    }
}

impl FoodCatalog for [FoodEntry] {
    fn len(&self) -> usize {
        <[FoodEntry]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&FoodEntry> {
        <[FoodEntry]>::get(self, index)
    }
}
