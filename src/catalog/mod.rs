pub mod seed;

use std::collections::HashMap;

use log::info;

pub use self::seed::{
    BuiltinSeed,
    SeedCatalog,
};
use crate::{
    core::{
        TangoError,
        VocabularyItem,
    },
    persistence::Storage,
};

/// Every vocabulary record known to this run, in load order.
///
/// Iteration order is the order of the stored list, which is also the tie-break
/// used for root suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabCatalog {
    items: Vec<VocabularyItem>,
    index: HashMap<u32, usize>, // id -> position in items
}

impl VocabCatalog {
    /// Loads the catalog from `filename`, seeding and persisting it first when the
    /// file does not exist yet.
    pub fn load(
        storage: &Storage,
        filename: &str,
        seed: &dyn SeedCatalog,
    ) -> Result<Self, TangoError> {
        let stored = storage.load_json::<Vec<VocabularyItem>>(filename).map_err(|e| match e {
            TangoError::Json(err) => {
                TangoError::CorruptCatalog(format!("Failed to parse {}: {}", filename, err))
            }
            other => other,
        })?;

        let catalog = match stored {
            Some(items) => {
                let catalog = Self::from_items(items)?;
                info!("event=catalog_load source=store items={}", catalog.len());
                catalog
            }
            None => {
                let items = seed.seed()?;
                let catalog = Self::from_items(items)?;
                storage.save_json(&catalog.items, filename)?;
                info!("event=catalog_load source=seed items={}", catalog.len());
                catalog
            }
        };

        Ok(catalog)
    }

    /// Builds a catalog, rejecting zero or duplicate ids.
    pub fn from_items(items: Vec<VocabularyItem>) -> Result<Self, TangoError> {
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            if item.id == 0 {
                return Err(TangoError::CorruptCatalog(format!(
                    "record at position {} has id 0",
                    position
                )));
            }
            if index.insert(item.id, position).is_some() {
                return Err(TangoError::CorruptCatalog(format!("duplicate id {}", item.id)));
            }
        }

        Ok(Self { items, index })
    }

    pub fn get(&self, id: u32) -> Option<&VocabularyItem> {
        self.index.get(&id).map(|&position| &self.items[position])
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VocabularyItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All ids by rank ascending; equal ranks keep load order.
    pub fn ids_by_rank(&self) -> Vec<u32> {
        let mut ranked: Vec<&VocabularyItem> = self.items.iter().collect();
        ranked.sort_by_key(|item| item.rank);
        ranked.into_iter().map(|item| item.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    struct FixedSeed(Vec<VocabularyItem>);

    impl SeedCatalog for FixedSeed {
        fn seed(&self) -> Result<Vec<VocabularyItem>, TangoError> {
            Ok(self.0.clone())
        }
    }

    fn sample() -> Vec<VocabularyItem> {
        vec![
            VocabularyItem::new(3, "議会", "ぎかい", "diet/congress", "N3", 700),
            VocabularyItem::new(1, "機会", "きかい", "opportunity", "N3", 500),
            VocabularyItem::new(2, "機械", "きかい", "machine", "N4", 500),
        ]
    }

    #[test]
    fn test_seeds_and_persists_when_absent() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path());

        let catalog = VocabCatalog::load(&storage, "vocab.json", &FixedSeed(sample())).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(storage.exists("vocab.json"));

        // The stored list is the seed verbatim, in seed order
        let stored: Vec<VocabularyItem> = storage.load_json("vocab.json").unwrap().unwrap();
        assert_eq!(stored, sample());

        // Second load reads the store and ignores the seed
        let reloaded = VocabCatalog::load(&storage, "vocab.json", &FixedSeed(Vec::new())).unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn test_lookup_and_order() {
        let catalog = VocabCatalog::from_items(sample()).unwrap();
        assert_eq!(catalog.get(1).unwrap().word, "機会");
        assert!(catalog.get(9).is_none());
        assert!(catalog.contains(2));

        let load_order: Vec<u32> = catalog.iter().map(|item| item.id).collect();
        assert_eq!(load_order, vec![3, 1, 2]);
        // Rank ties (1 and 2) keep load order
        assert_eq!(catalog.ids_by_rank(), vec![1, 2, 3]);
    }

    #[test]
    fn test_rejects_duplicate_and_zero_ids() {
        let mut items = sample();
        items.push(VocabularyItem::new(1, "理解", "りかい", "understanding", "N3", 200));
        assert!(matches!(VocabCatalog::from_items(items), Err(TangoError::CorruptCatalog(_))));

        let items = vec![VocabularyItem::new(0, "世界", "せかい", "world", "N5", 100)];
        assert!(matches!(VocabCatalog::from_items(items), Err(TangoError::CorruptCatalog(_))));
    }

    #[test]
    fn test_invalid_utf8_store_is_corrupt() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path());
        fs::write(storage.path("vocab.json"), b"[\xff\xfe]").unwrap();

        let err = VocabCatalog::load(&storage, "vocab.json", &FixedSeed(sample())).unwrap_err();
        assert!(matches!(err, TangoError::CorruptCatalog(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_malformed_store_is_corrupt() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path());
        let seed = FixedSeed(sample());

        // Missing kana
        fs::write(
            storage.path("vocab.json"),
            r#"[{"id": 1, "word": "機会", "meaning": "opportunity", "level": "N3", "rank": 500}]"#,
        )
        .unwrap();
        let result = VocabCatalog::load(&storage, "vocab.json", &seed);
        assert!(matches!(result, Err(TangoError::CorruptCatalog(_))));

        // Non-numeric rank
        fs::write(
            storage.path("vocab.json"),
            r#"[{"id": 1, "word": "機会", "kana": "きかい", "meaning": "opportunity", "level": "N3", "rank": "high"}]"#,
        )
        .unwrap();
        let result = VocabCatalog::load(&storage, "vocab.json", &seed);
        assert!(matches!(result, Err(TangoError::CorruptCatalog(_))));

        // Duplicate id
        fs::write(
            storage.path("vocab.json"),
            r#"[
                {"id": 1, "word": "機会", "kana": "きかい", "meaning": "opportunity", "level": "N3", "rank": 500},
                {"id": 1, "word": "機械", "kana": "きかい", "meaning": "machine", "level": "N4", "rank": 600}
            ]"#,
        )
        .unwrap();
        let result = VocabCatalog::load(&storage, "vocab.json", &seed);
        assert!(result.unwrap_err().is_fatal());
    }
}
