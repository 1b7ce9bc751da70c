use std::{
    collections::HashMap,
    fmt::Debug,
    hash::Hash,
    sync::{Mutex, PoisonError},
};

use tracing::debug;

use crate::achievable_table::AchievableTable;

#[derive(Debug)]
struct Stamped {
    generation: u64,
    table: AchievableTable,
}

/// Lazily built achievable tables, one per key, each stamped with the
/// generation of the equipment it was built from.
///
/// A lookup with a newer generation rebuilds the table under the lock and
/// replaces it whole, so readers only ever see complete tables.
pub(crate) struct WeightCache<K> {
    tables: Mutex<HashMap<K, Stamped>>,
}

impl<K: Copy + Eq + Hash + Debug> WeightCache<K> {
    pub(crate) fn new() -> Self {
        WeightCache {
            tables: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn get_or_build(
        &self,
        key: K,
        generation: u64,
        build: impl FnOnce() -> AchievableTable,
    ) -> AchievableTable {
        let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(stamped) = tables.get(&key).filter(|s| s.generation == generation) {
            return stamped.table.clone();
        }

        let table = build();
        debug!(?key, generation, entries = table.len(), "rebuilt achievable table");
        tables.insert(
            key,
            Stamped {
                generation,
                table: table.clone(),
            },
        );
        table
    }

    pub(crate) fn is_fresh(&self, key: K, generation: u64) -> bool {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .is_some_and(|s| s.generation == generation)
    }

    pub(crate) fn clear(&mut self) {
        self.tables
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<K: Copy + Eq + Hash + Debug> Default for WeightCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

// Clones start cold; the copy rebuilds on first use.
impl<K: Copy + Eq + Hash + Debug> Clone for WeightCache<K> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<K: Debug> Debug for WeightCache<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached = self
            .tables
            .lock()
            .map(|tables| tables.len())
            .unwrap_or_default();
        f.debug_struct("WeightCache").field("cached", &cached).finish()
    }
}
