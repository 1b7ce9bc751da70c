use tracing::trace;

use crate::{
    achievable_table::AchievableTable,
    equipment_error::EquipmentError,
    loaded_weight::LoadedWeight,
    loading_mode::LoadingMode,
    plate::Plate,
    search,
    weight_cache::WeightCache,
};

/// The plates a user owns for one apparatus, heaviest first.
///
/// Achievable tables are built lazily per [`LoadingMode`] and reused until the
/// inventory changes. Every mutation bumps `generation`, which retires all
/// cached tables.
#[derive(Clone, Debug)]
pub struct PlateInventory {
    plates: Vec<Plate>,
    generation: u64,
    cache: WeightCache<LoadingMode>,
}

impl PlateInventory {
    ///
    /// # Errors
    /// If `plates` is not ordered heaviest first.
    ///
    pub fn new(plates: Vec<Plate>) -> Result<Self, EquipmentError> {
        if let Some(index) = plates
            .windows(2)
            .position(|pair| pair[0].weight() < pair[1].weight())
        {
            return Err(EquipmentError::UnsortedPlates(index + 1));
        }

        Ok(PlateInventory {
            plates,
            generation: 0,
            cache: WeightCache::new(),
        })
    }

    #[must_use]
    pub fn empty() -> Self {
        PlateInventory {
            plates: Vec::new(),
            generation: 0,
            cache: WeightCache::new(),
        }
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Inserts `plate` after any plates at least as heavy.
    pub fn add(&mut self, plate: Plate) {
        let index = self
            .plates
            .partition_point(|p| p.weight() >= plate.weight());
        trace!(%plate, index, "adding plate");
        self.plates.insert(index, plate);
        self.invalidate();
    }

    pub fn remove(&mut self, index: usize) -> Option<Plate> {
        if index >= self.plates.len() {
            return None;
        }
        let plate = self.plates.remove(index);
        trace!(%plate, index, "removed plate");
        self.invalidate();
        Some(plate)
    }

    /// Swaps the plate at `index` for `plate`, keeping the heaviest-first order.
    pub fn replace(&mut self, index: usize, plate: Plate) -> Option<Plate> {
        if index >= self.plates.len() {
            return None;
        }
        let old = self.plates.remove(index);
        let index = self
            .plates
            .partition_point(|p| p.weight() >= plate.weight());
        trace!(%old, %plate, index, "replaced plate");
        self.plates.insert(index, plate);
        self.invalidate();
        Some(old)
    }

    #[must_use]
    pub fn achievable(&self, mode: LoadingMode) -> AchievableTable {
        self.cache.get_or_build(mode, self.generation, || {
            AchievableTable::new(search::achievable(&self.plates, mode))
        })
    }

    #[must_use]
    pub fn is_cached(&self, mode: LoadingMode) -> bool {
        self.cache.is_fresh(mode, self.generation)
    }

    #[must_use]
    pub fn closest_below_or_equal(&self, mode: LoadingMode, target: f64) -> LoadedWeight {
        self.achievable(mode).closest_below_or_equal(target)
    }

    #[must_use]
    pub fn closest_above_or_equal(&self, mode: LoadingMode, target: f64) -> Option<LoadedWeight> {
        self.achievable(mode).closest_above_or_equal(target)
    }

    #[must_use]
    pub fn closest(&self, mode: LoadingMode, target: f64) -> LoadedWeight {
        self.achievable(mode).closest(target)
    }

    #[must_use]
    pub fn step_below(&self, mode: LoadingMode, weight: f64) -> Option<LoadedWeight> {
        self.achievable(mode).step_below(weight)
    }

    #[must_use]
    pub fn step_above(&self, mode: LoadingMode, weight: f64) -> Option<LoadedWeight> {
        self.achievable(mode).step_above(weight)
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.cache.clear();
    }
}

impl Default for PlateInventory {
    fn default() -> Self {
        Self::empty()
    }
}
