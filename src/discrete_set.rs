//! Fixed-weight equipment: a rack of standalone weights (dumbbells,
//! kettlebells) plus small add-ons such as magnets that can be stacked onto
//! any of them.

use itertools::Itertools;
use tracing::trace;

use crate::{
    achievable_table::AchievableTable,
    equipment_error::EquipmentError,
    loaded_weight::{LoadedWeight, Part},
    plate_kind::PlateKind,
    weight::approx_eq,
    weight_cache::WeightCache,
};

#[derive(Clone, Debug)]
pub struct DiscreteSet {
    base: Vec<f64>,
    extras: Vec<f64>,
    max_extras: usize,
    generation: u64,
    cache: WeightCache<()>,
}

impl DiscreteSet {
    ///
    /// # Errors
    /// If any weight is not positive, or either list is not strictly ascending.
    ///
    pub fn new(
        base: Vec<f64>,
        extras: Vec<f64>,
        max_extras: usize,
    ) -> Result<Self, EquipmentError> {
        validate(&base)?;
        validate(&extras)?;
        Ok(DiscreteSet {
            base,
            extras,
            max_extras,
            generation: 0,
            cache: WeightCache::new(),
        })
    }

    /// Sorts and deduplicates the given weights before validating them.
    ///
    /// # Errors
    /// If any weight is not positive.
    ///
    pub fn from_unsorted(
        base: Vec<f64>,
        extras: Vec<f64>,
        max_extras: usize,
    ) -> Result<Self, EquipmentError> {
        Self::new(normalized(base), normalized(extras), max_extras)
    }

    #[must_use]
    pub fn base(&self) -> &[f64] {
        &self.base
    }

    #[must_use]
    pub fn extras(&self) -> &[f64] {
        &self.extras
    }

    #[must_use]
    pub fn max_extras(&self) -> usize {
        self.max_extras
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    ///
    /// # Errors
    /// If `weight` is not positive.
    ///
    pub fn add_base(&mut self, weight: f64) -> Result<bool, EquipmentError> {
        let added = insert_sorted(&mut self.base, weight)?;
        if added {
            trace!(weight, "added base weight");
            self.invalidate();
        }
        Ok(added)
    }

    pub fn remove_base(&mut self, index: usize) -> Option<f64> {
        if index >= self.base.len() {
            return None;
        }
        let weight = self.base.remove(index);
        trace!(weight, "removed base weight");
        self.invalidate();
        Some(weight)
    }

    ///
    /// # Errors
    /// If `weight` is not positive.
    ///
    pub fn add_extra(&mut self, weight: f64) -> Result<bool, EquipmentError> {
        let added = insert_sorted(&mut self.extras, weight)?;
        if added {
            trace!(weight, "added extra weight");
            self.invalidate();
        }
        Ok(added)
    }

    pub fn remove_extra(&mut self, index: usize) -> Option<f64> {
        if index >= self.extras.len() {
            return None;
        }
        let weight = self.extras.remove(index);
        trace!(weight, "removed extra weight");
        self.invalidate();
        Some(weight)
    }

    pub fn set_max_extras(&mut self, max_extras: usize) {
        if self.max_extras != max_extras {
            self.max_extras = max_extras;
            self.invalidate();
        }
    }

    #[must_use]
    pub fn achievable(&self) -> AchievableTable {
        self.cache.get_or_build((), self.generation, || {
            AchievableTable::new(self.combinations())
        })
    }

    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.cache.is_fresh((), self.generation)
    }

    #[must_use]
    pub fn closest_below_or_equal(&self, target: f64) -> LoadedWeight {
        self.achievable().closest_below_or_equal(target)
    }

    #[must_use]
    pub fn closest_above_or_equal(&self, target: f64) -> Option<LoadedWeight> {
        self.achievable().closest_above_or_equal(target)
    }

    #[must_use]
    pub fn closest(&self, target: f64) -> LoadedWeight {
        self.achievable().closest(target)
    }

    #[must_use]
    pub fn step_below(&self, weight: f64) -> Option<LoadedWeight> {
        self.achievable().step_below(weight)
    }

    #[must_use]
    pub fn step_above(&self, weight: f64) -> Option<LoadedWeight> {
        self.achievable().step_above(weight)
    }

    /// Each base weight with every subset of at most `max_extras` extras.
    /// Equal totals keep the combination with fewer extras.
    fn combinations(&self) -> Vec<LoadedWeight> {
        let stack = self.max_extras.min(self.extras.len());

        let mut candidates = self
            .base
            .iter()
            .flat_map(|base| {
                (0..=stack).flat_map(move |size| {
                    self.extras
                        .iter()
                        .copied()
                        .combinations(size)
                        .map(move |extras| (*base, extras))
                })
            })
            .map(|(base, extras)| (base + extras.iter().sum::<f64>(), base, extras))
            .collect::<Vec<_>>();

        candidates.sort_by(|a, b| a.0.total_cmp(&b.0));

        // compared against the kept total, so neighbours never end up approximately equal
        let mut best: Vec<(f64, f64, Vec<f64>)> = Vec::new();
        for candidate in candidates {
            match best.last_mut() {
                Some(current) if approx_eq(current.0, candidate.0) => {
                    if candidate.2.len() < current.2.len() {
                        *current = candidate;
                    }
                }
                _ => best.push(candidate),
            }
        }

        best.into_iter()
            .map(|(total, base, extras)| {
                let parts = std::iter::once(Part::new(base, PlateKind::Standard))
                    .chain(extras.into_iter().map(|w| Part::new(w, PlateKind::Magnet)))
                    .collect();
                LoadedWeight::new(total, parts)
            })
            .collect()
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.cache.clear();
    }
}

fn validate(weights: &[f64]) -> Result<(), EquipmentError> {
    if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w <= 0.0) {
        return Err(EquipmentError::NonPositiveWeight(*bad));
    }
    if let Some(index) = weights
        .windows(2)
        .position(|pair| pair[0] >= pair[1] || approx_eq(pair[0], pair[1]))
    {
        return Err(EquipmentError::UnsortedWeights(index + 1));
    }
    Ok(())
}

fn normalized(weights: Vec<f64>) -> Vec<f64> {
    weights
        .into_iter()
        .sorted_by(f64::total_cmp)
        .dedup_by(|a, b| approx_eq(*a, *b))
        .collect()
}

/// Inserts keeping ascending unique order. `Ok(false)` if an equal weight is already present.
fn insert_sorted(weights: &mut Vec<f64>, weight: f64) -> Result<bool, EquipmentError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(EquipmentError::NonPositiveWeight(weight));
    }
    let index = weights.partition_point(|w| *w < weight && !approx_eq(*w, weight));
    if weights.get(index).is_some_and(|w| approx_eq(*w, weight)) {
        return Ok(false);
    }
    weights.insert(index, weight);
    Ok(true)
}
