//! The sorted table of achievable weights and the lookups built on it.
//!
//! Every resolver (plate inventories, discrete sets) produces an
//! [`AchievableTable`]; callers only ever query through the methods here, so
//! the rounding contract is identical regardless of which resolver backs it.

use std::sync::Arc;

use crate::{
    loaded_weight::LoadedWeight,
    weight::{approx_eq, approx_ge, approx_le},
};

/// Achievable weights, strictly ascending by total, one entry per distinct total.
///
/// Cloning is cheap; clones share the same snapshot.
#[derive(Clone, Debug, Default)]
pub struct AchievableTable {
    entries: Arc<[LoadedWeight]>,
}

impl AchievableTable {
    /// Wraps entries that are already sorted and deduplicated.
    pub(crate) fn new(entries: Vec<LoadedWeight>) -> Self {
        debug_assert!(
            entries.windows(2).all(|pair| {
                pair[0].total() < pair[1].total() && !approx_eq(pair[0].total(), pair[1].total())
            }),
            "achievable totals must be strictly ascending"
        );
        AchievableTable {
            entries: entries.into(),
        }
    }

    /// Whether both tables are the same build, not merely equal.
    #[must_use]
    pub fn same_snapshot(&self, other: &AchievableTable) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoadedWeight> {
        self.entries.iter()
    }

    #[must_use]
    pub fn totals(&self) -> Vec<f64> {
        self.entries.iter().map(LoadedWeight::total).collect()
    }

    #[must_use]
    pub fn min(&self) -> Option<&LoadedWeight> {
        self.entries.first()
    }

    #[must_use]
    pub fn max(&self) -> Option<&LoadedWeight> {
        self.entries.last()
    }

    /// Heaviest entry not above `target`, or the zero sentinel when nothing is.
    #[must_use]
    pub fn closest_below_or_equal(&self, target: f64) -> LoadedWeight {
        let index = self
            .entries
            .partition_point(|w| approx_le(w.total(), target));
        match index {
            0 => LoadedWeight::zero(),
            i => self.entries[i - 1].clone(),
        }
    }

    /// Lightest entry not below `target`.
    ///
    /// Past the heaviest achievable total this clamps to the heaviest entry, so
    /// the result can be lighter than `target`. `None` only for an empty table.
    #[must_use]
    pub fn closest_above_or_equal(&self, target: f64) -> Option<LoadedWeight> {
        let index = self
            .entries
            .partition_point(|w| !approx_ge(w.total(), target));
        self.entries
            .get(index)
            .or_else(|| self.entries.last())
            .cloned()
    }

    /// Whichever of the two neighbours of `target` is nearer.
    ///
    /// Equal distances prefer a loading with a bumper, then one with fewer parts.
    #[must_use]
    pub fn closest(&self, target: f64) -> LoadedWeight {
        let below = self.closest_below_or_equal(target);
        let Some(above) = self.closest_above_or_equal(target) else {
            return below;
        };

        let below_distance = (target - below.total()).abs();
        let above_distance = (above.total() - target).abs();

        if !approx_eq(below_distance, above_distance) {
            return if below_distance < above_distance {
                below
            } else {
                above
            };
        }

        match (below.has_bumper(), above.has_bumper()) {
            (true, false) => below,
            (false, true) => above,
            _ if above.parts().len() < below.parts().len() => above,
            _ => below,
        }
    }

    /// The entry just before the one matching `weight`.
    #[must_use]
    pub fn step_below(&self, weight: f64) -> Option<LoadedWeight> {
        let index = self.position(weight)?;
        index.checked_sub(1).map(|i| self.entries[i].clone())
    }

    /// The entry just after the one matching `weight`.
    #[must_use]
    pub fn step_above(&self, weight: f64) -> Option<LoadedWeight> {
        let index = self.position(weight)?;
        self.entries.get(index + 1).cloned()
    }

    fn position(&self, weight: f64) -> Option<usize> {
        let index = self
            .entries
            .partition_point(|w| !approx_ge(w.total(), weight));
        self.entries
            .get(index)
            .filter(|w| approx_eq(w.total(), weight))
            .map(|_| index)
    }
}

impl<'a> IntoIterator for &'a AchievableTable {
    type Item = &'a LoadedWeight;
    type IntoIter = std::slice::Iter<'a, LoadedWeight>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
