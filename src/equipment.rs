use std::fmt::Display;

use crate::{
    achievable_table::AchievableTable,
    discrete_set::DiscreteSet,
    loaded_weight::LoadedWeight,
    loading_mode::LoadingMode,
    plate_inventory::PlateInventory,
};

/// What an exercise is performed with, and therefore how a target weight is resolved.
#[derive(Clone, Debug, Default)]
pub enum Equipment {
    /// Nothing to load. Targets are taken as given.
    #[default]
    Bodyweight,
    /// A rack of fixed weights with optional add-ons.
    Fixed(DiscreteSet),
    /// A bar or machine loaded with plates.
    Plates {
        inventory: PlateInventory,
        mode: LoadingMode,
    },
}

impl Equipment {
    #[must_use]
    pub fn plates(inventory: PlateInventory, mode: LoadingMode) -> Self {
        Equipment::Plates { inventory, mode }
    }

    /// `None` for bodyweight, which has no table.
    #[must_use]
    pub fn achievable(&self) -> Option<AchievableTable> {
        match self {
            Equipment::Bodyweight => None,
            Equipment::Fixed(set) => Some(set.achievable()),
            Equipment::Plates { inventory, mode } => Some(inventory.achievable(*mode)),
        }
    }

    #[must_use]
    pub fn closest_below_or_equal(&self, target: f64) -> LoadedWeight {
        match self.achievable() {
            Some(table) => table.closest_below_or_equal(target),
            None => LoadedWeight::new(target, Vec::new()),
        }
    }

    #[must_use]
    pub fn closest_above_or_equal(&self, target: f64) -> Option<LoadedWeight> {
        match self.achievable() {
            Some(table) => table.closest_above_or_equal(target),
            None => Some(LoadedWeight::new(target, Vec::new())),
        }
    }

    #[must_use]
    pub fn closest(&self, target: f64) -> LoadedWeight {
        match self.achievable() {
            Some(table) => table.closest(target),
            None => LoadedWeight::new(target, Vec::new()),
        }
    }

    #[must_use]
    pub fn step_below(&self, weight: f64) -> Option<LoadedWeight> {
        self.achievable()?.step_below(weight)
    }

    #[must_use]
    pub fn step_above(&self, weight: f64) -> Option<LoadedWeight> {
        self.achievable()?.step_above(weight)
    }
}

impl Display for Equipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Equipment::Bodyweight => write!(f, "bodyweight"),
            Equipment::Fixed(set) => write!(
                f,
                "fixed {:?} + up to {} of {:?}",
                set.base(),
                set.max_extras(),
                set.extras()
            ),
            Equipment::Plates { inventory, mode } => {
                let plates = inventory
                    .plates()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>();
                write!(f, "{mode} plates [{}]", plates.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{plate::Plate, plate_kind::PlateKind};

    #[test]
    fn bodyweight_passes_targets_through() {
        let equipment = Equipment::Bodyweight;
        assert!((equipment.closest(42.5).total() - 42.5).abs() < 1e-9);
        assert!(equipment.closest(42.5).parts().is_empty());
        assert!(equipment.step_above(42.5).is_none());
        assert!(equipment.achievable().is_none());
    }

    #[test]
    fn dispatches_to_plates_with_mode() {
        let inventory =
            PlateInventory::new(vec![Plate::new(10.0, 2, PlateKind::Standard).unwrap()]).unwrap();
        let dual = Equipment::plates(inventory.clone(), LoadingMode::Dual);
        let single = Equipment::plates(inventory, LoadingMode::Single);
        assert!((dual.closest(12.0).total() - 20.0).abs() < 1e-9);
        assert!((single.closest(12.0).total() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn dispatches_to_fixed_set() {
        let set = DiscreteSet::new(vec![10.0, 20.0], vec![], 0).unwrap();
        let equipment = Equipment::Fixed(set);
        assert!((equipment.closest_below_or_equal(19.0).total() - 10.0).abs() < 1e-9);
        assert!((equipment.step_above(10.0).unwrap().total() - 20.0).abs() < 1e-9);
        assert!(equipment.step_below(10.0).is_none());
    }

    #[test]
    fn display() {
        let inventory =
            PlateInventory::new(vec![Plate::new(20.0, 2, PlateKind::Bumper).unwrap()]).unwrap();
        assert_eq!(
            Equipment::plates(inventory, LoadingMode::Dual).to_string(),
            "dual plates [20x2 bumper]"
        );
        assert_eq!(Equipment::Bodyweight.to_string(), "bodyweight");
    }
}
