use crate::discrete_set::DiscreteSet;
use crate::equipment_error::EquipmentError;
use crate::loaded_weight::LoadedWeight;
use crate::loading_mode::LoadingMode;
use crate::plate::Plate;
use crate::plate_inventory::PlateInventory;
use crate::plate_kind::PlateKind;

#[swift_bridge::bridge]
mod ffi {
    extern "Rust" {
        type Plate;
        type PlateKind;
        type LoadingMode;
        type PlateInventory;
        type DiscreteSet;
        type LoadedWeight;
        type EquipmentError;

        #[swift_bridge(associated_to = PlateKind)]
        fn standard() -> PlateKind;
        #[swift_bridge(associated_to = PlateKind)]
        fn bumper() -> PlateKind;
        #[swift_bridge(associated_to = PlateKind)]
        fn magnet() -> PlateKind;

        #[swift_bridge(associated_to = LoadingMode)]
        fn single() -> LoadingMode;
        #[swift_bridge(associated_to = LoadingMode)]
        fn dual() -> LoadingMode;

        #[swift_bridge(associated_to = Plate)]
        fn new(weight: f64, count: u32, kind: PlateKind) -> Result<Plate, EquipmentError>;
        fn weight(self: &Plate) -> f64;
        fn count(self: &Plate) -> u32;

        #[swift_bridge(init)]
        fn empty() -> PlateInventory;
        fn add(self: &mut PlateInventory, plate: Plate);
        fn remove(self: &mut PlateInventory, index: usize) -> Option<Plate>;
        fn replace(self: &mut PlateInventory, index: usize, plate: Plate) -> Option<Plate>;
        fn closest(self: &PlateInventory, mode: LoadingMode, target: f64) -> LoadedWeight;
        fn closest_below_or_equal(
            self: &PlateInventory,
            mode: LoadingMode,
            target: f64,
        ) -> LoadedWeight;
        fn closest_above_or_equal(
            self: &PlateInventory,
            mode: LoadingMode,
            target: f64,
        ) -> Option<LoadedWeight>;
        fn step_below(
            self: &PlateInventory,
            mode: LoadingMode,
            weight: f64,
        ) -> Option<LoadedWeight>;
        fn step_above(
            self: &PlateInventory,
            mode: LoadingMode,
            weight: f64,
        ) -> Option<LoadedWeight>;

        #[swift_bridge(associated_to = DiscreteSet)]
        fn new(
            base: Vec<f64>,
            extras: Vec<f64>,
            max_extras: usize,
        ) -> Result<DiscreteSet, EquipmentError>;
        fn add_base(self: &mut DiscreteSet, weight: f64) -> Result<bool, EquipmentError>;
        fn remove_base(self: &mut DiscreteSet, index: usize) -> Option<f64>;
        fn add_extra(self: &mut DiscreteSet, weight: f64) -> Result<bool, EquipmentError>;
        fn remove_extra(self: &mut DiscreteSet, index: usize) -> Option<f64>;
        fn set_max_extras(self: &mut DiscreteSet, max_extras: usize);
        fn closest(self: &DiscreteSet, target: f64) -> LoadedWeight;
        fn closest_below_or_equal(self: &DiscreteSet, target: f64) -> LoadedWeight;
        fn closest_above_or_equal(self: &DiscreteSet, target: f64) -> Option<LoadedWeight>;
        fn step_below(self: &DiscreteSet, weight: f64) -> Option<LoadedWeight>;
        fn step_above(self: &DiscreteSet, weight: f64) -> Option<LoadedWeight>;

        fn total(self: &LoadedWeight) -> f64;
        fn part_weights(self: &LoadedWeight) -> Vec<f64>;
        fn part_labels(self: &LoadedWeight) -> Vec<String>;

        fn to_string(self: &EquipmentError) -> String;
    }
}
