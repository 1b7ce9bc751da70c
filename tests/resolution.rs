use workout_weights::{
    discrete_set::DiscreteSet,
    equipment::Equipment,
    loading_mode::LoadingMode,
    plate::Plate,
    plate_inventory::PlateInventory,
    plate_kind::PlateKind,
};

fn inventory(rows: &[(f64, u32, PlateKind)]) -> PlateInventory {
    PlateInventory::new(
        rows.iter()
            .map(|(weight, count, kind)| Plate::new(*weight, *count, *kind).unwrap())
            .collect(),
    )
    .unwrap()
}

fn home_plates() -> PlateInventory {
    inventory(&[
        (45.0, 4, PlateKind::Standard),
        (35.0, 4, PlateKind::Standard),
        (25.0, 4, PlateKind::Standard),
        (10.0, 4, PlateKind::Standard),
        (5.0, 4, PlateKind::Standard),
    ])
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn single_side_fifty_five_is_forty_five_and_ten() {
    let loaded = home_plates().closest_below_or_equal(LoadingMode::Single, 55.0);
    assert!(close(loaded.total(), 55.0));
    assert_eq!(loaded.part_weights(), vec![45.0, 10.0]);
}

#[test]
fn dual_doubles_the_per_side_selection() {
    let plates = home_plates();

    let loaded = plates.closest_below_or_equal(LoadingMode::Dual, 110.0);
    assert!(close(loaded.total(), 110.0));
    assert_eq!(loaded.part_weights(), vec![45.0, 10.0]);

    // per-side sums are multiples of 5, so 55 rounds down to 2 x 25
    let loaded = plates.closest_below_or_equal(LoadingMode::Dual, 55.0);
    assert!(close(loaded.total(), 50.0));
    assert_eq!(loaded.part_weights(), vec![25.0]);
}

#[test]
fn bumpers_are_used_when_possible() {
    let plates = inventory(&[
        (25.0, 4, PlateKind::Bumper),
        (10.0, 4, PlateKind::Standard),
        (5.0, 4, PlateKind::Standard),
    ]);
    let loaded = plates.closest(LoadingMode::Single, 55.0);
    assert!(close(loaded.total(), 55.0));
    assert_eq!(loaded.part_weights(), vec![25.0, 25.0, 5.0]);
    assert_eq!(loaded.part_labels(), vec!["bumper", "bumper", ""]);
}

#[test]
fn discrete_set_with_one_extra() {
    let set = DiscreteSet::new(vec![10.0, 20.0], vec![2.0, 3.0], 1).unwrap();
    assert_eq!(
        set.achievable().totals(),
        vec![10.0, 12.0, 13.0, 20.0, 22.0, 23.0]
    );
}

#[test]
fn above_maximum_clamps() {
    let plates = inventory(&[
        (50.0, 1, PlateKind::Standard),
        (25.0, 2, PlateKind::Standard),
    ]);
    let table = plates.achievable(LoadingMode::Single);
    assert!(close(table.max().unwrap().total(), 100.0));

    let loaded = plates.closest_above_or_equal(LoadingMode::Single, 150.0).unwrap();
    assert!(close(loaded.total(), 100.0));
}

#[test]
fn empty_inventory() {
    let plates = PlateInventory::empty();
    for target in [0.0, 5.0, 100.0] {
        for mode in [LoadingMode::Single, LoadingMode::Dual] {
            assert!(plates.closest_below_or_equal(mode, target).is_zero());
            assert!(plates.closest_above_or_equal(mode, target).is_none());
        }
    }
}

#[test]
fn steps_walk_the_table() {
    let plates = home_plates();
    let equipment = Equipment::plates(plates, LoadingMode::Dual);

    let up = equipment.step_above(50.0).unwrap();
    assert!(close(up.total(), 60.0));
    let down = equipment.step_below(60.0).unwrap();
    assert!(close(down.total(), 50.0));
    assert!(equipment.step_below(10.0).is_none());
    assert!(equipment.step_above(55.0).is_none());
}

#[test]
fn editing_inventory_changes_results() {
    let mut plates = home_plates();
    assert!(close(plates.closest(LoadingMode::Dual, 52.5).total(), 50.0));

    plates.add(Plate::new(1.25, 2, PlateKind::Standard).unwrap());
    assert!(close(plates.closest(LoadingMode::Dual, 52.5).total(), 52.5));

    let removed = plates.remove(plates.plates().len() - 1).unwrap();
    assert!(close(removed.weight(), 1.25));
    assert!(close(plates.closest(LoadingMode::Dual, 52.5).total(), 50.0));
}
