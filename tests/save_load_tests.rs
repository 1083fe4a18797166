#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::Array1;
use petri::simulation::cell::{Cell, CellId};
use petri::simulation::dish::{CellView, Dish};
use petri::simulation::params::Params;
use petri::simulation::species::Species;
use petri::simulation::spore::Spore;

fn point(x: f64, y: f64) -> Array1<f64> {
    Array1::from_vec(vec![x, y])
}

#[test]
fn test_cell_round_trips_through_json() {
    let mut original = Cell::new(CellId(17), Species::Consumer, point(123.5, 456.25), 320., 400.);
    original.target = Some(CellId(3));

    let json = serde_json::to_string(&original).unwrap();
    let restored: Cell = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.id, original.id);
    assert_eq!(restored.species, original.species);
    assert_eq!(restored.pos, original.pos);
    assert_eq!(restored.mass, original.mass);
    assert_eq!(restored.radius, original.radius);
    assert_eq!(restored.split_mass, original.split_mass);
    assert_eq!(restored.metabolism, original.metabolism);
    assert_eq!(restored.target, original.target);
    assert_eq!(restored.alive, original.alive);
}

#[test]
fn test_spore_round_trips_through_json() {
    let original = Spore::new(point(10., 20.), 33., Species::Predator, 1500).unwrap();

    let json = serde_json::to_string(&original).unwrap();
    let restored: Spore = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.pos, original.pos);
    assert_eq!(restored.mass, original.mass);
    assert_eq!(restored.origin, original.origin);
    assert_eq!(restored.incubation, original.incubation);
    assert_eq!(restored.alive, original.alive);
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut dish = Dish::with_seed(Params::default(), 21);
    dish.seed(Species::Plant, point(500., 500.), 80., None).unwrap();
    dish.seed(Species::Predator, point(200., 800.), 400., None).unwrap();
    dish.seed_spore(point(600., 300.), 25., Species::Consumer, Some(700)).unwrap();

    let snapshot = dish.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: Vec<CellView> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}
