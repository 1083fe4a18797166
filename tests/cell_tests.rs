#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::Array1;
use petri::simulation::cell::{Cell, CellId};
use petri::simulation::species::Species;

fn point(x: f64, y: f64) -> Array1<f64> {
    Array1::from_vec(vec![x, y])
}

fn cell(species: Species, mass: f64, split_mass: f64) -> Cell {
    Cell::new(CellId(0), species, point(500., 500.), mass, split_mass)
}

#[test]
fn test_metabolism_derives_from_split_mass() {
    assert_eq!(cell(Species::Plant, 100., 200.).metabolism, 50. / 200.);
    assert_eq!(cell(Species::Consumer, 100., 400.).metabolism, 50. / 400.);
    // Predators carry a doubled metabolism numerator
    assert_eq!(cell(Species::Predator, 100., 600.).metabolism, 100. / 600.);
    // A split-mass override changes the metabolic rate with it
    assert_eq!(cell(Species::Consumer, 100., 250.).metabolism, 50. / 250.);
}

#[test]
fn test_decay_formula() {
    let mut consumer = cell(Species::Consumer, 200., 400.);
    consumer.decay();
    assert_eq!(consumer.mass, 200. - 200. * 0.0035 * (50. / 400.));

    let mut plant = cell(Species::Plant, 80., 200.);
    plant.decay();
    assert_eq!(plant.mass, 80. - 80. * 0.001 * 0.25);
}

#[test]
fn test_photosynthesis_scales_with_light() {
    let mut bright = cell(Species::Plant, 100., 200.);
    let mut dim = cell(Species::Plant, 100., 200.);
    bright.photosynthesize(1.);
    dim.photosynthesize(0.25);
    assert_eq!(bright.mass, 101.);
    assert_eq!(dim.mass, 100.25);
}

#[test]
fn test_radius_tracks_mass() {
    let mut consumer = cell(Species::Consumer, 100., 400.);
    let small = consumer.radius;
    consumer.mass = 400.;
    consumer.refresh_radius();
    assert!(consumer.radius > small);
    assert_eq!(consumer.radius, (400. / std::f64::consts::PI).sqrt() * 3.);
}

#[test]
fn test_speed_clamps_log_denominator() {
    // ln(mass) <= 1 for these masses; both move at the species cap
    let tiny = cell(Species::Consumer, 0.5, 400.);
    let unit = cell(Species::Consumer, 1.0, 400.);
    let cap = 25. / 1. * (50. / 400.);
    assert_eq!(tiny.speed(), cap);
    assert_eq!(unit.speed(), cap);
}

#[test]
fn test_speed_decreases_with_mass() {
    let light = cell(Species::Predator, 100., 600.);
    let heavy = cell(Species::Predator, 1000., 600.);
    assert!(light.speed() > heavy.speed());
    assert!(heavy.speed() > 0.);
}

#[test]
fn test_advance_moves_one_speed_step() {
    let mut consumer = cell(Species::Consumer, 100., 400.);
    let speed = consumer.speed();
    consumer.advance(0.);
    assert_eq!(consumer.pos[0], 500. + speed);
    assert_eq!(consumer.pos[1], 500.);
}

#[test]
fn test_starvation_threshold() {
    // Plant line: split_mass / 5
    assert!(cell(Species::Plant, 39.9, 200.).is_starved());
    assert!(!cell(Species::Plant, 40., 200.).is_starved());

    // Predator line: split_mass / 6
    assert!(cell(Species::Predator, 99., 600.).is_starved());
    assert!(!cell(Species::Predator, 101., 600.).is_starved());
}

#[test]
fn test_split_threshold_is_strict() {
    assert!(!cell(Species::Plant, 200., 200.).should_split());
    assert!(cell(Species::Plant, 200.1, 200.).should_split());
}

#[test]
fn test_kill_is_permanent() {
    let mut plant = cell(Species::Plant, 100., 200.);
    assert!(plant.is_alive());
    plant.kill();
    assert!(!plant.is_alive());
}
