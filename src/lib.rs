//! # Petri - Closed-Dish Cell Ecosystem Simulation
//!
//! A simulation of a closed 2-D ecosystem of biological cells. Plants
//! photosynthesize light from a source at the field center, consumers graze on
//! plants while evading predators, predators hunt consumers (and each other),
//! and spores lie dormant before germinating back into active cells.
//!
//! ## Features
//!
//! - Per-tick lifecycle engine (mass decay/growth, targeting, movement,
//!   consumption, suffocation, mitosis, death)
//! - Light-driven plant growth with inverse-linear falloff from field center
//! - Identity-based target handles that survive population compaction
//! - Seedable randomness for reproducible runs
//! - Read-only snapshots for an external rendering layer
//!
//! ## Core Modules
//!
//! - [`simulation::cell`] - Cell state and mutation methods
//! - [`simulation::dish`] - The owned simulation context and tick driver
//! - [`simulation::lifecycle`] - Per-species tick phases
//! - [`simulation::spore`] - Dormant spores and incubation
//! - [`simulation::spatial`] - KD-tree spatial queries

/// Core simulation logic and data structures.
pub mod simulation {
    /// Cell state, identity, and mutation methods.
    pub mod cell;
    /// The dish: owned simulation context, seeding, tick driver, snapshots.
    pub mod dish;
    /// Error types for seeding and spore construction.
    pub mod error;
    /// Geometric helpers for distance, headings, radii, and light.
    pub mod geometry;
    /// Per-species lifecycle phases executed by the tick driver.
    pub mod lifecycle;
    /// Field configuration parameters.
    pub mod params;
    /// Seedable random number generation.
    pub mod rng;
    /// Spatial indexing for efficient neighbor queries.
    pub mod spatial;
    /// Species tags, colors, and per-species constants.
    pub mod species;
    /// Dormant spores that germinate into active cells.
    pub mod spore;
}
