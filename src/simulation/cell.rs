//! Cell state, identity, and mutation methods.
//!
//! A single record serves every active species; species-specific constants
//! come from the [`SpeciesProfile`] table and species-specific behavior lives
//! in the lifecycle phases.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::geometry;
use super::species::{Species, SpeciesProfile};

/// Unique, never-reused identity of a cell.
///
/// Issued from a monotonically increasing counter by the dish. Because ids
/// are never recycled, holding a `CellId` across ticks is safe: a liveness
/// lookup that misses means the referent died, never that the id now points
/// at a different cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(pub u64);

/// A simulated cell of any active species.
///
/// Cells can:
/// - Lose mass to metabolism each tick (and gain it from light, for plants)
/// - Move toward prey and away from predators (mobile species)
/// - Consume smaller overlapping cells
/// - Split once their mass passes the species threshold
/// - Die by starvation, suffocation, consumption, or leaving the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    /// Unique identifier for this cell.
    pub id: CellId,
    /// Species tag, fixed at creation. Never `Species::Spore`.
    pub species: Species,
    /// Position in 2D field space.
    pub pos: Array1<f64>,
    /// Current mass; drives radius, energy balance, and reproduction.
    pub mass: f64,
    /// Body radius derived from mass; refreshed before any interaction test.
    pub radius: f64,
    /// Mass threshold above which this cell splits.
    pub split_mass: f64,
    /// Metabolic rate scaling both decay and movement speed.
    pub metabolism: f64,
    /// Identity of the prey cell currently being chased, if any.
    pub target: Option<CellId>,
    /// Liveness flag; dead cells are skipped and compacted at tick end.
    pub alive: bool,
}

impl Cell {
    /// Creates a new cell.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier issued by the dish
    /// * `species` - Active species tag
    /// * `pos` - Starting position
    /// * `mass` - Starting mass
    /// * `split_mass` - Reproduction threshold (species default or override)
    pub fn new(id: CellId, species: Species, pos: Array1<f64>, mass: f64, split_mass: f64) -> Self {
        let profile = species.profile();
        Self {
            id,
            species,
            pos,
            mass,
            radius: geometry::radius_from_mass(mass, profile.radius_factor),
            split_mass,
            metabolism: profile.metabolism_numerator / split_mass,
            target: None,
            alive: true,
        }
    }

    /// Returns the constant parameter table for this cell's species.
    pub fn profile(&self) -> &'static SpeciesProfile {
        self.species.profile()
    }

    /// Checks if the cell is alive.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Marks the cell dead. Retirement happens at tick end.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Applies one tick of metabolic mass decay.
    pub fn decay(&mut self) {
        self.mass -= self.mass * self.profile().decay_rate * self.metabolism;
    }

    /// Adds photosynthesized mass for the given light intensity.
    pub fn photosynthesize(&mut self, light: f64) {
        self.mass += light * self.mass / 100.;
    }

    /// Recomputes the body radius from the current mass.
    ///
    /// Must run after any mass change and before any overlap test in the
    /// same tick; a stale radius must never feed a collision check.
    pub fn refresh_radius(&mut self) {
        self.radius = geometry::radius_from_mass(self.mass, self.profile().radius_factor);
    }

    /// Movement speed for the current mass.
    ///
    /// Speed falls as mass grows (`C / ln(mass) * metabolism`), trading
    /// mobility for size. The log denominator is clamped to 1 so masses at
    /// or below `e` move at the species cap instead of dividing by zero or
    /// going negative.
    pub fn speed(&self) -> f64 {
        self.profile().speed_factor / self.mass.ln().max(1.) * self.metabolism
    }

    /// Moves one speed-step along the given bearing.
    pub fn advance(&mut self, angle: f64) {
        let step = geometry::heading(angle) * self.speed();
        self.pos += &step;
    }

    /// Checks whether the cell's mass has fallen below the starvation line.
    pub fn is_starved(&self) -> bool {
        self.mass < self.split_mass / self.profile().starvation_divisor
    }

    /// Checks whether the cell's mass has passed the split threshold.
    pub fn should_split(&self) -> bool {
        self.mass > self.split_mass
    }
}
