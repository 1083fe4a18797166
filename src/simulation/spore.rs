//! Dormant spores that germinate into active cells.
//!
//! Spores are inert: they do not feed, move, or interact, and other cells
//! cannot see them. Each counts down a randomized incubation timer and then
//! hatches into a cell of its origin species carrying its stored mass.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::geometry;
use super::species::{ColorHint, Species};

/// Incubation window lower bound in ticks.
pub const INCUBATION_MIN: u32 = 100;
/// Incubation window upper bound in ticks.
pub const INCUBATION_MAX: u32 = 2000;

/// A dormant spore awaiting germination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spore {
    /// Position in 2D field space, fixed for the spore's whole life.
    pub pos: Array1<f64>,
    /// Mass the germinated cell will start with.
    pub mass: f64,
    /// Species the spore germinates into. Never `Species::Spore`.
    pub origin: Species,
    /// Ticks remaining until germination.
    pub incubation: u32,
    /// Liveness flag; cleared on germination, compacted at tick end.
    pub alive: bool,
}

impl Spore {
    /// Creates a spore, validating the origin species.
    ///
    /// # Arguments
    ///
    /// * `pos` - Resting position
    /// * `mass` - Mass carried into germination
    /// * `origin` - Species to germinate into
    /// * `incubation` - Ticks until germination
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidSporeOrigin`] if `origin` is `Species::Spore`.
    pub fn new(
        pos: Array1<f64>,
        mass: f64,
        origin: Species,
        incubation: u32,
    ) -> Result<Self, SimError> {
        if origin == Species::Spore {
            return Err(SimError::InvalidSporeOrigin(origin));
        }
        Ok(Self {
            pos,
            mass,
            origin,
            incubation,
            alive: true,
        })
    }

    /// Spore body radius: the bare `sqrt(mass / pi)` with no multiplier.
    pub fn radius(&self) -> f64 {
        geometry::radius_from_mass(self.mass, Species::Spore.profile().radius_factor)
    }

    /// Render color: spores show the color of their origin species.
    pub fn color_hint(&self) -> ColorHint {
        self.origin.color_hint()
    }

    /// Checks if the spore is still dormant (not yet germinated).
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}
