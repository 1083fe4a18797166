//! Species tags, render colors, and the per-species constant table.
//!
//! Species-specific behavior lives in the lifecycle phases; everything that
//! is merely a constant (thresholds, rates, multipliers) is dispatched here
//! through [`SpeciesProfile`] so a single [`crate::simulation::cell::Cell`]
//! record serves all species.

use serde::{Deserialize, Serialize};

/// Fixed category of a cell, determining its behavioral ruleset.
///
/// A cell's species is set at creation and never changes. `Spore` is the
/// dormant form; an active cell never carries the `Spore` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    /// Photosynthesizing, stationary. Suffocates smaller overlapping plants.
    Plant,
    /// Grazes on plants, evades predators.
    Consumer,
    /// Hunts consumers; will also consume smaller predators.
    Predator,
    /// Dormant form awaiting germination.
    Spore,
}

/// Color hint for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorHint {
    /// Plants and plant spores.
    Green,
    /// Consumers and consumer spores.
    Blue,
    /// Predators and predator spores.
    Red,
}

/// Per-species constant parameters.
///
/// One static table entry per species; behavior code looks constants up here
/// instead of branching on the species tag inline.
#[derive(Debug, Clone, Copy)]
pub struct SpeciesProfile {
    /// Mass threshold above which the cell splits.
    pub split_mass: f64,
    /// Multiplier applied to `sqrt(mass / pi)` to derive the body radius.
    pub radius_factor: f64,
    /// Per-tick mass decay coefficient (scaled by metabolism and mass).
    pub decay_rate: f64,
    /// Numerator of the metabolism formula `numerator / split_mass`.
    pub metabolism_numerator: f64,
    /// Speed constant `C` in `C / ln(mass) * metabolism`. Zero for species
    /// that do not move.
    pub speed_factor: f64,
    /// Fraction of `split_mass` below which the cell starves.
    pub starvation_divisor: f64,
    /// Offspring spawn distance in multiples of the parent radius.
    pub split_offset_factor: f64,
    /// Prey is edible when `prey.mass < self.mass * prey_mass_factor`.
    pub prey_mass_factor: f64,
    /// Probability of emitting a spore on death.
    pub spore_chance: f64,
}

const PLANT: SpeciesProfile = SpeciesProfile {
    split_mass: 200.,
    radius_factor: 2.,
    decay_rate: 0.001,
    metabolism_numerator: 50.,
    speed_factor: 0.,
    starvation_divisor: 5.,
    split_offset_factor: 4.,
    prey_mass_factor: 0.,
    spore_chance: 1. / 10.,
};

const CONSUMER: SpeciesProfile = SpeciesProfile {
    split_mass: 400.,
    radius_factor: 3.,
    decay_rate: 0.0035,
    metabolism_numerator: 50.,
    speed_factor: 25.,
    starvation_divisor: 5.,
    split_offset_factor: 2.,
    prey_mass_factor: 1.,
    spore_chance: 1. / 6.,
};

const PREDATOR: SpeciesProfile = SpeciesProfile {
    split_mass: 600.,
    radius_factor: 4.,
    decay_rate: 0.003,
    metabolism_numerator: 100.,
    speed_factor: 15.,
    starvation_divisor: 6.,
    split_offset_factor: 4.,
    prey_mass_factor: 2.,
    spore_chance: 1.,
};

const SPORE: SpeciesProfile = SpeciesProfile {
    split_mass: 1.,
    radius_factor: 1.,
    decay_rate: 0.,
    metabolism_numerator: 50.,
    speed_factor: 0.,
    starvation_divisor: 1.,
    split_offset_factor: 0.,
    prey_mass_factor: 0.,
    spore_chance: 0.,
};

impl Species {
    /// Returns the constant parameter table for this species.
    pub const fn profile(self) -> &'static SpeciesProfile {
        match self {
            Species::Plant => &PLANT,
            Species::Consumer => &CONSUMER,
            Species::Predator => &PREDATOR,
            Species::Spore => &SPORE,
        }
    }

    /// Returns the render color for this species.
    ///
    /// Spores take the color of their origin species, so this maps the three
    /// active species only; see [`crate::simulation::spore::Spore`].
    pub const fn color_hint(self) -> ColorHint {
        match self {
            Species::Plant | Species::Spore => ColorHint::Green,
            Species::Consumer => ColorHint::Blue,
            Species::Predator => ColorHint::Red,
        }
    }
}
