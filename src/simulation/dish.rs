//! The dish: the owned simulation context and tick driver.
//!
//! A [`Dish`] owns one population per species, the field configuration, the
//! RNG, and the id counter. The external harness seeds initial entities,
//! calls [`Dish::tick`] once per frame, and renders from [`Dish::snapshot`];
//! no simulation state lives outside the dish.

use ndarray::Array1;
use rand::Rng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cell::{Cell, CellId};
use super::error::SimError;
use super::geometry;
use super::params::Params;
use super::rng;
use super::spatial::PopulationIndex;
use super::species::{ColorHint, Species};
use super::spore::{INCUBATION_MAX, INCUBATION_MIN, Spore};

/// Read-only view of one live entity, for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellView {
    /// Position in field space.
    pub position: (f64, f64),
    /// Current body radius.
    pub radius: f64,
    /// Species tag (`Spore` for dormant entities).
    pub species: Species,
    /// Render color; spores carry their origin species' color.
    pub color_hint: ColorHint,
}

/// The simulation context: all populations and everything they share.
///
/// Populations are public for harness and test inspection; mutation goes
/// through [`Dish::seed`], [`Dish::seed_spore`], and [`Dish::tick`].
pub struct Dish {
    /// Live plants.
    pub plants: Vec<Cell>,
    /// Live consumers.
    pub consumers: Vec<Cell>,
    /// Live predators.
    pub predators: Vec<Cell>,
    /// Dormant spores.
    pub spores: Vec<Spore>,
    /// Ticks elapsed since construction.
    pub ticks: u64,
    pub(super) params: Params,
    pub(super) rng: ChaCha12Rng,
    next_id: u64,
}

impl Dish {
    /// Creates an empty dish seeded from OS entropy.
    pub fn new(params: Params) -> Self {
        Self::with_rng(params, rng::entropy_rng())
    }

    /// Creates an empty dish with a fixed RNG seed, for reproducible runs.
    pub fn with_seed(params: Params, seed: u64) -> Self {
        Self::with_rng(params, rng::create_rng(seed))
    }

    fn with_rng(params: Params, rng: ChaCha12Rng) -> Self {
        Self {
            plants: Vec::new(),
            consumers: Vec::new(),
            predators: Vec::new(),
            spores: Vec::new(),
            ticks: 0,
            params,
            rng,
            next_id: 0,
        }
    }

    /// Returns the field configuration.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Issues the next cell identity. Ids are never reused.
    pub(super) fn alloc_id(&mut self) -> CellId {
        let id = CellId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Returns the population vector for an active species.
    pub(super) fn population_mut(&mut self, species: Species) -> Option<&mut Vec<Cell>> {
        match species {
            Species::Plant => Some(&mut self.plants),
            Species::Consumer => Some(&mut self.consumers),
            Species::Predator => Some(&mut self.predators),
            Species::Spore => None,
        }
    }

    /// Constructs and registers an initial entity.
    ///
    /// An out-of-bounds position is not an error: the cell registers already
    /// retired, mirroring a birth outside the field.
    ///
    /// # Arguments
    ///
    /// * `species` - Active species for the new cell
    /// * `position` - Starting position
    /// * `mass` - Starting mass
    /// * `split_mass` - Reproduction threshold override, or the species default
    ///
    /// # Errors
    ///
    /// [`SimError::SporeSeed`] if `species` is `Species::Spore`; spores are
    /// placed through [`Dish::seed_spore`].
    pub fn seed(
        &mut self,
        species: Species,
        position: Array1<f64>,
        mass: f64,
        split_mass: Option<f64>,
    ) -> Result<CellId, SimError> {
        let id = self.alloc_id();
        let field_size = self.params.field_size;
        let split_mass = split_mass.unwrap_or(species.profile().split_mass);
        let Some(population) = self.population_mut(species) else {
            return Err(SimError::SporeSeed);
        };

        let mut cell = Cell::new(id, species, position, mass, split_mass);
        if !geometry::in_bounds(&cell.pos, field_size) {
            cell.kill();
        }
        debug!(?species, mass, alive = cell.alive, "seeded cell");
        population.push(cell);
        Ok(id)
    }

    /// Places a dormant spore directly.
    ///
    /// # Arguments
    ///
    /// * `position` - Resting position
    /// * `mass` - Mass carried into germination
    /// * `origin` - Species the spore germinates into
    /// * `incubation` - Tick countdown; drawn uniformly from the standard
    ///   incubation window when `None`
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidSporeOrigin`] if `origin` is `Species::Spore`.
    pub fn seed_spore(
        &mut self,
        position: Array1<f64>,
        mass: f64,
        origin: Species,
        incubation: Option<u32>,
    ) -> Result<(), SimError> {
        let incubation =
            incubation.unwrap_or_else(|| self.rng.random_range(INCUBATION_MIN..=INCUBATION_MAX));
        let mut spore = Spore::new(position, mass, origin, incubation)?;
        if !geometry::in_bounds(&spore.pos, self.params.field_size) {
            spore.alive = false;
        }
        debug!(?origin, mass, incubation, "seeded spore");
        self.spores.push(spore);
        Ok(())
    }

    /// Advances the simulation by one tick.
    ///
    /// Species phases run sequentially in fixed order - plants, consumers,
    /// predators, spores - so each phase observes the already-updated state
    /// of the phases before it. Dead entities are retired at the end of the
    /// tick; nothing is removed mid-iteration.
    pub fn tick(&mut self) {
        let plant_index =
            PopulationIndex::build(&self.plants).expect("failed to build plant index");
        self.update_plants(&plant_index);

        // Rebuild over plants so consumers see this tick's offspring too;
        // plants never move, so positions in the index stay exact.
        let plant_index =
            PopulationIndex::build(&self.plants).expect("failed to build plant index");
        let predator_index =
            PopulationIndex::build(&self.predators).expect("failed to build predator index");
        self.update_consumers(&plant_index, &predator_index);

        // Consumers have finished moving; index them for predator queries.
        let consumer_index =
            PopulationIndex::build(&self.consumers).expect("failed to build consumer index");
        self.update_predators(&consumer_index);

        self.update_spores();
        self.retire_dead();
        self.ticks += 1;
    }

    /// Removes every entity marked dead during this tick.
    pub(super) fn retire_dead(&mut self) {
        self.plants.retain(Cell::is_alive);
        self.consumers.retain(Cell::is_alive);
        self.predators.retain(Cell::is_alive);
        self.spores.retain(Spore::is_alive);
    }

    /// Returns a read-only view of every live entity, spores included.
    ///
    /// Calling this twice without an intervening [`Dish::tick`] returns
    /// identical values.
    pub fn snapshot(&self) -> Vec<CellView> {
        let cells = self
            .plants
            .iter()
            .chain(&self.consumers)
            .chain(&self.predators)
            .filter(|cell| cell.alive)
            .map(|cell| CellView {
                position: (cell.pos[0], cell.pos[1]),
                radius: cell.radius,
                species: cell.species,
                color_hint: cell.species.color_hint(),
            });
        let spores = self
            .spores
            .iter()
            .filter(|spore| spore.alive)
            .map(|spore| CellView {
                position: (spore.pos[0], spore.pos[1]),
                radius: spore.radius(),
                species: Species::Spore,
                color_hint: spore.color_hint(),
            });
        cells.chain(spores).collect()
    }
}
