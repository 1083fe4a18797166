//! Per-species lifecycle phases executed by the tick driver.
//!
//! Each phase walks the index range its population had when the phase
//! started: offspring appended mid-phase wait until the next tick for their
//! first update, and entities killed mid-phase stay in place (marked dead,
//! skipped by every later check) until the end-of-tick sweep. Cross-species
//! kills only ever flip the liveness flag, so no iteration is invalidated.

use ndarray::Array1;
use rand::Rng;
use tracing::{debug, trace};

use super::cell::{Cell, CellId};
use super::dish::Dish;
use super::geometry;
use super::spatial::PopulationIndex;
use super::species::Species;
use super::spore::{INCUBATION_MAX, INCUBATION_MIN, Spore};

impl Dish {
    /// Plant phase: decay, photosynthesis, suffocation, starvation, mitosis.
    pub(super) fn update_plants(&mut self, plants: &PopulationIndex) {
        let n = self.plants.len();
        for i in 0..n {
            if !self.plants[i].alive {
                continue;
            }

            let light = geometry::light_intensity(
                &self.plants[i].pos,
                self.params.field_size,
                self.params.light_falloff,
            );
            {
                let plant = &mut self.plants[i];
                plant.decay();
                plant.photosynthesize(light);
                plant.refresh_radius();
            }

            // A plant suffocates when a larger plant's center falls inside
            // its own body. No mass changes hands.
            let pos = self.plants[i].pos.clone();
            let radius = self.plants[i].radius;
            let suffocated = plants.within(&pos, radius).into_iter().any(|(_, j)| {
                let other = &self.plants[j];
                j != i
                    && other.alive
                    && other.radius > radius
                    && geometry::dist(&pos, &other.pos) < radius
            });
            if suffocated {
                trace!(mass = self.plants[i].mass, "plant suffocated");
                self.kill_cell(Species::Plant, i);
                continue;
            }

            if self.plants[i].is_starved() {
                self.kill_cell(Species::Plant, i);
            } else if self.plants[i].should_split() {
                let angle = self.rng.random_range(0.0..std::f64::consts::TAU);
                self.split(Species::Plant, i, angle);
            }
        }
    }

    /// Consumer phase: decay, evasion, chase, grazing, starvation, mitosis.
    pub(super) fn update_consumers(
        &mut self,
        plants: &PopulationIndex,
        predators: &PopulationIndex,
    ) {
        let n = self.consumers.len();
        for i in 0..n {
            if !self.consumers[i].alive {
                continue;
            }

            {
                let consumer = &mut self.consumers[i];
                consumer.decay();
                consumer.refresh_radius();
            }

            let pos = self.consumers[i].pos.clone();
            let mass = self.consumers[i].mass;
            let radius = self.consumers[i].radius;
            let factor = self.consumers[i].profile().prey_mass_factor;
            self.consumers[i].target = validate_or_retarget(
                &self.plants,
                plants,
                self.consumers[i].target,
                &pos,
                mass,
                factor,
            );

            // A predator closing within five body radii triggers evasion:
            // one step along the opposite bearing, before the chase step.
            if let Some(hunter_pos) = nearest_threat(&self.predators, predators, &pos, radius * 5.)
            {
                let flee = geometry::bearing(&hunter_pos, &pos);
                self.consumers[i].advance(flee);
            }
            if let Some(target_pos) = self.consumers[i]
                .target
                .and_then(|id| position_of(&self.plants, id))
            {
                let chase = geometry::bearing(&self.consumers[i].pos, &target_pos);
                self.consumers[i].advance(chase);
            }

            if !geometry::in_bounds(&self.consumers[i].pos, self.params.field_size) {
                self.kill_cell(Species::Consumer, i);
                continue;
            }

            self.graze(i, plants);

            self.consumers[i].refresh_radius();
            if self.consumers[i].is_starved() {
                self.kill_cell(Species::Consumer, i);
            } else if self.consumers[i].should_split() {
                let pos = self.consumers[i].pos.clone();
                let mass = self.consumers[i].mass;
                let angle = plants
                    .nearest_where(&pos, |j| {
                        self.plants[j].alive && self.plants[j].mass < mass * factor
                    })
                    .map_or_else(
                        || self.rng.random_range(0.0..std::f64::consts::TAU),
                        |j| geometry::bearing(&pos, &self.plants[j].pos),
                    );
                self.split(Species::Consumer, i, angle);
            }
        }
    }

    /// Consumes every edible plant whose center lies inside this consumer.
    fn graze(&mut self, i: usize, plants: &PopulationIndex) {
        let pos = self.consumers[i].pos.clone();
        let radius = self.consumers[i].radius;
        for (_, j) in plants.within(&pos, radius) {
            let edible = {
                let plant = &self.plants[j];
                plant.alive && plant.radius < radius && geometry::dist(&pos, &plant.pos) < radius
            };
            if edible {
                let gained = self.plants[j].mass;
                self.consumers[i].mass += gained;
                trace!(gained, "consumer ate plant");
                self.kill_cell(Species::Plant, j);
            }
        }
    }

    /// Predator phase: decay, hunt, consumption (consumers and smaller
    /// predators), starvation, mitosis.
    pub(super) fn update_predators(&mut self, consumers: &PopulationIndex) {
        let n = self.predators.len();
        for i in 0..n {
            if !self.predators[i].alive {
                continue;
            }

            {
                let predator = &mut self.predators[i];
                predator.decay();
                predator.refresh_radius();
            }

            let pos = self.predators[i].pos.clone();
            let mass = self.predators[i].mass;
            let factor = self.predators[i].profile().prey_mass_factor;
            self.predators[i].target = validate_or_retarget(
                &self.consumers,
                consumers,
                self.predators[i].target,
                &pos,
                mass,
                factor,
            );
            if let Some(target_pos) = self.predators[i]
                .target
                .and_then(|id| position_of(&self.consumers, id))
            {
                let chase = geometry::bearing(&self.predators[i].pos, &target_pos);
                self.predators[i].advance(chase);
            }

            if !geometry::in_bounds(&self.predators[i].pos, self.params.field_size) {
                self.kill_cell(Species::Predator, i);
                continue;
            }

            self.hunt(i, consumers);

            self.predators[i].refresh_radius();
            if self.predators[i].is_starved() {
                self.kill_cell(Species::Predator, i);
            } else if self.predators[i].should_split() {
                let pos = self.predators[i].pos.clone();
                let mass = self.predators[i].mass;
                let angle = consumers
                    .nearest_where(&pos, |j| {
                        self.consumers[j].alive && self.consumers[j].mass < mass * factor
                    })
                    .map_or_else(
                        || self.rng.random_range(0.0..std::f64::consts::TAU),
                        |j| geometry::bearing(&pos, &self.consumers[j].pos),
                    );
                self.split(Species::Predator, i, angle);
            }
        }
    }

    /// Consumes every consumer - and every smaller fellow predator - whose
    /// center lies inside this predator.
    fn hunt(&mut self, i: usize, consumers: &PopulationIndex) {
        let pos = self.predators[i].pos.clone();
        let radius = self.predators[i].radius;
        for (_, j) in consumers.within(&pos, radius) {
            let edible = {
                let prey = &self.consumers[j];
                prey.alive && prey.radius < radius && geometry::dist(&pos, &prey.pos) < radius
            };
            if edible {
                let gained = self.consumers[j].mass;
                self.predators[i].mass += gained;
                trace!(gained, "predator ate consumer");
                self.kill_cell(Species::Consumer, j);
            }
        }
        // Cannibalism: the predator population mutates during its own phase,
        // so this scan stays direct instead of going through an index.
        for j in 0..self.predators.len() {
            if j == i {
                continue;
            }
            let edible = {
                let other = &self.predators[j];
                other.alive && other.radius < radius && geometry::dist(&pos, &other.pos) < radius
            };
            if edible {
                let gained = self.predators[j].mass;
                self.predators[i].mass += gained;
                trace!(gained, "predator ate predator");
                self.kill_cell(Species::Predator, j);
            }
        }
    }

    /// Spore phase: count down incubation and germinate at zero.
    pub(super) fn update_spores(&mut self) {
        let n = self.spores.len();
        for i in 0..n {
            if !self.spores[i].alive {
                continue;
            }
            self.spores[i].incubation = self.spores[i].incubation.saturating_sub(1);
            if self.spores[i].incubation < 1 {
                self.germinate(i);
            }
        }
    }

    /// Hatches a spore into a live cell of its origin species at its stored
    /// mass, then retires the spore.
    fn germinate(&mut self, i: usize) {
        let spore = &mut self.spores[i];
        spore.alive = false;
        let (pos, mass, origin) = (spore.pos.clone(), spore.mass, spore.origin);

        let id = self.alloc_id();
        let cell = Cell::new(id, origin, pos, mass, origin.profile().split_mass);
        debug!(?origin, mass, "spore germinated");

        // Origin was validated at spore construction, so the population
        // lookup cannot miss; live spores only ever rest inside the field.
        let Some(population) = self.population_mut(origin) else {
            return;
        };
        population.push(cell);
    }

    /// Performs mitosis: one offspring at `split_offset_factor` radii along
    /// the given bearing with a third of the parent's mass; the parent keeps
    /// half. An offspring born outside the field dies on arrival.
    pub(super) fn split(&mut self, species: Species, index: usize, angle: f64) {
        let id = self.alloc_id();
        let field_size = self.params.field_size;
        let Some(population) = self.population_mut(species) else {
            return;
        };

        let parent = &mut population[index];
        let offset = parent.radius * parent.profile().split_offset_factor;
        let child_pos = &parent.pos + &(geometry::heading(angle) * offset);
        let child_mass = parent.mass / 3.;
        let split_mass = parent.split_mass;
        parent.mass /= 2.;
        parent.refresh_radius();

        let mut child = Cell::new(id, species, child_pos, child_mass, split_mass);
        if !geometry::in_bounds(&child.pos, field_size) {
            child.kill();
        }
        population.push(child);
        debug!(?species, child_mass, "cell split");
    }

    /// Marks a cell dead and rolls its species' spore-spawning odds.
    pub(super) fn kill_cell(&mut self, species: Species, index: usize) {
        let (pos, mass) = {
            let Some(population) = self.population_mut(species) else {
                return;
            };
            let cell = &mut population[index];
            if !cell.alive {
                return;
            }
            cell.kill();
            (cell.pos.clone(), cell.mass)
        };
        debug!(?species, mass, "cell died");
        self.roll_spore(pos, mass, species);
    }

    /// With the species' post-mortem probability, leaves a dormant spore
    /// carrying a third of the dead cell's mass at its last position.
    fn roll_spore(&mut self, pos: Array1<f64>, mass: f64, species: Species) {
        // A spore shed outside the field would never get to germinate.
        if !geometry::in_bounds(&pos, self.params.field_size) {
            return;
        }
        let chance = species.profile().spore_chance;
        if chance > 0. && self.rng.random_bool(chance) {
            let incubation = self.rng.random_range(INCUBATION_MIN..=INCUBATION_MAX);
            debug!(?species, incubation, "spore spawned");
            self.spores.push(Spore {
                pos,
                mass: mass / 3.,
                origin: species,
                incubation,
                alive: true,
            });
        }
    }
}

/// Keeps the current target while its referent is alive; otherwise scans the
/// prey population for the closest cell light enough to eat.
fn validate_or_retarget(
    prey: &[Cell],
    index: &PopulationIndex,
    current: Option<CellId>,
    pos: &Array1<f64>,
    mass: f64,
    prey_mass_factor: f64,
) -> Option<CellId> {
    if let Some(id) = current {
        if prey.iter().any(|p| p.alive && p.id == id) {
            return Some(id);
        }
    }
    index
        .nearest_where(pos, |j| {
            prey[j].alive && prey[j].mass < mass * prey_mass_factor
        })
        .map(|j| prey[j].id)
}

/// Resolves a target handle to its current position, if the referent lives.
fn position_of(prey: &[Cell], id: CellId) -> Option<Array1<f64>> {
    prey.iter()
        .find(|p| p.alive && p.id == id)
        .map(|p| p.pos.clone())
}

/// Position of the closest live predator within `range`, if any.
fn nearest_threat(
    predators: &[Cell],
    index: &PopulationIndex,
    pos: &Array1<f64>,
    range: f64,
) -> Option<Array1<f64>> {
    index
        .within(pos, range)
        .into_iter()
        .filter(|&(_, j)| predators[j].alive && geometry::dist(pos, &predators[j].pos) < range)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, j)| predators[j].pos.clone())
}
