//! Error types for dish seeding and spore construction.
//!
//! Almost everything that goes wrong inside a tick is a normal lifecycle
//! transition (death, re-targeting) rather than an error. The one hard
//! failure is a configuration mistake: asking for a spore with no valid
//! origin species.

use thiserror::Error;

use super::species::Species;

/// Errors raised when constructing entities with invalid species tags.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// `Dish::seed` was called with `Species::Spore`; spores carry an origin
    /// species and must be placed through `Dish::seed_spore`.
    #[error("spores cannot be seeded as active cells; use seed_spore with an origin species")]
    SporeSeed,

    /// A spore was given `Species::Spore` as its origin, which would leave it
    /// with nothing to germinate into.
    #[error("invalid spore origin {0:?}: origin must be an active species")]
    InvalidSporeOrigin(Species),
}
