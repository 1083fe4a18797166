//! Seedable random number generation.
//!
//! All randomness in the engine (split angles, spore odds, incubation
//! windows) flows through one generator owned by the dish, so a fixed seed
//! reproduces a run exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> ChaCha12Rng {
    ChaCha12Rng::seed_from_u64(seed)
}

/// Creates an RNG seeded from OS entropy, for non-reproducible runs.
pub fn entropy_rng() -> ChaCha12Rng {
    ChaCha12Rng::seed_from_u64(rand::rng().random())
}
