//! Seedable randomness for particle spawning.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default random source: fast, portable, and identical on every platform
/// for a given seed.
pub type TrailRng = ChaCha8Rng;

/// Builds the default random source.
///
/// `Some(seed)` is reproducible; `None` draws from OS entropy.
#[must_use]
pub fn trail_rng(seed: Option<u64>) -> TrailRng {
    match seed {
        Some(seed) => TrailRng::seed_from_u64(seed),
        None => TrailRng::from_entropy(),
    }
}
