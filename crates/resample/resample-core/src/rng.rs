//! Counter-based random streams.
//!
//! Every randomized unit of work (a repeat, a Monte Carlo draw, a nested inner
//! run) owns a generator seeded from `(seed, stream)`. Results therefore do not
//! depend on how rayon schedules the work.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Generator used by all randomized schemes.
pub type SplitRng = Xoshiro256PlusPlus;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// The `stream`-th output of a SplitMix64 sequence started at `seed`.
pub fn stream_seed(seed: u64, stream: u64) -> u64 {
    splitmix64(seed.wrapping_add(stream.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA)))
}

/// Generator for one unit of work.
pub fn stream_rng(seed: u64, stream: u64) -> SplitRng {
    SplitRng::seed_from_u64(stream_seed(seed, stream))
}
