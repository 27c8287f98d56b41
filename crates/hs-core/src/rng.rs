//! Deterministic per-worker and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each worker gets its own independent `SmallRng` seeded by:
//!
//!   seed = stream_seed XOR (worker_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive worker IDs uniformly across the seed space.
//! This means:
//!
//! - Workers never share RNG state (no contention, no ordering dependency).
//! - A generator is seeded once and reused for every trial the worker runs;
//!   nothing is re-seeded per sample.
//! - The same root seed and worker count reproduce a run bit-for-bit,
//!   whether workers execute sequentially or on a thread pool.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::WorkerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── WorkerRng ─────────────────────────────────────────────────────────────────

/// Per-worker deterministic RNG.
///
/// Create one per worker when a configuration starts and hand it to every
/// trial that worker runs.  The type is `!Sync` to prevent accidental sharing
/// across threads.
pub struct WorkerRng(SmallRng);

impl WorkerRng {
    /// Seed deterministically from a stream seed and a worker ID.
    pub fn new(stream_seed: u64, worker: WorkerId) -> Self {
        let seed = stream_seed ^ (worker.0 as u64).wrapping_mul(MIXING_CONSTANT);
        WorkerRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Root RNG for a whole run.
///
/// Used only on the driver thread to derive one stream seed per sweep entry.
/// Workers never touch it.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a fresh stream seed, mixed with `offset`.
    #[inline]
    pub fn derive_seed(&mut self, offset: u64) -> u64 {
        self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT)
    }
}
