//! Deterministic per-agent RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each agent seeds its own independent `SmallRng` from:
//!
//!   seed = host_seed XOR (agent_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent indices uniformly across the seed space.
//! Identical seeds reproduce identical wander paths and sweep patterns,
//! which keeps behavior regressions bisectable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-agent deterministic RNG.
///
/// Owned by the agent's blackboard; every stochastic decision (wander points,
/// house-exit positions) draws from here and nowhere else.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the host's seed and an agent index.
    pub fn new(host_seed: u64, agent_index: u32) -> Self {
        let seed = host_seed ^ (agent_index as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
