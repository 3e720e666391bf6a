//! Deterministic random number generation.
//!
//! RULE: No generator may call any platform RNG.
//! All randomness flows through an `EntropySource` passed in by the
//! caller. Production code derives `SeededRng` streams from an `RngBank`;
//! tests may substitute a scripted source.
//!
//! Each generator gets its own RNG stream, seeded deterministically
//! from (master_seed, generator slot, call number). This means:
//!   - Adding a new generator never changes existing generators' streams.
//!   - Each call's output is fully reproducible in isolation.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::ops::RangeInclusive;

/// The randomness provider threaded into every generator call.
///
/// Only `next_u64` is required; every other draw is derived from it so
/// that a scripted source controls generator output exactly.
pub trait EntropySource {
    /// Draw a raw u64 (full range).
    fn next_u64(&mut self) -> u64;

    /// Roll a float in [0.0, 1.0).
    fn next_f64(&mut self) -> f64 {
        let bits = self.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.next_u64() % n
    }

    /// Roll an integer in the closed range [lo, hi].
    fn int_in(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo <= hi, "empty range [{lo}, {hi}]");
        let span = hi.abs_diff(lo) + 1;
        lo.wrapping_add(self.next_u64_below(span) as i64)
    }

    /// Roll an integer in a closed `RangeInclusive`.
    fn int_range(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.int_in(*range.start(), *range.end())
    }

    /// Roll a float in [lo, hi).
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniformly select one element. `items` must be non-empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        let index = self.next_u64_below(items.len() as u64) as usize;
        &items[index]
    }

    /// Fill `dest` with random bytes, eight at a time.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// A named, deterministic RNG for a single generator call.
pub struct SeededRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl EntropySource for SeededRng {
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

/// Draw an identifier of the form `<prefix>-<8 lowercase hex chars>`.
///
/// Uniqueness is probabilistic: two draws collide with probability 2^-32.
pub fn hex_id<R: EntropySource>(rng: &mut R, prefix: &str) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
    let hex = uuid.simple().to_string();
    format!("{prefix}-{}", &hex[..8])
}

/// All generator RNGs for a single engine, indexed by stable slot.
#[derive(Debug, Clone, Copy)]
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Stream for `slot` on the engine's `call`-th operation.
    pub fn for_generator_at_call(&self, slot: GeneratorSlot, call: u64) -> SeededRng {
        let derived_seed = self.master_seed
            ^ (slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15)
            ^ call.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        SeededRng::new(derived_seed).with_name(slot.name())
    }
}

/// Stable generator slot assignments.
/// NEVER reorder or remove entries; only append.
/// Reordering changes every generator's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum GeneratorSlot {
    Event = 0,
    Claim = 1,
    Client = 2,
    Analysis = 3,
    Simulation = 4,
    // Add new generators here, append only.
}

impl GeneratorSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Claim => "claim",
            Self::Client => "client",
            Self::Analysis => "analysis",
            Self::Simulation => "simulation",
        }
    }
}
