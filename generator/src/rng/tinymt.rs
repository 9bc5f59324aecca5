//! TinyMT32 random number generator
//!
//! The 32-bit Tiny Mersenne Twister by Mutsuo Saito and Makoto Matsumoto.
//! It keeps 127 bits of state in four 32-bit words plus three tempering
//! parameters, and has a period of 2^127 - 1.
//!
//! # Algorithm
//!
//! Each draw runs two stages:
//! 1. **Next-state**: a linear recurrence over the four state words, with
//!    `mat1`/`mat2` folded in when the low bit of the new last word is set.
//! 2. **Temper**: the output word is mixed from the state and `tmat`.
//!
//! # Determinism
//!
//! Same `(seed, mat1, mat2, tmat)` → same sequence of words, on every
//! platform. This is the portability guarantee: a seed tuple can be sent
//! instead of the values it produces.

use serde::{Deserialize, Serialize};

use super::{EntropySource, SeedConfig};
use crate::checkpoint::CheckpointError;

const TINYMT32_MASK: u32 = 0x7fff_ffff;
const TINYMT32_SH0: u32 = 1;
const TINYMT32_SH1: u32 = 10;
const TINYMT32_SH8: u32 = 8;

/// Multiplier of the seeding recurrence (Knuth's LCG constant)
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// Rounds of the seeding recurrence
const MIN_LOOP: usize = 8;

/// Warm-up draws discarded after seeding
const PRE_LOOP: usize = 8;

/// Fallback state used when seeding yields a degenerate state ("TINY")
const CERTIFIED_STATE: [u32; 4] = [b'T' as u32, b'I' as u32, b'N' as u32, b'Y' as u32];

/// Deterministic bit generator using TinyMT32
///
/// # Example
/// ```
/// use random_generator_core_rs::rng::{EntropySource, SeedConfig, TinyMt32};
///
/// let mut engine = TinyMt32::new(SeedConfig::with_parameters(1, 3, 3, 7));
/// assert_eq!(engine.next_u32(), 0xa564a7ba);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TinyMt32Parts")]
pub struct TinyMt32 {
    /// Internal state (127 significant bits)
    state: [u32; 4],
    mat1: u32,
    mat2: u32,
    tmat: u32,
}

impl TinyMt32 {
    /// Create a new engine from a seed tuple
    ///
    /// Runs the seeding recurrence, certifies the period and discards
    /// the warm-up draws.
    ///
    /// # Example
    /// ```
    /// use random_generator_core_rs::rng::{SeedConfig, TinyMt32};
    ///
    /// let engine = TinyMt32::new(SeedConfig::new(12345));
    /// assert_eq!(engine.parameters(), (0, 0, 0));
    /// ```
    pub fn new(config: SeedConfig) -> Self {
        let mut state = [config.seed, config.mat1, config.mat2, config.tmat];
        for i in 1..MIN_LOOP {
            let prev = state[(i - 1) & 3];
            state[i & 3] ^= (i as u32).wrapping_add(INIT_MULTIPLIER.wrapping_mul(prev ^ (prev >> 30)));
        }

        tracing::trace!(
            seed = config.seed,
            mat1 = config.mat1,
            mat2 = config.mat2,
            tmat = config.tmat,
            "seeded TinyMT32"
        );

        Self::from_initial_state(state, config.mat1, config.mat2, config.tmat)
    }

    /// Certify the period of a freshly mixed state and run the warm-up.
    fn from_initial_state(mut state: [u32; 4], mat1: u32, mat2: u32, tmat: u32) -> Self {
        if certify_period(&mut state) {
            tracing::debug!("degenerate TinyMT32 state replaced by fallback");
        }

        let mut engine = Self::from_parts(state, mat1, mat2, tmat);
        for _ in 0..PRE_LOOP {
            engine.next_u32();
        }
        engine
    }

    /// Rebuild an engine from captured parts without reseeding.
    pub(crate) fn from_parts(state: [u32; 4], mat1: u32, mat2: u32, tmat: u32) -> Self {
        Self {
            state,
            mat1,
            mat2,
            tmat,
        }
    }

    /// Current state words (for checkpointing)
    pub fn state(&self) -> [u32; 4] {
        self.state
    }

    /// Tempering parameters `(mat1, mat2, tmat)`
    pub fn parameters(&self) -> (u32, u32, u32) {
        (self.mat1, self.mat2, self.tmat)
    }

    /// Advance the internal state by one step.
    fn next_state(&mut self) {
        let mut y = self.state[3];
        let mut x = (self.state[0] & TINYMT32_MASK) ^ self.state[1] ^ self.state[2];
        x ^= x << TINYMT32_SH0;
        y ^= (y >> TINYMT32_SH0) ^ x;
        self.state[0] = self.state[1];
        self.state[1] = self.state[2];
        self.state[2] = x ^ (y << TINYMT32_SH1);
        self.state[3] = y;

        // all-ones when the low bit of y is set, zero otherwise
        let mask = (y & 1).wrapping_neg();
        self.state[1] ^= mask & self.mat1;
        self.state[2] ^= mask & self.mat2;
    }

    /// Mix an output word from the current state.
    fn temper(&self) -> u32 {
        let t1 = self.state[0].wrapping_add(self.state[2] >> TINYMT32_SH8);
        let t0 = self.state[3] ^ t1;
        t0 ^ ((t1 & 1).wrapping_neg() & self.tmat)
    }
}

impl EntropySource for TinyMt32 {
    fn next_u32(&mut self) -> u32 {
        self.next_state();
        self.temper()
    }
}

/// Wire form of `TinyMt32`, checked before it becomes an engine
#[derive(Deserialize)]
struct TinyMt32Parts {
    state: [u32; 4],
    mat1: u32,
    mat2: u32,
    tmat: u32,
}

impl TryFrom<TinyMt32Parts> for TinyMt32 {
    type Error = CheckpointError;

    fn try_from(parts: TinyMt32Parts) -> Result<Self, Self::Error> {
        if is_degenerate(&parts.state) {
            return Err(CheckpointError::DegenerateState);
        }
        Ok(Self::from_parts(parts.state, parts.mat1, parts.mat2, parts.tmat))
    }
}

/// Returns true when `state` has no significant bits set.
pub(crate) fn is_degenerate(state: &[u32; 4]) -> bool {
    (state[0] & TINYMT32_MASK) == 0 && state[1] == 0 && state[2] == 0 && state[3] == 0
}

/// Replace a degenerate state with the fixed fallback, guaranteeing the
/// 2^127 - 1 period. Returns whether a substitution happened.
fn certify_period(state: &mut [u32; 4]) -> bool {
    if is_degenerate(state) {
        *state = CERTIFIED_STATE;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_state_is_certified() {
        let mut state = [0x8000_0000, 0, 0, 0];
        assert!(certify_period(&mut state));
        assert_eq!(state, [0x54, 0x49, 0x4e, 0x59]);
    }

    #[test]
    fn test_non_degenerate_state_untouched() {
        let mut state = [0, 0, 0, 1];
        assert!(!certify_period(&mut state));
        assert_eq!(state, [0, 0, 0, 1]);
    }

    #[test]
    fn test_top_bit_alone_is_degenerate() {
        // bit 31 of the first word is not part of the 127-bit state
        assert!(is_degenerate(&[0x8000_0000, 0, 0, 0]));
        assert!(!is_degenerate(&[1, 0, 0, 0]));
    }

    #[test]
    fn test_construction_certifies_degenerate_state() {
        let engine = TinyMt32::from_initial_state([0x8000_0000, 0, 0, 0], 3, 3, 7);

        let mut expected = TinyMt32::from_parts(CERTIFIED_STATE, 3, 3, 7);
        for _ in 0..PRE_LOOP {
            expected.next_u32();
        }
        assert_eq!(engine, expected);
    }

    #[test]
    fn test_construction_keeps_valid_state() {
        let engine = TinyMt32::from_initial_state([1, 2, 3, 4], 0, 0, 0);

        let mut expected = TinyMt32::from_parts([1, 2, 3, 4], 0, 0, 0);
        for _ in 0..PRE_LOOP {
            expected.next_u32();
        }
        assert_eq!(engine, expected);
    }

    #[test]
    fn test_deserialize_rejects_degenerate_state() {
        let json = r#"{"state":[0,0,0,0],"mat1":0,"mat2":0,"tmat":0}"#;
        assert!(serde_json::from_str::<TinyMt32>(json).is_err());

        let json = r#"{"state":[2147483648,0,0,0],"mat1":3,"mat2":3,"tmat":7}"#;
        assert!(serde_json::from_str::<TinyMt32>(json).is_err());
    }

    #[test]
    fn test_deserialize_round_trip() {
        let mut engine = TinyMt32::new(SeedConfig::with_parameters(1, 3, 3, 7));
        engine.next_u32();

        let json = serde_json::to_string(&engine).unwrap();
        let mut parsed: TinyMt32 = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, engine);
        assert_eq!(parsed.next_u32(), engine.next_u32());
    }

    #[test]
    fn test_parameters_fixed_after_draws() {
        let mut engine = TinyMt32::new(SeedConfig::with_parameters(9, 0x8f7011ee, 0xfc78ff1f, 0x3793fdff));
        for _ in 0..100 {
            engine.next_u32();
        }
        assert_eq!(engine.parameters(), (0x8f7011ee, 0xfc78ff1f, 0x3793fdff));
    }

    #[test]
    fn test_state_advances() {
        let mut engine = TinyMt32::new(SeedConfig::new(12345));
        let before = engine.state();
        engine.next_u32();
        assert_ne!(before, engine.state(), "state should advance on every draw");
    }

    #[test]
    fn test_from_parts_continues_sequence() {
        let mut original = TinyMt32::new(SeedConfig::with_parameters(1, 3, 3, 7));
        original.next_u32();

        let (mat1, mat2, tmat) = original.parameters();
        let mut rebuilt = TinyMt32::from_parts(original.state(), mat1, mat2, tmat);

        for _ in 0..20 {
            assert_eq!(original.next_u32(), rebuilt.next_u32());
        }
    }
}
