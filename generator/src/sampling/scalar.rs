//! Scalar derivations
//!
//! Each operation here consumes exactly one draw.
//!
//! Known, preserved bias: `int_range` reduces with a modulo, so low values
//! are slightly favored when the span is a large fraction of 2^32;
//! `float_range` loses precision when `max - min` is large.

use crate::rng::EntropySource;

use super::RandomGenerator;

/// 2^-24, the spacing of `float01` results
const FLOAT01_MUL: f32 = 1.0 / 16_777_216.0;

impl<S: EntropySource> RandomGenerator<S> {
    /// Generate a uniformly distributed u16 (low 16 bits of a draw)
    pub fn uint16(&mut self) -> u16 {
        (self.next_u32() & 0xffff) as u16
    }

    /// Generate a float in [0.0, 1.0) from the top 24 bits of a draw
    ///
    /// # Example
    /// ```
    /// use random_generator_core_rs::RandomGenerator;
    ///
    /// let mut rng = RandomGenerator::new(12345);
    /// let value = rng.float01();
    /// assert!(value >= 0.0 && value < 1.0);
    /// ```
    pub fn float01(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * FLOAT01_MUL
    }

    /// Generate a float in [min, max)
    ///
    /// Rounding can return `max` itself for the highest draws.
    /// `min > max` is allowed and yields values in (max, min].
    pub fn float_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.float01() * (max - min)
    }

    /// Generate an integer in [min, max], inclusive on both ends
    ///
    /// # Panics
    /// Panics if min > max
    ///
    /// # Example
    /// ```
    /// use random_generator_core_rs::RandomGenerator;
    ///
    /// let mut rng = RandomGenerator::new(12345);
    /// let die = rng.int_range(1, 6);
    /// assert!((1..=6).contains(&die));
    /// ```
    pub fn int_range(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "min must not exceed max");

        let span = i64::from(max) - i64::from(min) + 1;
        (i64::from(min) + i64::from(self.next_u32()) % span) as i32
    }

    /// Generate a boolean that is true with probability `chance`
    ///
    /// True when the draw is below `floor(u32::MAX * chance)`. A chance of
    /// 1.0 is therefore false for the single draw `u32::MAX`.
    pub fn bool_with_chance(&mut self, chance: f32) -> bool {
        let threshold = (f64::from(u32::MAX) * f64::from(chance)).floor();
        f64::from(self.next_u32()) < threshold
    }

    /// Generate a boolean with an even chance
    pub fn bool(&mut self) -> bool {
        self.next_u32() < u32::MAX / 2
    }
}
