//! Weighted choice of an index

use crate::error::SamplingError;
use crate::rng::EntropySource;

use super::RandomGenerator;

impl<S: EntropySource> RandomGenerator<S> {
    /// Pick an index with probability proportional to its weight
    ///
    /// Built for `match`:
    ///
    /// ```
    /// use random_generator_core_rs::RandomGenerator;
    ///
    /// let mut rng = RandomGenerator::new(3);
    /// let loot = match rng.switch(&[4, 2, 1]).unwrap() {
    ///     0 => "common",   // 4/7
    ///     1 => "uncommon", // 2/7
    ///     _ => "rare",     // 1/7
    /// };
    /// # let _ = loot;
    /// ```
    ///
    /// Consumes exactly one draw.
    ///
    /// # Errors
    /// `NoPositiveWeight` if `weights` is empty or sums to zero.
    pub fn switch(&mut self, weights: &[u32]) -> Result<usize, SamplingError> {
        let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
        if total == 0 {
            return Err(SamplingError::NoPositiveWeight);
        }
        Ok(self.weighted_index(weights, total))
    }

    /// Walk the cumulative weights to the first one exceeding a uniform
    /// draw in [0, total). `total` must be the positive sum of `weights`.
    pub(crate) fn weighted_index(&mut self, weights: &[u32], total: u64) -> usize {
        // same draw as int_range(0, total - 1)
        let pick = u64::from(self.next_u32()) % total;

        let mut acc = 0u64;
        for (index, &weight) in weights.iter().enumerate().take(weights.len() - 1) {
            acc += u64::from(weight);
            if pick < acc {
                return index;
            }
        }
        weights.len() - 1
    }
}
