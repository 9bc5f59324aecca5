//! Random interval subdivision

use crate::error::SamplingError;
use crate::rng::EntropySource;

use super::RandomGenerator;

impl<S: EntropySource> RandomGenerator<S> {
    /// Split [0, 1] into `n` intervals and return their upper limits
    ///
    /// Each raw interval length is drawn uniformly from [1, variation];
    /// the lengths are then normalized to sum to 1 and accumulated, so the
    /// last limit is 1 (up to rounding). `variation == 1` gives equal
    /// intervals. With `add_zero` a leading 0 is prepended, giving `n + 1`
    /// values.
    ///
    /// Consumes exactly `n` draws.
    ///
    /// # Errors
    /// `NegativeVariation` if `variation < 0`.
    ///
    /// # Example
    /// ```
    /// use random_generator_core_rs::RandomGenerator;
    ///
    /// let mut rng = RandomGenerator::new(1);
    /// let limits = rng.partition(4, 1.0, true).unwrap();
    /// assert_eq!(limits.len(), 5);
    /// assert_eq!(limits[0], 0.0);
    /// assert!((limits[4] - 1.0).abs() < 1e-5);
    /// ```
    pub fn partition(&mut self, n: usize, variation: f32, add_zero: bool) -> Result<Vec<f32>, SamplingError> {
        if variation < 0.0 {
            return Err(SamplingError::NegativeVariation { variation });
        }

        let mut limits = Vec::with_capacity(n + usize::from(add_zero));
        if add_zero {
            limits.push(0.0);
        }

        let mut sum = 0.0f32;
        for _ in 0..n {
            let length = self.float_range(1.0, variation);
            sum += length;
            limits.push(length);
        }

        // n == 0 leaves nothing to normalize
        if sum > 0.0 {
            let inverse = 1.0 / sum;
            let mut acc = 0.0f32;
            for limit in limits.iter_mut() {
                let length = *limit * inverse;
                *limit = acc + length;
                acc += length;
            }
        }

        Ok(limits)
    }

    /// Like `partition`, with the limits mapped from [0, 1] onto [min, max]
    ///
    /// The leading limit (when `add_zero` is set) maps to `min`.
    pub fn partition_range(
        &mut self,
        n: usize,
        variation: f32,
        min: f32,
        max: f32,
        add_zero: bool,
    ) -> Result<Vec<f32>, SamplingError> {
        let mut limits = self.partition(n, variation, add_zero)?;
        for limit in limits.iter_mut() {
            *limit = *limit * (max - min) + min;
        }
        Ok(limits)
    }
}
