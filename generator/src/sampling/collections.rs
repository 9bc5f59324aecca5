//! Collection helpers
//!
//! Available as `RandomGenerator` methods, as free functions taking the
//! generator explicitly, and as `*_default` functions that use the
//! thread's default generator (see `rng::with_default`).

use crate::error::SamplingError;
use crate::rng::{with_default, EntropySource};

use super::RandomGenerator;

impl<S: EntropySource> RandomGenerator<S> {
    /// Pick a uniformly random element
    ///
    /// Consumes exactly one draw.
    ///
    /// # Errors
    /// `EmptyCollection` if `items` is empty.
    pub fn random_element<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, SamplingError> {
        if items.is_empty() {
            return Err(SamplingError::EmptyCollection);
        }
        let index = self.index_below(items.len());
        Ok(&items[index])
    }

    /// Return a shuffled copy of `items`, leaving `items` untouched
    ///
    /// Repeatedly moves a uniformly chosen remaining element to the output,
    /// which yields a uniform permutation. Consumes one draw per element.
    ///
    /// # Errors
    /// `EmptyCollection` if `items` is empty.
    ///
    /// # Example
    /// ```
    /// use random_generator_core_rs::RandomGenerator;
    ///
    /// let mut rng = RandomGenerator::new(5);
    /// let deck = vec!["A", "K", "Q", "J"];
    /// let mut shuffled = rng.shuffled(&deck).unwrap();
    /// shuffled.sort();
    /// assert_eq!(shuffled, vec!["A", "J", "K", "Q"]);
    /// ```
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Result<Vec<T>, SamplingError> {
        if items.is_empty() {
            return Err(SamplingError::EmptyCollection);
        }

        let mut remaining: Vec<usize> = (0..items.len()).collect();
        let mut result = Vec::with_capacity(items.len());
        while !remaining.is_empty() {
            let pick = self.index_below(remaining.len());
            result.push(items[remaining.remove(pick)].clone());
        }
        Ok(result)
    }

    /// Uniform index in [0, len); `len` must be positive.
    fn index_below(&mut self, len: usize) -> usize {
        // same draw as int_range(0, len - 1)
        (u64::from(self.next_u32()) % len as u64) as usize
    }
}

/// Pick a uniformly random element using `rng`
pub fn random_element<'a, T, S: EntropySource>(
    items: &'a [T],
    rng: &mut RandomGenerator<S>,
) -> Result<&'a T, SamplingError> {
    rng.random_element(items)
}

/// Shuffled copy of `items` using `rng`
pub fn shuffled<T: Clone, S: EntropySource>(
    items: &[T],
    rng: &mut RandomGenerator<S>,
) -> Result<Vec<T>, SamplingError> {
    rng.shuffled(items)
}

/// Pick a uniformly random element using the thread's default generator
pub fn random_element_default<T>(items: &[T]) -> Result<&T, SamplingError> {
    with_default(|rng| rng.random_element(items))
}

/// Shuffled copy of `items` using the thread's default generator
pub fn shuffled_default<T: Clone>(items: &[T]) -> Result<Vec<T>, SamplingError> {
    with_default(|rng| rng.shuffled(items))
}
