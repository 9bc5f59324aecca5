//! Time-based event probabilities
//!
//! Meant to be called once per tick with the tick's elapsed time, so that
//! event frequency does not depend on the tick rate.

use crate::error::SamplingError;
use crate::rng::EntropySource;

use super::RandomGenerator;

impl<S: EntropySource> RandomGenerator<S> {
    /// Returns true on some calls, such that an event has a 50% chance of
    /// having happened after `half_life_seconds` of accumulated `delta_time`.
    ///
    /// No time elapsed → false. A zero half-life → true. Neither edge case
    /// consumes a draw.
    pub fn half_chance_in_time(&mut self, half_life_seconds: f32, delta_time: f32) -> bool {
        if delta_time == 0.0 {
            return false;
        }
        if half_life_seconds == 0.0 {
            return true;
        }

        self.float01() > 0.5f32.powf(delta_time / half_life_seconds)
    }

    /// Returns true if at least one event happened during `delta_time`,
    /// for events arriving as a Poisson process averaging one per
    /// `average_seconds_between_events`.
    ///
    /// P(at least one event) = 1 - e^(-delta_time / average_seconds)
    ///
    /// # Errors
    /// `NegativeEventInterval` if `average_seconds_between_events < 0`.
    ///
    /// # Example
    /// ```
    /// use random_generator_core_rs::RandomGenerator;
    ///
    /// let mut rng = RandomGenerator::new(7);
    /// // an event every 5 seconds on average, checked at 60 fps
    /// let fired = rng.chance_for_period(5.0, 1.0 / 60.0).unwrap();
    /// # let _ = fired;
    /// ```
    pub fn chance_for_period(
        &mut self,
        average_seconds_between_events: f32,
        delta_time: f32,
    ) -> Result<bool, SamplingError> {
        if average_seconds_between_events < 0.0 {
            return Err(SamplingError::NegativeEventInterval {
                seconds: average_seconds_between_events,
            });
        }
        if delta_time <= 0.0 {
            return Ok(false);
        }
        if average_seconds_between_events == 0.0 {
            return Ok(true);
        }

        let event_rate = delta_time / average_seconds_between_events;
        let probability = 1.0 - (-event_rate).exp();
        Ok(self.bool_with_chance(probability))
    }
}
