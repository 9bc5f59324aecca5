//! Argument errors reported by the sampling operations

use thiserror::Error;

/// Errors that can occur when sampling
///
/// Invalid arguments are reported, never clamped.
#[derive(Debug, Error, PartialEq)]
pub enum SamplingError {
    #[error("Partition variation must be >= 0, got {variation}")]
    NegativeVariation { variation: f32 },

    #[error("Average seconds between events must be >= 0, got {seconds}")]
    NegativeEventInterval { seconds: f32 },

    #[error("Cannot sample from an empty collection")]
    EmptyCollection,

    #[error("Switch requires at least one positive weight")]
    NoPositiveWeight,
}
