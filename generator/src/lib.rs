//! Random Generator Core - Rust Engine
//!
//! Deterministic pseudo-randomness for games, procedural content and
//! simulations. The same seed tuple produces the same values on every
//! platform, so a seed can be stored or sent instead of the values it
//! generates, and every entity can own a cheap independent stream.
//!
//! # Architecture
//!
//! - **rng**: TinyMT32 bit engine, seed config, default generator
//! - **sampling**: floats, integers, booleans, time-based events,
//!   partitions, weighted choice, geometry, collection helpers
//! - **checkpoint**: save/restore engine state
//!
//! # Critical Invariants
//!
//! 1. All randomness comes from `EntropySource::next_u32`
//! 2. Same seed tuple + same calls → same results
//! 3. Not cryptographically secure
//!
//! # Example
//! ```
//! use random_generator_core_rs::{RandomGenerator, SeedConfig};
//!
//! let mut rng = RandomGenerator::with_config(SeedConfig::with_parameters(1, 3, 3, 7));
//! assert_eq!(rng.next_u32(), 0xa564a7ba);
//!
//! let spawn = rng.in_unit_circle();
//! assert!(spawn.length_squared() <= 1.0);
//! ```

// Module declarations
pub mod checkpoint;
pub mod error;
pub mod rng;
pub mod sampling;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, GeneratorSnapshot};
pub use error::SamplingError;
pub use rng::{with_default, EntropySource, SeedConfig, TinyMt32};
pub use sampling::collections::{random_element, random_element_default, shuffled, shuffled_default};
pub use sampling::RandomGenerator;
