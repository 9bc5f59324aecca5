//! Default generator for callers that don't supply one
//!
//! Each thread owns one lazily created generator, seeded from the wall
//! clock on first access and kept for the thread's lifetime. It is never
//! reset and never locked. A single-threaded program therefore sees one
//! default stream for the whole process.
//!
//! Every call site that falls back to the default shares its stream, so
//! results depend on the order of all such calls on the thread.

use std::cell::RefCell;
use std::time::{SystemTime, UNIX_EPOCH};

use super::TinyMt32;
use crate::sampling::RandomGenerator;

thread_local! {
    static DEFAULT: RefCell<RandomGenerator<TinyMt32>> = RefCell::new({
        let seed = clock_seed();
        tracing::debug!(seed, "seeded default generator from clock");
        RandomGenerator::new(seed)
    });
}

/// Seed derived from the wall clock: low 32 bits of the number of
/// 100 ns ticks since the Unix epoch.
pub fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    (nanos / 100) as u32
}

/// Run `f` against this thread's default generator.
///
/// # Panics
/// Panics if `f` itself reaches the default generator, directly or via
/// a `*_default` helper or `RandomGenerator::from_default` (the generator
/// is already borrowed).
///
/// # Example
/// ```
/// use random_generator_core_rs::rng::with_default;
///
/// let roll = with_default(|rng| rng.int_range(1, 6));
/// assert!((1..=6).contains(&roll));
/// ```
pub fn with_default<R>(f: impl FnOnce(&mut RandomGenerator<TinyMt32>) -> R) -> R {
    DEFAULT.with(|cell| f(&mut cell.borrow_mut()))
}
