//! # Random Source Contract and Adapters
//!
//! The table builders consume randomness through a single capability,
//! [`RandomSource::draw`], which returns an integer uniformly distributed over
//! an inclusive range. Any generator can back it; the builders never see the
//! concrete algorithm.
//!
//! ## Module Structure
//!
//! - [`source`]: the [`RandomSource`] trait
//! - [`seeded`]: [`SeededSource`], a seeded adapter over `rand::rngs::StdRng`
//! - [`scripted`]: [`ScriptedSource`], a replay stub for conformance tests
//!
//! ## Usage Example
//!
//! ```rust
//! use anstable_core::rng::{RandomSource, SeededSource};
//!
//! let mut rng = SeededSource::from_seed(12345);
//! let value = rng.draw(0, 9);
//! assert!(value <= 9);
//! assert_eq!(rng.draws(), 1);
//! ```
//!
//! ## Reproducibility
//!
//! Sources are stateful and each draw advances them by one step, so a
//! sequence of draws is only reproducible when it is issued in the same order
//! from the same seed. Sharing one source between threads is ruled out by the
//! `&mut self` receiver; parallel work must seed one source per task.

pub mod scripted;
pub mod seeded;
pub mod source;

// Public re-exports
pub use scripted::ScriptedSource;
pub use seeded::SeededSource;
pub use source::RandomSource;
