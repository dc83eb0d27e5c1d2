//! # anstable_core: Synthetic Slot Tables for ANS Conformance Testing
//!
//! ## Role
//!
//! anstable_core generates batches of structurally valid, deliberately
//! diverse symbol-to-slot assignments ("slot tables") for stress-testing an
//! ANS/rANS entropy coder. The tables carry no statistical meaning; they only
//! need to differ enough across a batch to cover short runs, long runs,
//! constant tables and tables whose high symbols are never reached.
//!
//! - Random Source contract and adapters (`rng`)
//! - `SlotTable` and `HistogramBatch` data model (`types`)
//! - Table Builder, Batch Generator and `GeneratorParams` (`builder`)
//!
//! ## Determinism
//!
//! A batch is a pure function of its parameters and the sequence of draws
//! returned by its Random Source. With a [`rng::SeededSource`] the same seed
//! always reproduces the same batch, and a batch of `n` tables is a prefix of
//! the batch of `n + 1` tables built from the same seed.
//!
//! ## Usage Example
//!
//! ```rust
//! use anstable_core::builder::{build_batch, GeneratorParams};
//! use anstable_core::rng::SeededSource;
//!
//! let mut rng = SeededSource::from_seed(7);
//! let batch = build_batch(4, 3, 16, &mut rng).unwrap();
//! assert_eq!(batch.len(), 3);
//! assert!(batch.validate().is_ok());
//!
//! // The same batch through an explicit parameter value.
//! let params = GeneratorParams::new(4, 3, 16, 7);
//! assert_eq!(anstable_core::builder::generate(&params).unwrap(), batch);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SlotTable` and `HistogramBatch`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod builder;
pub mod rng;
pub mod types;

pub use builder::{build_batch, build_table, generate, generate_many, GeneratorParams};
pub use rng::{RandomSource, ScriptedSource, SeededSource};
pub use types::{HistogramBatch, Run, SlotTable, TableError};
