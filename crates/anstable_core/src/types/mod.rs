//! Data model for generated tables.
//!
//! This module provides:
//! - `SlotTable`: one immutable symbol-to-slot assignment
//! - `Run`: a maximal span of slots holding one symbol
//! - `HistogramBatch`: an ordered batch of tables sharing parameters
//! - `TableError`: errors from building and validating tables

pub mod batch;
pub mod error;
pub mod slot_table;

pub use batch::HistogramBatch;
pub use error::TableError;
pub use slot_table::{Run, SlotTable};
