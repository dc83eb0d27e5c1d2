//! # Table Builder and Batch Generator
//!
//! ## Algorithm
//!
//! A table is filled slot by slot with a run countdown. The countdown starts
//! at 1, so slot 0 always holds symbol 0. Whenever the countdown reaches
//! exactly zero the symbol advances by one (capped at `alphabet_size - 1`)
//! and a fresh run length is drawn from `[0, precision - k + 1]`, where `k`
//! is the current slot. The bound shrinks as the table fills, biasing the
//! tail toward shorter runs. The countdown is decremented on every slot.
//!
//! A drawn run length of 0 sends the countdown negative on the next
//! decrement. It never returns to exactly zero afterwards, so the current
//! symbol holds for the rest of the table.
//!
//! ## Usage Example
//!
//! ```rust
//! use anstable_core::builder::build_table;
//! use anstable_core::rng::ScriptedSource;
//!
//! let mut rng = ScriptedSource::new([3, 0]);
//! let table = build_table(3, 5, &mut rng).unwrap();
//! assert_eq!(table.slots(), &[0, 1, 1, 1, 2]);
//! ```

mod params;

pub use params::{generate, generate_many, GeneratorParams, DEFAULT_PRECISION};

use tracing::{debug, trace};

use crate::rng::RandomSource;
use crate::types::error::check_sizes;
use crate::types::{HistogramBatch, SlotTable, TableError};

/// Builds one slot table of `precision` slots over `alphabet_size` symbols.
///
/// # Errors
///
/// - [`TableError::InvalidParameter`] if either size is zero; no draw is
///   consumed in that case
/// - [`TableError::DrawOutOfRange`] if `rng` returns a value outside the
///   requested range
pub fn build_table<R>(
    alphabet_size: usize,
    precision: usize,
    rng: &mut R,
) -> Result<SlotTable, TableError>
where
    R: RandomSource + ?Sized,
{
    check_sizes(alphabet_size, precision)?;
    fill_table(alphabet_size, precision, rng)
}

/// Builds `num_histograms` tables in order from one continuous draw stream.
///
/// The sizes are checked once up front. Zero tables yields an empty batch.
/// Any failure discards the tables built so far and returns the error.
pub fn build_batch<R>(
    alphabet_size: usize,
    num_histograms: usize,
    precision: usize,
    rng: &mut R,
) -> Result<HistogramBatch, TableError>
where
    R: RandomSource + ?Sized,
{
    check_sizes(alphabet_size, precision)?;

    debug!(
        alphabet_size,
        num_histograms, precision, "building histogram batch"
    );

    let tables = (0..num_histograms)
        .map(|_| fill_table(alphabet_size, precision, &mut *rng))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(tables = tables.len(), "histogram batch complete");
    Ok(HistogramBatch::new_unchecked(alphabet_size, precision, tables))
}

/// Fills one table. Sizes must already be checked.
fn fill_table<R>(
    alphabet_size: usize,
    precision: usize,
    rng: &mut R,
) -> Result<SlotTable, TableError>
where
    R: RandomSource + ?Sized,
{
    let last_symbol = alphabet_size - 1;
    let mut slots = Vec::with_capacity(precision);
    let mut symbol = 0usize;
    // Signed: a zero draw must be able to go negative and stay there.
    let mut remaining: i64 = 1;
    let mut draws = 0usize;

    for k in 0..precision {
        if remaining == 0 {
            symbol = (symbol + 1).min(last_symbol);
            remaining = draw_run_length(rng, (precision - k + 1) as u64)?;
            draws += 1;
        }
        slots.push(symbol);
        remaining -= 1;
    }

    trace!(draws, max_symbol = symbol, "slot table built");
    Ok(SlotTable::new_unchecked(alphabet_size, slots))
}

fn draw_run_length<R>(rng: &mut R, high: u64) -> Result<i64, TableError>
where
    R: RandomSource + ?Sized,
{
    let value = rng.draw(0, high);
    let out_of_range = TableError::DrawOutOfRange {
        low: 0,
        high,
        value,
    };
    if value > high {
        return Err(out_of_range);
    }
    i64::try_from(value).map_err(|_| out_of_range)
}
