//! Stats command implementation
//!
//! Generates a batch and prints per-table run statistics.

use std::io;

use anstable_core::builder::generate;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::output::{write_summary, TableStats};
use crate::Result;

/// Run the stats command
pub fn run(config: &GeneratorConfig) -> Result<Vec<TableStats>> {
    let batch = generate(&config.params())?;

    let stats: Vec<TableStats> = batch
        .iter()
        .enumerate()
        .map(|(j, table)| TableStats::new(j, table))
        .collect();

    let partial = stats.iter().filter(|s| s.distinct_symbols < config.alphabet_size).count();
    info!(
        tables = stats.len(),
        short_of_alphabet = partial,
        "Batch statistics computed"
    );

    write_summary(&batch, io::stdout().lock())?;
    Ok(stats)
}
