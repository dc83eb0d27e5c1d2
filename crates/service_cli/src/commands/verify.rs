//! Verify command implementation
//!
//! Loads a JSON batch file and checks every table's structural invariants.

use std::path::Path;

use anstable_core::types::HistogramBatch;
use tracing::info;

use crate::{CliError, Result};

/// Run the verify command
pub fn run(input: &Path) -> Result<HistogramBatch> {
    info!(input = %input.display(), "Verifying batch file");

    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }

    let content = std::fs::read_to_string(input)?;
    let batch = parse_batch(&content)?;

    info!(
        tables = batch.len(),
        alphabet_size = batch.alphabet_size(),
        precision = batch.precision(),
        "Batch is valid"
    );
    println!(
        "OK: {} tables, alphabet_size={}, precision={}",
        batch.len(),
        batch.alphabet_size(),
        batch.precision()
    );

    Ok(batch)
}

/// Parses a JSON batch document, validating every table.
///
/// Well-formed JSON whose tables break an invariant is reported as
/// [`CliError::InvalidBatch`]; malformed JSON as [`CliError::Json`].
pub fn parse_batch(content: &str) -> Result<HistogramBatch> {
    serde_json::from_str(content).map_err(|e| {
        if e.is_data() {
            CliError::InvalidBatch(e.to_string())
        } else {
            CliError::Json(e)
        }
    })
}
