//! Generate command implementation
//!
//! Builds one batch from the resolved configuration and writes it out.

use std::io;
use std::path::Path;

use anstable_core::builder::generate;
use anstable_core::types::HistogramBatch;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::output::{write_atomically, write_batch};
use crate::Result;

/// Run the generate command, writing to `output` or stdout
pub fn run(config: &GeneratorConfig, output: Option<&Path>) -> Result<HistogramBatch> {
    info!(
        alphabet_size = config.alphabet_size,
        num_histograms = config.num_histograms,
        precision = config.precision,
        seed = config.seed,
        format = %config.format,
        "Generating slot tables"
    );

    let batch = generate(&config.params())?;

    match output {
        Some(path) => {
            write_atomically(path, |writer| write_batch(&batch, config.format, writer))?;
            info!(path = %path.display(), "Batch written");
        }
        None => {
            let stdout = io::stdout();
            write_batch(&batch, config.format, stdout.lock())?;
        }
    }

    Ok(batch)
}
