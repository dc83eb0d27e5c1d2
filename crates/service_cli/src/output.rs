//! Batch writers for the supported output formats.

use std::io::{BufWriter, Write};
use std::path::Path;

use anstable_core::types::{HistogramBatch, SlotTable};
use tempfile::NamedTempFile;

use crate::config::OutputFormat;
use crate::Result;

/// Summary statistics of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    /// Position of the table in its batch
    pub index: usize,
    /// Number of distinct symbols present
    pub distinct_symbols: usize,
    /// Number of maximal runs
    pub runs: usize,
    /// Length of the longest run
    pub longest_run: usize,
    /// Length of the final run
    pub final_run: usize,
}

impl TableStats {
    /// Computes the statistics of `table` at position `index`.
    pub fn new(index: usize, table: &SlotTable) -> Self {
        let runs = table.runs();
        Self {
            index,
            distinct_symbols: table.distinct_symbols(),
            runs: runs.len(),
            longest_run: runs.iter().map(|r| r.len).max().unwrap_or(0),
            final_run: runs.last().map(|r| r.len).unwrap_or(0),
        }
    }
}

/// Writes `batch` to `writer` in `format`.
pub fn write_batch<W: Write>(batch: &HistogramBatch, format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(batch, writer),
        OutputFormat::Csv => write_csv(batch, writer),
        OutputFormat::Table => write_summary(batch, writer),
    }
}

/// Writes to `path` through a temporary file in the same directory.
///
/// `path` is replaced only after `write` succeeds. On failure the temporary
/// file is removed and an existing file at `path` is left untouched.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn write_json<W: Write>(batch: &HistogramBatch, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, batch)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn write_csv<W: Write>(batch: &HistogramBatch, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["table", "slot", "symbol"])?;
    for (j, table) in batch.iter().enumerate() {
        for (k, &symbol) in table.slots().iter().enumerate() {
            csv_writer.serialize((j, k, symbol))?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes one summary row per table.
pub fn write_summary<W: Write>(batch: &HistogramBatch, mut writer: W) -> Result<()> {
    writeln!(
        writer,
        "alphabet_size={} precision={} tables={}",
        batch.alphabet_size(),
        batch.precision(),
        batch.len()
    )?;
    writeln!(writer, "┌────────┬─────────┬────────┬─────────────┬───────────┐")?;
    writeln!(writer, "│ Table  │ Symbols │ Runs   │ Longest run │ Final run │")?;
    writeln!(writer, "├────────┼─────────┼────────┼─────────────┼───────────┤")?;
    if batch.is_empty() {
        writeln!(writer, "│ (none) │         │        │             │           │")?;
    }
    for (j, table) in batch.iter().enumerate() {
        let stats = TableStats::new(j, table);
        writeln!(
            writer,
            "│ {:>6} │ {:>7} │ {:>6} │ {:>11} │ {:>9} │",
            stats.index, stats.distinct_symbols, stats.runs, stats.longest_run, stats.final_run
        )?;
    }
    writeln!(writer, "└────────┴─────────┴────────┴─────────────┴───────────┘")?;
    writer.flush()?;
    Ok(())
}
