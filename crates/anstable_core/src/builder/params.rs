//! Generator parameters and seeded entry points.
//!
//! [`GeneratorParams`] is the explicit configuration value for one batch.
//! It is built once by the caller and passed by reference; each call owns
//! its own [`SeededSource`] for the duration of the batch.

use rayon::prelude::*;
use tracing::info;

use super::build_batch;
use crate::rng::SeededSource;
use crate::types::error::check_sizes;
use crate::types::{HistogramBatch, TableError};

/// Default table precision: 4096 slots (12 bits).
pub const DEFAULT_PRECISION: usize = 1 << 12;

/// Parameters of one seeded batch.
///
/// # Examples
///
/// ```rust
/// use anstable_core::builder::{generate, GeneratorParams};
///
/// let params = GeneratorParams::new(8, 4, 64, 2024);
/// let batch = generate(&params).unwrap();
/// assert_eq!(batch.len(), 4);
/// assert_eq!(batch.precision(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorParams {
    /// Number of distinct symbols (at least 1)
    pub alphabet_size: usize,
    /// Number of tables in the batch (0 yields an empty batch)
    pub num_histograms: usize,
    /// Number of slots per table (at least 1)
    pub precision: usize,
    /// Seed of the batch's Random Source
    pub seed: u64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            alphabet_size: 16,
            num_histograms: 8,
            precision: DEFAULT_PRECISION,
            seed: 0,
        }
    }
}

impl GeneratorParams {
    /// Creates a parameter set.
    pub fn new(alphabet_size: usize, num_histograms: usize, precision: usize, seed: u64) -> Self {
        Self {
            alphabet_size,
            num_histograms,
            precision,
            seed,
        }
    }

    /// Checks the size preconditions.
    pub fn validate(&self) -> Result<(), TableError> {
        check_sizes(self.alphabet_size, self.precision)
    }

    /// A fresh Random Source seeded for this batch.
    pub fn source(&self) -> SeededSource {
        SeededSource::from_seed(self.seed)
    }
}

/// Generates the batch described by `params` from its own seeded source.
pub fn generate(params: &GeneratorParams) -> Result<HistogramBatch, TableError> {
    params.validate()?;
    let mut rng = params.source();
    let batch = build_batch(
        params.alphabet_size,
        params.num_histograms,
        params.precision,
        &mut rng,
    )?;
    info!(
        seed = params.seed,
        tables = batch.len(),
        draws = rng.draws(),
        "generated histogram batch"
    );
    Ok(batch)
}

/// Generates several batches in parallel, one independently seeded source
/// per batch. Results are returned in input order.
///
/// Every parameter set is validated before any batch is built; the first
/// invalid one is returned as the error.
pub fn generate_many(params: &[GeneratorParams]) -> Result<Vec<HistogramBatch>, TableError> {
    params.iter().try_for_each(GeneratorParams::validate)?;
    params.par_iter().map(generate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = GeneratorParams::default();
        assert_eq!(params.alphabet_size, 16);
        assert_eq!(params.num_histograms, 8);
        assert_eq!(params.precision, 4096);
        assert_eq!(params.seed, 0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        assert!(GeneratorParams::new(0, 1, 8, 0)
            .validate()
            .unwrap_err()
            .is_invalid_parameter());
        assert!(GeneratorParams::new(4, 1, 0, 0)
            .validate()
            .unwrap_err()
            .is_invalid_parameter());
        assert!(GeneratorParams::new(4, 0, 8, 0).validate().is_ok());
    }

    #[test]
    fn test_source_uses_seed() {
        let params = GeneratorParams::new(4, 1, 8, 77);
        assert_eq!(params.source().seed(), 77);
    }

    #[test]
    fn test_generate_reproducible() {
        let params = GeneratorParams::new(12, 6, 256, 31337);
        assert_eq!(generate(&params).unwrap(), generate(&params).unwrap());
    }

    #[test]
    fn test_generate_many_matches_sequential() {
        let params: Vec<GeneratorParams> = (0..8)
            .map(|seed| GeneratorParams::new(5 + seed as usize, 4, 128, seed))
            .collect();

        let parallel = generate_many(&params).unwrap();
        let sequential: Vec<HistogramBatch> =
            params.iter().map(|p| generate(p).unwrap()).collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_generate_many_rejects_any_invalid() {
        let params = vec![
            GeneratorParams::new(4, 2, 16, 1),
            GeneratorParams::new(4, 2, 0, 2),
        ];
        let err = generate_many(&params).unwrap_err();
        assert_eq!(
            err,
            TableError::InvalidParameter {
                name: "precision",
                value: 0
            }
        );
    }

    #[test]
    fn test_generate_many_empty() {
        assert!(generate_many(&[]).unwrap().is_empty());
    }
}
