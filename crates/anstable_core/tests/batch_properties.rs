//! Property-based tests for generated batches.
//!
//! Verifies, for arbitrary parameters and seeds:
//! - every table satisfies the structural invariants
//! - batches are deterministic and prefix-stable
//! - degenerate sizes produce the expected constant tables
//! - derived views (counts, runs) agree with the raw slots

use anstable_core::builder::{build_batch, build_table, generate, GeneratorParams};
use anstable_core::rng::{ScriptedSource, SeededSource};
use proptest::prelude::*;

/// Checks invariants 1 to 4 directly on the slots, independent of
/// `SlotTable::validate`.
fn assert_structurally_valid(slots: &[usize], alphabet_size: usize, precision: usize) {
    assert_eq!(slots.len(), precision);
    assert_eq!(slots[0], 0);
    for pair in slots.windows(2) {
        assert!(
            pair[1] == pair[0] || pair[1] == pair[0] + 1,
            "bad step {:?}",
            pair
        );
    }
    assert!(slots.iter().all(|&s| s < alphabet_size));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_tables_structurally_valid(
        seed in any::<u64>(),
        alphabet_size in 1..300usize,
        precision in 1..2048usize,
        num_histograms in 0..8usize,
    ) {
        let mut rng = SeededSource::from_seed(seed);
        let batch = build_batch(alphabet_size, num_histograms, precision, &mut rng).unwrap();

        prop_assert_eq!(batch.len(), num_histograms);
        for table in &batch {
            assert_structurally_valid(table.slots(), alphabet_size, precision);
            prop_assert!(table.validate().is_ok());
        }
    }

    #[test]
    fn prop_batch_deterministic(
        seed in any::<u64>(),
        alphabet_size in 1..64usize,
        precision in 1..512usize,
        num_histograms in 0..6usize,
    ) {
        let params = GeneratorParams::new(alphabet_size, num_histograms, precision, seed);
        prop_assert_eq!(generate(&params).unwrap(), generate(&params).unwrap());
    }

    #[test]
    fn prop_batch_prefix_stable(
        seed in any::<u64>(),
        alphabet_size in 1..64usize,
        precision in 1..512usize,
        n in 0..6usize,
    ) {
        let short = generate(&GeneratorParams::new(alphabet_size, n, precision, seed)).unwrap();
        let long = generate(&GeneratorParams::new(alphabet_size, n + 1, precision, seed)).unwrap();

        prop_assert_eq!(short.tables(), &long.tables()[..n]);
    }

    #[test]
    fn prop_single_symbol_alphabet_all_zero(seed in any::<u64>(), precision in 1..1024usize) {
        let mut rng = SeededSource::from_seed(seed);
        let table = build_table(1, precision, &mut rng).unwrap();
        prop_assert!(table.slots().iter().all(|&s| s == 0));
    }

    #[test]
    fn prop_single_slot_is_zero(seed in any::<u64>(), alphabet_size in 1..1000usize) {
        let mut rng = SeededSource::from_seed(seed);
        let table = build_table(alphabet_size, 1, &mut rng).unwrap();
        prop_assert_eq!(table.slots(), &[0usize][..]);
    }

    /// Once a zero run length is drawn the symbol never changes again,
    /// whatever the source returns afterwards.
    #[test]
    fn prop_zero_draw_freezes(
        alphabet_size in 2..50usize,
        precision in 2..200usize,
        fallback in 0..10u64,
    ) {
        let mut rng = ScriptedSource::new([0]).with_fallback(fallback);
        let table = build_table(alphabet_size, precision, &mut rng).unwrap();

        prop_assert!(table.slots()[1..].iter().all(|&s| s == 1));
        prop_assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn prop_counts_and_runs_agree(
        seed in any::<u64>(),
        alphabet_size in 1..100usize,
        precision in 1..1024usize,
    ) {
        let mut rng = SeededSource::from_seed(seed);
        let table = build_table(alphabet_size, precision, &mut rng).unwrap();

        let counts = table.counts();
        prop_assert_eq!(counts.len(), alphabet_size);
        prop_assert_eq!(counts.iter().sum::<usize>(), precision);

        let mut rebuilt = Vec::with_capacity(precision);
        for run in table.runs() {
            prop_assert_eq!(run.start, rebuilt.len());
            prop_assert_eq!(counts[run.symbol], run.len);
            rebuilt.extend(std::iter::repeat(run.symbol).take(run.len));
        }
        prop_assert_eq!(rebuilt.as_slice(), table.slots());
        prop_assert_eq!(table.runs().len(), table.distinct_symbols());
    }
}

#[test]
fn test_invalid_parameters_produce_no_output() {
    let params = GeneratorParams::new(0, 4, 16, 1);
    assert!(generate(&params).unwrap_err().is_invalid_parameter());

    let params = GeneratorParams::new(4, 4, 0, 1);
    assert!(generate(&params).unwrap_err().is_invalid_parameter());
}
