//! Integration tests for module exports.
//!
//! Verify that all public modules and types are accessible via absolute
//! paths and through the crate-root re-exports.

#[test]
fn test_rng_module_exports() {
    use anstable_core::rng::scripted::ScriptedSource;
    use anstable_core::rng::seeded::SeededSource;
    use anstable_core::rng::source::RandomSource;

    let mut seeded = SeededSource::from_seed(1);
    let mut scripted = ScriptedSource::new([2]);
    assert!(seeded.draw(0, 3) <= 3);
    assert_eq!(scripted.draw(0, 3), 2);
}

#[test]
fn test_types_module_exports() {
    use anstable_core::types::batch::HistogramBatch;
    use anstable_core::types::error::TableError;
    use anstable_core::types::slot_table::{Run, SlotTable};

    let table = SlotTable::from_slots(2, vec![0, 1]).unwrap();
    let runs: Vec<Run> = table.runs();
    assert_eq!(runs.len(), 2);

    let batch = HistogramBatch::from_tables(2, 2, vec![table]).unwrap();
    assert_eq!(batch.len(), 1);

    let _: fn(&TableError) -> bool = TableError::is_invalid_parameter;
}

#[test]
fn test_root_reexports() {
    use anstable_core::{
        build_batch, build_table, generate, generate_many, GeneratorParams, ScriptedSource,
        SeededSource,
    };

    let mut rng = ScriptedSource::new([]).with_fallback(1);
    assert_eq!(build_table(3, 3, &mut rng).unwrap().slots(), &[0, 1, 2]);

    let mut rng = SeededSource::from_seed(4);
    assert_eq!(build_batch(3, 2, 8, &mut rng).unwrap().len(), 2);

    let params = GeneratorParams::new(3, 2, 8, 4);
    assert_eq!(generate_many(&[params]).unwrap()[0], generate(&params).unwrap());
}
