//! Serialisation of batches (requires the `serde` feature).
//!
//! Run with `cargo test -p anstable_core --features serde`.

#![cfg(feature = "serde")]

use anstable_core::builder::{generate, GeneratorParams};
use anstable_core::types::HistogramBatch;

#[test]
fn test_batch_json_layout() {
    let batch =
        HistogramBatch::from_distributions(3, 4, vec![vec![0, 0, 1, 2], vec![0, 1, 1, 1]]).unwrap();

    let json = serde_json::to_value(&batch).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "alphabet_size": 3,
            "precision": 4,
            "tables": [[0, 0, 1, 2], [0, 1, 1, 1]]
        })
    );
}

#[test]
fn test_generated_batch_survives_json() {
    let batch = generate(&GeneratorParams::new(9, 5, 200, 11)).unwrap();
    let text = serde_json::to_string(&batch).unwrap();
    let parsed: HistogramBatch = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, batch);
}

#[test]
fn test_deserialise_rejects_invalid_table() {
    let text = r#"{"alphabet_size": 2, "precision": 3, "tables": [[0, 1, 2]]}"#;
    let err = serde_json::from_str::<HistogramBatch>(text).unwrap_err();
    assert!(err.to_string().contains("beyond last symbol"));
}

#[test]
fn test_deserialise_rejects_wrong_length() {
    let text = r#"{"alphabet_size": 2, "precision": 3, "tables": [[0, 1]]}"#;
    let err = serde_json::from_str::<HistogramBatch>(text).unwrap_err();
    assert!(err.to_string().contains("expected 3"));
}

#[test]
fn test_params_json() {
    let params: GeneratorParams = serde_json::from_str(
        r#"{"alphabet_size": 4, "num_histograms": 2, "precision": 64, "seed": 9}"#,
    )
    .unwrap();
    assert_eq!(params, GeneratorParams::new(4, 2, 64, 9));
}
