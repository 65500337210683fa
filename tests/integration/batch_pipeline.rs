//! End-to-end batch classification from JSON Lines to CSV

use crate::common::{ada_record, write_jsonl};
use serde::Deserialize;
use std::path::Path;
use tempfile::TempDir;
use tx_untangling::processor::BatchProcessor;
use tx_untangling::types::{BatchConfig, Category, ClassificationStats, TransactionRecord, UtxoEntry};

#[derive(Debug, Deserialize)]
struct Row {
    tx_id: String,
    category: Category,
    inputs: usize,
    outputs: usize,
    minimal_pairs: usize,
    sub_flows: String,
}

fn read_rows(path: &Path) -> Vec<Row> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.deserialize().map(|row| row.unwrap()).collect()
}

fn complex_record() -> TransactionRecord {
    TransactionRecord {
        tx_id: "complex".to_string(),
        inputs: vec![
            UtxoEntry::new("X", 10).with_asset("FT1", 5),
            UtxoEntry::new("A", 100),
        ],
        outputs: vec![
            UtxoEntry::new("X", 60),
            UtxoEntry::new("B", 46).with_asset("FT1", 5),
        ],
        fee: 4,
        withdrawals: Vec::new(),
        mint: Default::default(),
    }
}

fn fixture_records() -> Vec<TransactionRecord> {
    vec![
        ada_record("regular", &[("A", 100)], &[("B", 98)], 2),
        complex_record(),
        ada_record("ambiguous", &[("A", 100), ("B", 100)], &[("C", 98), ("D", 98)], 4),
        ada_record("separable", &[("A", 100), ("B", 50)], &[("C", 97), ("D", 49)], 4),
        ada_record("incomplete", &[("A", 100)], &[("B", 90)], 2),
    ]
}

fn run(input: &Path, output: &Path, batch_size: usize, workers: usize) -> ClassificationStats {
    let config = BatchConfig::builder()
        .input_path(input)
        .output_path(output)
        .batch_size(batch_size)
        .worker_threads(workers)
        .progress_interval(1)
        .build()
        .unwrap();
    BatchProcessor::new(config).unwrap().run().unwrap()
}

#[test]
fn test_batch_writes_one_row_per_valid_record() {
    let input = write_jsonl(&fixture_records(), &["", "{\"tx_id\": 7}", "   "]);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("nested").join("classifications.csv");

    let stats = run(input.path(), &output, 2, 3);

    assert_eq!(stats.transactions_processed, 5);
    assert_eq!(stats.malformed_records, 1);
    assert_eq!(stats.count(Category::Separable), 1);
    assert_eq!(stats.count(Category::Ambiguous), 1);
    assert_eq!(stats.splittable(), 2);

    let rows = read_rows(&output);
    let summary: Vec<(&str, Category)> = rows
        .iter()
        .map(|row| (row.tx_id.as_str(), row.category))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("regular", Category::Regular),
            ("complex", Category::Complex),
            ("ambiguous", Category::Ambiguous),
            ("separable", Category::Separable),
            ("incomplete", Category::NotComplete),
        ]
    );

    let separable = &rows[3];
    assert_eq!((separable.inputs, separable.outputs), (2, 2));
    assert_eq!(separable.minimal_pairs, 2);
    assert_eq!(separable.sub_flows, "A>C;B>D");
    assert!(rows[2].sub_flows.is_empty());
}

#[test]
fn test_batch_size_does_not_change_results() {
    let records: Vec<TransactionRecord> = (0..4).flat_map(|_| fixture_records()).collect();
    let input = write_jsonl(&records, &[]);
    let dir = TempDir::new().unwrap();

    let single = dir.path().join("single.csv");
    let chunked = dir.path().join("chunked.csv");
    run(input.path(), &single, 1000, 1);
    run(input.path(), &chunked, 3, 4);

    let categories = |path: &Path| -> Vec<(String, Category)> {
        read_rows(path)
            .into_iter()
            .map(|row| (row.tx_id, row.category))
            .collect()
    };
    let expected = categories(&single);
    assert_eq!(expected.len(), 20);
    assert_eq!(categories(&chunked), expected);
}

#[test]
fn test_empty_input_writes_empty_csv() {
    let input = write_jsonl(&[], &[]);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("empty.csv");

    let stats = run(input.path(), &output, 10, 2);

    assert_eq!(stats.transactions_processed, 0);
    assert!(read_rows(&output).is_empty());
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = BatchConfig::builder()
        .input_path(dir.path().join("absent.jsonl"))
        .output_path(dir.path().join("out.csv"))
        .build()
        .unwrap();

    assert!(BatchProcessor::new(config).unwrap().run().is_err());
}
