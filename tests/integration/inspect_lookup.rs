//! Transaction lookup used by the inspect command

use crate::common::{ada_record, write_jsonl};
use tx_untangling::errors::AppError;
use tx_untangling::processor::find_transaction;
use tx_untangling::types::Category;
use tx_untangling::untangling::untangle;

#[test]
fn test_find_transaction_by_id() {
    let records = vec![
        ada_record("first", &[("A", 100)], &[("B", 98)], 2),
        ada_record("second", &[("A", 100), ("B", 50)], &[("C", 97), ("D", 49)], 4),
    ];
    let file = write_jsonl(&records, &["not a record"]);

    let found = find_transaction(file.path(), "second").unwrap();
    assert_eq!(found, records[1]);

    let (_, _, result) = untangle(&found);
    assert_eq!(result.category, Category::Separable);
}

#[test]
fn test_malformed_lines_are_skipped_during_lookup() {
    let file = write_jsonl(&[], &["{broken", ""]);
    let mut content = std::fs::read_to_string(file.path()).unwrap();
    content.push_str(&serde_json::to_string(&ada_record("late", &[("A", 3)], &[("B", 1)], 2)).unwrap());
    content.push('\n');
    std::fs::write(file.path(), content).unwrap();

    assert_eq!(find_transaction(file.path(), "late").unwrap().tx_id, "late");
}

#[test]
fn test_unknown_id_is_not_found() {
    let file = write_jsonl(&[ada_record("only", &[("A", 100)], &[("B", 98)], 2)], &[]);

    match find_transaction(file.path(), "missing") {
        Err(AppError::TransactionNotFound { tx_id }) => assert_eq!(tx_id, "missing"),
        other => panic!("unexpected: {:?}", other),
    }
}
