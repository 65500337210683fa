//! Properties checked over generated transactions

use crate::common::Lcg;
use std::collections::BTreeMap;
use tx_untangling::types::{
    is_all_zero, AddressBook, Category, Quantity, TransactionRecord, UtxoEntry, ADA_KEY,
};
use tx_untangling::untangling::{
    aggregate, classify_with_details, find_connectable_pairs, full_mask, is_connectable, select,
    simplify, untangle, ConnectablePair,
};

const ADDRESSES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn random_utxo(rng: &mut Lcg, ada: u64) -> UtxoEntry {
    let address = ADDRESSES[rng.next_in(0, ADDRESSES.len() as u64 - 1) as usize];
    UtxoEntry::new(address, ada)
}

/// Balanced transaction of at most nine UTXOs, sometimes carrying a
/// token and a withdrawal
fn random_record(rng: &mut Lcg, index: usize) -> TransactionRecord {
    let mut inputs: Vec<UtxoEntry> = (0..rng.next_in(1, 4))
        .map(|_| {
            let ada = rng.next_in(1, 200);
            random_utxo(rng, ada)
        })
        .collect();
    let mut outputs: Vec<UtxoEntry> = (0..rng.next_in(1, 4))
        .map(|_| {
            let ada = rng.next_in(1, 200);
            random_utxo(rng, ada)
        })
        .collect();

    if rng.next_in(0, 2) == 0 {
        let amount = rng.next_in(1, 10);
        let first = inputs.remove(0);
        inputs.insert(0, first.with_asset("FT1", amount));
        let last = outputs.pop().map(|utxo| utxo.with_asset("FT1", amount));
        outputs.extend(last);
    }

    let withdrawals: Vec<u64> = if rng.next_in(0, 3) == 0 {
        vec![rng.next_in(1, 50)]
    } else {
        Vec::new()
    };

    let total = |side: &[UtxoEntry]| -> Quantity {
        side.iter().map(|utxo| Quantity::from(utxo.ada)).sum()
    };
    let available = total(&inputs) + withdrawals.iter().map(|w| *w as Quantity).sum::<Quantity>();
    let spent = total(&outputs);
    let fee = rng.next_in(1, 10) as Quantity;
    if available < spent + fee {
        inputs.push(random_utxo(rng, (spent + fee - available) as u64));
    }
    let available = total(&inputs) + withdrawals.iter().map(|w| *w as Quantity).sum::<Quantity>();

    TransactionRecord {
        tx_id: format!("gen{}", index),
        inputs,
        outputs,
        fee: (available - spent) as u64,
        withdrawals,
        mint: BTreeMap::new(),
    }
}

fn records(seed: u64, count: usize) -> Vec<TransactionRecord> {
    let mut rng = Lcg::new(seed);
    (0..count).map(|i| random_record(&mut rng, i)).collect()
}

fn key_totals(book: &AddressBook) -> BTreeMap<String, Quantity> {
    let mut totals = BTreeMap::new();
    for vector in book.values() {
        for (key, value) in vector {
            *totals.entry(key.clone()).or_insert(0) += value;
        }
    }
    totals
}

#[test]
fn test_aggregation_ignores_record_order() {
    for record in records(1, 200) {
        let mut reversed = record.inputs.clone();
        reversed.reverse();
        assert_eq!(aggregate(&record.inputs), aggregate(&reversed));
    }
}

#[test]
fn test_aggregation_preserves_key_totals() {
    for record in records(2, 200) {
        let book = aggregate(&record.outputs);
        let totals = key_totals(&book);
        let ada: Quantity = record.outputs.iter().map(|utxo| Quantity::from(utxo.ada)).sum();
        assert_eq!(totals[ADA_KEY], ada);
        for vector in book.values() {
            assert!(vector.contains_key(ADA_KEY));
        }
    }
}

#[test]
fn test_simplification_is_idempotent_and_drops_zero_vectors() {
    for record in records(3, 200) {
        let (inputs, outputs) = simplify(&aggregate(&record.inputs), &aggregate(&record.outputs));
        assert!(inputs.iter().all(|(_, vector)| !is_all_zero(vector)));
        assert!(outputs.iter().all(|(_, vector)| !is_all_zero(vector)));

        let again = simplify(
            &inputs.iter().cloned().collect(),
            &outputs.iter().cloned().collect(),
        );
        assert_eq!((inputs, outputs), again);
    }
}

#[test]
fn test_simplification_keeps_balance() {
    for record in records(4, 200) {
        let incoming = aggregate(&record.inputs);
        let outgoing = aggregate(&record.outputs);
        let (inputs, outputs) = simplify(&incoming, &outgoing);

        let before = key_totals(&incoming)[ADA_KEY] - key_totals(&outgoing)[ADA_KEY];
        let after = key_totals(&inputs.into_iter().collect()).get(ADA_KEY).copied().unwrap_or(0)
            - key_totals(&outputs.into_iter().collect()).get(ADA_KEY).copied().unwrap_or(0);
        assert_eq!(before, after);
    }
}

#[test]
fn test_selector_length_matches_popcount() {
    let items: Vec<usize> = (0..10).collect();
    for mask in 0..=full_mask(items.len()) {
        let selected = select(&items, mask);
        assert_eq!(selected.len(), mask.count_ones() as usize);
        for item in selected {
            assert_ne!(mask & (1 << item), 0);
        }
    }
}

#[test]
fn test_classification_is_total_and_deterministic() {
    let records = records(5, 300);
    let mut seen = BTreeMap::new();

    for record in &records {
        let (_, _, first) = untangle(record);
        let (_, _, second) = untangle(record);
        assert_eq!(first, second);
        assert_ne!(first.category, Category::NotClassified);
        assert_ne!(first.category, Category::NotComplete, "{:?}", record);
        *seen.entry(first.category).or_insert(0usize) += 1;
    }

    assert!(seen.len() >= 2, "only saw {:?}", seen);
}

#[test]
fn test_memoized_enumeration_matches_direct_evaluation() {
    for record in records(6, 150) {
        let (inputs, outputs) = simplify(&aggregate(&record.inputs), &aggregate(&record.outputs));
        if inputs.is_empty() || outputs.is_empty() {
            continue;
        }
        let adjustments = record.adjustments();
        let full_inputs = full_mask(inputs.len());
        let full_outputs = full_mask(outputs.len());

        let mut direct = Vec::new();
        for i in 1..=full_inputs {
            for j in 1..=full_outputs {
                if i == full_inputs && j == full_outputs {
                    continue;
                }
                if is_connectable(select(&inputs, i), select(&outputs, j), &adjustments) {
                    direct.push(ConnectablePair::new(i, j));
                }
            }
        }

        assert_eq!(find_connectable_pairs(&inputs, &outputs, &adjustments), direct);
    }
}

#[test]
fn test_separable_minimal_pairs_are_disjoint() {
    for record in records(7, 300) {
        let (inputs, outputs) = simplify(&aggregate(&record.inputs), &aggregate(&record.outputs));
        let result = classify_with_details(&inputs, &outputs, &record.adjustments());
        if result.category != Category::Separable {
            continue;
        }

        assert!(!result.minimal_pairs.is_empty());
        for (i, first) in result.minimal_pairs.iter().enumerate() {
            for second in &result.minimal_pairs[i + 1..] {
                assert_eq!(first.inputs & second.inputs, 0);
                assert_eq!(first.outputs & second.outputs, 0);
            }
        }
    }
}
