//! Ordered decision procedure assigning one category per transaction
//!
//! The guards are not mutually exclusive on their own; their order is part
//! of the classification and must not change.

use super::aggregate::aggregate;
use super::ambiguity::{ambiguous_by_lemma_1, ambiguous_by_lemma_2, minimal_pairs};
use super::connectability::is_complete;
use super::pairs::{find_connectable_pairs, ConnectablePair};
use super::simplify::simplify;
use crate::types::{AddressEntry, Category, FeeMintWithdraw, TransactionRecord, TransactionSide};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Largest `inputs + outputs + withdrawals` count that is still enumerated
pub const SIZE_LIMIT: usize = 10;

/// Category plus the pairs that decided it.
///
/// Pair lists are empty for every category decided before enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    pub connectable_pairs: Vec<ConnectablePair>,
    pub minimal_pairs: Vec<ConnectablePair>,
}

impl Classification {
    fn decided(category: Category) -> Self {
        Self {
            category,
            connectable_pairs: Vec::new(),
            minimal_pairs: Vec::new(),
        }
    }
}

/// Classify simplified transaction sides
pub fn classify(
    inputs: &[AddressEntry],
    outputs: &[AddressEntry],
    adjustments: &FeeMintWithdraw,
) -> Category {
    classify_with_details(inputs, outputs, adjustments).category
}

/// Classify simplified transaction sides, keeping the connectable and
/// minimal pairs found along the way
pub fn classify_with_details(
    inputs: &[AddressEntry],
    outputs: &[AddressEntry],
    adjustments: &FeeMintWithdraw,
) -> Classification {
    if !is_complete(inputs, outputs, adjustments) {
        debug!("Conservation law violated");
        return Classification::decided(Category::NotComplete);
    }

    if inputs.is_empty() || outputs.is_empty() {
        return Classification::decided(Category::NoInputOrOutput);
    }

    if inputs.len() == 1 || outputs.len() == 1 {
        return Classification::decided(Category::Regular);
    }

    if shares_address(inputs, outputs) {
        debug!("Address remains on both sides after simplification");
        return Classification::decided(Category::Complex);
    }

    let size = inputs.len() + outputs.len() + adjustments.withdrawal_count();
    if size > SIZE_LIMIT {
        debug!("Size {} exceeds limit {}, skipping enumeration", size, SIZE_LIMIT);
        return Classification::decided(Category::SizeLimit);
    }

    let connectable_pairs = find_connectable_pairs(inputs, outputs, adjustments);
    debug!("Found {} connectable pairs", connectable_pairs.len());

    if connectable_pairs.is_empty() {
        return Classification::decided(Category::Simple);
    }

    if ambiguous_by_lemma_1(&connectable_pairs) {
        debug!("Ambiguous by lemma 1");
        return Classification {
            category: Category::Ambiguous,
            connectable_pairs,
            minimal_pairs: Vec::new(),
        };
    }

    let minimal_pairs = minimal_pairs(&connectable_pairs);
    let category = if ambiguous_by_lemma_2(&minimal_pairs) {
        debug!("Ambiguous by lemma 2");
        Category::Ambiguous
    } else {
        Category::Separable
    };

    Classification {
        category,
        connectable_pairs,
        minimal_pairs,
    }
}

/// Aggregate, simplify and classify one pre-parsed transaction
pub fn untangle(record: &TransactionRecord) -> (TransactionSide, TransactionSide, Classification) {
    let (inputs, outputs) = simplify(&aggregate(&record.inputs), &aggregate(&record.outputs));
    let classification = classify_with_details(&inputs, &outputs, &record.adjustments());
    debug!("{}: {}", record.tx_id, classification.category);
    (inputs, outputs, classification)
}

fn shares_address(inputs: &[AddressEntry], outputs: &[AddressEntry]) -> bool {
    let input_addresses: HashSet<&str> = inputs.iter().map(|(address, _)| address.as_str()).collect();
    outputs
        .iter()
        .any(|(address, _)| input_addresses.contains(address.as_str()))
}
