//! Minimal connectable pairs and the two ambiguity lemmas

use super::pairs::ConnectablePair;
use super::subsets::is_submask;
use std::collections::HashSet;

/// Drop every pair that contains another pair on both sides.
///
/// What remains are the minimal connectable pairs, in input order.
pub fn minimal_pairs(pairs: &[ConnectablePair]) -> Vec<ConnectablePair> {
    pairs
        .iter()
        .enumerate()
        .filter(|(i, pair)| {
            !pairs.iter().enumerate().any(|(j, other)| {
                *i != j
                    && is_submask(other.inputs, pair.inputs)
                    && is_submask(other.outputs, pair.outputs)
            })
        })
        .map(|(_, pair)| *pair)
        .collect()
}

/// Lemma 1: ambiguous when the same input subset, or the same output subset,
/// appears in more than one connectable pair.
pub fn ambiguous_by_lemma_1(pairs: &[ConnectablePair]) -> bool {
    let mut seen_inputs = HashSet::new();
    let mut seen_outputs = HashSet::new();

    for pair in pairs {
        if !seen_inputs.insert(pair.inputs) || !seen_outputs.insert(pair.outputs) {
            return true;
        }
    }
    false
}

/// Lemma 2: ambiguous when two minimal pairs share an input or an output.
pub fn ambiguous_by_lemma_2(minimal: &[ConnectablePair]) -> bool {
    minimal.iter().enumerate().any(|(i, first)| {
        minimal[i + 1..].iter().any(|second| {
            first.inputs & second.inputs != 0 || first.outputs & second.outputs != 0
        })
    })
}
