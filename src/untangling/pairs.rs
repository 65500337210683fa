//! Enumeration of connectable (input subset, output subset) pairs

use super::connectability::sums_connectable;
use super::subsets::{full_mask, mask_sums, select, Mask};
use crate::types::{AddressEntry, FeeMintWithdraw};
use serde::{Deserialize, Serialize};

/// An input subset that could, in isolation, have funded an output subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectablePair {
    pub inputs: Mask,
    pub outputs: Mask,
}

impl ConnectablePair {
    pub fn new(inputs: Mask, outputs: Mask) -> Self {
        Self { inputs, outputs }
    }

    /// Addresses selected on each side, in side order
    pub fn resolve<'a>(
        &self,
        inputs: &'a [AddressEntry],
        outputs: &'a [AddressEntry],
    ) -> (Vec<&'a str>, Vec<&'a str>) {
        let addresses = |side: &'a [AddressEntry], mask: Mask| {
            select(side, mask)
                .into_iter()
                .map(|(address, _)| address.as_str())
                .collect::<Vec<_>>()
        };
        (addresses(inputs, self.inputs), addresses(outputs, self.outputs))
    }
}

/// Every connectable pair of non-empty subsets, excluding the pair made of
/// both full sides.
///
/// Pairs are returned by ascending input mask, then ascending output mask.
/// Cost is exponential in `inputs.len() + outputs.len()` and in the
/// withdrawal count; callers bound the sizes first.
pub fn find_connectable_pairs(
    inputs: &[AddressEntry],
    outputs: &[AddressEntry],
    adjustments: &FeeMintWithdraw,
) -> Vec<ConnectablePair> {
    let input_sums = mask_sums(inputs);
    let output_sums = mask_sums(outputs);
    let withdrawal_totals = adjustments.withdrawal_subset_totals();
    let full_inputs = full_mask(inputs.len());
    let full_outputs = full_mask(outputs.len());

    let mut pairs = Vec::new();
    for input_mask in 1..=full_inputs {
        for output_mask in 1..=full_outputs {
            if input_mask == full_inputs && output_mask == full_outputs {
                continue;
            }
            if sums_connectable(
                &input_sums[input_mask as usize],
                &output_sums[output_mask as usize],
                adjustments,
                &withdrawal_totals,
            ) {
                pairs.push(ConnectablePair::new(input_mask, output_mask));
            }
        }
    }
    pairs
}
