//! Balance checks between input and output subsets
//!
//! The fee enters both checks as its ledger balance delta (`-fee`), so a
//! complete transaction satisfies `input == output - (fee_delta + withdrawals)`
//! for ADA and `input == output - mint` for every other asset.

use super::subsets::sum_assets;
use crate::types::{AddressEntry, AssetVector, FeeMintWithdraw, Quantity, ADA_KEY};
use std::collections::BTreeSet;

/// Decide whether an input subset could, in isolation, have funded an
/// output subset.
///
/// ADA passes when some subset of the withdrawals (possibly none) leaves the
/// sub-flow paying a fee that is strictly positive and strictly below the
/// whole transaction's fee. Every other asset passes when the input amount
/// lies between the output amount with and without the mint delta.
///
/// # Panics
///
/// Panics if there are more than [`SIZE_LIMIT`](super::SIZE_LIMIT)
/// withdrawals.
pub fn is_connectable<'a, I, O>(inputs: I, outputs: O, adjustments: &FeeMintWithdraw) -> bool
where
    I: IntoIterator<Item = &'a AddressEntry>,
    O: IntoIterator<Item = &'a AddressEntry>,
{
    let input_sums = sum_assets(inputs);
    let output_sums = sum_assets(outputs);
    sums_connectable(
        &input_sums,
        &output_sums,
        adjustments,
        &adjustments.withdrawal_subset_totals(),
    )
}

/// Connectability on precomputed sums.
///
/// `withdrawal_totals` must be `adjustments.withdrawal_subset_totals()`.
pub(crate) fn sums_connectable(
    input_sums: &AssetVector,
    output_sums: &AssetVector,
    adjustments: &FeeMintWithdraw,
    withdrawal_totals: &[Quantity],
) -> bool {
    let fee_delta = adjustments.fee_delta();

    touched_keys(input_sums, output_sums, adjustments)
        .into_iter()
        .all(|key| {
            let input_sum = amount(input_sums, key);
            let output_sum = amount(output_sums, key);

            if key == ADA_KEY {
                withdrawal_totals.iter().any(|w| {
                    output_sum < input_sum + w && input_sum + w < output_sum - fee_delta
                })
            } else {
                let mint = adjustments.mint_for(key);
                let low = output_sum.min(output_sum - mint);
                let high = output_sum.max(output_sum - mint);
                low <= input_sum && input_sum <= high
            }
        })
}

/// Check the conservation law over the whole transaction
pub fn is_complete(
    inputs: &[AddressEntry],
    outputs: &[AddressEntry],
    adjustments: &FeeMintWithdraw,
) -> bool {
    let input_sums = sum_assets(inputs);
    let output_sums = sum_assets(outputs);

    let complete = touched_keys(&input_sums, &output_sums, adjustments)
        .into_iter()
        .all(|key| {
            let fee_mint = if key == ADA_KEY {
                adjustments.fee_delta() + adjustments.withdrawal_total()
            } else {
                adjustments.mint_for(key)
            };
            amount(&input_sums, key) == amount(&output_sums, key) - fee_mint
        });
    complete
}

/// Keys of both sums, every minted asset, and always `ADA_KEY`
fn touched_keys<'a>(
    input_sums: &'a AssetVector,
    output_sums: &'a AssetVector,
    adjustments: &'a FeeMintWithdraw,
) -> BTreeSet<&'a str> {
    input_sums
        .keys()
        .chain(output_sums.keys())
        .chain(adjustments.mint.keys())
        .map(String::as_str)
        .chain(std::iter::once(ADA_KEY))
        .collect()
}

fn amount(sums: &AssetVector, key: &str) -> Quantity {
    sums.get(key).copied().unwrap_or(0)
}
