//! Fee, withdrawal and mint/burn adjustments of a transaction
//!
//! The ADA adjustment is a required field rather than an entry keyed by
//! [`ADA_KEY`](super::ADA_KEY), so an adjustment set without it cannot be
//! constructed. Fee and withdrawals are unsigned for the same reason.

use super::Quantity;
use crate::untangling::SIZE_LIMIT;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Native currency adjustment: the fee paid and the reward withdrawals redeemed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaAdjustment {
    pub fee: u64,
    /// Separately-redeemable stake reward withdrawals
    #[serde(default)]
    pub withdrawals: Vec<u64>,
}

/// Per-asset adjustments applied when balancing inputs against outputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeMintWithdraw {
    pub ada: AdaAdjustment,
    /// Net mint (positive) or burn (negative) per multi-asset key
    #[serde(default)]
    pub mint: BTreeMap<String, Quantity>,
}

impl FeeMintWithdraw {
    pub fn new(fee: u64) -> Self {
        Self {
            ada: AdaAdjustment {
                fee,
                withdrawals: Vec::new(),
            },
            mint: BTreeMap::new(),
        }
    }

    pub fn with_withdrawal(mut self, amount: u64) -> Self {
        self.ada.withdrawals.push(amount);
        self
    }

    pub fn with_mint(mut self, asset: impl Into<String>, amount: Quantity) -> Self {
        self.mint.insert(asset.into(), amount);
        self
    }

    /// The fee expressed as the ledger balance delta it causes (`-fee`)
    pub fn fee_delta(&self) -> Quantity {
        -Quantity::from(self.ada.fee)
    }

    pub fn withdrawal_count(&self) -> usize {
        self.ada.withdrawals.len()
    }

    pub fn withdrawal_total(&self) -> Quantity {
        self.ada.withdrawals.iter().map(|w| Quantity::from(*w)).sum()
    }

    /// Mint/burn delta for a multi-asset key, 0 when absent
    pub fn mint_for(&self, asset: &str) -> Quantity {
        self.mint.get(asset).copied().unwrap_or(0)
    }

    /// Totals of every withdrawal subset, indexed by subset mask.
    ///
    /// Index 0 is the empty subset (no withdrawal used).
    ///
    /// # Panics
    ///
    /// Panics if there are more than
    /// [`SIZE_LIMIT`](crate::untangling::SIZE_LIMIT) withdrawals.
    pub fn withdrawal_subset_totals(&self) -> Vec<Quantity> {
        let withdrawals = &self.ada.withdrawals;
        assert!(
            withdrawals.len() <= SIZE_LIMIT,
            "{} withdrawals exceed the limit of {}",
            withdrawals.len(),
            SIZE_LIMIT
        );
        let mut totals = vec![0; 1usize << withdrawals.len()];
        for mask in 1..totals.len() {
            let lowest = mask.trailing_zeros() as usize;
            totals[mask] = totals[mask & (mask - 1)] + Quantity::from(withdrawals[lowest]);
        }
        totals
    }
}
