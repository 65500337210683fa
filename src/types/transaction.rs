//! Pre-parsed transaction records
//!
//! One record per line of a JSON Lines batch file. The caller is responsible
//! for producing these from raw ledger data.

use super::{AdaAdjustment, FeeMintWithdraw, Quantity, UtxoEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A transaction ready for untangling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub tx_id: String,
    pub inputs: Vec<UtxoEntry>,
    pub outputs: Vec<UtxoEntry>,
    pub fee: u64,
    #[serde(default)]
    pub withdrawals: Vec<u64>,
    /// Net mint (positive) or burn (negative) per asset
    #[serde(default)]
    pub mint: BTreeMap<String, Quantity>,
}

impl TransactionRecord {
    /// Fee, withdrawal and mint adjustments of this transaction
    pub fn adjustments(&self) -> FeeMintWithdraw {
        FeeMintWithdraw {
            ada: AdaAdjustment {
                fee: self.fee,
                withdrawals: self.withdrawals.clone(),
            },
            mint: self.mint.clone(),
        }
    }
}
