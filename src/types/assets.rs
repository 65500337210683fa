//! Asset vectors and the per-address views of a transaction
//!
//! Raw UTXO amounts are unsigned. Aggregated vectors and sums use the signed
//! [`Quantity`] so that mint/burn deltas share one arithmetic domain.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved asset key holding the native currency (ADA) total
pub const ADA_KEY: &str = "TX_ADA_total";

/// Signed asset amount
pub type Quantity = i128;

/// Asset key -> amount
pub type AssetVector = BTreeMap<String, Quantity>;

/// Address -> aggregated asset vector, one entry per distinct address
pub type AddressBook = BTreeMap<String, AssetVector>;

/// One element of a transaction side: an address and its asset vector
pub type AddressEntry = (String, AssetVector);

/// Ordered side of a transaction. Position `i` corresponds to bit `i` of
/// every mask used against this side.
pub type TransactionSide = Vec<AddressEntry>;

/// Raw per-UTXO record as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoEntry {
    pub address: String,
    /// ADA amount (lovelace)
    pub ada: u64,
    /// (asset name, amount) pairs carried by this UTXO
    #[serde(default)]
    pub assets: Vec<(String, u64)>,
}

impl UtxoEntry {
    pub fn new(address: impl Into<String>, ada: u64) -> Self {
        Self {
            address: address.into(),
            ada,
            assets: Vec::new(),
        }
    }

    /// Attach a multi-asset amount to this record
    pub fn with_asset(mut self, name: impl Into<String>, amount: u64) -> Self {
        self.assets.push((name.into(), amount));
        self
    }
}

/// True when every amount in the vector is zero (an empty vector counts)
pub fn is_all_zero(vector: &AssetVector) -> bool {
    vector.values().all(|value| *value == 0)
}

/// Addresses of a side, in side order
pub fn side_addresses(side: &[AddressEntry]) -> Vec<&str> {
    side.iter().map(|(address, _)| address.as_str()).collect()
}
