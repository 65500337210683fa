//! Per-address aggregation of raw UTXO records

use crate::types::{AddressBook, Quantity, UtxoEntry, ADA_KEY};

/// Merge raw per-UTXO records into one asset vector per address.
///
/// Every address seen gets an `ADA_KEY` entry, even when all its records
/// carry zero ADA. Asset keys are created on first use.
pub fn aggregate(records: &[UtxoEntry]) -> AddressBook {
    let mut book = AddressBook::new();

    for record in records {
        let vector = book.entry(record.address.clone()).or_default();
        *vector.entry(ADA_KEY.to_string()).or_insert(0) += Quantity::from(record.ada);

        for (asset, amount) in &record.assets {
            *vector.entry(asset.clone()).or_insert(0) += Quantity::from(*amount);
        }
    }

    book
}
