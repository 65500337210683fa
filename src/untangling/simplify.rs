//! Cancellation of amounts common to an address on both sides
//!
//! An address that both spends and receives the same asset only moved the
//! net difference. Cancelling the common part shrinks the search space and
//! removes change outputs that return to the spending address.

use crate::types::{is_all_zero, AddressBook, TransactionSide};

/// Cancel common amounts and return the reduced sides.
///
/// For every address present in both books and every key present in both of
/// its vectors, `min(a, b)` is subtracted from both. Addresses left with an
/// all-zero vector are then dropped from each book independently. The
/// caller's books are not modified.
pub fn simplify(incoming: &AddressBook, outgoing: &AddressBook) -> (TransactionSide, TransactionSide) {
    let mut incoming = incoming.clone();
    let mut outgoing = outgoing.clone();

    for (address, in_vector) in incoming.iter_mut() {
        let Some(out_vector) = outgoing.get_mut(address) else {
            continue;
        };

        for (key, in_value) in in_vector.iter_mut() {
            if let Some(out_value) = out_vector.get_mut(key) {
                let common = (*in_value).min(*out_value);
                *in_value -= common;
                *out_value -= common;
            }
        }
    }

    (into_side(incoming), into_side(outgoing))
}

fn into_side(book: AddressBook) -> TransactionSide {
    book.into_iter()
        .filter(|(_, vector)| !is_all_zero(vector))
        .collect()
}
