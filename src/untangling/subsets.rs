//! Bitmask subset selection and asset summation
//!
//! Bit `i` of a mask selects element `i` of a transaction side.

use super::classifier::SIZE_LIMIT;
use crate::types::{AddressEntry, AssetVector};

/// Subset bitmask over a transaction side
pub type Mask = u64;

/// Mask with the lowest `len` bits set (the whole side)
pub fn full_mask(len: usize) -> Mask {
    if len >= Mask::BITS as usize {
        Mask::MAX
    } else {
        (1 << len) - 1
    }
}

/// True when every bit of `inner` is also set in `outer`
pub fn is_submask(inner: Mask, outer: Mask) -> bool {
    inner & outer == inner
}

/// Elements whose position bit is set in `mask`.
///
/// Bits beyond the end of `items` are ignored.
pub fn select<T>(items: &[T], mask: Mask) -> Vec<&T> {
    let mut selected = Vec::with_capacity(mask.count_ones() as usize);
    let mut remaining = mask;
    let mut index = 0;

    while remaining > 0 {
        if remaining & 1 == 1 {
            if let Some(item) = items.get(index) {
                selected.push(item);
            }
        }
        remaining >>= 1;
        index += 1;
    }

    selected
}

/// Key-wise sum of the asset vectors of every entry in the subset
pub fn sum_assets<'a, I>(subset: I) -> AssetVector
where
    I: IntoIterator<Item = &'a AddressEntry>,
{
    let mut sums = AssetVector::new();
    for (_, assets) in subset {
        add_assign(&mut sums, assets);
    }
    sums
}

/// Sums for every non-empty mask over `side`, indexed by mask.
///
/// Each sum is derived from the mask with its lowest bit cleared, so the
/// table costs one vector addition per mask. Index 0 holds the empty sum.
///
/// # Panics
///
/// Panics if `side` has more than [`SIZE_LIMIT`] entries.
pub fn mask_sums(side: &[AddressEntry]) -> Vec<AssetVector> {
    assert!(
        side.len() <= SIZE_LIMIT,
        "mask_sums over {} entries exceeds the limit of {}",
        side.len(),
        SIZE_LIMIT
    );
    let count = 1usize << side.len();
    let mut sums: Vec<AssetVector> = Vec::with_capacity(count);
    sums.push(AssetVector::new());

    for mask in 1..count {
        let lowest = mask.trailing_zeros() as usize;
        let mut sum = sums[mask & (mask - 1)].clone();
        add_assign(&mut sum, &side[lowest].1);
        sums.push(sum);
    }

    sums
}

fn add_assign(target: &mut AssetVector, addend: &AssetVector) {
    for (key, value) in addend {
        *target.entry(key.clone()).or_insert(0) += value;
    }
}
