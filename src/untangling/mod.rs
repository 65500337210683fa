//! Transaction untangling
//!
//! Decides whether a transaction decomposes into independent
//! address-to-address transfers, and in how many ways.
//!
//! Pipeline: [`aggregate`] both sides, [`simplify`] away amounts common to an
//! address on both sides, then [`classify`] the reduced sides. Classification
//! runs, in order: the conservation check, triviality and size guards, the
//! exponential pair enumeration, and the two ambiguity lemmas.

pub mod aggregate;
pub mod ambiguity;
pub mod classifier;
pub mod connectability;
pub mod pairs;
pub mod simplify;
pub mod subsets;

pub use aggregate::aggregate;
pub use ambiguity::{ambiguous_by_lemma_1, ambiguous_by_lemma_2, minimal_pairs};
pub use classifier::{classify, classify_with_details, untangle, Classification, SIZE_LIMIT};
pub use connectability::{is_complete, is_connectable};
pub use pairs::{find_connectable_pairs, ConnectablePair};
pub use simplify::simplify;
pub use subsets::{full_mask, is_submask, select, sum_assets, Mask};
