//! Untangling categories
//!
//! Exactly one category is assigned to every classified transaction.

use serde::{Deserialize, Serialize};

/// Definitive untangling classifications
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Inputs + withdrawals do not balance outputs + fee (e.g. deposit refunds)
    #[serde(rename = "TX_not_complete")]
    NotComplete,
    /// A side is empty after simplification (e.g. a smart contract call)
    #[serde(rename = "TX_no_input_or_output")]
    NoInputOrOutput,
    /// A side has a single address after simplification
    #[serde(rename = "TX_regular")]
    Regular,
    /// An address remains on both sides after simplification
    #[serde(rename = "TX_complex")]
    Complex,
    /// Too many addresses and withdrawals to enumerate
    #[serde(rename = "TX_size_limit")]
    SizeLimit,
    /// Not splittable
    #[serde(rename = "TX_simple")]
    Simple,
    /// Splittable in more than one way
    #[serde(rename = "TX_ambiguous")]
    Ambiguous,
    /// Splittable in exactly one way
    #[serde(rename = "TX_separable")]
    Separable,
    /// None of the above. No decision path produces this.
    #[serde(rename = "TX_not_classified")]
    NotClassified,
}

impl Category {
    /// Every category, in decision order
    pub const ALL: [Category; 9] = [
        Category::NotComplete,
        Category::NoInputOrOutput,
        Category::Regular,
        Category::Complex,
        Category::SizeLimit,
        Category::Simple,
        Category::Ambiguous,
        Category::Separable,
        Category::NotClassified,
    ];

    /// Label used in reports and serialised output
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::NotComplete => "TX_not_complete",
            Category::NoInputOrOutput => "TX_no_input_or_output",
            Category::Regular => "TX_regular",
            Category::Complex => "TX_complex",
            Category::SizeLimit => "TX_size_limit",
            Category::Simple => "TX_simple",
            Category::Ambiguous => "TX_ambiguous",
            Category::Separable => "TX_separable",
            Category::NotClassified => "TX_not_classified",
        }
    }

    /// Human-readable name for summaries
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::NotComplete => "Not complete",
            Category::NoInputOrOutput => "No input or output",
            Category::Regular => "Regular",
            Category::Complex => "Complex",
            Category::SizeLimit => "Size limit",
            Category::Simple => "Simple",
            Category::Ambiguous => "Ambiguous",
            Category::Separable => "Separable",
            Category::NotClassified => "Not classified",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|category| category.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}
