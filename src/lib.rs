//! UTXO Transaction Untangling Classifier
//!

pub mod cli;
pub mod config;
pub mod errors;
pub mod processor;
pub mod types;
pub mod untangling;
pub mod utils;
