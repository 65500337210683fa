//! Batch pipeline integration tests

pub mod batch_pipeline;
pub mod inspect_lookup;
