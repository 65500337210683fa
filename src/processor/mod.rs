pub mod base;
pub mod batch;

pub use base::*;
pub use batch::{classify_batch, find_transaction, parse_record, BatchProcessor, ClassificationRow};
