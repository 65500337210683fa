//! Transaction Untangling - Type System
//!
//! - `assets`: Asset vectors, address books and transaction sides
//! - `adjustments`: Fee, withdrawal and mint/burn adjustments
//! - `category`: The nine mutually exclusive untangling categories
//! - `transaction`: Pre-parsed transaction records consumed by the batch processor
//! - `batch`: Batch classification configuration
//! - `statistics`: Category counters and timing for batch runs

mod adjustments;
mod assets;
mod batch;
mod category;
mod transaction;
pub mod statistics;

pub use adjustments::*;
pub use assets::*;
pub use batch::*;
pub use category::*;
pub use transaction::*;

pub use statistics::{ClassificationStats, TimingInfo};
