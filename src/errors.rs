use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV result writing
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding/decoding outside of record parsing
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed transaction record in a batch file
    #[error("Invalid transaction record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    /// Requested transaction absent from the batch file
    #[error("Transaction not found: {tx_id}")]
    TransactionNotFound { tx_id: String },

    /// Worker thread failure
    #[error("Worker error: {0}")]
    Worker(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
