use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("item not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("inventory full: capacity of {capacity} items reached")]
    CapacityExceeded { capacity: usize },
    #[error("no orders to process")]
    Empty,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed inventory record on line {line}: {reason}")]
    Parse { line: u64, reason: String },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InventoryError>;

impl From<csv::Error> for InventoryError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line()).unwrap_or_default();
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => InventoryError::Io(io),
            _ => InventoryError::Parse { line, reason },
        }
    }
}
