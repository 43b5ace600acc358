use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Recipe not found")]
    NotFound,

    #[error("Storage failure: {0}")]
    Storage(String),
}

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
