use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("Write rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),
    #[error("Invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    ReadCatalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed catalog JSON: {0}")]
    ParseCatalog(#[from] serde_json::Error),
    #[error("Failed to connect to MongoDB: {0}")]
    Connect(#[source] mongodb::error::Error),
    #[error("Bulk insert into {collection} failed: {source}")]
    Insert {
        collection: &'static str,
        #[source]
        source: StoreError,
    },
    #[error("Failed to drop database '{database}': {source}")]
    Drop {
        database: String,
        #[source]
        source: StoreError,
    },
    #[error("Transaction error: {0}")]
    Transaction(#[source] mongodb::error::Error),
    #[error("Prompt I/O failed: {0}")]
    Prompt(#[from] std::io::Error),
}
