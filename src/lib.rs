pub mod config;
pub mod error;
pub mod modules;

pub use error::{CatalogError, StoreError};
