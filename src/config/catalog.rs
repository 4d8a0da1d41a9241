use std::env;
use std::path::PathBuf;

use crate::error::CatalogError;

pub const DEFAULT_CATALOG_PATH: &str = "prosmart_products.json";

#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub catalog_path: PathBuf,
    /// Run the three bulk inserts inside one multi-document transaction.
    pub transactional: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            transactional: false,
        }
    }
}

impl LoaderConfig {
    pub fn from_env() -> Result<Self, CatalogError> {
        let catalog_path = env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH));

        let transactional = match env::var("CATALOG_TRANSACTIONAL") {
            Ok(value) => parse_flag(&value).ok_or(CatalogError::InvalidEnv {
                name: "CATALOG_TRANSACTIONAL",
                value,
            })?,
            Err(_) => false,
        };

        Ok(Self {
            catalog_path,
            transactional,
        })
    }
}

pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}
