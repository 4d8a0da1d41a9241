use mongodb::{bson::doc, options::ClientOptions, Client};
use std::env;

use crate::error::CatalogError;

pub const DEFAULT_DATABASE: &str = "prosmart_db";

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, CatalogError> {
        let uri = env::var("MONGODB_URI").map_err(|_| CatalogError::MissingEnv("MONGODB_URI"))?;
        let database =
            env::var("MONGODB_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        Ok(Self { uri, database })
    }
}

/// Build a client and ping the server so bad URIs and credentials fail here,
/// before anything is read or written.
pub async fn connect(config: &DatabaseConfig) -> Result<Client, CatalogError> {
    let options = ClientOptions::parse(&config.uri)
        .await
        .map_err(CatalogError::Connect)?;
    let client = Client::with_options(options).map_err(CatalogError::Connect)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(CatalogError::Connect)?;

    tracing::info!(database = %config.database, "Connected to MongoDB");
    Ok(client)
}
