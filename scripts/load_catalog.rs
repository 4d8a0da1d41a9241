//! Run with: cargo run --bin load_catalog
//!
//! Reads MONGODB_URI, MONGODB_DATABASE, CATALOG_PATH and CATALOG_TRANSACTIONAL
//! from the environment (or `.env`).

use prosmart_catalog::config::{self, catalog::LoaderConfig, database::DatabaseConfig};
use prosmart_catalog::modules::catalog::controller::load_catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    config::logging::init();

    let db_config = DatabaseConfig::from_env()?;
    let loader_config = LoaderConfig::from_env()?;

    let client = config::database::connect(&db_config).await?;
    let report = load_catalog(&client, &db_config, &loader_config).await?;

    println!(
        "✅ Pushed {} categories, {} subcategories and {} products to '{}'",
        report.categories, report.subcategories, report.products, db_config.database
    );

    client.shutdown().await;
    Ok(())
}
