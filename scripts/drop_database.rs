//! Run with: cargo run --bin drop_database

use prosmart_catalog::config::{self, database::DatabaseConfig};
use prosmart_catalog::modules::database::{controller::erase_database, crud::DatabaseCrud};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    config::logging::init();

    let db_config = DatabaseConfig::from_env()?;
    let client = config::database::connect(&db_config).await?;
    let admin = DatabaseCrud::new(client.database(&db_config.database));

    let stdin = std::io::stdin();
    erase_database(&admin, stdin.lock(), std::io::stdout()).await?;

    client.shutdown().await;
    Ok(())
}
