use mongodb::Client;
use std::path::Path;

use crate::config::{catalog::LoaderConfig, database::DatabaseConfig};
use crate::error::CatalogError;
use crate::modules::catalog::{
    crud::{
        CatalogCrud, CatalogStore, CATEGORIES_COLLECTION, PRODUCTS_COLLECTION,
        SUBCATEGORIES_COLLECTION,
    },
    model::CatalogBatch,
    schema::CatalogFile,
};

/// Records inserted per collection by one load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub categories: u64,
    pub subcategories: u64,
    pub products: u64,
}

pub fn read_catalog(path: &Path) -> Result<CatalogFile, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::ReadCatalog {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_str(&raw)?)
}

/// Insert categories, then subcategories, then products. Empty sequences are
/// never sent. The first rejected insert stops the load; whatever landed
/// before it stays unless the store runs inside a transaction.
pub async fn push_catalog<S: CatalogStore>(
    store: &mut S,
    batch: &CatalogBatch,
) -> Result<LoadReport, CatalogError> {
    let mut report = LoadReport::default();

    if batch.categories.is_empty() {
        tracing::warn!(collection = CATEGORIES_COLLECTION, "No records, skipping insert");
    } else {
        report.categories = store
            .insert_categories(&batch.categories)
            .await
            .map_err(|source| insert_failed(CATEGORIES_COLLECTION, source))?;
        tracing::info!(collection = CATEGORIES_COLLECTION, inserted = report.categories, "Inserted");
    }

    if batch.subcategories.is_empty() {
        tracing::warn!(collection = SUBCATEGORIES_COLLECTION, "No records, skipping insert");
    } else {
        report.subcategories = store
            .insert_subcategories(&batch.subcategories)
            .await
            .map_err(|source| insert_failed(SUBCATEGORIES_COLLECTION, source))?;
        tracing::info!(collection = SUBCATEGORIES_COLLECTION, inserted = report.subcategories, "Inserted");
    }

    if batch.products.is_empty() {
        tracing::warn!(collection = PRODUCTS_COLLECTION, "No records, skipping insert");
    } else {
        report.products = store
            .insert_products(&batch.products)
            .await
            .map_err(|source| insert_failed(PRODUCTS_COLLECTION, source))?;
        tracing::info!(collection = PRODUCTS_COLLECTION, inserted = report.products, "Inserted");
    }

    Ok(report)
}

fn insert_failed(collection: &'static str, source: crate::error::StoreError) -> CatalogError {
    tracing::error!(collection, error = %source, "Bulk insert failed");
    CatalogError::Insert { collection, source }
}

/// Read the catalog file, flatten it and push it into the configured database.
pub async fn load_catalog(
    client: &Client,
    db_config: &DatabaseConfig,
    loader_config: &LoaderConfig,
) -> Result<LoadReport, CatalogError> {
    let catalog = read_catalog(&loader_config.catalog_path)?;
    let batch = catalog.flatten();

    tracing::info!(
        path = %loader_config.catalog_path.display(),
        categories = batch.categories.len(),
        subcategories = batch.subcategories.len(),
        products = batch.products.len(),
        "Catalog flattened"
    );

    let db = client.database(&db_config.database);
    let mut crud = if loader_config.transactional {
        CatalogCrud::transactional(client, &db).await?
    } else {
        CatalogCrud::new(&db)
    };

    match push_catalog(&mut crud, &batch).await {
        Ok(report) => {
            crud.commit().await?;
            Ok(report)
        }
        Err(e) => {
            if crud.is_transactional() {
                // The insert error is the one worth reporting.
                if let Err(abort_err) = crud.abort().await {
                    tracing::error!(error = %abort_err, "Abort after failed insert also failed");
                }
            }
            Err(e)
        }
    }
}
