use mongodb::{Client, ClientSession, Collection, Database};
use serde::Serialize;

use crate::error::{CatalogError, StoreError};
use crate::modules::catalog::model::{CategoryRecord, ProductRecord, SubcategoryRecord};

pub const CATEGORIES_COLLECTION: &str = "Categories";
pub const SUBCATEGORIES_COLLECTION: &str = "SubCategories";
pub const PRODUCTS_COLLECTION: &str = "Products";

/// Write side of the catalog. Each call is one bulk insert and returns how
/// many records the store acknowledged.
#[allow(async_fn_in_trait)]
pub trait CatalogStore {
    async fn insert_categories(&mut self, records: &[CategoryRecord]) -> Result<u64, StoreError>;

    async fn insert_subcategories(
        &mut self,
        records: &[SubcategoryRecord],
    ) -> Result<u64, StoreError>;

    async fn insert_products(&mut self, records: &[ProductRecord]) -> Result<u64, StoreError>;
}

pub struct CatalogCrud {
    categories: Collection<CategoryRecord>,
    subcategories: Collection<SubcategoryRecord>,
    products: Collection<ProductRecord>,
    session: Option<ClientSession>,
}

impl CatalogCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            categories: db.collection(CATEGORIES_COLLECTION),
            subcategories: db.collection(SUBCATEGORIES_COLLECTION),
            products: db.collection(PRODUCTS_COLLECTION),
            session: None,
        }
    }

    /// Same collections, but every insert joins one open transaction until
    /// `commit` or `abort`. Needs a replica set or sharded cluster.
    pub async fn transactional(client: &Client, db: &Database) -> Result<Self, CatalogError> {
        let mut session = client
            .start_session()
            .await
            .map_err(CatalogError::Transaction)?;
        session
            .start_transaction()
            .await
            .map_err(CatalogError::Transaction)?;

        let mut crud = Self::new(db);
        crud.session = Some(session);
        Ok(crud)
    }

    pub fn is_transactional(&self) -> bool {
        self.session.is_some()
    }

    pub async fn commit(self) -> Result<(), CatalogError> {
        if let Some(mut session) = self.session {
            session
                .commit_transaction()
                .await
                .map_err(CatalogError::Transaction)?;
            tracing::info!("Catalog transaction committed");
        }
        Ok(())
    }

    pub async fn abort(self) -> Result<(), CatalogError> {
        if let Some(mut session) = self.session {
            session
                .abort_transaction()
                .await
                .map_err(CatalogError::Transaction)?;
            tracing::warn!("Catalog transaction aborted");
        }
        Ok(())
    }
}

async fn insert_all<T>(
    collection: &Collection<T>,
    session: Option<&mut ClientSession>,
    records: &[T],
) -> Result<u64, StoreError>
where
    T: Serialize + Send + Sync,
{
    let action = collection.insert_many(records);
    let result = match session {
        Some(session) => action.session(session).await?,
        None => action.await?,
    };

    let inserted = result.inserted_ids.len();
    if inserted != records.len() {
        return Err(StoreError::Rejected(format!(
            "acknowledged {} of {} records",
            inserted,
            records.len()
        )));
    }

    Ok(inserted as u64)
}

impl CatalogStore for CatalogCrud {
    async fn insert_categories(&mut self, records: &[CategoryRecord]) -> Result<u64, StoreError> {
        insert_all(&self.categories, self.session.as_mut(), records).await
    }

    async fn insert_subcategories(
        &mut self,
        records: &[SubcategoryRecord],
    ) -> Result<u64, StoreError> {
        insert_all(&self.subcategories, self.session.as_mut(), records).await
    }

    async fn insert_products(&mut self, records: &[ProductRecord]) -> Result<u64, StoreError> {
        insert_all(&self.products, self.session.as_mut(), records).await
    }
}
