use mongodb::Database;

use crate::error::StoreError;

#[allow(async_fn_in_trait)]
pub trait DatabaseAdmin {
    fn database_name(&self) -> &str;

    async fn drop_database(&self) -> Result<(), StoreError>;
}

pub struct DatabaseCrud {
    db: Database,
}

impl DatabaseCrud {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl DatabaseAdmin for DatabaseCrud {
    fn database_name(&self) -> &str {
        self.db.name()
    }

    async fn drop_database(&self) -> Result<(), StoreError> {
        self.db.drop().await?;
        Ok(())
    }
}
