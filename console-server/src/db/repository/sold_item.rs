//! Merchandise Order Repository

use async_trait::async_trait;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::{OrderStatus, SoldItem};
use crate::workflow::StatusStore;

const SOLD_ITEM_TABLE: &str = "solditems";

#[derive(Clone)]
pub struct SoldItemRepository {
    base: BaseRepository,
}

impl SoldItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<SoldItem>> {
        let items: Vec<SoldItem> = self.base.db().select(SOLD_ITEM_TABLE).await?;
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<SoldItem>> {
        let key = record_key(SOLD_ITEM_TABLE, id);
        let item: Option<SoldItem> = self.base.db().select((SOLD_ITEM_TABLE, key)).await?;
        Ok(item)
    }

    pub async fn create(&self, item: SoldItem) -> RepoResult<SoldItem> {
        let created: Option<SoldItem> = self
            .base
            .db()
            .create(SOLD_ITEM_TABLE)
            .content(item)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create sold item".to_string()))
    }

    /// Update exactly the status field of one order
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<SoldItem> {
        let key = record_key(SOLD_ITEM_TABLE, id);
        let rid = RecordId::from_table_key(SOLD_ITEM_TABLE, key);

        let mut result = self
            .base
            .db()
            .query("UPDATE $rec SET status = $status RETURN AFTER")
            .bind(("rec", rid))
            .bind(("status", status))
            .await?;
        let items: Vec<SoldItem> = result.take(0)?;

        items
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Sold item {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = record_key(SOLD_ITEM_TABLE, id);
        let deleted: Option<SoldItem> = self.base.db().delete((SOLD_ITEM_TABLE, key)).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Sold item {} not found", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl StatusStore for SoldItemRepository {
    async fn update_status(&self, key: &str, status: OrderStatus) -> RepoResult<()> {
        SoldItemRepository::update_status(self, key, status).await?;
        Ok(())
    }

    async fn delete_record(&self, key: &str) -> RepoResult<()> {
        self.delete(key).await
    }
}
