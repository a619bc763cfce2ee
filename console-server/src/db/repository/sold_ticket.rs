//! Ticket Order Repository

use async_trait::async_trait;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::{OrderStatus, SoldTicket};
use crate::workflow::StatusStore;

const SOLD_TICKET_TABLE: &str = "soldtickets";

#[derive(Clone)]
pub struct SoldTicketRepository {
    base: BaseRepository,
}

impl SoldTicketRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<SoldTicket>> {
        let tickets: Vec<SoldTicket> = self.base.db().select(SOLD_TICKET_TABLE).await?;
        Ok(tickets)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<SoldTicket>> {
        let key = record_key(SOLD_TICKET_TABLE, id);
        let ticket: Option<SoldTicket> = self.base.db().select((SOLD_TICKET_TABLE, key)).await?;
        Ok(ticket)
    }

    pub async fn create(&self, ticket: SoldTicket) -> RepoResult<SoldTicket> {
        let created: Option<SoldTicket> = self
            .base
            .db()
            .create(SOLD_TICKET_TABLE)
            .content(ticket)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create sold ticket".to_string()))
    }

    /// Update exactly the status field of one ticket order
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<SoldTicket> {
        let key = record_key(SOLD_TICKET_TABLE, id);
        let rid = RecordId::from_table_key(SOLD_TICKET_TABLE, key);

        let mut result = self
            .base
            .db()
            .query("UPDATE $rec SET status = $status RETURN AFTER")
            .bind(("rec", rid))
            .bind(("status", status))
            .await?;
        let tickets: Vec<SoldTicket> = result.take(0)?;

        tickets
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Sold ticket {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = record_key(SOLD_TICKET_TABLE, id);
        let deleted: Option<SoldTicket> = self.base.db().delete((SOLD_TICKET_TABLE, key)).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Sold ticket {} not found", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl StatusStore for SoldTicketRepository {
    async fn update_status(&self, key: &str, status: OrderStatus) -> RepoResult<()> {
        SoldTicketRepository::update_status(self, key, status).await?;
        Ok(())
    }

    async fn delete_record(&self, key: &str) -> RepoResult<()> {
        self.delete(key).await
    }
}
