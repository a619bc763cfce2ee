//! Event Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult, record_key};
use crate::db::models::Event;

const EVENT_TABLE: &str = "events";

#[derive(Clone)]
pub struct EventRepository {
    base: BaseRepository,
}

impl EventRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Event>> {
        let events: Vec<Event> = self.base.db().select(EVENT_TABLE).await?;
        Ok(events)
    }

    /// Most recent events by year descending
    pub async fn find_recent(&self, limit: usize) -> RepoResult<Vec<Event>> {
        let events: Vec<Event> = self
            .base
            .db()
            .query("SELECT * FROM events ORDER BY year DESC LIMIT $limit")
            .bind(("limit", limit))
            .await?
            .take(0)?;
        Ok(events)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Event>> {
        let key = record_key(EVENT_TABLE, id);
        let event: Option<Event> = self.base.db().select((EVENT_TABLE, key)).await?;
        Ok(event)
    }
}
