//! Repository Module
//!
//! The record store gateway: CRUD operations against the remote document
//! collections (`products`, `events`, `solditems`, `soldtickets`). Records
//! are owned by the store; the application only holds read-derived copies.

// Catalog Domain
pub mod event;
pub mod product;

// Orders
pub mod sold_item;
pub mod sold_ticket;

// Re-exports
pub use event::EventRepository;
pub use product::ProductRepository;
pub use sold_item::SoldItemRepository;
pub use sold_ticket::SoldTicketRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Strip a `table:` prefix so callers may pass either `key` or `table:key`
pub fn record_key<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::record_key;

    #[test]
    fn record_key_strips_only_matching_table_prefix() {
        assert_eq!(record_key("products", "products:abc"), "abc");
        assert_eq!(record_key("products", "abc"), "abc");
        assert_eq!(record_key("products", "solditems:abc"), "solditems:abc");
    }
}
