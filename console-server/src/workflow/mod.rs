//! Status Workflow Engine
//!
//! Staged status transitions for purchase records (merchandise and ticket
//! orders). Every action button routes through the same stage -> confirm
//! step; nothing mutates the store from a single call. The engine owns the
//! last-fetched snapshot of a collection and patches the matching element in
//! place after a successful remote update, so no full refetch is needed.
//!
//! Deletion is guarded here, not only in the UI: a record may be deleted
//! only while its current status is Declined.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::db::models::{OrderStatus, SoldItem, SoldTicket};
use crate::db::repository::{RepoError, RepoResult};

/// Workflow error types
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Record {0} not in current snapshot")]
    UnknownRecord(String),

    #[error("No staged transition")]
    NothingStaged,

    #[error("Delete requires Declined status (current: {0})")]
    DeleteNotAllowed(OrderStatus),

    #[error(transparent)]
    Store(#[from] RepoError),
}

/// A purchase record the workflow can drive
pub trait WorkflowRecord {
    /// Record key without the table prefix
    fn key(&self) -> Option<String>;
    fn status(&self) -> OrderStatus;
    fn set_status(&mut self, status: OrderStatus);
}

/// Remote side of the workflow: status updates and deletes for one collection
#[async_trait]
pub trait StatusStore: Send + Sync {
    async fn update_status(&self, key: &str, status: OrderStatus) -> RepoResult<()>;
    async fn delete_record(&self, key: &str) -> RepoResult<()>;
}

/// A proposed status change held for explicit confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedTransition {
    pub key: String,
    pub target: OrderStatus,
}

/// Workflow over the last-fetched snapshot of one order collection
#[derive(Debug)]
pub struct OrderWorkflow<R: WorkflowRecord> {
    records: Vec<R>,
    staged: Option<StagedTransition>,
}

impl<R: WorkflowRecord> Default for OrderWorkflow<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: WorkflowRecord> OrderWorkflow<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            staged: None,
        }
    }

    /// Replace the snapshot with freshly fetched records.
    ///
    /// Any staged transition refers to the old snapshot and is discarded.
    pub fn load(&mut self, records: Vec<R>) {
        self.records = records;
        self.staged = None;
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn staged(&self) -> Option<&StagedTransition> {
        self.staged.as_ref()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.key().as_deref() == Some(key))
    }

    /// Stage a transition for confirmation.
    ///
    /// Idempotent on identical inputs; a different request replaces the
    /// previously staged one (the admin switched rows before confirming).
    pub fn request_transition(
        &mut self,
        key: &str,
        target: OrderStatus,
    ) -> Result<(), WorkflowError> {
        if self.position(key).is_none() {
            return Err(WorkflowError::UnknownRecord(key.to_string()));
        }
        // Re-staging an identical request is a no-op by value
        self.staged = Some(StagedTransition {
            key: key.to_string(),
            target,
        });
        Ok(())
    }

    /// Discard the staged transition
    pub fn cancel_transition(&mut self) {
        self.staged = None;
    }

    /// Commit the staged transition.
    ///
    /// Updates exactly the status field remotely, then patches the matching
    /// snapshot element. On remote failure the snapshot and the staged slot
    /// are left unchanged so the admin can retry or cancel.
    pub async fn confirm_transition<S>(&mut self, store: &S) -> Result<&R, WorkflowError>
    where
        S: StatusStore + ?Sized,
    {
        let staged = self.staged.clone().ok_or(WorkflowError::NothingStaged)?;
        let idx = self
            .position(&staged.key)
            .ok_or_else(|| WorkflowError::UnknownRecord(staged.key.clone()))?;

        store.update_status(&staged.key, staged.target).await?;

        self.records[idx].set_status(staged.target);
        self.staged = None;
        Ok(&self.records[idx])
    }

    /// Delete a record, permitted only while its status is Declined.
    ///
    /// The guard runs before any remote call. The local removal is
    /// optimistic and rolled back if the remote delete fails.
    pub async fn delete_record<S>(&mut self, store: &S, key: &str) -> Result<R, WorkflowError>
    where
        S: StatusStore + ?Sized,
    {
        let idx = self
            .position(key)
            .ok_or_else(|| WorkflowError::UnknownRecord(key.to_string()))?;

        let status = self.records[idx].status();
        if status != OrderStatus::Declined {
            return Err(WorkflowError::DeleteNotAllowed(status));
        }

        let removed = self.records.remove(idx);
        if let Err(e) = store.delete_record(key).await {
            self.records.insert(idx, removed);
            return Err(WorkflowError::Store(e));
        }

        if self.staged.as_ref().map(|s| s.key.as_str()) == Some(key) {
            self.staged = None;
        }
        Ok(removed)
    }
}

// =============================================================================
// Record impls
// =============================================================================

impl WorkflowRecord for SoldItem {
    fn key(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.key().to_string())
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}

impl WorkflowRecord for SoldTicket {
    fn key(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.key().to_string())
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug)]
    struct TestRecord {
        key: String,
        status: OrderStatus,
    }

    impl TestRecord {
        fn new(key: &str, status: OrderStatus) -> Self {
            Self {
                key: key.to_string(),
                status,
            }
        }
    }

    impl WorkflowRecord for TestRecord {
        fn key(&self) -> Option<String> {
            Some(self.key.clone())
        }

        fn status(&self) -> OrderStatus {
            self.status
        }

        fn set_status(&mut self, status: OrderStatus) {
            self.status = status;
        }
    }

    #[derive(Default)]
    struct MockStore {
        updates: Mutex<HashMap<String, OrderStatus>>,
        deletes: Mutex<Vec<String>>,
        fail: AtomicBool,
    }

    impl MockStore {
        fn failing() -> Self {
            let store = Self::default();
            store.fail.store(true, Ordering::SeqCst);
            store
        }
    }

    #[async_trait]
    impl StatusStore for MockStore {
        async fn update_status(&self, key: &str, status: OrderStatus) -> RepoResult<()> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(RepoError::Database("connection reset".to_string()));
            }
            self.updates
                .lock()
                .unwrap()
                .insert(key.to_string(), status);
            Ok(())
        }

        async fn delete_record(&self, key: &str) -> RepoResult<()> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(RepoError::Database("connection reset".to_string()));
            }
            self.deletes.lock().unwrap().push(key.to_string());
            Ok(())
        }
    }

    fn engine_with(records: Vec<TestRecord>) -> OrderWorkflow<TestRecord> {
        let mut engine = OrderWorkflow::new();
        engine.load(records);
        engine
    }

    #[tokio::test]
    async fn confirm_commits_remote_then_patches_snapshot() {
        let store = MockStore::default();
        let mut engine = engine_with(vec![
            TestRecord::new("a", OrderStatus::Pending),
            TestRecord::new("b", OrderStatus::Pending),
        ]);

        engine
            .request_transition("b", OrderStatus::Approved)
            .unwrap();
        let updated = engine.confirm_transition(&store).await.unwrap();
        assert_eq!(updated.status, OrderStatus::Approved);

        assert_eq!(
            store.updates.lock().unwrap().get("b"),
            Some(&OrderStatus::Approved)
        );
        // Element patched in place, sibling untouched, staged slot cleared
        assert_eq!(engine.records()[0].status, OrderStatus::Pending);
        assert_eq!(engine.records()[1].status, OrderStatus::Approved);
        assert!(engine.staged().is_none());
    }

    #[tokio::test]
    async fn confirm_without_staging_is_rejected() {
        let store = MockStore::default();
        let mut engine = engine_with(vec![TestRecord::new("a", OrderStatus::Pending)]);
        let err = engine.confirm_transition(&store).await.unwrap_err();
        assert!(matches!(err, WorkflowError::NothingStaged));
    }

    #[tokio::test]
    async fn failed_confirm_leaves_snapshot_and_stage_unchanged() {
        let store = MockStore::failing();
        let mut engine = engine_with(vec![TestRecord::new("a", OrderStatus::Pending)]);

        engine
            .request_transition("a", OrderStatus::Declined)
            .unwrap();
        let err = engine.confirm_transition(&store).await.unwrap_err();
        assert!(matches!(err, WorkflowError::Store(_)));

        assert_eq!(engine.records()[0].status, OrderStatus::Pending);
        assert!(engine.staged().is_some());
    }

    #[tokio::test]
    async fn cancel_discards_staged_transition() {
        let store = MockStore::default();
        let mut engine = engine_with(vec![TestRecord::new("a", OrderStatus::Pending)]);

        engine
            .request_transition("a", OrderStatus::Approved)
            .unwrap();
        engine.cancel_transition();

        let err = engine.confirm_transition(&store).await.unwrap_err();
        assert!(matches!(err, WorkflowError::NothingStaged));
        assert!(store.updates.lock().unwrap().is_empty());
    }

    #[test]
    fn restaging_identical_request_is_idempotent() {
        let mut engine = engine_with(vec![TestRecord::new("a", OrderStatus::Pending)]);
        engine
            .request_transition("a", OrderStatus::Approved)
            .unwrap();
        let first = engine.staged().cloned();
        engine
            .request_transition("a", OrderStatus::Approved)
            .unwrap();
        assert_eq!(engine.staged().cloned(), first);
    }

    #[test]
    fn staging_unknown_record_is_rejected() {
        let mut engine = engine_with(vec![TestRecord::new("a", OrderStatus::Pending)]);
        let err = engine
            .request_transition("ghost", OrderStatus::Approved)
            .unwrap_err();
        assert!(matches!(err, WorkflowError::UnknownRecord(_)));
    }

    #[tokio::test]
    async fn delete_requires_declined_status() {
        let store = MockStore::default();
        for status in [OrderStatus::Pending, OrderStatus::Approved] {
            let mut engine = engine_with(vec![TestRecord::new("a", status)]);
            let err = engine.delete_record(&store, "a").await.unwrap_err();
            assert!(matches!(err, WorkflowError::DeleteNotAllowed(_)));
            // Guard fires before the remote call; the collection is unchanged
            assert_eq!(engine.records().len(), 1);
            assert!(store.deletes.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn delete_declined_removes_record() {
        let store = MockStore::default();
        let mut engine = engine_with(vec![
            TestRecord::new("a", OrderStatus::Declined),
            TestRecord::new("b", OrderStatus::Pending),
        ]);

        let removed = engine.delete_record(&store, "a").await.unwrap();
        assert_eq!(removed.key, "a");
        assert_eq!(engine.records().len(), 1);
        assert_eq!(store.deletes.lock().unwrap().as_slice(), ["a".to_string()]);
    }

    #[tokio::test]
    async fn failed_delete_rolls_back_local_removal() {
        let store = MockStore::failing();
        let mut engine = engine_with(vec![
            TestRecord::new("a", OrderStatus::Declined),
            TestRecord::new("b", OrderStatus::Pending),
        ]);

        let err = engine.delete_record(&store, "a").await.unwrap_err();
        assert!(matches!(err, WorkflowError::Store(_)));
        // Record restored at its original position
        assert_eq!(engine.records().len(), 2);
        assert_eq!(engine.records()[0].key, "a");
    }

    #[test]
    fn load_discards_stale_staged_transition() {
        let mut engine = engine_with(vec![TestRecord::new("a", OrderStatus::Pending)]);
        engine
            .request_transition("a", OrderStatus::Approved)
            .unwrap();
        engine.load(vec![TestRecord::new("c", OrderStatus::Pending)]);
        assert!(engine.staged().is_none());
    }
}
