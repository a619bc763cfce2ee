use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::Mutex;

use crate::catalog::CatalogEditor;
use crate::core::Config;
use crate::db::DbService;
use crate::db::models::{SoldItem, SoldTicket};
use crate::db::repository::{
    EventRepository, ProductRepository, SoldItemRepository, SoldTicketRepository,
};
use crate::services::{HostedMediaUploader, MediaUploader};
use crate::workflow::OrderWorkflow;

/// Server state, holding shared references to every service
///
/// Cloning is shallow; everything mutable sits behind an Arc.
///
/// # Components
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | Configuration (immutable) |
/// | db | Surreal<Db> | Embedded database |
/// | catalog | CatalogEditor | Product create/update/delete |
/// | sold_items | Arc<Mutex<OrderWorkflow<SoldItem>>> | Merch order workflow |
/// | sold_tickets | Arc<Mutex<OrderWorkflow<SoldTicket>>> | Ticket order workflow |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Media host client shared by the catalog editor
    pub uploader: Arc<dyn MediaUploader>,
    /// Product catalog editor
    pub catalog: CatalogEditor,
    /// Status workflow over the loaded merch order snapshot
    pub sold_items: Arc<Mutex<OrderWorkflow<SoldItem>>>,
    /// Status workflow over the loaded ticket order snapshot
    pub sold_tickets: Arc<Mutex<OrderWorkflow<SoldTicket>>>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>, uploader: Arc<dyn MediaUploader>) -> Self {
        let catalog = CatalogEditor::new(ProductRepository::new(db.clone()), uploader.clone());
        Self {
            config,
            db,
            uploader,
            catalog,
            sold_items: Arc::new(Mutex::new(OrderWorkflow::default())),
            sold_tickets: Arc::new(Mutex::new(OrderWorkflow::default())),
        }
    }

    /// Initialize the server state.
    ///
    /// Ensures the working directory exists, opens the database at
    /// `data_dir/console.db` and wires up the media host client.
    ///
    /// # Panics
    ///
    /// Panics when the working directory cannot be created or the database
    /// fails to open.
    pub async fn initialize(config: &Config) -> Self {
        std::fs::create_dir_all(&config.data_dir).expect("Failed to create data directory");

        let db_path = config.database_path();
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        let uploader: Arc<dyn MediaUploader> = Arc::new(HostedMediaUploader::new(
            config.media_upload_url.clone(),
            config.media_upload_preset.clone(),
            config.media_upload_folder.clone(),
        ));

        Self::new(config.clone(), db_service.db, uploader)
    }

    /// State over an in-memory database, for tests
    pub async fn for_tests(uploader: Arc<dyn MediaUploader>) -> Self {
        let db_service = DbService::memory()
            .await
            .expect("Failed to initialize in-memory database");
        Self::new(Config::with_overrides("/tmp/console-test", 0), db_service.db, uploader)
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.db.clone())
    }

    pub fn events(&self) -> EventRepository {
        EventRepository::new(self.db.clone())
    }

    pub fn sold_item_repo(&self) -> SoldItemRepository {
        SoldItemRepository::new(self.db.clone())
    }

    pub fn sold_ticket_repo(&self) -> SoldTicketRepository {
        SoldTicketRepository::new(self.db.clone())
    }
}
