//! Console Server - admin backend for a merchandise and ticketing storefront
//!
//! # Architecture
//!
//! - **Database** (`db`): embedded SurrealDB storage with per-collection
//!   repositories
//! - **Workflow** (`workflow`): staged status transitions for purchase
//!   records
//! - **Reporting** (`reporting`): chart bucketing, table filtering,
//!   pagination and CSV export
//! - **Catalog** (`catalog`): product editing with concurrent image uploads
//! - **HTTP API** (`api`): RESTful surface for the console frontend
//!
//! # Module structure
//!
//! ```text
//! console-server/src/
//! ├── core/          # Configuration, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── catalog/       # Product editor
//! ├── db/            # Database layer (models, repositories)
//! ├── reporting/     # Aggregation and filter engine
//! ├── services/      # Media upload client
//! ├── utils/         # Errors, logging
//! └── workflow/      # Status workflow engine
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod db;
pub mod reporting;
pub mod services;
pub mod utils;
pub mod workflow;

pub use crate::core::{Config, Server, ServerState, build_app};
pub use utils::{AppError, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Create the log directory under the data dir, returning it when usable
fn ensure_log_dir(config: &Config) -> Option<std::path::PathBuf> {
    let dir = config.log_dir();
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Bring up logging, file-backed whenever the log directory is writable
pub fn setup_environment(config: &Config) {
    match ensure_log_dir(config) {
        Some(dir) => init_logger_with_file(None, dir.to_str()),
        None => init_logger(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_is_created_under_the_data_dir() {
        let scratch = tempfile::tempdir().unwrap();
        let data_dir = scratch.path().join("console");
        let config = Config::with_overrides(data_dir.to_string_lossy().to_string(), 0);

        let dir = ensure_log_dir(&config).unwrap();
        assert!(dir.is_dir());
        assert_eq!(dir, data_dir.join("logs"));
    }
}
