//! Unified error handling
//!
//! Application-level error taxonomy and the HTTP mapping for it:
//! - [`AppError`] - application error enum
//! - [`AppResult`] - handler result alias
//!
//! Remote-store and upload failures are logged and surfaced as non-fatal
//! notices to the caller; nothing here aborts the session. Validation
//! failures never reach the remote store.

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::catalog::CatalogError;
use crate::db::repository::RepoError;
use crate::services::UploadError;
use crate::workflow::WorkflowError;

/// Application error enum
///
/// | Variant | Meaning | Status |
/// |---------|---------|--------|
/// | Fetch | remote read failed | 502 |
/// | Write | remote create/update/delete failed | 502 |
/// | Upload | media host rejected an upload | 502 |
/// | Validation | request violates an invariant | 400 |
/// | NotFound | record does not exist | 404 |
/// | Internal | anything else | 500 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Remote fetch failed: {0}")]
    Fetch(String),

    #[error("Remote write failed: {0}")]
    Write(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result type for API handlers
pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::Fetch(msg) => {
                error!(target: "store", error = %msg, "Remote fetch failed");
                (StatusCode::BAD_GATEWAY, "fetch_failed", msg.clone())
            }
            AppError::Write(msg) => {
                error!(target: "store", error = %msg, "Remote write failed");
                (StatusCode::BAD_GATEWAY, "write_failed", msg.clone())
            }
            AppError::Upload(msg) => {
                error!(target: "media", error = %msg, "Upload failed");
                (StatusCode::BAD_GATEWAY, "upload_failed", msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    /// Map a repository error from a read path.
    ///
    /// Store failures surface as Fetch here; the blanket `From<RepoError>`
    /// below is for mutation paths and maps them to Write.
    pub fn fetch(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Fetch(msg),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

// ========== Conversions from layer errors ==========

// Mutation-path mapping; read paths go through [`AppError::fetch`]
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Write(msg),
        }
    }
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::UnknownRecord(id) => {
                AppError::NotFound(format!("Record {} not in current snapshot", id))
            }
            WorkflowError::NothingStaged => {
                AppError::Validation("No staged transition to confirm".to_string())
            }
            WorkflowError::DeleteNotAllowed(status) => AppError::Validation(format!(
                "Only Declined records may be deleted (current status: {})",
                status
            )),
            WorkflowError::Store(repo) => repo.into(),
        }
    }
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        AppError::Upload(err.to_string())
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Upload(e) => e.into(),
            CatalogError::Store(e) => e.into(),
            CatalogError::InvalidDraft(msg) => AppError::Validation(msg),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Validation(format!("Multipart error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn read_path_store_failure_surfaces_as_fetch_failed() {
        let err = AppError::fetch(RepoError::Database("connection reset".to_string()));
        assert!(matches!(err, AppError::Fetch(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "fetch_failed");
    }

    #[test]
    fn mutation_path_store_failure_surfaces_as_write() {
        let err: AppError = RepoError::Database("connection reset".to_string()).into();
        assert!(matches!(err, AppError::Write(_)));
    }

    #[test]
    fn fetch_preserves_not_found_and_validation() {
        assert!(matches!(
            AppError::fetch(RepoError::NotFound("Product x".to_string())),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::fetch(RepoError::Validation("bad id".to_string())),
            AppError::Validation(_)
        ));
    }
}
