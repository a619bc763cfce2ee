//! Media Upload Service
//!
//! Uploads image files to the external media host. The host takes a binary
//! file plus a named preset/folder and answers with a publicly-resolvable
//! URL. There is no retry contract: a failed upload fails the caller's save.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Upload error types
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Upload transport error: {0}")]
    Transport(String),

    #[error("Media host rejected upload ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Malformed upload response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        UploadError::Transport(err.to_string())
    }
}

/// An image file attached to a catalog save
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Uploads one file and resolves it to a public URL
#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, file: MediaFile) -> Result<String, UploadError>;
}

#[derive(Debug, Deserialize)]
struct UploadOutcome {
    secure_url: String,
}

/// Media host client posting multipart uploads with a preset and folder
#[derive(Clone)]
pub struct HostedMediaUploader {
    client: reqwest::Client,
    endpoint: String,
    preset: String,
    folder: String,
}

impl HostedMediaUploader {
    pub fn new(endpoint: String, preset: String, folder: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            preset,
            folder,
        }
    }
}

#[async_trait]
impl MediaUploader for HostedMediaUploader {
    async fn upload(&self, file: MediaFile) -> Result<String, UploadError> {
        let mut part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.filename);
        if let Some(content_type) = &file.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| UploadError::Transport(e.to_string()))?;
        }

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.preset.clone())
            .text("folder", self.folder.clone());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let outcome: UploadOutcome = response
            .json()
            .await
            .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;

        tracing::debug!(url = %outcome.secure_url, "Image uploaded");
        Ok(outcome.secure_url)
    }
}
