//! External collaborator services

pub mod media_upload;

pub use media_upload::{HostedMediaUploader, MediaFile, MediaUploader, UploadError};
