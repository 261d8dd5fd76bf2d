//! File transfer abstraction layer.
//!
//! This module defines the interface the upload queue talks to instead of a
//! concrete storage client, along with common data types and error handling.
//! The production implementation wraps the WebDAV mount; tests supply their
//! own.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Common error types for transfer operations.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Transfer error: {0}")]
    Other(String),
}

/// A file handed to the upload queue.
///
/// `relative_path` is the path within the dropped selection (a dragged
/// folder keeps its structure); for a flat file pick it equals `name`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadFile {
    pub name: String,
    pub relative_path: String,
    pub size: u64,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        Self {
            relative_path: name.clone(),
            name,
            size,
        }
    }
}

/// A directory listing entry, as returned by the storage service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirEntry {
    pub basename: String,
    pub is_directory: bool,
}

/// A progress report for an in-flight transfer.
#[derive(Clone, Copy, Debug)]
pub struct Progress {
    pub loaded: u64,
    pub total: u64,
}

/// Callback invoked with intermediate progress while a transfer runs.
pub type ProgressCallback = Arc<dyn Fn(Progress) + Send + Sync>;

/// Transfer trait that all storage backends must implement.
///
/// This is the seam between the upload queue and the actual storage service
/// (WebDAV in production).
#[async_trait]
pub trait FileTransfer: Send + Sync {
    /// Upload a batch of files into a destination directory, reporting
    /// progress over the whole batch.
    async fn upload_multi(
        &self,
        destination_path: &str,
        files: &[UploadFile],
        on_progress: ProgressCallback,
    ) -> Result<(), TransferError>;

    /// List the entries of a directory.
    async fn list(&self, path: &str) -> Result<Vec<DirEntry>, TransferError>;
}
