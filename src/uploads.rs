//! Upload queue state machine.
//!
//! Tracks the set of file uploads per destination path, resolves filename
//! collisions before anything touches the wire, drives the transfers, and
//! keeps per-upload progress observable while they run. Finished uploads
//! are evicted automatically after a short retention period; failed ones
//! stay until removed explicitly.
//!
//! Every state change goes through the shared collection keyed by record
//! id, so progress callbacks from concurrent transfers can never clobber
//! each other with a stale copy of the list.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{error, info, warn};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::config::Config;
use crate::constants::{
    MSG_CANNOT_OVERWRITE_DELETED_MANY, MSG_CANNOT_OVERWRITE_DELETED_ONE,
};
use crate::transfer::{FileTransfer, Progress, TransferError, UploadFile};
use crate::utils::filename::{generate_unique_file_name, is_valid_file_name};
use crate::utils::path::split_path;

/// Lifecycle state of a single upload record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    Initial,
    InProgress,
    Finished,
    Error,
}

/// One tracked upload: a batch of files bound for a destination directory.
#[derive(Clone, Debug)]
pub struct Upload {
    pub id: Uuid,
    pub files: Vec<UploadFile>,
    pub destination_path: String,
    pub destination_filename: String,
    pub status: UploadStatus,
    /// Percentage over the whole batch, 0..=100.
    pub progress: f64,
    pub enqueued_at: DateTime<Utc>,
}

/// Notifications published by the queue for the hosting UI to surface.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadEvent {
    /// The destination holds a soft-deleted entry with the same name; the
    /// transfer was rejected with a conflict.
    ConflictWithDeleted { file_count: usize, message: String },
    /// One or more path segments are not acceptable file names.
    InvalidFilenames { names: Vec<String> },
    /// The batch exceeds the configured upload size limit.
    FileTooLarge { limit: String },
    Finished { id: Uuid },
    Failed { id: Uuid },
}

impl UploadEvent {
    /// User-facing message for conflict events, worded for one or many files.
    pub fn conflict_message(file_count: usize) -> &'static str {
        if file_count == 1 {
            MSG_CANNOT_OVERWRITE_DELETED_ONE
        } else {
            MSG_CANNOT_OVERWRITE_DELETED_MANY
        }
    }
}

/// Upload queue service shared between the drop targets and the progress UI.
#[derive(Clone)]
pub struct UploadQueue {
    transfer: Arc<dyn FileTransfer>,
    uploads: Arc<Mutex<Vec<Upload>>>,
    events: mpsc::UnboundedSender<UploadEvent>,
    retention: Duration,
    max_file_size_bytes: Option<u64>,
}

impl UploadQueue {
    /// Create a new upload queue over the given transfer backend.
    pub fn new(
        transfer: Arc<dyn FileTransfer>,
        events: mpsc::UnboundedSender<UploadEvent>,
        retention: Duration,
        max_file_size_bytes: Option<u64>,
    ) -> Self {
        Self {
            transfer,
            uploads: Arc::new(Mutex::new(Vec::new())),
            events,
            retention,
            max_file_size_bytes,
        }
    }

    /// Create an upload queue configured from the application config.
    pub fn from_config(
        transfer: Arc<dyn FileTransfer>,
        events: mpsc::UnboundedSender<UploadEvent>,
        config: &Config,
    ) -> Self {
        Self::new(
            transfer,
            events,
            Duration::from_secs(config.uploads.finished_retention_seconds),
            config.uploads.max_file_size_bytes,
        )
    }

    /// Snapshot of all tracked uploads, oldest first.
    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().map(|u| u.clone()).unwrap_or_default()
    }

    /// Snapshot of a single upload by id.
    pub fn get(&self, id: Uuid) -> Option<Upload> {
        self.uploads
            .lock()
            .ok()
            .and_then(|u| u.iter().find(|upload| upload.id == id).cloned())
    }

    /// Enqueue a batch of files for a destination directory.
    ///
    /// Each file gets a destination filename that collides neither with the
    /// entries already listed in the directory nor with uploads already
    /// queued for the same destination; names claimed earlier in this batch
    /// count as taken too. Records start in `Initial` state.
    pub async fn enqueue(
        &self,
        destination_path: &str,
        files: Vec<UploadFile>,
    ) -> Result<Vec<Upload>, TransferError> {
        let listed = self.transfer.list(destination_path).await?;

        // Name assignment and record insertion share one critical section:
        // a racing enqueue for the same destination must see the names
        // claimed here before it picks its own.
        let mut new_uploads = Vec::with_capacity(files.len());
        if let Ok(mut uploads) = self.uploads.lock() {
            let mut used_names: Vec<String> = listed.into_iter().map(|e| e.basename).collect();
            used_names.extend(
                uploads
                    .iter()
                    .filter(|u| u.destination_path == destination_path)
                    .map(|u| u.destination_filename.clone()),
            );

            for file in files {
                let destination_filename = generate_unique_file_name(&file.name, &used_names);
                used_names.push(destination_filename.clone());
                new_uploads.push(Upload {
                    id: Uuid::new_v4(),
                    files: vec![file],
                    destination_path: destination_path.to_string(),
                    destination_filename,
                    status: UploadStatus::Initial,
                    progress: 0.0,
                    enqueued_at: Utc::now(),
                });
            }

            uploads.extend(new_uploads.iter().cloned());
        }

        info!(
            "Enqueued {} upload(s) for '{}'",
            new_uploads.len(),
            destination_path
        );
        Ok(new_uploads)
    }

    /// Start a previously enqueued upload.
    ///
    /// Pre-flight checks (filename validity, size limit) move the record
    /// straight to `Error` without touching the transport. Otherwise the
    /// record goes `InProgress` and follows the transfer to `Finished` or
    /// `Error`. All failures are recovered here and reported through the
    /// record state and the event channel.
    pub async fn start_upload(&self, id: Uuid) {
        let Some(upload) = self.get(id) else {
            warn!("start_upload called for unknown upload {id}");
            return;
        };

        let invalid: Vec<String> = upload
            .files
            .iter()
            .filter_map(|file| {
                split_path(&file.relative_path)
                    .into_iter()
                    .find(|segment| !is_valid_file_name(segment))
                    .map(str::to_string)
            })
            .collect();
        if !invalid.is_empty() {
            self.publish(UploadEvent::InvalidFilenames { names: invalid });
            self.fail(id);
            return;
        }

        if let Some(limit) = self.max_file_size_bytes {
            let batch_size: u64 = upload.files.iter().map(|f| f.size).sum();
            if batch_size > limit {
                self.publish(UploadEvent::FileTooLarge {
                    limit: format!("{limit} bytes"),
                });
                self.fail(id);
                return;
            }
        }

        self.update_upload(id, |u| {
            u.status = UploadStatus::InProgress;
            u.progress = 0.0;
        });

        let uploads = Arc::clone(&self.uploads);
        let on_progress = Arc::new(move |p: Progress| {
            if p.total == 0 {
                return;
            }
            let percent = (p.loaded as f64 * 100.0) / p.total as f64;
            if let Ok(mut uploads) = uploads.lock() {
                if let Some(u) = uploads.iter_mut().find(|u| u.id == id) {
                    u.progress = percent;
                }
            }
        });

        let result = self
            .transfer
            .upload_multi(&upload.destination_path, &upload.files, on_progress)
            .await;

        match result {
            Ok(()) => {
                self.update_upload(id, |u| u.status = UploadStatus::Finished);
                self.publish(UploadEvent::Finished { id });
                self.schedule_removal(id);
            }
            Err(err) => {
                error!(
                    "Upload of '{}' to '{}' failed: {}",
                    upload.destination_filename, upload.destination_path, err
                );
                match &err {
                    TransferError::Conflict(message) => {
                        self.publish(UploadEvent::ConflictWithDeleted {
                            file_count: upload.files.len(),
                            message: message.clone(),
                        });
                    }
                    TransferError::PayloadTooLarge(message) => {
                        self.publish(UploadEvent::FileTooLarge {
                            limit: message.clone(),
                        });
                    }
                    _ => {}
                }
                self.fail(id);
            }
        }
    }

    /// Remove an upload from the tracked collection regardless of state.
    pub fn remove_upload(&self, id: Uuid) {
        if let Ok(mut uploads) = self.uploads.lock() {
            uploads.retain(|u| u.id != id);
        }
    }

    /// Spawn the fire-and-forget eviction timer for a finished upload.
    /// Removal is by id, so a record removed manually in the meantime makes
    /// this a no-op.
    fn schedule_removal(&self, id: Uuid) {
        let queue = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(queue.retention).await;
            queue.remove_upload(id);
        });
    }

    fn fail(&self, id: Uuid) {
        self.update_upload(id, |u| u.status = UploadStatus::Error);
        self.publish(UploadEvent::Failed { id });
    }

    fn update_upload(&self, id: Uuid, update: impl FnOnce(&mut Upload)) {
        if let Ok(mut uploads) = self.uploads.lock() {
            if let Some(u) = uploads.iter_mut().find(|u| u.id == id) {
                update(u);
            }
        }
    }

    /// Notifications are advisory; a dropped receiver is not an error.
    fn publish(&self, event: UploadEvent) {
        let _ = self.events.send(event);
    }
}
