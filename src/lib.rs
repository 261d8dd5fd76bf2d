//! Mercury Core - the headless engine behind the Mercury data-management UI
//!
//! This library provides the logic every tabular screen in Mercury shares:
//! sorting, pagination, and selection over schema-flexible item
//! collections, a queue that drives file uploads to the storage service,
//! and a generic async-fetch resource that data providers hydrate through.
//! Rendering, authentication, and the concrete storage client live in the
//! hosting application.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`grid`] - Sorting, pagination, and selection over item collections
//! * [`uploads`] - Upload queue state machine with progress tracking
//! * [`transfer`] - Abstract file transfer capability (storage seam)
//! * [`fetch`] - Generic async-fetch resource (`data`/`loading`/`error`)
//! * [`config`] - Application configuration management
//! * [`utils`] - Path and filename helpers

/// Application configuration management
pub mod config;

/// Application constants and default values
pub mod constants;

/// Generic async-fetch resource used by data providers
pub mod fetch;

/// Data-grid pipeline: sorting, pagination, selection
pub mod grid;

/// Logging setup for the hosting application
pub mod logger;

/// File transfer abstraction consumed by the upload queue
pub mod transfer;

/// Upload queue state machine
pub mod uploads;

/// Path and filename utility functions
pub mod utils;

// Re-export the pipeline types for convenient access
pub use fetch::{AsyncResource, FetchState};
pub use grid::{CellValue, Column, ColumnSet, GridError, Pager, Selection, Sorter};
pub use transfer::{DirEntry, FileTransfer, Progress, TransferError, UploadFile};
pub use uploads::{Upload, UploadEvent, UploadQueue, UploadStatus};
