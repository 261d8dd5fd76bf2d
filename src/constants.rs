//! Constants used throughout the crate
//!
//! This module centralizes magic strings, defaults, and other constant values
//! to improve maintainability and consistency.

/// Path separator used in all destination and relative paths
pub const PATH_SEPARATOR: char = '/';

/// Error message published when a fetch fails without any detail
pub const GENERIC_FETCH_ERROR: &str = "request failed";

/// Message printed when a default configuration file is generated
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// User-facing notification texts
pub const MSG_CANNOT_OVERWRITE_DELETED_ONE: &str =
    "File or folder with this name already exists and was marked as deleted. \
     Please delete the existing one permanently, undelete it first \
     to be able to overwrite it or choose a unique name.";
pub const MSG_CANNOT_OVERWRITE_DELETED_MANY: &str =
    "Some of the uploaded files or folders already exist and were marked as deleted. \
     Please delete the existing ones permanently, undelete them first \
     to be able to overwrite them or choose unique names.";

// Grid defaults
/// Default number of rows shown per page
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;
/// Upper bound accepted for rows per page in configuration
pub const MAX_ROWS_PER_PAGE: usize = 1000;

// Upload defaults
/// Seconds a finished upload stays visible before it is evicted
pub const FINISHED_UPLOAD_RETENTION_SECONDS: u64 = 5;
/// Upper bound accepted for the retention period in configuration
pub const MAX_RETENTION_SECONDS: u64 = 3600;
