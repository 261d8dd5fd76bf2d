//! Utility modules for the Mercury core.
//!
//! Common helpers shared by the upload queue and its consumers: slash-path
//! handling for storage destinations and filename rules for collision-free
//! destination naming. All functions here are pure.

pub mod filename;
pub mod path;
