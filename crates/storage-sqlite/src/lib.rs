//! SQLite storage implementation for TakaTrack.
//!
//! This crate is the only place where SQLite dependencies exist. The
//! `core` crate works against the `KvStoreTrait` seam; this crate backs
//! that seam with a single-table `rusqlite` store used by the local
//! savings-goal repository.

pub mod errors;
pub mod kv;

pub use errors::StorageError;
pub use kv::SqliteKvStore;

// Re-export from takatrack-core for convenience
pub use takatrack_core::errors::{Error, Result, StoreError};
