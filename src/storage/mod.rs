//! MangaMark persistence layer.
//!
//! The crate persists two documents — the bookmark map and the user options —
//! as JSON values under fixed string keys. [`KeyValueStore`] is the narrow
//! capability the rest of the crate depends on; [`SqliteKeyValueStore`] is the
//! production implementation.

pub mod sqlite;

pub use sqlite::SqliteKeyValueStore;

use crate::types::errors::StorageError;

/// Storage key for the serialized bookmark map.
pub const BOOKMARKS_KEY: &str = "bookmarks";
/// Storage key for the serialized user options.
pub const OPTIONS_KEY: &str = "options";

/// Flat key-value persistence: string keys mapped to JSON document values.
///
/// No schema versioning and no migration — a missing key is the only notion
/// of "empty", and `set` overwrites unconditionally.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
