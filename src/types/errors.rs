use std::fmt;

// === SyncError ===

/// Errors related to bookmark synchronization.
#[derive(Debug)]
pub enum SyncError {
    /// The remote listing could not be fetched.
    Network(String),
    /// The fetched listing markup could not be parsed.
    Parse(String),
    /// `complete_sync` was called while no fetch was outstanding.
    NotFetching,
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Network(msg) => write!(f, "Sync network error: {}", msg),
            SyncError::Parse(msg) => write!(f, "Sync parse error: {}", msg),
            SyncError::NotFetching => write!(f, "No sync fetch is outstanding"),
        }
    }
}

impl std::error::Error for SyncError {}

// === StorageError ===

/// Errors related to the key-value persistence layer.
#[derive(Debug)]
pub enum StorageError {
    /// Database operation failed.
    Database(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Database(msg) => write!(f, "Storage database error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === OptionsError ===

/// Errors related to options management.
#[derive(Debug)]
pub enum OptionsError {
    /// The underlying key-value store failed.
    Storage(String),
    /// Failed to serialize or deserialize the options.
    Serialization(String),
    /// The provided options key does not exist.
    InvalidKey(String),
    /// The provided value does not fit the option's type.
    InvalidValue(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::Storage(msg) => write!(f, "Options storage error: {}", msg),
            OptionsError::Serialization(msg) => {
                write!(f, "Options serialization error: {}", msg)
            }
            OptionsError::InvalidKey(key) => write!(f, "Invalid options key: {}", key),
            OptionsError::InvalidValue(msg) => write!(f, "Invalid options value: {}", msg),
        }
    }
}

impl std::error::Error for OptionsError {}
