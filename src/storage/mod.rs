//! Durable client-side key-value storage.
//!
//! Holds the session token between runs under [`TOKEN_KEY`]. Values are
//! plain strings; callers encode anything structured themselves.

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key of the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Key of the JSON-encoded identity that accompanies the token.
pub const IDENTITY_KEY: &str = "teacher";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file '{path}' is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Minimal string key-value store.
///
/// `remove` of an absent key succeeds.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
