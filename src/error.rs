//! Error taxonomy shared by every store operation.
//!
//! Remote failures are converted into [`Error`] at the call site and carry a
//! message fit for display; nothing here is retried.

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;
use crate::validation::FormErrors;

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Client-side form validation rejected the input before any request.
    #[error("{0}")]
    Validation(#[from] FormErrors),

    /// Server refused the credentials or the bearer token (401).
    #[error("{message}")]
    Auth { message: String },

    /// Request never produced an HTTP response.
    #[error("{message}: {source}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Server { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("{message}: {source}")]
    Decode {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Durable storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Message the view shows to the user.
    ///
    /// Never includes transport internals; those stay in `Display` for logs.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(errors) => errors.to_string(),
            Error::Auth { message }
            | Error::Network { message, .. }
            | Error::Server { message, .. }
            | Error::Decode { message, .. } => message.clone(),
            Error::Storage(_) => "Could not access local storage".to_string(),
            Error::Config(err) => err.to_string(),
        }
    }

    /// Stable tag for logs and machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation_error",
            Error::Auth { .. } => "auth_error",
            Error::Network { .. } => "network_error",
            Error::Server { .. } => "server_error",
            Error::Decode { .. } => "decode_error",
            Error::Storage(_) => "storage_error",
            Error::Config(_) => "config_error",
        }
    }

    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Auth { .. } => Some(401),
            Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
