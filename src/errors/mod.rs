//! # Error Handling
//!
//! Top-level error type for smurfdykt. Secret-store failures keep their own
//! [`SecretsError`](crate::secrets::SecretsError) and are wrapped here.

use crate::secrets::SecretsError;

/// Custom result type for smurfdykt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for smurfdykt
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The override file could not be read or parsed. Never fatal.
    #[error("Config file error: {0}")]
    ConfigFile(String),

    /// No authenticated secret-store client could be established
    #[error("Credential error: {0}")]
    Credential(String),

    /// Fetching or extracting the secret failed
    #[error(transparent)]
    Secrets(#[from] SecretsError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new config file error
    pub fn config_file<S: Into<String>>(message: S) -> Self {
        Self::ConfigFile(message.into())
    }

    /// Create a new credential error
    pub fn credential<S: Into<String>>(message: S) -> Self {
        Self::Credential(message.into())
    }
}
