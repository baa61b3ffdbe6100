//! Error types
//!
//! Defines the genuine failures of the store and of the service layer.
//! Expected negative outcomes (unknown identifier, refused overwrite) are not
//! errors and never show up here.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::auth::Right;

/// Storage engine errors
#[derive(Debug)]
pub enum StoreError {
    /// The value could not be turned into JSON (caller bug, e.g. non-string map keys).
    Serialization(serde_json::Error),
    /// The stored file exists but does not hold valid JSON.
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    IoError(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Serialization(e) => write!(f, "Cannot serialize value as JSON: {}", e),
            StoreError::Decode { path, source } => {
                write!(f, "Corrupt JSON in {}: {}", path.display(), source)
            }
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Serialization(e) => Some(e),
            StoreError::Decode { source, .. } => Some(source),
            StoreError::IoError(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::IoError(error)
    }
}

/// Authorization errors raised before the store is reached
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    MissingRight { caller: String, right: Right },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingRight { caller, right } => {
                write!(f, "Caller {} lacks the {} right", caller, right)
            }
        }
    }
}

impl std::error::Error for AuthError {}
