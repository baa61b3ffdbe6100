//! Error handlers
//!
//! Logging helpers used where errors are swallowed and replaced by defaults.

use crate::error::types::{AuthError, StoreError};
use log::{debug, warn};

/// Log a store error that is about to be replaced by a default value
pub fn log_store_error(operation: &str, id: &str, err: &StoreError) {
    warn!(
        "Exception while {} for id {} ({} failure): {}",
        operation,
        id,
        error_label(err),
        err
    );
    if let Some(source) = std::error::Error::source(err) {
        debug!("Caused by: {:?}", source);
    }
}

/// Log a refused call
pub fn log_denied(operation: &str, id: &str, err: &AuthError) {
    warn!("Refused {} for id {}: {}", operation, id, err);
}

/// Short label for the kind of failure
pub fn error_label(err: &StoreError) -> &'static str {
    match err {
        StoreError::Serialization(_) => "serialization",
        StoreError::Decode { .. } => "decode",
        StoreError::IoError(_) => "io",
    }
}
