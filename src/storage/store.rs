//! Store interfaces
//!
//! The operations every JSON store offers, and where its files live.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;

/// A persistent key/value store holding JSON documents.
///
/// Expected negative outcomes (invalid identifier, nothing stored, overwrite
/// refused) are ordinary return values. Only genuine failures are `Err`.
pub trait JsonStore: Send + Sync {
    /// Serialize `value` and store it under `id`.
    ///
    /// Returns `Ok(false)` when `id` is invalid, when a value is already stored
    /// and `force_overwrite` is false, or when the parent directories cannot be
    /// created. The existence check and the write are separate steps, so two
    /// concurrent non-forced writers may both succeed; the last one wins.
    fn put<T: Serialize + ?Sized>(
        &self,
        value: &T,
        id: &str,
        force_overwrite: bool,
    ) -> Result<bool, StoreError>;

    /// Fetch and parse the value stored under `id`, `None` if there is none.
    fn get(&self, id: &str) -> Result<Option<Value>, StoreError>;

    /// Whether something is stored under `id`. The content is not checked.
    fn exists(&self, id: &str) -> Result<bool, StoreError>;
}

/// Supplies the directory under which the store keeps its folder
pub trait BaseDirectory: Send + Sync {
    fn permanent_directory(&self) -> PathBuf;
}

impl BaseDirectory for PathBuf {
    fn permanent_directory(&self) -> PathBuf {
        self.clone()
    }
}
