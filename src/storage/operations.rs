//! Storage operations
//!
//! The filesystem backed JSON store: one `<id>.json` file per identifier under
//! a fixed folder of the permanent directory.

use log::{debug, error, trace};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::StoreError;
use crate::storage::filesystem;
use crate::storage::results::PutOutcome;
use crate::storage::store::{BaseDirectory, JsonStore};
use crate::storage::validation::resolve_storage_path;

/// Folder of the permanent directory holding the store
pub const DEFAULT_STORE_FOLDER: &str = "jsonstore";

pub struct PermdirJsonStore {
    base: Box<dyn BaseDirectory>,
    folder: String,
    root: OnceLock<PathBuf>,
}

impl PermdirJsonStore {
    pub fn new(base: impl BaseDirectory + 'static) -> Self {
        Self::with_folder(base, DEFAULT_STORE_FOLDER)
    }

    pub fn with_folder(base: impl BaseDirectory + 'static, folder: impl Into<String>) -> Self {
        Self {
            base: Box::new(base),
            folder: folder.into(),
            root: OnceLock::new(),
        }
    }

    /// Root directory of the store, computed on first use
    pub fn root(&self) -> &Path {
        self.root.get_or_init(|| {
            let root = self.base.permanent_directory().join(&self.folder);
            debug!("JSON store root is {}", root.display());
            root
        })
    }

    /// File that holds (or would hold) the value of `id`
    pub fn storage_path(&self, id: &str) -> Option<PathBuf> {
        resolve_storage_path(self.root(), id)
    }

    /// Like [`JsonStore::put`], but reports why nothing was written.
    pub fn persist<T: Serialize + ?Sized>(
        &self,
        value: &T,
        id: &str,
        force_overwrite: bool,
    ) -> Result<PutOutcome, StoreError> {
        debug!(
            "Starting storing data with id {}. Overwrite is forced: {}",
            id, force_overwrite
        );
        let Some(path) = self.storage_path(id) else {
            trace!("Storage file for id {} resolved to nothing, not writing", id);
            return Ok(PutOutcome::InvalidIdentifier);
        };

        if !force_overwrite && filesystem::entry_exists(&path)? {
            debug!("File exists and overwrite is not forced for id {}", id);
            return Ok(PutOutcome::AlreadyExists);
        }

        let bytes = serde_json::to_vec(value).map_err(StoreError::Serialization)?;

        if let Err(e) = filesystem::ensure_parent_directory(&path) {
            error!("Could not create the path to store id {}: {}", id, e);
            return Ok(PutOutcome::DirectoryUnavailable);
        }

        filesystem::write_atomically(&path, &bytes)?;
        trace!(
            "Wrote {} bytes for id {} to {}",
            bytes.len(),
            id,
            path.display()
        );
        Ok(PutOutcome::Written)
    }
}

impl JsonStore for PermdirJsonStore {
    fn put<T: Serialize + ?Sized>(
        &self,
        value: &T,
        id: &str,
        force_overwrite: bool,
    ) -> Result<bool, StoreError> {
        self.persist(value, id, force_overwrite)
            .map(PutOutcome::is_written)
    }

    fn get(&self, id: &str) -> Result<Option<Value>, StoreError> {
        debug!("Starting fetching data for id {}", id);
        let Some(path) = self.storage_path(id) else {
            return Ok(None);
        };

        let Some(bytes) = filesystem::read_entry(&path)? else {
            trace!("Nothing stored on disk for id {}", id);
            return Ok(None);
        };

        let value = serde_json::from_slice(&bytes)
            .map_err(|source| StoreError::Decode { path, source })?;
        Ok(Some(value))
    }

    fn exists(&self, id: &str) -> Result<bool, StoreError> {
        trace!("Checking if id {} is stored", id);
        match self.storage_path(id) {
            Some(path) => Ok(filesystem::entry_exists(&path)?),
            None => Ok(false),
        }
    }
}
