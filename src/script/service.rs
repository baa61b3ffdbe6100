//! Best-effort store service
//!
//! Entry point for extension code. Every call requires the programming right,
//! and every failure is logged and replaced by a safe default, so callers never
//! see an error.

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::auth::{Caller, Right, require_right};
use crate::error::handlers::{log_denied, log_store_error};
use crate::storage::JsonStore;

pub struct JsonStoreService<S> {
    store: S,
}

impl<S: JsonStore> JsonStoreService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store `data` as JSON under `id`.
    ///
    /// Returns false when `data` is `None`, when `id` is already used and
    /// `force_overwrite` is false, and on any failure.
    pub fn persist_as_json<T: Serialize + ?Sized>(
        &self,
        caller: &Caller,
        data: Option<&T>,
        id: &str,
        force_overwrite: bool,
    ) -> bool {
        if let Err(e) = require_right(caller, Right::Programming) {
            log_denied("writing", id, &e);
            return false;
        }
        let Some(data) = data else {
            debug!("Nothing to store for id {}", id);
            return false;
        };

        match self.store.put(data, id, force_overwrite) {
            Ok(written) => written,
            Err(e) => {
                log_store_error("writing data to the store", id, &e);
                false
            }
        }
    }

    /// Store `data` unless something is already stored under `id`
    pub fn persist_as_json_no_overwrite<T: Serialize + ?Sized>(
        &self,
        caller: &Caller,
        data: Option<&T>,
        id: &str,
    ) -> bool {
        self.persist_as_json(caller, data, id, false)
    }

    /// The parsed value stored under `id`.
    ///
    /// `None` both when nothing is stored and when the value cannot be read.
    pub fn get_from_json_store(&self, caller: &Caller, id: &str) -> Option<Value> {
        if let Err(e) = require_right(caller, Right::Programming) {
            log_denied("reading", id, &e);
            return None;
        }

        match self.store.get(id) {
            Ok(value) => value,
            Err(e) => {
                log_store_error("fetching data from the store", id, &e);
                None
            }
        }
    }

    /// Whether a value is stored under `id`, without reading it.
    ///
    /// `default_if_exception` is returned when the store cannot be checked.
    pub fn exists(&self, caller: &Caller, id: &str, default_if_exception: bool) -> bool {
        if let Err(e) = require_right(caller, Right::Programming) {
            log_denied("checking", id, &e);
            return false;
        }

        match self.store.exists(id) {
            Ok(found) => found,
            Err(e) => {
                log_store_error("checking whether data is stored", id, &e);
                default_if_exception
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use serde_json::json;
    use std::io;
    use std::sync::Mutex;

    /// In-memory store that can be told to fail
    #[derive(Default)]
    struct FakeStore {
        values: Mutex<Vec<(String, Value)>>,
        failing: bool,
    }

    impl FakeStore {
        fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        fn broken() -> StoreError {
            StoreError::IoError(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    impl JsonStore for FakeStore {
        fn put<T: Serialize + ?Sized>(
            &self,
            value: &T,
            id: &str,
            force_overwrite: bool,
        ) -> Result<bool, StoreError> {
            if self.failing {
                return Err(Self::broken());
            }
            let value = serde_json::to_value(value).map_err(StoreError::Serialization)?;
            let mut values = self.values.lock().unwrap();
            match values.iter().position(|(key, _)| key == id) {
                Some(_) if !force_overwrite => Ok(false),
                Some(index) => {
                    values[index].1 = value;
                    Ok(true)
                }
                None => {
                    values.push((id.to_string(), value));
                    Ok(true)
                }
            }
        }

        fn get(&self, id: &str) -> Result<Option<Value>, StoreError> {
            if self.failing {
                return Err(Self::broken());
            }
            let values = self.values.lock().unwrap();
            Ok(values.iter().find(|(key, _)| key == id).map(|(_, v)| v.clone()))
        }

        fn exists(&self, id: &str) -> Result<bool, StoreError> {
            Ok(self.get(id)?.is_some())
        }
    }

    #[test]
    fn test_trusted_caller_round_trip() {
        let service = JsonStoreService::new(FakeStore::default());
        let admin = Caller::programming("admin");

        assert!(service.persist_as_json_no_overwrite(&admin, Some(&json!({"n": 1})), "k"));
        assert!(!service.persist_as_json_no_overwrite(&admin, Some(&json!({"n": 2})), "k"));
        assert!(service.exists(&admin, "k", false));
        assert_eq!(service.get_from_json_store(&admin, "k"), Some(json!({"n": 1})));

        assert!(service.persist_as_json(&admin, Some(&json!({"n": 3})), "k", true));
        assert_eq!(service.get_from_json_store(&admin, "k"), Some(json!({"n": 3})));
    }

    #[test]
    fn test_missing_data_is_not_stored() {
        let service = JsonStoreService::new(FakeStore::default());
        let admin = Caller::programming("admin");

        assert!(!service.persist_as_json::<Value>(&admin, None, "k", true));
        assert!(!service.exists(&admin, "k", true));
    }

    #[test]
    fn test_untrusted_caller_gets_defaults() {
        let service = JsonStoreService::new(FakeStore::default());
        let admin = Caller::programming("admin");
        let guest = Caller::standard("guest");
        assert!(service.persist_as_json(&admin, Some(&json!(1)), "k", false));

        assert!(!service.persist_as_json(&guest, Some(&json!(2)), "k", true));
        assert_eq!(service.get_from_json_store(&guest, "k"), None);
        assert!(!service.exists(&guest, "k", true));
        assert_eq!(service.get_from_json_store(&admin, "k"), Some(json!(1)));
    }

    #[test]
    fn test_store_failures_are_swallowed() {
        let service = JsonStoreService::new(FakeStore::failing());
        let admin = Caller::programming("admin");

        assert!(!service.persist_as_json(&admin, Some(&json!(1)), "k", true));
        assert_eq!(service.get_from_json_store(&admin, "k"), None);
        assert!(service.exists(&admin, "k", true));
        assert!(!service.exists(&admin, "k", false));
    }
}
