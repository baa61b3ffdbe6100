//! Async store service
//!
//! Runs the blocking service calls on tokio's blocking pool.

use log::warn;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::task;

use crate::auth::Caller;
use crate::script::service::JsonStoreService;
use crate::storage::JsonStore;

pub struct AsyncJsonStoreService<S> {
    inner: Arc<JsonStoreService<S>>,
}

impl<S> Clone for AsyncJsonStoreService<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: JsonStore + 'static> AsyncJsonStoreService<S> {
    pub fn new(service: JsonStoreService<S>) -> Self {
        Self {
            inner: Arc::new(service),
        }
    }

    pub fn service(&self) -> &JsonStoreService<S> {
        &self.inner
    }

    pub async fn persist_as_json<T>(
        &self,
        caller: &Caller,
        data: Option<T>,
        id: &str,
        force_overwrite: bool,
    ) -> bool
    where
        T: Serialize + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let caller = caller.clone();
        let key = id.to_string();
        run_blocking("writing data to the store", id, false, move || {
            inner.persist_as_json(&caller, data.as_ref(), &key, force_overwrite)
        })
        .await
    }

    pub async fn persist_as_json_no_overwrite<T>(
        &self,
        caller: &Caller,
        data: Option<T>,
        id: &str,
    ) -> bool
    where
        T: Serialize + Send + 'static,
    {
        self.persist_as_json(caller, data, id, false).await
    }

    pub async fn get_from_json_store(&self, caller: &Caller, id: &str) -> Option<Value> {
        let inner = Arc::clone(&self.inner);
        let caller = caller.clone();
        let key = id.to_string();
        run_blocking("fetching data from the store", id, None, move || {
            inner.get_from_json_store(&caller, &key)
        })
        .await
    }

    pub async fn exists(&self, caller: &Caller, id: &str, default_if_exception: bool) -> bool {
        let inner = Arc::clone(&self.inner);
        let caller = caller.clone();
        let key = id.to_string();
        run_blocking(
            "checking whether data is stored",
            id,
            default_if_exception,
            move || inner.exists(&caller, &key, default_if_exception),
        )
        .await
    }
}

async fn run_blocking<R, F>(operation: &str, id: &str, default: R, work: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    match task::spawn_blocking(work).await {
        Ok(result) => result,
        Err(e) => {
            warn!("Blocking task {} for id {} did not complete: {}", operation, id, e);
            default
        }
    }
}
