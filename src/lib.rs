pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod script;
pub mod storage;
pub mod utils;

pub use config::StoreConfig;
pub use error::StoreError;
pub use script::{AsyncJsonStoreService, JsonStoreService};
pub use storage::{JsonStore, PermdirJsonStore, PutOutcome};
