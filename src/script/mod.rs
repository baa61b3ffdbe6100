//! Script service
//!
//! The permission-gated, never-failing API handed to extension code.

pub mod async_service;
pub mod service;

pub use async_service::AsyncJsonStoreService;
pub use service::JsonStoreService;
