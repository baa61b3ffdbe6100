//! File system storage
//!
//! Identifier resolution, the JSON store and its file operations.

pub mod filesystem;
pub mod operations;
pub mod results;
pub mod store;
pub mod timestamps;
pub mod validation;

// Re-export commonly used items
pub use operations::{DEFAULT_STORE_FOLDER, PermdirJsonStore};
pub use results::PutOutcome;
pub use store::{BaseDirectory, JsonStore};
pub use validation::{IdentifierRejection, normalize_identifier, resolve_storage_path};
