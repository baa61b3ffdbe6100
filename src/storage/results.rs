//! Storage result types
//!
//! Defines result structures returned by storage operations.

/// What happened to a write request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    /// The value now sits at the resolved location.
    Written,
    /// The identifier does not map to a safe location; nothing was touched.
    InvalidIdentifier,
    /// A value is already stored and overwriting was not forced.
    AlreadyExists,
    /// The parent directories could not be created.
    DirectoryUnavailable,
}

impl PutOutcome {
    pub fn is_written(self) -> bool {
        self == PutOutcome::Written
    }
}
