//! Caller rights
//!
//! The store trusts whoever calls it. The service layer uses these types to
//! make sure only callers holding elevated trust get that far.

use std::fmt;

use crate::error::AuthError;

/// Rights a caller can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Right {
    /// Elevated trust, required for every store operation.
    Programming,
}

impl fmt::Display for Right {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Right::Programming => write!(f, "programming"),
        }
    }
}

/// The identity on whose behalf a service call is made
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    name: String,
    rights: Vec<Right>,
}

impl Caller {
    /// A caller holding the programming right
    pub fn programming(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rights: vec![Right::Programming],
        }
    }

    /// A caller without any elevated right
    pub fn standard(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rights: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_right(&self, right: Right) -> bool {
        self.rights.contains(&right)
    }
}

/// Fails unless the caller holds `right`.
pub fn require_right(caller: &Caller, right: Right) -> Result<(), AuthError> {
    if caller.has_right(right) {
        Ok(())
    } else {
        Err(AuthError::MissingRight {
            caller: caller.name.clone(),
            right,
        })
    }
}
