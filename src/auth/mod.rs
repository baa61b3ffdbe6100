//! Authorization
//!
//! Caller identity and the rights checked before any store access.

pub mod rights;

pub use rights::{Caller, Right, require_right};
