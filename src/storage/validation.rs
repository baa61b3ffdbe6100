//! Identifier validation
//!
//! Maps store identifiers to file paths under the store root. Nothing in here
//! touches the filesystem.

use log::{debug, trace, warn};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Extension appended to the last segment of every identifier
pub const JSON_EXTENSION: &str = "json";

/// Why an identifier cannot be mapped to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierRejection {
    /// A `..` segment would climb above the store root.
    Traversal,
    /// Nothing is left once separators and `.` segments are removed.
    Empty,
    /// A segment is not a plain file name on this platform (NUL byte, drive prefix...).
    ForbiddenSegment,
}

impl fmt::Display for IdentifierRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierRejection::Traversal => write!(f, "path traversal above the store root"),
            IdentifierRejection::Empty => write!(f, "empty or equal to the path separator"),
            IdentifierRejection::ForbiddenSegment => write!(f, "contains a forbidden segment"),
        }
    }
}

/// Normalize an identifier into a relative, forward-slash separated path.
///
/// Backslashes count as separators, empty and `.` segments are dropped and
/// `..` removes the previous segment. Leading and trailing separators are
/// ignored, so `/a/b/` and `a/b` are the same identifier.
pub fn normalize_identifier(id: &str) -> Result<String, IdentifierRejection> {
    let unified = id.replace('\\', "/");
    let mut segments: Vec<&str> = Vec::new();

    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(IdentifierRejection::Traversal);
                }
            }
            other => {
                if !is_plain_segment(other) {
                    return Err(IdentifierRejection::ForbiddenSegment);
                }
                segments.push(other);
            }
        }
    }

    if segments.is_empty() {
        return Err(IdentifierRejection::Empty);
    }

    Ok(segments.join("/"))
}

/// Resolve the file holding the value stored under `id`.
///
/// Returns `None` when the identifier cannot be mapped safely; the result is
/// otherwise always strictly inside `root`.
pub fn resolve_storage_path(root: &Path, id: &str) -> Option<PathBuf> {
    match normalize_identifier(id) {
        Ok(normalized) => {
            let path = root.join(format!("{}.{}", normalized, JSON_EXTENSION));
            debug!("Computed storage file for id {}: {}", id, path.display());
            Some(path)
        }
        Err(IdentifierRejection::Traversal) => {
            warn!("Producing a path for id {} failed: {}", id, IdentifierRejection::Traversal);
            None
        }
        Err(rejection) => {
            trace!("Id {} is {}, no file can be computed", id, rejection);
            None
        }
    }
}

/// A segment must be exactly one normal path component
fn is_plain_segment(segment: &str) -> bool {
    if segment.contains('\0') {
        return false;
    }
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
