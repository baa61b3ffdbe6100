//! File system operations
//!
//! Thin wrappers over `std::fs` and `tempfile` used by the store.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use tempfile::Builder;

/// Create every missing directory above `path`
pub fn ensure_parent_directory(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Check if anything is present at `path`, without opening it
pub fn entry_exists(path: &Path) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if is_absent(&e) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Read the whole file, `None` if there is no such file
pub fn read_entry(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if is_absent(&e) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Replace the content of `path` with `bytes`.
///
/// The bytes go to a temporary file in the same directory first, which is then
/// renamed over the destination. Readers see either the old or the new content.
/// An existing file keeps its permissions; a new one gets the mode `File::create`
/// would give it.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let existing = match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(e) if is_absent(&e) => None,
        Err(e) => return Err(e),
    };

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // masked by the umask at creation, like File::create
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut temp_file = builder.tempfile_in(directory)?;
    temp_file.write_all(bytes)?;
    temp_file.as_file().sync_all()?;
    if let Some(permissions) = existing {
        temp_file.as_file().set_permissions(permissions)?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// A missing intermediate directory can also show up as NotADirectory when a
// plain file sits where a directory is expected.
fn is_absent(error: &io::Error) -> bool {
    matches!(error.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory)
}
