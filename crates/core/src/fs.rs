//! Filesystem utilities

use std::path::Path;

use log::debug;

/// Check if a path exists and points at a regular file
pub fn is_file(path: &str) -> bool {
    let path = Path::new(path);
    let found = path.is_file();
    if !found {
        debug!("Not a regular file: {}", path.display());
    }
    found
}
