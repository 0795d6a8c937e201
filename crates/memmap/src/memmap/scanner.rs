//! Root directory scanner.

use std::fs::{self, DirEntry};
use std::path::Path;

use tracing::{debug, trace};

use super::{MemoryMap, read_entry};
use crate::common::error::{MemmapError, Result};

/// Reads every entry directory directly under `root`.
///
/// Children are visited in file-name order. Only children that are themselves
/// directories (symlinks are not followed) are read; anything else is skipped.
/// The returned map is in discovery order, not address order.
///
/// # Errors
///
/// Returns [`MemmapError::ListDir`] if `root` cannot be listed, or the first
/// error from [`read_entry`]. No partial map is returned.
pub fn scan(root: &Path) -> Result<MemoryMap> {
    debug!(root = %root.display(), "scanning firmware memory map");

    let mut children = fs::read_dir(root)
        .and_then(|listing| listing.collect::<std::io::Result<Vec<DirEntry>>>())
        .map_err(|e| MemmapError::list_dir(root, e))?;
    children.sort_by_key(DirEntry::file_name);

    let mut map = MemoryMap::new();
    for child in children {
        let file_type = child
            .file_type()
            .map_err(|e| MemmapError::list_dir(root, e))?;
        if !file_type.is_dir() {
            trace!(path = %child.path().display(), "skipping non-directory");
            continue;
        }
        map.push(read_entry(&child.path())?);
    }

    debug!(entries = map.len(), "memory map collected");
    Ok(map)
}
