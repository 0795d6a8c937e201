//! Entry directory reader.
//!
//! Each memmap entry directory carries three attribute files:
//! 1. **`start`:** First address of the region.
//! 2. **`end`:** Raw end address of the region.
//! 3. **`type`:** Usage label such as `System RAM`.
//!
//! Any other file in the directory is ignored.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::MemoryMapEntry;
use crate::common::error::{MemmapError, Result};
use crate::common::number::parse_u64;

/// Attribute file holding the start address.
pub const ATTR_START: &str = "start";
/// Attribute file holding the end address.
pub const ATTR_END: &str = "end";
/// Attribute file holding the usage label.
pub const ATTR_TYPE: &str = "type";

/// Reads an attribute file and trims surrounding whitespace.
fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| MemmapError::read_attribute(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).trim().to_owned())
}

/// Reads an attribute file as a base-prefixed `u64`.
fn read_address(path: &Path) -> Result<u64> {
    let value = read_text(path)?;
    match parse_u64(&value) {
        Ok(addr) => Ok(addr),
        Err(source) => Err(MemmapError::ParseAttribute {
            path: path.to_path_buf(),
            value,
            source,
        }),
    }
}

/// Reads one entry directory into a [`MemoryMapEntry`].
///
/// A missing `start` or `end` file leaves that address at zero and a missing
/// `type` leaves the label empty; each case is logged as a warning rather than
/// treated as an error. An `end` below `start` is kept as reported and the
/// wrapped size is logged as well.
///
/// # Arguments
///
/// * `dir` - Path of the entry directory, e.g. `/sys/firmware/memmap/0`.
///
/// # Errors
///
/// * [`MemmapError::ListDir`] if `dir` cannot be listed.
/// * [`MemmapError::ReadAttribute`] if an attribute file cannot be read.
/// * [`MemmapError::ParseAttribute`] if `start` or `end` is not an unsigned integer.
pub fn read_entry(dir: &Path) -> Result<MemoryMapEntry> {
    let listing = fs::read_dir(dir).map_err(|e| MemmapError::list_dir(dir, e))?;

    let mut start = None;
    let mut end = None;
    let mut kind = None;

    for item in listing {
        let item = item.map_err(|e| MemmapError::list_dir(dir, e))?;
        let path = item.path();
        match item.file_name().to_str() {
            Some(ATTR_START) => start = Some(read_address(&path)?),
            Some(ATTR_END) => end = Some(read_address(&path)?),
            Some(ATTR_TYPE) => kind = Some(read_text(&path)?),
            _ => {}
        }
    }

    for (name, present) in [
        (ATTR_START, start.is_some()),
        (ATTR_END, end.is_some()),
        (ATTR_TYPE, kind.is_some()),
    ] {
        if !present {
            warn!(dir = %dir.display(), attribute = name, "attribute missing, using default");
        }
    }

    let entry = MemoryMapEntry::new(
        start.unwrap_or_default(),
        end.unwrap_or_default(),
        kind.unwrap_or_default(),
    );

    if entry.is_inverted() {
        warn!(
            dir = %dir.display(),
            start = entry.start(),
            end = entry.end(),
            "end below start, size wraps"
        );
    }

    debug!(
        dir = %dir.display(),
        start = entry.start(),
        end = entry.end(),
        kind = entry.kind(),
        "read memmap entry"
    );

    Ok(entry)
}
