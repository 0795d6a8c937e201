//! Firmware memory map reader.
//!
//! This crate collects the physical memory map that the firmware handed to the
//! kernel and renders it as a table. It provides:
//! 1. **Common:** Error types and the attribute number parser.
//! 2. **Config:** The fixed sysfs root and table layout defaults.
//! 3. **Memory map:** Entry records, the per-entry reader, and the directory scanner.
//! 4. **Table:** The aligned column renderer.
//!
//! [`report`] wires these together: scan, sort by start address, render.

use std::io::Write;

/// Common types (errors, number parsing).
pub mod common;
/// Reader configuration (root path, table layout).
pub mod config;
/// Memory map entries, the entry reader, and the directory scanner.
pub mod memmap;
/// Table rendering.
pub mod table;

/// Root configuration type; the CLI uses `Config::default()`.
pub use crate::config::Config;
/// Crate error type and result alias.
pub use crate::common::error::{MemmapError, Result};
/// Collected entries and the single-entry record.
pub use crate::memmap::{MemoryMap, MemoryMapEntry};

/// Scans `config.root`, sorts the entries by start address, and renders them into `out`.
///
/// Nothing is written to `out` unless every entry was read and parsed.
///
/// # Errors
///
/// Returns the first listing, read, or parse failure hit while scanning, or
/// [`MemmapError::Output`] if writing the table fails.
///
/// # Returns
///
/// The number of entries rendered.
pub fn report<W: Write>(config: &Config, out: &mut W) -> Result<usize> {
    let mut map = memmap::scan(&config.root)?;
    map.sort_by_start();
    table::render(&map, &config.table, out)?;
    out.flush()?;
    Ok(map.len())
}
