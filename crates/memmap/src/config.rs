//! Configuration for the memory map reader.
//!
//! This module defines the configuration structures used to parameterize the
//! reader. It provides:
//! 1. **Defaults:** The sysfs root and table layout constants.
//! 2. **Structures:** The root path and the table layout.
//!
//! The CLI always runs with `Config::default()`, so the sysfs root is fixed at
//! build time. Tests and embedders may point `root` at any directory laid out
//! the same way, or deserialize a config from JSON.

use std::path::PathBuf;

use serde::Deserialize;

/// Default configuration constants.
pub mod defaults {
    /// Directory where Linux exposes the firmware-provided memory map
    /// (one numbered subdirectory per entry).
    pub const MEMMAP_ROOT: &str = "/sys/firmware/memmap";

    /// Bytes per KiB for the size column.
    pub const KIB: u64 = 1024;

    /// Minimum rendered width of each column, padding included.
    pub const MIN_COLUMN_WIDTH: usize = 10;

    /// Spaces added after the widest cell in a column.
    pub const COLUMN_PADDING: usize = 2;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use efimmap_core::config::Config;
///
/// let json = r#"{ "root": "/tmp/memmap", "table": { "padding": 4 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.root.to_str(), Some("/tmp/memmap"));
/// assert_eq!(config.table.padding, 4);
/// assert_eq!(config.table.min_width, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Directory holding one subdirectory per memory map entry.
    #[serde(default = "Config::default_root")]
    pub root: PathBuf,

    /// Column layout of the rendered table.
    #[serde(default)]
    pub table: TableLayout,
}

impl Config {
    fn default_root() -> PathBuf {
        PathBuf::from(defaults::MEMMAP_ROOT)
    }

    /// Builds a default configuration that reads from `root` instead of sysfs.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Deserializes a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `json` is malformed or has wrongly typed fields.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            table: TableLayout::default(),
        }
    }
}

/// Column layout for the table renderer.
///
/// Each column is `max(min_width, widest cell + padding)` characters wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TableLayout {
    /// Minimum column width, padding included.
    #[serde(default = "TableLayout::default_min_width")]
    pub min_width: usize,

    /// Blank characters after the widest cell.
    #[serde(default = "TableLayout::default_padding")]
    pub padding: usize,
}

impl TableLayout {
    const fn default_min_width() -> usize {
        defaults::MIN_COLUMN_WIDTH
    }

    const fn default_padding() -> usize {
        defaults::COLUMN_PADDING
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            min_width: defaults::MIN_COLUMN_WIDTH,
            padding: defaults::COLUMN_PADDING,
        }
    }
}
