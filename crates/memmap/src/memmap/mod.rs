//! Firmware memory map records.
//!
//! This module holds the in-memory side of the reader:
//! 1. **Entries:** [`MemoryMapEntry`], one firmware-reported region.
//! 2. **Collection:** [`MemoryMap`], the owned, sortable list of entries.
//! 3. **Reader:** [`read_entry`] turns one entry directory into a record.
//! 4. **Scanner:** [`scan`] walks the root and reads every entry directory.

/// Per-entry attribute reader.
pub mod reader;

/// Root directory scanner.
pub mod scanner;

pub use reader::read_entry;
pub use scanner::scan;

/// One firmware-reported physical memory region.
///
/// `end` is kept exactly as the firmware wrote it; its inclusive or exclusive
/// meaning is the platform's. `size` is computed once as `end - start` with
/// wrapping arithmetic, so an `end` below `start` yields a huge size rather
/// than a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryMapEntry {
    start: u64,
    end: u64,
    size: u64,
    kind: String,
}

impl MemoryMapEntry {
    /// Creates an entry and derives its size.
    ///
    /// # Arguments
    ///
    /// * `start` - First address of the region.
    /// * `end` - Raw end address as reported by the firmware.
    /// * `kind` - Usage label, e.g. `"System RAM"` or `"Reserved"`.
    pub fn new(start: u64, end: u64, kind: impl Into<String>) -> Self {
        Self {
            start,
            end,
            size: end.wrapping_sub(start),
            kind: kind.into(),
        }
    }

    /// Start address.
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// Raw end address.
    pub const fn end(&self) -> u64 {
        self.end
    }

    /// `end - start`, wrapping.
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Usage label, verbatim.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// True when `end` is below `start` and `size` has wrapped.
    pub const fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

/// Ordered collection of memory map entries.
///
/// Entries stay in the order they were pushed until [`MemoryMap::sort_by_start`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryMap {
    entries: Vec<MemoryMapEntry>,
}

impl MemoryMap {
    /// Creates an empty map.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: MemoryMapEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries were collected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in their current order.
    pub fn entries(&self) -> &[MemoryMapEntry] {
        &self.entries
    }

    /// Iterates over entries in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, MemoryMapEntry> {
        self.entries.iter()
    }

    /// Stable sort by ascending start address.
    ///
    /// Entries sharing a start address keep their discovery order.
    pub fn sort_by_start(&mut self) {
        self.entries.sort_by_key(MemoryMapEntry::start);
    }

    /// Consumes the map and returns its entries.
    pub fn into_entries(self) -> Vec<MemoryMapEntry> {
        self.entries
    }
}

impl From<Vec<MemoryMapEntry>> for MemoryMap {
    fn from(entries: Vec<MemoryMapEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<MemoryMapEntry> for MemoryMap {
    fn from_iter<I: IntoIterator<Item = MemoryMapEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MemoryMap {
    type Item = &'a MemoryMapEntry;
    type IntoIter = std::slice::Iter<'a, MemoryMapEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
