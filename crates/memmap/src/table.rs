//! Memory map table renderer.
//!
//! Renders a [`MemoryMap`] as a header row, a dashed separator row, and one
//! row per entry:
//!
//! ```text
//! Start     End       Size (KiB)  Type
//! --------  --------  --------    --------
//! 0x0       0x9fbff   639.00      System RAM
//! ```
//!
//! Columns are elastic: each one is as wide as its widest cell plus the
//! layout padding, never narrower than the layout minimum. The last column is
//! not padded.

use std::io::{self, Write};

use crate::config::{TableLayout, defaults};
use crate::memmap::{MemoryMap, MemoryMapEntry};

/// Column titles.
pub const HEADER: [&str; COLUMNS] = ["Start", "End", "Size (KiB)", "Type"];

/// Cell contents of the separator row.
pub const SEPARATOR: &str = "--------";

const COLUMNS: usize = 4;

type Row = [String; COLUMNS];

/// Formats one entry as table cells.
///
/// Addresses are `0x`-prefixed lowercase hex, the size is in KiB with two
/// decimals, and the label is copied verbatim.
pub fn entry_cells(entry: &MemoryMapEntry) -> [String; COLUMNS] {
    [
        format!("{:#x}", entry.start()),
        format!("{:#x}", entry.end()),
        format!("{:.2}", entry.size() as f64 / defaults::KIB as f64),
        entry.kind().to_owned(),
    ]
}

fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

/// Column widths for all but the last column.
fn column_widths(rows: &[Row], layout: &TableLayout) -> [usize; COLUMNS - 1] {
    let mut widths = [layout.min_width; COLUMNS - 1];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell_width(cell) + layout.padding);
        }
    }
    widths
}

/// Writes the table for `map` to `out`, entries in their current order.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render<W: Write>(map: &MemoryMap, layout: &TableLayout, out: &mut W) -> io::Result<()> {
    let mut rows: Vec<Row> = Vec::with_capacity(map.len() + 2);
    rows.push(HEADER.map(str::to_owned));
    rows.push([SEPARATOR; COLUMNS].map(str::to_owned));
    rows.extend(map.iter().map(entry_cells));

    let [w_start, w_end, w_size] = column_widths(&rows, layout);

    for [start, end, size, kind] in &rows {
        writeln!(out, "{start:<w_start$}{end:<w_end$}{size:<w_size$}{kind}")?;
    }
    Ok(())
}

/// Renders the table for `map` into a `String`.
pub fn render_to_string(map: &MemoryMap, layout: &TableLayout) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render(map, layout, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
