//! # Table Rendering Tests
//!
//! Tests for cell formatting and elastic column alignment.

use efimmap_core::config::TableLayout;
use efimmap_core::table::{self, HEADER, SEPARATOR, entry_cells};
use efimmap_core::{MemoryMap, MemoryMapEntry};
use pretty_assertions::assert_eq;

const EMPTY_TABLE: &str = "\
Start     End       Size (KiB)  Type
--------  --------  --------    --------
";

fn render(map: &MemoryMap) -> String {
    table::render_to_string(map, &TableLayout::default())
}

#[test]
fn test_header_and_separator() {
    assert_eq!(HEADER, ["Start", "End", "Size (KiB)", "Type"]);
    assert_eq!(SEPARATOR, "--------");
}

#[test]
fn test_empty_map_renders_header_only() {
    assert_eq!(render(&MemoryMap::new()), EMPTY_TABLE);
}

#[test]
fn test_single_entry_row() {
    let map = MemoryMap::from(vec![MemoryMapEntry::new(0x1000, 0x2000, "System RAM")]);

    let expected = format!("{EMPTY_TABLE}0x1000    0x2000    4.00        System RAM\n");
    assert_eq!(render(&map), expected);
}

#[test]
fn test_rows_follow_map_order() {
    let map = MemoryMap::from(vec![
        MemoryMapEntry::new(0x5000, 0x6000, "Reserved"),
        MemoryMapEntry::new(0x1000, 0x3000, "System RAM"),
    ]);

    let out = render(&map);
    let rows: Vec<&str> = out.lines().skip(2).collect();
    assert!(rows[0].starts_with("0x5000"));
    assert!(rows[1].starts_with("0x1000"));
}

#[test]
fn test_wide_addresses_widen_columns() {
    let map = MemoryMap::from(vec![
        MemoryMapEntry::new(0, 0x9fbff, "System RAM"),
        MemoryMapEntry::new(0xffff_ffff_0000_0000, 0xffff_ffff_0fff_ffff, "Reserved"),
    ]);

    let mut expected = String::new();
    for [a, b, c, d] in [
        ["Start", "End", "Size (KiB)", "Type"],
        ["--------", "--------", "--------", "--------"],
        ["0x0", "0x9fbff", "639.00", "System RAM"],
        ["0xffffffff00000000", "0xffffffff0fffffff", "262144.00", "Reserved"],
    ] {
        expected.push_str(&format!("{a:<20}{b:<20}{c:<12}{d}\n"));
    }

    assert_eq!(render(&map), expected);
}

#[test]
fn test_custom_layout() {
    let map = MemoryMap::from(vec![MemoryMapEntry::new(0x1000, 0x2000, "System RAM")]);
    let layout = TableLayout {
        min_width: 0,
        padding: 1,
    };

    let expected = "\
Start    End      Size (KiB) Type
-------- -------- --------   --------
0x1000   0x2000   4.00       System RAM
";
    assert_eq!(table::render_to_string(&map, &layout), expected);
}

#[test]
fn test_no_trailing_whitespace() {
    let map = MemoryMap::from(vec![
        MemoryMapEntry::new(0, 0x9fbff, "System RAM"),
        MemoryMapEntry::new(0x9fc00, 0x9ffff, "Reserved"),
    ]);

    for line in render(&map).lines() {
        assert_eq!(line, line.trim_end());
    }
}

#[test]
fn test_entry_cells_formatting() {
    let cells = entry_cells(&MemoryMapEntry::new(0xABC000, 0xABC600, "ACPI Tables"));
    assert_eq!(cells, ["0xabc000", "0xabc600", "1.50", "ACPI Tables"]);

    let tiny = entry_cells(&MemoryMapEntry::new(0x10, 0x11, "Reserved"));
    assert_eq!(tiny[2], "0.00");
}

#[test]
fn test_row_count_matches_entries() {
    for n in [0u64, 1, 5, 40] {
        let map: MemoryMap = (0..n)
            .map(|i| MemoryMapEntry::new(i * 0x1000, i * 0x1000 + 0xfff, "System RAM"))
            .collect();
        assert_eq!(render(&map).lines().count() as u64, n + 2);
    }
}

#[test]
fn test_columns_align_across_rows() {
    let map = MemoryMap::from(vec![
        MemoryMapEntry::new(0, 0x9fbff, "System RAM"),
        MemoryMapEntry::new(0x100000, 0xbffdffff, "System RAM"),
        MemoryMapEntry::new(0xfeffc000, 0xfeffffff, "Reserved"),
    ]);

    let out = render(&map);
    let type_columns: Vec<usize> = out
        .lines()
        .skip(2)
        .map(|line| line.find("System RAM").or_else(|| line.find("Reserved")).unwrap())
        .collect();
    assert!(type_columns.windows(2).all(|w| w[0] == w[1]));
}
