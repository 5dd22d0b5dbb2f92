// ==========================================
// QR Roster - CSV row normalizer
// ==========================================
// Turns tokenized roster rows into CanonicalRow records. Two independent
// paths, selected by the caller from the shape heuristic:
// - header-object path: normalized-key lookup through ordered synonym
//   lists ("pick first present" is the contract: when a sheet carries two
//   synonym columns, the earlier-declared synonym wins)
// - positional path: strict column order [group, period, headset, prefix,
//   pad], trailing fields optional
// No validation here; this layer only locates and renames fields.
// ==========================================

use std::collections::HashMap;

use crate::domain::identity::CanonicalRow;
use crate::engine::shape::normalize_label;

/// Ordered synonym keys per canonical field. Resolution tries each key in
/// declaration order and takes the first present non-empty value.
pub const GROUP_SYNONYMS: &[&str] = &["group", "group_code", "groupcode"];
pub const PERIOD_SYNONYMS: &[&str] = &["period", "per"];
pub const HEADSET_SYNONYMS: &[&str] = &[
    "headset",
    "headset_number",
    "headsetnumber",
    "headset_no",
    "headset_num",
];
pub const PREFIX_SYNONYMS: &[&str] = &["prefix"];
pub const PAD_SYNONYMS: &[&str] = &["pad", "padding", "headset_digits", "headset_pad"];

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Resolve one canonical field from a normalized-key map.
fn pick_first(map: &HashMap<String, String>, synonyms: &[&str]) -> Option<String> {
    synonyms
        .iter()
        .find_map(|key| map.get(*key).and_then(|v| non_empty(v)))
}

/// Header-object path: pair a data row with the normalized header row.
///
/// When the sheet repeats a header label, the earlier column wins.
pub fn normalize_with_header(
    header: &[String],
    row: &[String],
    row_number: usize,
) -> CanonicalRow {
    let mut map: HashMap<String, String> = HashMap::new();
    for (idx, label) in header.iter().enumerate() {
        let key = normalize_label(label);
        if key.is_empty() {
            continue;
        }
        let value = row.get(idx).cloned().unwrap_or_default();
        map.entry(key).or_insert(value);
    }

    CanonicalRow {
        group: pick_first(&map, GROUP_SYNONYMS),
        period: pick_first(&map, PERIOD_SYNONYMS),
        headset: pick_first(&map, HEADSET_SYNONYMS),
        prefix: pick_first(&map, PREFIX_SYNONYMS),
        pad: pick_first(&map, PAD_SYNONYMS),
        row_number,
    }
}

/// Positional path: [group, period, headset, prefix, pad] by index.
///
/// prefix/pad stay None when the row is shorter.
pub fn normalize_positional(row: &[String], row_number: usize) -> CanonicalRow {
    let cell = |idx: usize| row.get(idx).map(String::as_str).and_then(non_empty);

    CanonicalRow {
        group: cell(0),
        period: cell(1),
        headset: cell(2),
        prefix: cell(3),
        pad: cell(4),
        row_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_header_path_resolves_synonyms() {
        let header = cells(&["Group Code", "Per", "Headset-No", "Prefix", "Padding"]);
        let row = cells(&["0004", "3", "12", "a", "2"]);
        let canonical = normalize_with_header(&header, &row, 2);
        assert_eq!(canonical.group.as_deref(), Some("0004"));
        assert_eq!(canonical.period.as_deref(), Some("3"));
        assert_eq!(canonical.headset.as_deref(), Some("12"));
        assert_eq!(canonical.prefix.as_deref(), Some("a"));
        assert_eq!(canonical.pad.as_deref(), Some("2"));
        assert_eq!(canonical.row_number, 2);
    }

    #[test]
    fn test_header_path_first_synonym_wins() {
        // "headset" is declared before "headset_number": its column wins
        let header = cells(&["headset_number", "headset"]);
        let row = cells(&["99", "12"]);
        let canonical = normalize_with_header(&header, &row, 1);
        assert_eq!(canonical.headset.as_deref(), Some("12"));
    }

    #[test]
    fn test_header_path_skips_empty_synonym_value() {
        // "headset" column present but blank: fall through to the next key
        let header = cells(&["headset", "headset_no"]);
        let row = cells(&["", "7"]);
        let canonical = normalize_with_header(&header, &row, 1);
        assert_eq!(canonical.headset.as_deref(), Some("7"));
    }

    #[test]
    fn test_positional_path_short_row() {
        let canonical = normalize_positional(&cells(&["0001", "2", "5"]), 4);
        assert_eq!(canonical.group.as_deref(), Some("0001"));
        assert_eq!(canonical.prefix, None);
        assert_eq!(canonical.pad, None);
    }

    #[test]
    fn test_blank_cells_become_none() {
        let canonical = normalize_positional(&cells(&["  ", "", "5"]), 1);
        assert_eq!(canonical.group, None);
        assert_eq!(canonical.period, None);
        assert_eq!(canonical.headset.as_deref(), Some("5"));
    }
}
