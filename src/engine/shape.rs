// ==========================================
// QR Roster - roster shape detection
// ==========================================
// Heuristic: is row 0 a header row? A roster with >= 2 recognizable
// column labels is assumed to carry a header; otherwise rows are read
// strictly positionally. The vocabulary is data, not control flow, so
// new synonyms extend the set without touching the detection loop.
// ==========================================

use crate::domain::types::RowShape;

/// Column-name synonyms recognized as header labels.
pub const HEADER_VOCABULARY: &[&str] = &[
    // group
    "group",
    "group_code",
    "groupcode",
    // period
    "period",
    "per",
    // headset
    "headset",
    "headset_number",
    "headsetnumber",
    "headset_no",
    "headset_num",
    // prefix
    "prefix",
    // pad
    "pad",
    "padding",
    "headset_digits",
    "headset_pad",
];

/// Minimum distinct label hits for a row to count as a header.
pub const HEADER_HIT_THRESHOLD: usize = 2;

/// Normalize a cell for label comparison: trim, lowercase, collapse runs
/// of whitespace or hyphens into a single underscore.
pub fn normalize_label(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_separator = false;
    for c in s.trim().chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            if !in_separator && !out.is_empty() {
                out.push('_');
            }
            in_separator = true;
        } else {
            for lc in c.to_lowercase() {
                out.push(lc);
            }
            in_separator = false;
        }
    }
    // A trailing separator run leaves a dangling underscore
    if out.ends_with('_') {
        out.pop();
    }
    out
}

/// Count distinct vocabulary hits in a row.
///
/// Case/space/hyphen variants of the same label count as one hit, so
/// "Group-Code" and "group code" in the same row contribute 1, not 2.
fn count_header_hits(row: &[String]) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for cell in row {
        let normalized = normalize_label(cell);
        if let Some(hit) = HEADER_VOCABULARY
            .iter()
            .find(|label| **label == normalized)
        {
            if !seen.contains(hit) {
                seen.push(hit);
            }
        }
    }
    seen.len()
}

/// Classify row 0 of a flat roster.
pub fn detect_row_shape(first_row: &[String]) -> RowShape {
    if count_header_hits(first_row) >= HEADER_HIT_THRESHOLD {
        RowShape::HeaderDetected
    } else {
        RowShape::Positional
    }
}

/// Boolean form of the heuristic.
pub fn is_probably_header_row(row: &[String]) -> bool {
    detect_row_shape(row) == RowShape::HeaderDetected
}
