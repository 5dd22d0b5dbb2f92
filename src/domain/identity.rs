// ==========================================
// QR Roster - identity domain model
// ==========================================
// Record shapes along the roster pipeline:
//   raw cells -> CanonicalRow -> IdentityInput -> ExportItem
// CanonicalRow holds raw strings only; numeric coercion happens in the
// identity builder, never earlier.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// CanonicalRow - post-normalization, pre-validation
// ==========================================
// Produced by the CSV normalizer from either the header-object or the
// positional path. All fields raw; None means the source cell was absent
// or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRow {
    pub group: Option<String>,
    pub period: Option<String>,
    pub headset: Option<String>,
    pub prefix: Option<String>,
    pub pad: Option<String>,

    /// 1-based row number in the source sheet, for diagnostics
    pub row_number: usize,
}

impl CanonicalRow {
    /// A row is usable iff at least one of group/period/headset carries a
    /// non-empty value. Unusable rows are dropped before validation and
    /// never count toward ok/failed totals.
    pub fn is_usable(&self) -> bool {
        [&self.group, &self.period, &self.headset]
            .iter()
            .any(|f| f.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }
}

// ==========================================
// MasterUsernameEntry - master-matrix output
// ==========================================
// One entry per non-empty username cell in the grid. group_code and
// username are required non-empty; teacher/period default to "" when
// their label rows are absent from the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterUsernameEntry {
    pub group_code: String,
    pub username: String,
    pub teacher: String,
    pub period: String,
}

// ==========================================
// IdentityInput - validated, ready to render
// ==========================================
// Invariants:
// - username == "{prefix}.{headset_number zero-padded to headset_pad}"
// - payload is the compact JSON {"version":"1.0","username":..,"groupcode":..}
//   with groupcode kept as a string (leading zeros intact)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityInput {
    pub group_code: String,
    pub period: u32,
    pub headset_number: u32,
    pub prefix: String,
    pub headset_pad: usize,
    pub username: String,
    pub payload: String,
}

// ==========================================
// ExportItem - unit consumed by the document builder
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportItem {
    pub payload: String,
    pub group_code: String,
    pub username: String,
    pub teacher: Option<String>,
    pub period: Option<String>,
}

// ==========================================
// RowFailure - per-row validation failure in bulk mode
// ==========================================
// Caught locally, counted, never stops the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFailure {
    pub row_number: usize,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_row_is_not_usable() {
        let row = CanonicalRow {
            prefix: Some("a".into()),
            pad: Some("2".into()),
            row_number: 3,
            ..Default::default()
        };
        // prefix/pad alone do not make a row usable
        assert!(!row.is_usable());
    }

    #[test]
    fn test_whitespace_only_fields_are_not_usable() {
        let row = CanonicalRow {
            group: Some("   ".into()),
            period: Some("".into()),
            ..Default::default()
        };
        assert!(!row.is_usable());
    }

    #[test]
    fn test_single_populated_field_is_usable() {
        let row = CanonicalRow {
            headset: Some("12".into()),
            ..Default::default()
        };
        assert!(row.is_usable());
    }
}
