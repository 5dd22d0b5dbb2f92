// ==========================================
// QR Roster - master-matrix extractor tests
// ==========================================
// Carry-forward semantics and grid flattening, including the spec'd
// blank-cell inheritance example.
// ==========================================

use qr_roster::engine::matrix::extract;
use qr_roster::engine::carry_forward;

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

fn cells(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

// ==========================================
// Carry-forward
// ==========================================

#[test]
fn test_carry_forward_basic() {
    assert_eq!(
        carry_forward(&cells(&["0001", "", "0002", ""])),
        vec!["0001", "0001", "0002", "0002"]
    );
}

#[test]
fn test_carry_forward_leading_blanks_stay_blank() {
    assert_eq!(carry_forward(&cells(&["", "", "x"])), vec!["", "", "x"]);
}

#[test]
fn test_carry_forward_idempotent() {
    let inputs: Vec<Vec<String>> = vec![
        cells(&[]),
        cells(&["", "", ""]),
        cells(&["a", "", "b", "", ""]),
        cells(&["", "a", "a", "", "b"]),
    ];
    for cells in inputs {
        let once = carry_forward(&cells);
        assert_eq!(carry_forward(&once), once);
    }
}

// ==========================================
// Extraction
// ==========================================

#[test]
fn test_extraction_inherits_blank_group_codes() {
    let sheet = grid(&[
        &["Group code", "0001", "", "0002"],
        &["Usernames", "alice", "bob", "carol"],
    ]);
    let entries = extract(&sheet);
    let got: Vec<(&str, &str)> = entries
        .iter()
        .map(|e| (e.group_code.as_str(), e.username.as_str()))
        .collect();
    assert_eq!(
        got,
        vec![("0001", "alice"), ("0001", "bob"), ("0002", "carol")]
    );
    // teacher/period rows absent: fields default to empty
    assert!(entries.iter().all(|e| e.teacher.is_empty() && e.period.is_empty()));
}

#[test]
fn test_extraction_multiple_username_rows() {
    let sheet = grid(&[
        &["Teacher", "Ms. Lee", "", ""],
        &["Group code", "0001", "0002", "0003"],
        &["Class periods", "1", "2", ""],
        &["Usernames", "a1", "b1", "c1"],
        &["", "a2", "", "c2"],
        &["", "", "", ""],
    ]);
    let entries = extract(&sheet);
    assert_eq!(entries.len(), 5);
    // carried periods: ["1", "2", "2"]
    assert_eq!(entries[2].period, "2");
    assert_eq!(entries[4].username, "c2");
    assert_eq!(entries[4].group_code, "0003");
    assert_eq!(entries[4].teacher, "Ms. Lee");
}

#[test]
fn test_sheet_without_usernames_row_does_not_qualify() {
    let sheet = grid(&[
        &["Group code", "0001"],
        &["0001", "alice"],
    ]);
    assert!(extract(&sheet).is_empty());
}

#[test]
fn test_sheet_without_group_code_row_does_not_qualify() {
    let sheet = grid(&[
        &["Teacher", "Ms. Lee"],
        &["Class periods", "1"],
        &["Usernames", "alice"],
    ]);
    assert!(extract(&sheet).is_empty());
}

#[test]
fn test_label_matching_is_case_and_hyphen_insensitive() {
    let sheet = grid(&[
        &["GROUP-CODE", "0001"],
        &["usernames", "alice"],
    ]);
    let entries = extract(&sheet);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].username, "alice");
}

#[test]
fn test_username_beyond_group_range_skipped() {
    let sheet = grid(&[
        &["Group code", "0001"],
        &["Usernames", "alice", "stray"],
    ]);
    let entries = extract(&sheet);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].username, "alice");
}
