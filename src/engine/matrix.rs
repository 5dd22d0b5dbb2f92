// ==========================================
// QR Roster - master-matrix extractor
// ==========================================
// Detects and flattens the wide grid-roster shape: label rows (teacher /
// group_code / class_periods / usernames) whose data cells start at
// column 1, with carry-forward encoding merged-cell semantics, followed
// by a grid of username cells.
// ==========================================

use tracing::debug;

use crate::domain::identity::MasterUsernameEntry;
use crate::engine::shape::normalize_label;

// Label row markers, matched against the normalized column-0 cell.
const LABEL_TEACHER: &str = "teacher";
const LABEL_GROUP_CODE: &str = "group_code";
const LABEL_CLASS_PERIODS: &str = "class_periods";
const LABEL_USERNAMES: &str = "usernames";

/// Row indices of the recognized label rows. teacher/class_periods are
/// optional; the sheet qualifies only when group_code and usernames are
/// both present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LabelRows {
    teacher: Option<usize>,
    group_code: Option<usize>,
    class_periods: Option<usize>,
    usernames: Option<usize>,
}

impl LabelRows {
    fn all_found(&self) -> bool {
        self.teacher.is_some()
            && self.group_code.is_some()
            && self.class_periods.is_some()
            && self.usernames.is_some()
    }
}

/// Single top-to-bottom scan for label rows; first occurrence wins, early
/// exit once all four are seen.
fn scan_label_rows(grid: &[Vec<String>]) -> LabelRows {
    let mut labels = LabelRows::default();
    for (idx, row) in grid.iter().enumerate() {
        let first = row.first().map(String::as_str).unwrap_or("");
        match normalize_label(first).as_str() {
            LABEL_TEACHER => labels.teacher.get_or_insert(idx),
            LABEL_GROUP_CODE => labels.group_code.get_or_insert(idx),
            LABEL_CLASS_PERIODS => labels.class_periods.get_or_insert(idx),
            LABEL_USERNAMES => labels.usernames.get_or_insert(idx),
            _ => continue,
        };
        if labels.all_found() {
            break;
        }
    }
    labels
}

/// Carry-forward: scanning left to right, a blank cell inherits the
/// nearest preceding non-blank value. Idempotent.
pub fn carry_forward(cells: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(cells.len());
    let mut last = String::new();
    for cell in cells {
        let trimmed = cell.trim();
        if !trimmed.is_empty() {
            last = trimmed.to_string();
        }
        out.push(last.clone());
    }
    out
}

/// Label-row data cells: everything from column 1 onward (column 0 holds
/// the label), carried forward.
fn carried_label_cells(grid: &[Vec<String>], row_idx: Option<usize>) -> Vec<String> {
    match row_idx {
        Some(idx) => carry_forward(&grid[idx][1..]),
        None => Vec::new(),
    }
}

/// Flatten a master-matrix sheet into per-username entries.
///
/// Returns an empty vec when the sheet does not qualify (no group_code or
/// no usernames label row); falling back to the row-per-user path is the
/// caller's responsibility.
///
/// # Edge cases
/// - a username cell beyond the carried group-code range, or over a blank
///   carried group code, is silently skipped
/// - trailing blank rows contribute nothing; there is no terminator row
pub fn extract(grid: &[Vec<String>]) -> Vec<MasterUsernameEntry> {
    let labels = scan_label_rows(grid);
    let (Some(group_code_row), Some(usernames_row)) = (labels.group_code, labels.usernames)
    else {
        return Vec::new();
    };

    let teachers = carried_label_cells(grid, labels.teacher);
    let group_codes = carried_label_cells(grid, Some(group_code_row));
    let periods = carried_label_cells(grid, labels.class_periods);

    let mut entries = Vec::new();

    for row in grid.iter().skip(usernames_row + 1) {
        // Username cells line up with the label data cells (column 1..)
        for (col, cell) in row.iter().skip(1).enumerate() {
            let username = cell.trim();
            if username.is_empty() {
                continue;
            }
            let group_code = match group_codes.get(col) {
                Some(code) if !code.is_empty() => code.clone(),
                _ => continue, // username without a group code: skip
            };
            entries.push(MasterUsernameEntry {
                group_code,
                username: username.to_string(),
                teacher: teachers.get(col).cloned().unwrap_or_default(),
                period: periods.get(col).cloned().unwrap_or_default(),
            });
        }
    }

    debug!(
        entries = entries.len(),
        has_teacher_row = labels.teacher.is_some(),
        has_periods_row = labels.class_periods.is_some(),
        "master matrix extracted"
    );

    entries
}
