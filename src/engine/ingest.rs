// ==========================================
// QR Roster - bulk roster ingestion
// ==========================================
// End-to-end bulk path: raw CSV text -> tokenized rows -> shape routing
// (master matrix, header rows, or positional rows) -> per-row validation
// with ok/failed accounting -> export items.
// Per-row validation failures are caught, counted and never stop the
// batch; tokenizer failures abort the whole import.
// ==========================================

use tracing::{debug, info};

use crate::config::IngestDefaults;
use crate::domain::identity::{ExportItem, RowFailure};
use crate::domain::types::{RosterShape, RowShape};
use crate::engine::identity::{item_from_identity, item_from_master, validate};
use crate::engine::matrix;
use crate::engine::normalizer::{normalize_positional, normalize_with_header};
use crate::engine::shape::detect_row_shape;
use crate::error::{ExportError, ExportResult};

/// Yield to the host runtime every this many processed rows.
/// Responsiveness only, not correctness.
const YIELD_EVERY_ROWS: usize = 200;

// ==========================================
// ImportReport
// ==========================================

/// Outcome of one bulk import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub items: Vec<ExportItem>,
    pub failures: Vec<RowFailure>,
    /// Rows with no recognizable field, dropped before validation.
    /// Counted here for observability; they are in neither total.
    pub skipped_blank: usize,
    pub shape: RosterShape,
}

impl ImportReport {
    /// Cumulative human-readable status line.
    pub fn summary(&self) -> String {
        format!(
            "Done. {} generated, {} failed.",
            self.items.len(),
            self.failures.len()
        )
    }
}

// ==========================================
// Tokenizer
// ==========================================

/// Tokenize raw roster text into rows of cells.
///
/// Rows whose cells are all blank are dropped greedily: consecutive and
/// trailing blank lines collapse instead of producing empty rows.
pub fn tokenize(text: &str) -> ExportResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let cells: Vec<String> = record.iter().map(|c| c.to_string()).collect();
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        rows.push(cells);
    }
    Ok(rows)
}

// ==========================================
// Ingestion pipeline
// ==========================================

/// Ingest a roster from raw CSV text.
///
/// # Routing
/// 1. master-matrix extraction; a non-empty result wins
/// 2. otherwise the header heuristic over row 0 picks header-object or
///    positional normalization
///
/// # Errors
/// - Parse: tokenizer failure, aborts the import
/// - EmptyInput: zero rows, or zero usable rows after normalization
pub async fn ingest(text: &str, defaults: &IngestDefaults) -> ExportResult<ImportReport> {
    let rows = tokenize(text)?;
    if rows.is_empty() {
        return Err(ExportError::EmptyInput("roster contained no rows".into()));
    }

    // Master-matrix path first: the grid shape has no header row to detect
    let entries = matrix::extract(&rows);
    if !entries.is_empty() {
        let items: Vec<ExportItem> = entries.iter().map(item_from_master).collect();
        info!(items = items.len(), "ingested master-matrix roster");
        return Ok(ImportReport {
            items,
            failures: Vec::new(),
            skipped_blank: 0,
            shape: RosterShape::MasterMatrix,
        });
    }

    let (shape, header, data_start) = match detect_row_shape(&rows[0]) {
        RowShape::HeaderDetected => (RosterShape::HeaderRows, Some(&rows[0]), 1),
        RowShape::Positional => (RosterShape::PositionalRows, None, 0),
    };

    let mut items = Vec::new();
    let mut failures = Vec::new();
    let mut skipped_blank = 0usize;

    for (idx, row) in rows.iter().enumerate().skip(data_start) {
        let row_number = idx + 1;
        let canonical = match header {
            Some(h) => normalize_with_header(h, row, row_number),
            None => normalize_positional(row, row_number),
        };

        if !canonical.is_usable() {
            skipped_blank += 1;
            continue;
        }

        match validate(&canonical, defaults) {
            Ok(input) => items.push(item_from_identity(&input)),
            Err(err) if err.is_row_level() => failures.push(RowFailure {
                row_number,
                message: err.to_string(),
            }),
            Err(err) => return Err(err),
        }

        let processed = idx + 1 - data_start;
        if processed % YIELD_EVERY_ROWS == 0 {
            debug!(processed, ok = items.len(), failed = failures.len(), "ingest progress");
            tokio::task::yield_now().await;
        }
    }

    if items.is_empty() && failures.is_empty() {
        return Err(ExportError::EmptyInput(
            "no usable rows after normalization".into(),
        ));
    }

    info!(
        shape = %shape,
        ok = items.len(),
        failed = failures.len(),
        skipped_blank,
        "ingest complete"
    );

    Ok(ImportReport {
        items,
        failures,
        skipped_blank,
        shape,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_blank_lines_greedily() {
        let rows = tokenize("a,b\n\n\nc,d\n\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "b"]);
        assert_eq!(rows[1], vec!["c", "d"]);
    }

    #[test]
    fn test_tokenize_keeps_ragged_rows() {
        let rows = tokenize("a,b,c\nd\n").unwrap();
        assert_eq!(rows[1], vec!["d"]);
    }

    #[tokio::test]
    async fn test_ingest_empty_text_is_empty_input() {
        let err = ingest("", &IngestDefaults::default()).await.unwrap_err();
        assert!(matches!(err, ExportError::EmptyInput(_)));
    }

    #[tokio::test]
    async fn test_summary_message_format() {
        let report = ingest(
            "group,period,headset,prefix\n0001,1,5,a\n0002,zero,6,a\n",
            &IngestDefaults::default(),
        )
        .await
        .unwrap();
        assert_eq!(report.summary(), "Done. 1 generated, 1 failed.");
    }
}
