// ==========================================
// QR Roster - domain type definitions
// ==========================================
// Enumerations shared across the engine layer.
// Serialization format: lowercase (matches the progress event wire shape
// consumed by host UIs)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Export phase
// ==========================================
// One entry per state the export orchestrator can report; the progress
// event carrying it is the orchestrator's only status channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportPhase {
    /// Job split into multiple parts, announced before any build starts
    Batching,
    /// One part's document build is about to run
    Building,
    /// Cooperative cancellation observed at a part boundary
    Cancelled,
    /// One part's document was built and handed to the presenter
    Opened,
    /// All parts complete
    Done,
}

impl ExportPhase {
    pub fn as_str(&self) -> &str {
        match self {
            ExportPhase::Batching => "batching",
            ExportPhase::Building => "building",
            ExportPhase::Cancelled => "cancelled",
            ExportPhase::Opened => "opened",
            ExportPhase::Done => "done",
        }
    }
}

impl fmt::Display for ExportPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Row shape
// ==========================================
// Output of the header-row heuristic over row 0 of a flat roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowShape {
    /// Row 0 carries recognizable column labels; consume it as a header
    HeaderDetected,
    /// No header; columns are read strictly by position
    Positional,
}

// ==========================================
// Roster shape
// ==========================================
// Which ingestion path produced an import report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterShape {
    /// Wide grid keyed by carried-forward label rows
    MasterMatrix,
    /// One row per student, header row consumed
    HeaderRows,
    /// One row per student, strictly positional columns
    PositionalRows,
}

impl fmt::Display for RosterShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterShape::MasterMatrix => write!(f, "master_matrix"),
            RosterShape::HeaderRows => write!(f, "header_rows"),
            RosterShape::PositionalRows => write!(f, "positional_rows"),
        }
    }
}

// ==========================================
// QR error correction level
// ==========================================
// Passed through to the external QR renderer; deterministic output for
// identical (payload, level, size) is part of that collaborator's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EcLevel {
    L,
    M,
    Q,
    H,
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcLevel::L => write!(f, "L"),
            EcLevel::M => write!(f, "M"),
            EcLevel::Q => write!(f, "Q"),
            EcLevel::H => write!(f, "H"),
        }
    }
}
