// ==========================================
// QR Roster - core library
// ==========================================
// Headset login QR sheet generation: CSV roster shape detection +
// normalization + master-matrix extraction, and batched PDF export
// orchestration with cooperative cancellation.
// QR symbol rendering and PDF construction are external collaborators
// behind the traits in engine::render.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and shared types
pub mod domain;

// Engine layer - business rules
pub mod engine;

// Configuration layer - export layout and ingestion defaults
pub mod config;

// Error types
pub mod error;

// Logging
pub mod logging;

// ==========================================
// Re-export the core surface
// ==========================================

// Domain types
pub use domain::{
    CanonicalRow, EcLevel, ExportItem, ExportJob, ExportPhase, IdentityInput, JobGuard,
    MasterUsernameEntry, RosterShape, RowFailure, RowShape,
};

// Engine
pub use engine::{
    build_payload, build_username, ingest, tokenize, CollectingSink, DocumentBuilder,
    DocumentPresenter, ExportOrchestrator, ExportOutcome, ImportReport, NoOpProgressSink,
    ProgressEvent, ProgressSink, QrImage, QrRenderer, RenderedDocument,
};

// Configuration
pub use config::{ExportLayout, IngestDefaults};

// Errors
pub use error::{ExportError, ExportResult};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "QR Roster";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
