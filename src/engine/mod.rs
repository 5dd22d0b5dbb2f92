// ==========================================
// QR Roster - engine layer
// ==========================================
// Business rules: normalization, shape detection, identity composition,
// export orchestration. No rendering here; the document builder and QR
// renderer sit behind the traits in `render`.
// ==========================================

pub mod events;
pub mod exporter;
pub mod identity;
pub mod ingest;
pub mod matrix;
pub mod normalizer;
pub mod render;
pub mod shape;
pub mod text;

// Re-export the core surface
pub use events::{CollectingSink, NoOpProgressSink, ProgressEvent, ProgressSink};
pub use exporter::{ExportOrchestrator, ExportOutcome};
pub use identity::{
    build_payload, build_username, item_from_identity, item_from_master, to_int, validate,
    DEFAULT_HEADSET_PAD, PAYLOAD_VERSION,
};
pub use ingest::{ingest, tokenize, ImportReport};
pub use matrix::carry_forward;
pub use render::{DocumentBuilder, DocumentPresenter, QrImage, QrRenderer, RenderedDocument};
pub use shape::{detect_row_shape, is_probably_header_row, normalize_label, HEADER_VOCABULARY};
