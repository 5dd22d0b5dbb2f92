// ==========================================
// QR Roster - external rendering collaborators
// ==========================================
// Trait seams for the work this crate does not own: QR symbol rendering,
// PDF document construction, and presenting a finished document to the
// user. The engine layer defines the traits; hosts supply adapters over
// their rendering stack.
// ==========================================

use async_trait::async_trait;

use crate::config::ExportLayout;
use crate::domain::identity::ExportItem;
use crate::domain::types::EcLevel;
use crate::error::ExportResult;

// ==========================================
// QR renderer
// ==========================================

/// Raster output of the QR renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    pub width_px: u32,
    pub height_px: u32,
    pub pixels: Vec<u8>,
}

/// Renders one payload string into a scannable image.
///
/// Contract: deterministic for identical (payload, ec_level, size_px).
pub trait QrRenderer: Send + Sync {
    fn render(&self, payload: &str, ec_level: EcLevel, size_px: u32) -> ExportResult<QrImage>;
}

// ==========================================
// Document builder / presenter
// ==========================================

/// Opaque handle to a finished document.
pub trait RenderedDocument: Send {
    /// Persist under the given filename.
    fn save(&self, filename: &str) -> ExportResult<()>;

    /// Blob-equivalent raw bytes.
    fn to_bytes(&self) -> ExportResult<Vec<u8>>;
}

/// Builds one multi-page document from an ordered item slice.
///
/// Items are laid out in input order, row-major into the page grid. The
/// orchestrator never interrupts a build in flight; cancellation is
/// observed only between parts. Implementations should yield every few
/// items so a host UI stays responsive during long builds.
#[async_trait]
pub trait DocumentBuilder: Send + Sync {
    async fn build(
        &self,
        items: &[ExportItem],
        layout: &ExportLayout,
        title: &str,
    ) -> ExportResult<Box<dyn RenderedDocument>>;
}

/// Hands a finished document to the user (save dialog, open tab, ...).
pub trait DocumentPresenter: Send + Sync {
    fn present(&self, document: Box<dyn RenderedDocument>, suggested_filename: &str)
        -> ExportResult<()>;
}
