// ==========================================
// QR Roster - export layout configuration
// ==========================================
// Physical page geometry and grid shape handed to the external document
// builder, plus the per-document page budget that drives part splitting.
// Defaults carry the original sheet layout: A4 portrait, 3x4 grid,
// EC level M.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::EcLevel;
use crate::error::{ExportError, ExportResult};

/// Grid and page geometry for one exported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportLayout {
    // ===== Grid shape =====
    pub columns: usize,
    pub rows: usize,

    /// Pages per document; together with the grid this bounds one part
    pub max_pages_per_pdf: usize,

    // ===== Page geometry (mm) =====
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub margin_mm: f64,
    pub gap_mm: f64,

    /// Height reserved above each QR cell for the printable header text
    pub header_block_mm: f64,

    // ===== QR raster =====
    pub qr_size_px: u32,
    pub ec_level: EcLevel,
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self {
            columns: 3,
            rows: 4,
            max_pages_per_pdf: 10,
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
            gap_mm: 4.0,
            header_block_mm: 12.0,
            qr_size_px: 256,
            ec_level: EcLevel::M,
        }
    }
}

impl ExportLayout {
    /// Items laid out on one page, row-major.
    pub fn per_page(&self) -> usize {
        self.columns * self.rows
    }

    /// Item budget for one document (one export part).
    pub fn items_per_pdf(&self) -> usize {
        self.per_page() * self.max_pages_per_pdf
    }

    /// Reject geometrically impossible layouts before any export starts.
    pub fn validate(&self) -> ExportResult<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ExportError::validation(
                "layout",
                "grid must have at least 1 column and 1 row",
            ));
        }
        if self.max_pages_per_pdf == 0 {
            return Err(ExportError::validation(
                "layout",
                "max_pages_per_pdf must be >= 1",
            ));
        }
        if self.page_width_mm <= 0.0 || self.page_height_mm <= 0.0 {
            return Err(ExportError::validation("layout", "page size must be positive"));
        }
        if self.qr_size_px == 0 {
            return Err(ExportError::validation("layout", "qr_size_px must be >= 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        let layout = ExportLayout::default();
        assert!(layout.validate().is_ok());
        assert_eq!(layout.per_page(), 12);
        assert_eq!(layout.items_per_pdf(), 120);
    }

    #[test]
    fn test_zero_grid_rejected() {
        let layout = ExportLayout {
            columns: 0,
            ..Default::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_zero_page_budget_rejected() {
        let layout = ExportLayout {
            max_pages_per_pdf: 0,
            ..Default::default()
        };
        assert!(layout.validate().is_err());
    }
}
