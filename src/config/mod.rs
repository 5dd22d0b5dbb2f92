// ==========================================
// QR Roster - configuration layer
// ==========================================
// Export layout and ingestion defaults. Everything here is plain data
// owned by the caller; the engine never mutates configuration.
// ==========================================

pub mod layout;

pub use layout::ExportLayout;

use serde::{Deserialize, Serialize};

/// Form-level fallbacks applied to a roster row before validation.
///
/// The manual form and the bulk CSV form share these: a row that omits
/// prefix or pad inherits the form's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestDefaults {
    pub prefix: Option<String>,
    pub pad: Option<String>,
}
