// ==========================================
// QR Roster - domain layer
// ==========================================
// Entities and shared types. No business rules here; the engine layer
// owns normalization, validation and orchestration.
// ==========================================

pub mod identity;
pub mod job;
pub mod types;

pub use identity::{CanonicalRow, ExportItem, IdentityInput, MasterUsernameEntry, RowFailure};
pub use job::{ExportJob, JobGuard};
pub use types::{EcLevel, ExportPhase, RosterShape, RowShape};
