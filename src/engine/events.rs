// ==========================================
// QR Roster - export progress events
// ==========================================
// The progress event record is the entire contract between the export
// orchestrator and any host UI; there is no other status side channel.
// The engine defines the sink trait, the host implements it.
// ==========================================

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::domain::types::ExportPhase;

// ==========================================
// ProgressEvent
// ==========================================

/// One status event from the export orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub phase: ExportPhase,
    /// 1-based index of the part this event concerns (0 for batching)
    pub part: usize,
    pub total_parts: usize,
    /// Parts completed so far
    pub done: usize,
    pub total: usize,
    pub remaining: usize,
    pub message: String,
}

impl ProgressEvent {
    pub fn batching(total_parts: usize, total: usize) -> Self {
        Self {
            phase: ExportPhase::Batching,
            part: 0,
            total_parts,
            done: 0,
            total,
            remaining: total_parts,
            message: format!("Splitting {total} codes into {total_parts} PDF files..."),
        }
    }

    pub fn building(part: usize, total_parts: usize, done: usize, total: usize) -> Self {
        Self {
            phase: ExportPhase::Building,
            part,
            total_parts,
            done,
            total,
            remaining: total_parts - done,
            message: format!("Building PDF {part} of {total_parts}..."),
        }
    }

    pub fn opened(part: usize, total_parts: usize, done: usize, total: usize) -> Self {
        Self {
            phase: ExportPhase::Opened,
            part,
            total_parts,
            done,
            total,
            remaining: total_parts - done,
            message: format!("Opened PDF {part} of {total_parts}."),
        }
    }

    pub fn cancelled(part: usize, total_parts: usize, done: usize, total: usize) -> Self {
        Self {
            phase: ExportPhase::Cancelled,
            part,
            total_parts,
            done,
            total,
            remaining: total_parts - done,
            message: format!(
                "Cancelled. {done} PDF files finished, {} skipped.",
                total_parts - done
            ),
        }
    }

    pub fn done(total_parts: usize, total: usize) -> Self {
        Self {
            phase: ExportPhase::Done,
            part: total_parts,
            total_parts,
            done: total_parts,
            total,
            remaining: 0,
            message: format!("Done. {total_parts} PDF files generated."),
        }
    }
}

// ==========================================
// Sink trait
// ==========================================

/// Progress event sink, implemented by the host UI layer.
pub trait ProgressSink: Send + Sync {
    fn publish(&self, event: ProgressEvent);
}

/// No-op sink for callers that do not surface progress (and for tests).
#[derive(Debug, Clone, Default)]
pub struct NoOpProgressSink;

impl ProgressSink for NoOpProgressSink {
    fn publish(&self, event: ProgressEvent) {
        tracing::debug!(
            phase = %event.phase,
            part = event.part,
            total_parts = event.total_parts,
            "progress event dropped (no sink configured)"
        );
    }
}

/// Collecting sink for assertions over the event sequence.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<ProgressEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().expect("sink poisoned").clone()
    }

    pub fn phases(&self) -> Vec<ExportPhase> {
        self.events().iter().map(|e| e.phase).collect()
    }
}

impl ProgressSink for CollectingSink {
    fn publish(&self, event: ProgressEvent) {
        self.events.lock().expect("sink poisoned").push(event);
    }
}
