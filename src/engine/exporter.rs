// ==========================================
// QR Roster - export orchestrator
// ==========================================
// Drives a (possibly very large) item list through the external document
// builder in fixed-size parts.
// - parts built and presented strictly in index order
// - cancellation is advisory: polled at the start of each part and again
//   after the build, never mid-build
// - one voluntary yield after each phase so a host UI stays responsive
// - builder errors are not caught here; they propagate and the job guard
//   resets state on the way out
// ==========================================

use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::ExportLayout;
use crate::domain::identity::ExportItem;
use crate::domain::job::ExportJob;
use crate::engine::events::{ProgressEvent, ProgressSink};
use crate::engine::render::{DocumentBuilder, DocumentPresenter};
use crate::error::{ExportError, ExportResult};

// ==========================================
// ExportOutcome
// ==========================================

/// Result of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub cancelled: bool,
    /// Parts built AND presented
    pub parts_built: usize,
    pub total_parts: usize,
}

// ==========================================
// ExportOrchestrator
// ==========================================

/// Coordinates part splitting, progress reporting and cooperative
/// cancellation around the external builder/presenter pair.
pub struct ExportOrchestrator<B, P>
where
    B: DocumentBuilder,
    P: DocumentPresenter,
{
    builder: Arc<B>,
    presenter: Arc<P>,
}

impl<B, P> ExportOrchestrator<B, P>
where
    B: DocumentBuilder,
    P: DocumentPresenter,
{
    pub fn new(builder: Arc<B>, presenter: Arc<P>) -> Self {
        Self { builder, presenter }
    }

    /// Run a full export.
    ///
    /// # Arguments
    /// - items: export items, laid out in input order
    /// - layout: grid/page geometry; per_page * max_pages_per_pdf bounds
    ///   one part
    /// - title: document title; parts get "(Part i of N)" appended when
    ///   the job splits
    /// - job: caller-owned job state; rejected when already running
    /// - sink: progress event sink (the only status channel)
    ///
    /// # Errors
    /// - EmptyInput when items is empty, before any part is built
    /// - JobAlreadyRunning when another export holds the job
    /// - builder/presenter errors propagate; prior parts stay presented
    pub async fn export(
        &self,
        items: &[ExportItem],
        layout: &ExportLayout,
        title: &str,
        job: &Arc<ExportJob>,
        sink: &dyn ProgressSink,
    ) -> ExportResult<ExportOutcome> {
        let _guard = job.begin()?;
        layout.validate()?;

        if items.is_empty() {
            return Err(ExportError::EmptyInput("no items queued for export".into()));
        }

        let export_id = Uuid::new_v4().to_string();
        let items_per_pdf = layout.items_per_pdf();
        let total_parts = items.len().div_ceil(items_per_pdf);
        let total = items.len();

        info!(
            export_id = %export_id,
            items = total,
            items_per_pdf,
            total_parts,
            title,
            "export started"
        );

        if total_parts > 1 {
            sink.publish(ProgressEvent::batching(total_parts, total));
            // let the host repaint before any document building begins
            tokio::task::yield_now().await;
        }

        let mut done = 0usize;

        for (idx, slice) in items.chunks(items_per_pdf).enumerate() {
            let part = idx + 1;

            // Checkpoint 1: before this part starts
            if job.is_cancel_requested() {
                warn!(export_id = %export_id, part, done, "export cancelled before part");
                sink.publish(ProgressEvent::cancelled(part, total_parts, done, total));
                return Ok(ExportOutcome {
                    cancelled: true,
                    parts_built: done,
                    total_parts,
                });
            }

            sink.publish(ProgressEvent::building(part, total_parts, done, total));
            tokio::task::yield_now().await;

            let part_title = if total_parts > 1 {
                format!("{title} (Part {part} of {total_parts})")
            } else {
                title.to_string()
            };

            debug!(export_id = %export_id, part, items = slice.len(), "building part");
            let document = self.builder.build(slice, layout, &part_title).await?;

            // Checkpoint 2: after the build, before presenting. The build
            // itself is never interrupted mid-flight.
            if job.is_cancel_requested() {
                warn!(export_id = %export_id, part, done, "export cancelled after build");
                sink.publish(ProgressEvent::cancelled(part, total_parts, done, total));
                return Ok(ExportOutcome {
                    cancelled: true,
                    parts_built: done,
                    total_parts,
                });
            }

            self.presenter
                .present(document, &format!("{part_title}.pdf"))?;
            done += 1;

            sink.publish(ProgressEvent::opened(part, total_parts, done, total));
            tokio::task::yield_now().await;
        }

        info!(export_id = %export_id, total_parts, "export finished");
        sink.publish(ProgressEvent::done(total_parts, total));

        Ok(ExportOutcome {
            cancelled: false,
            parts_built: done,
            total_parts,
        })
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_part_count_arithmetic() {
        // ceil division over the per-document budget
        assert_eq!(100usize.div_ceil(120), 1);
        assert_eq!(120usize.div_ceil(120), 1);
        assert_eq!(121usize.div_ceil(120), 2);
        assert_eq!(360usize.div_ceil(120), 3);
    }
}
