// ==========================================
// QR Roster - export job state
// ==========================================
// One process-wide job at a time. The pair of flags is the entire
// concurrency contract: `running` rejects overlapping starts,
// `cancel_requested` is advisory and polled at part boundaries only.
// The caller (a UI layer) owns the instance and may flip
// cancel_requested from another thread while the orchestrator runs.
// ==========================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{ExportError, ExportResult};

/// Shared export job state.
///
/// Lifecycle: created idle; `begin()` marks it running (or rejects if it
/// already is); the returned guard resets both flags when dropped, on
/// every exit path.
#[derive(Debug, Default)]
pub struct ExportJob {
    running: AtomicBool,
    cancel_requested: AtomicBool,
}

impl ExportJob {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Mark the job running.
    ///
    /// # Errors
    /// `JobAlreadyRunning` when another export holds the job. Requests to
    /// start while running are rejected, never queued.
    pub fn begin(self: &Arc<Self>) -> ExportResult<JobGuard> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(ExportError::JobAlreadyRunning);
        }
        self.cancel_requested.store(false, Ordering::SeqCst);
        Ok(JobGuard {
            job: Arc::clone(self),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request cooperative cancellation. No effect on an in-flight
    /// document build; observed at the next part boundary.
    pub fn request_cancel(&self) {
        self.cancel_requested.store(true, Ordering::SeqCst);
    }

    pub fn is_cancel_requested(&self) -> bool {
        self.cancel_requested.load(Ordering::SeqCst)
    }
}

/// RAII reset of the job flags.
///
/// Dropping the guard returns the job to idle regardless of success,
/// failure, or cancellation.
#[derive(Debug)]
pub struct JobGuard {
    job: Arc<ExportJob>,
}

impl Drop for JobGuard {
    fn drop(&mut self) {
        self.job.cancel_requested.store(false, Ordering::SeqCst);
        self.job.running.store(false, Ordering::SeqCst);
    }
}
