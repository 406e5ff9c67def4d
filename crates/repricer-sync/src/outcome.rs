use repricer_core::ComputedPrice;
use serde::Serialize;

/// Terminal result of a job, as seen by the caller.
///
/// Per-item failures do not show up here; a job that finished paging is
/// `Done` however many items failed along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum JobOutcome {
    Done,
    Aborted { cause: String },
}

impl JobOutcome {
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, JobOutcome::Done)
    }
}

/// What happened to a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    Updated { price: ComputedPrice },
    /// The item has no sellable unit; nothing was written.
    Skipped,
    Failed,
}

/// Running counters for one job. Logged when the job ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobStats {
    pub pages_fetched: u32,
    pub items_seen: u64,
    pub updated: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl JobStats {
    pub(crate) fn record(&mut self, outcome: &ItemOutcome) {
        self.items_seen += 1;
        match outcome {
            ItemOutcome::Updated { .. } => self.updated += 1,
            ItemOutcome::Skipped => self.skipped += 1,
            ItemOutcome::Failed => self.failed += 1,
        }
    }
}
