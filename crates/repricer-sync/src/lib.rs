//! Catalog synchronization job: walks every active catalog page, reprices
//! each item and writes the new price back to its primary sellable unit.
//!
//! Page-fetch failures abort the job. Attribute and update failures are
//! confined to the item they happened on.

pub mod error;
pub mod job;
pub mod outcome;
pub mod reader;
pub mod resolver;
pub mod updater;

pub use error::{ItemError, ItemStage};
pub use job::{run_sync, JobState, SyncJob};
pub use outcome::{ItemOutcome, JobOutcome, JobStats};
