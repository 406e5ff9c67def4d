//! The sync job as an explicit state machine.
//!
//! ```text
//! Idle ─► Paging(1) ─► Processing(1, items…) ─► Paging(2) ─► … ─► Done
//!             │                                     │
//!             └──────────── fetch error ────────────┴─► Aborted
//! ```
//!
//! Each call to [`SyncJob::step`] performs exactly one transition, and every
//! outbound call is awaited before the next one is issued. Inside
//! `Processing`, one step handles one item: resolve its attributes, compute
//! its price, then write the price to its primary unit.

use std::collections::VecDeque;

use repricer_core::{compute_price, CatalogStore, ComputedPrice, Item, RateParameters};

use crate::error::{ItemError, ItemStage};
use crate::outcome::{ItemOutcome, JobOutcome, JobStats};
use crate::reader::next_page;
use crate::resolver::resolve_attributes;
use crate::updater::update_price;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    Idle,
    /// About to fetch `page`.
    Paging { page: u32 },
    /// Working through the items of `page`; `pending` holds the ones not yet handled.
    Processing { page: u32, pending: VecDeque<Item> },
    Done,
    Aborted { cause: String },
}

impl JobState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Done | JobState::Aborted { .. })
    }
}

/// One end-to-end repricing run against a catalog store.
///
/// Rates are fixed at construction and cannot change while the job runs.
pub struct SyncJob<'a, S> {
    store: &'a S,
    rates: RateParameters,
    state: JobState,
    stats: JobStats,
}

impl<'a, S> SyncJob<'a, S>
where
    S: CatalogStore + Sync,
{
    #[must_use]
    pub fn new(store: &'a S, rates: RateParameters) -> Self {
        Self {
            store,
            rates,
            state: JobState::Idle,
            stats: JobStats::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &JobState {
        &self.state
    }

    #[must_use]
    pub fn stats(&self) -> JobStats {
        self.stats
    }

    /// Performs one state transition and returns the new state.
    ///
    /// Stepping a job that is already `Done` or `Aborted` is a no-op.
    pub async fn step(&mut self) -> &JobState {
        let current = std::mem::replace(&mut self.state, JobState::Idle);
        self.state = match current {
            JobState::Idle => {
                tracing::info!(
                    material_rate = %self.rates.material_rate,
                    labor_rate = %self.rates.labor_rate,
                    tax_rate_percent = %self.rates.tax_rate_percent,
                    "starting catalog price sync"
                );
                JobState::Paging { page: 1 }
            }
            JobState::Paging { page } => self.fetch(page).await,
            JobState::Processing { page, mut pending } => match pending.pop_front() {
                Some(item) => {
                    let outcome = self.process_item(&item).await;
                    self.stats.record(&outcome);
                    JobState::Processing { page, pending }
                }
                None => match page.checked_add(1) {
                    Some(next) => JobState::Paging { page: next },
                    None => JobState::Aborted {
                        cause: format!("page index overflow after page {page}"),
                    },
                },
            },
            terminal @ (JobState::Done | JobState::Aborted { .. }) => terminal,
        };
        &self.state
    }

    /// Drives the job to `Done` or `Aborted` and reports the outcome.
    pub async fn run(mut self) -> JobOutcome {
        while !self.state.is_terminal() {
            self.step().await;
        }
        self.finish()
    }

    async fn fetch(&mut self, page: u32) -> JobState {
        match next_page(self.store, page).await {
            Ok(fetched) if fetched.is_empty() => JobState::Done,
            Ok(fetched) => {
                self.stats.pages_fetched += 1;
                JobState::Processing {
                    page,
                    pending: fetched.items.into(),
                }
            }
            Err(e) => {
                tracing::error!(page, error = %e, "catalog page fetch failed; aborting sync");
                JobState::Aborted {
                    cause: e.to_string(),
                }
            }
        }
    }

    async fn process_item(&self, item: &Item) -> ItemOutcome {
        match self.reprice(item).await {
            Ok(Some(price)) => {
                tracing::info!(
                    item_id = %item.id,
                    title = %item.title,
                    price = %price,
                    "updated item price"
                );
                ItemOutcome::Updated { price }
            }
            Ok(None) => {
                tracing::debug!(
                    item_id = %item.id,
                    title = %item.title,
                    "item has no sellable unit; skipping"
                );
                ItemOutcome::Skipped
            }
            Err(err) => {
                tracing::error!(
                    item_id = %item.id,
                    title = %item.title,
                    stage = %err.stage,
                    error = %err.source,
                    "failed to reprice item"
                );
                ItemOutcome::Failed
            }
        }
    }

    /// Resolve, compute, update. `Ok(None)` means the item had no unit to write to.
    async fn reprice(&self, item: &Item) -> Result<Option<ComputedPrice>, ItemError> {
        let attributes = resolve_attributes(self.store, item.id)
            .await
            .map_err(|e| ItemError::new(item.id, ItemStage::Resolving, e))?;

        let price = compute_price(&attributes, &self.rates);
        tracing::trace!(
            item_id = %item.id,
            price = %price.exact(),
            "computed price"
        );

        let Some(unit) = item.primary_unit() else {
            return Ok(None);
        };

        update_price(self.store, unit, price)
            .await
            .map_err(|e| ItemError::new(item.id, ItemStage::Updating, e))?;
        Ok(Some(price))
    }

    fn finish(self) -> JobOutcome {
        let JobStats {
            pages_fetched,
            items_seen,
            updated,
            skipped,
            failed,
        } = self.stats;

        match self.state {
            JobState::Aborted { cause } => {
                tracing::error!(
                    pages_fetched,
                    items_seen,
                    updated,
                    skipped,
                    failed,
                    cause = %cause,
                    "catalog price sync aborted"
                );
                JobOutcome::Aborted { cause }
            }
            _ => {
                if failed > 0 {
                    tracing::warn!(failed, items_seen, "some items failed to reprice");
                }
                tracing::info!(
                    pages_fetched,
                    items_seen,
                    updated,
                    skipped,
                    failed,
                    "catalog price sync complete"
                );
                JobOutcome::Done
            }
        }
    }
}

/// Runs one complete job against `store` with `rates`.
pub async fn run_sync<S>(store: &S, rates: RateParameters) -> JobOutcome
where
    S: CatalogStore + Sync,
{
    SyncJob::new(store, rates).run().await
}
