// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler: ticks the work-item, revision, and spec pollers at their
//! configured intervals. Work items poll on a coarser cadence than
//! revisions/specs, so each runs its own `tokio::time::interval` rather than
//! sharing a single tick.

use crate::{revision_poller, spec_poller, work_item_poller};
use decree_adapters::provider::{RevisionProvider, SpecProvider, WorkItemProvider};
use decree_engine::{EventLoopHandle, RetryPolicy, StateStore};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy)]
pub struct PollIntervals {
    pub work_items: Duration,
    pub revisions_and_specs: Duration,
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self { work_items: Duration::from_secs(30), revisions_and_specs: Duration::from_secs(5) }
    }
}

pub struct Scheduler {
    store: StateStore,
    work_items: Arc<dyn WorkItemProvider>,
    revisions: Arc<dyn RevisionProvider>,
    specs: Arc<dyn SpecProvider>,
    handle: EventLoopHandle,
    retry_policy: RetryPolicy,
    intervals: PollIntervals,
}

impl Scheduler {
    pub fn new(
        store: StateStore,
        work_items: Arc<dyn WorkItemProvider>,
        revisions: Arc<dyn RevisionProvider>,
        specs: Arc<dyn SpecProvider>,
        handle: EventLoopHandle,
        retry_policy: RetryPolicy,
        intervals: PollIntervals,
    ) -> Self {
        Self { store, work_items, revisions, specs, handle, retry_policy, intervals }
    }

    /// Runs each poller once, synchronously, in the order work items then
    /// revisions then specs. Used at startup so the first engine
    /// state is coherent before the periodic loop begins.
    pub async fn poll_all_once(&self) {
        work_item_poller::poll_once(&self.store, self.work_items.as_ref(), &self.retry_policy, &self.handle).await;
        revision_poller::poll_once(&self.store, self.revisions.as_ref(), &self.retry_policy, &self.handle).await;
        spec_poller::poll_once(&self.store, self.specs.as_ref(), &self.retry_policy, &self.handle).await;
    }

    /// Runs forever until `shutdown` fires, ticking each poller on its own
    /// interval.
    pub async fn run(self, shutdown: CancellationToken) {
        let mut work_items_tick = tokio::time::interval(self.intervals.work_items);
        let mut revisions_and_specs_tick = tokio::time::interval(self.intervals.revisions_and_specs);
        // The first tick fires immediately; `poll_all_once` already covered
        // that initial pass, so consume it before entering the loop.
        work_items_tick.tick().await;
        revisions_and_specs_tick.tick().await;

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => return,
                _ = work_items_tick.tick() => {
                    work_item_poller::poll_once(&self.store, self.work_items.as_ref(), &self.retry_policy, &self.handle).await;
                }
                _ = revisions_and_specs_tick.tick() => {
                    revision_poller::poll_once(&self.store, self.revisions.as_ref(), &self.retry_policy, &self.handle).await;
                    spec_poller::poll_once(&self.store, self.specs.as_ref(), &self.retry_policy, &self.handle).await;
                }
            }
        }
    }
}
