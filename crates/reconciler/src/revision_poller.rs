// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Revision poller: same shape as the work-item poller, keyed by
//! revision ID. Pipeline derivation itself lives in
//! `decree_adapters::pipeline` — a concrete `RevisionProvider` resolves
//! `Revision.pipeline` before this poller ever sees it; this module only
//! diffs the already-resolved revisions against the store.

use decree_adapters::provider::RevisionProvider;
use decree_core::{Event, Revision};
use decree_engine::{retry_with_backoff, EventLoopHandle, RetryPolicy, StateStore};
use std::collections::HashSet;

pub async fn poll_once(
    store: &StateStore,
    provider: &dyn RevisionProvider,
    retry_policy: &RetryPolicy,
    handle: &EventLoopHandle,
) {
    let revisions = match retry_with_backoff(retry_policy, || provider.list_open()).await {
        Ok(revisions) => revisions,
        Err(error) => {
            tracing::warn!(%error, "revision poll failed, waiting for next tick");
            return;
        }
    };

    let state = store.get_state();
    let mut seen: HashSet<String> = HashSet::with_capacity(revisions.len());

    for revision in revisions {
        seen.insert(revision.id.clone());
        let is_changed = match state.revisions.get(&revision.id) {
            Some(existing) => has_changed(existing, &revision),
            None => true,
        };
        if is_changed {
            handle.enqueue(Event::RevisionChanged { id: revision.id.clone(), new: Some(revision) });
        }
    }

    for id in state.revisions.keys() {
        if !seen.contains(id) {
            handle.enqueue(Event::RevisionChanged { id: id.clone(), new: None });
        }
    }
}

fn has_changed(existing: &Revision, observed: &Revision) -> bool {
    existing.pipeline.as_ref().map(|p| p.status) != observed.pipeline.as_ref().map(|p| p.status)
        || existing.is_draft != observed.is_draft
        || existing.head_sha != observed.head_sha
        || existing.work_item_id != observed.work_item_id
        || existing.review_id != observed.review_id
}

#[cfg(test)]
#[path = "revision_poller_tests.rs"]
mod tests;
