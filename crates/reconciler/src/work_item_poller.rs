// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Work-item poller: lists all open work items and diffs them against
//! the engine's store by ID, emitting `workItemChanged` only for items that
//! are new, changed, or gone.

use decree_adapters::provider::WorkItemProvider;
use decree_core::{Event, WorkItem};
use decree_engine::{retry_with_backoff, EventLoopHandle, RetryPolicy, StateStore};
use std::collections::HashSet;

/// Runs one poll cycle. Transient provider errors are logged and swallowed —
/// the next tick tries again — rather than emitting spurious change events.
pub async fn poll_once(
    store: &StateStore,
    provider: &dyn WorkItemProvider,
    retry_policy: &RetryPolicy,
    handle: &EventLoopHandle,
) {
    let items = match retry_with_backoff(retry_policy, || provider.list_open()).await {
        Ok(items) => items,
        Err(error) => {
            tracing::warn!(%error, "work item poll failed, waiting for next tick");
            return;
        }
    };

    let state = store.get_state();
    let mut seen: HashSet<String> = HashSet::with_capacity(items.len());

    for item in items {
        seen.insert(item.id.clone());
        let is_changed = match state.work_items.get(&item.id) {
            Some(existing) => has_changed(existing, &item),
            None => true,
        };
        if is_changed {
            handle.enqueue(Event::WorkItemChanged { id: item.id.clone(), new: Some(item) });
        }
    }

    for id in state.work_items.keys() {
        if !seen.contains(id) {
            handle.enqueue(Event::WorkItemChanged { id: id.clone(), new: None });
        }
    }
}

fn has_changed(existing: &WorkItem, observed: &WorkItem) -> bool {
    existing.title != observed.title
        || existing.status != observed.status
        || existing.priority != observed.priority
        || existing.body != observed.body
        || existing.blocked_by != observed.blocked_by
        || existing.linked_revision != observed.linked_revision
}

#[cfg(test)]
#[path = "work_item_poller_tests.rs"]
mod tests;
