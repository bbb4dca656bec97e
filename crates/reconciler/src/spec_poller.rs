// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spec poller: lists specs under the configured directory and emits
//! `specChanged` for any whose blob SHA differs from what the store already
//! has (added or modified). The wire event carries no deletion variant, so a
//! spec removed from the tree is simply never retracted from state here —
//! the planning handler only ever reasons about specs it still observes.

use decree_adapters::provider::SpecProvider;
use decree_core::Event;
use decree_engine::{retry_with_backoff, EventLoopHandle, RetryPolicy, StateStore};

pub async fn poll_once(
    store: &StateStore,
    provider: &dyn SpecProvider,
    retry_policy: &RetryPolicy,
    handle: &EventLoopHandle,
) {
    let specs = match retry_with_backoff(retry_policy, || provider.list_specs()).await {
        Ok(specs) => specs,
        Err(error) => {
            tracing::warn!(%error, "spec poll failed, waiting for next tick");
            return;
        }
    };

    let state = store.get_state();
    for spec in specs {
        let is_changed = match state.specs.get(&spec.file_path) {
            Some(existing) => existing.blob_sha != spec.blob_sha || existing.frontmatter_status != spec.frontmatter_status,
            None => true,
        };
        if is_changed {
            handle.enqueue(Event::SpecChanged { spec });
        }
    }
}

#[cfg(test)]
#[path = "spec_poller_tests.rs"]
mod tests;
