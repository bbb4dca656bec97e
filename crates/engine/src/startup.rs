// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Boot-time helpers: seeding the initial [`EngineState`] from the
//! planner cache, and reaping worktrees left behind by a prior process that
//! never got to clean up after itself. The rest of startup — running the
//! reconciler's pollers once to fold in a coherent first snapshot, then
//! handing off to the scheduler and event loop — is wired by the binary that
//! owns both this crate and `decree-reconciler`, since this crate cannot
//! depend on the reconciler without a cycle.

use decree_adapters::agent::worktree;
use decree_adapters::AdapterError;
use decree_core::{EngineState, RoleFields};
use decree_storage::PlannerCache;
use std::path::Path;

/// Loads the planner cache from `cache_path` (missing/invalid collapses to
/// an empty cache, per [`PlannerCache::load`]) and seeds a fresh
/// [`EngineState`]'s `last_planned_shas` from its snapshot.
pub async fn build_initial_state(cache_path: &Path) -> EngineState {
    let cache = PlannerCache::load(cache_path).await;
    let mut state = EngineState::new();
    for (path, entry) in cache.snapshot.files {
        state.last_planned_shas.insert(path, entry.blob_sha);
    }
    state
}

/// Removes any git worktree under `repo_root` whose branch isn't backing an
/// active implementor run in `state` — the crash-recovery counterpart to
/// `CommandExecutor`'s own worktree cleanup on a session's normal exit.
pub async fn reap_orphaned_worktrees(repo_root: &Path, state: &EngineState) -> Result<(), AdapterError> {
    let active_branch_names: Vec<String> = state
        .agent_runs
        .values()
        .filter(|run| run.status.is_active())
        .filter_map(|run| match &run.role_fields {
            RoleFields::Implementor { branch_name, .. } => Some(branch_name.clone()),
            _ => None,
        })
        .collect();
    worktree::reap_orphaned_worktrees(repo_root, &active_branch_names).await
}

#[cfg(test)]
#[path = "startup_tests.rs"]
mod tests;
