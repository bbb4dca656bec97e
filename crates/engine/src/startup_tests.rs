// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use decree_core::{AgentRun, AgentRunStatus, SessionId};
use tempfile::tempdir;

#[tokio::test]
async fn missing_cache_yields_empty_last_planned_shas() {
    let dir = tempdir().unwrap();
    let state = build_initial_state(&dir.path().join("planner-cache.json")).await;
    assert!(state.last_planned_shas.is_empty());
}

#[tokio::test]
async fn cache_snapshot_seeds_last_planned_shas() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("planner-cache.json");
    let mut cache = PlannerCache::default();
    cache.snapshot.tree_sha = "tree1".into();
    cache.snapshot.files.insert(
        "specs/a.md".into(),
        decree_storage::CachedSpecEntry { blob_sha: "blob1".into(), frontmatter_status: "approved".into() },
    );
    cache.save(&path).await.unwrap();

    let state = build_initial_state(&path).await;
    assert_eq!(state.last_planned_shas.get("specs/a.md"), Some(&"blob1".to_string()));
}

#[tokio::test]
async fn reap_skips_branches_backing_active_implementor_runs() {
    let dir = tempdir().unwrap();
    let mut state = EngineState::new();
    state.agent_runs.insert(
        SessionId::new(),
        AgentRun {
            session_id: SessionId::new(),
            role_fields: RoleFields::Implementor { work_item_id: "1".into(), branch_name: "decree/1".into() },
            status: AgentRunStatus::Running,
            started_at_ms: 0,
            log_file_path: None,
            error: None,
        },
    );
    // No actual worktrees exist under the temp dir; this only exercises
    // that filtering active branch names doesn't itself error.
    let result = reap_orphaned_worktrees(dir.path(), &state).await;
    assert!(result.is_ok());
}
