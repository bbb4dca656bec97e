// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use decree_core::event::{ImplementorOutcome, ImplementorResult, PlannerResult};

fn run_context(store: StateStore, specs: Arc<dyn SpecProvider>, context_paths: Vec<PathBuf>) -> RunContext {
    RunContext {
        agent: Arc::new(FakeAgentAdapter),
        work_items: Arc::new(FakeWorkItems::default()),
        revisions: Arc::new(FakeRevisions::default()),
        specs,
        store,
        repo_root: PathBuf::from("/repo"),
        default_branch: "main".to_string(),
        timeout: Duration::from_secs(3600),
        logs_dir: None,
        context_paths,
        started_at_ms: 0,
    }
}

#[tokio::test]
async fn attach_verified_patch_leaves_non_implementor_output_untouched() {
    let ctx = run_context(StateStore::new(EngineState::new()), Arc::new(FakeSpecs::default()), Vec::new());
    let output = StructuredOutput::Planner(PlannerResult { create: vec![], close: vec![], update: vec![] });

    let result = attach_verified_patch(&ctx, &None, output).await.unwrap();
    assert!(matches!(result, StructuredOutput::Planner(_)));
}

#[tokio::test]
async fn attach_verified_patch_leaves_non_completed_implementor_outcomes_untouched() {
    let ctx = run_context(StateStore::new(EngineState::new()), Arc::new(FakeSpecs::default()), Vec::new());
    let output = StructuredOutput::Implementor(ImplementorResult {
        outcome: ImplementorOutcome::Blocked,
        summary: "waiting on #4".into(),
        patch: None,
    });

    let result = attach_verified_patch(&ctx, &None, output).await.unwrap();
    let StructuredOutput::Implementor(result) = result else { panic!("expected implementor output") };
    assert_eq!(result.patch, None);
}

#[tokio::test]
async fn attach_verified_patch_errors_on_completed_outcome_with_no_worktree() {
    let ctx = run_context(StateStore::new(EngineState::new()), Arc::new(FakeSpecs::default()), Vec::new());
    let output =
        StructuredOutput::Implementor(ImplementorResult { outcome: ImplementorOutcome::Completed, summary: "done".into(), patch: None });

    let result = attach_verified_patch(&ctx, &None, output).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn spec_change_contexts_classifies_unseen_paths_as_added() {
    let state = EngineState::new();
    let store = StateStore::new(state);
    let ctx = run_context(store, Arc::new(FakeSpecs::default()), Vec::new());

    let changed = spec_change_contexts(&ctx, &["new.md".to_string()]).await.unwrap();
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].path, "new.md");
    assert_eq!(changed[0].kind, SpecChangeKind::Added);
    assert!(changed[0].diff.is_none());
}

#[tokio::test]
async fn spec_change_contexts_diffs_modified_paths_against_the_prior_blob_sha() {
    let mut state = EngineState::new();
    state.last_planned_shas.insert("a.md".to_string(), "sha-old".to_string());
    state.specs.insert(
        "a.md".to_string(),
        Spec { file_path: "a.md".to_string(), blob_sha: "sha-new".to_string(), frontmatter_status: Default::default() },
    );
    let store = StateStore::new(state);
    let specs: Arc<dyn SpecProvider> = Arc::new(FakeSpecs {
        content: HashMap::from([("sha-old".to_string(), "old line\n".to_string()), ("sha-new".to_string(), "new line\n".to_string())]),
    });
    let ctx = run_context(store, specs, Vec::new());

    let changed = spec_change_contexts(&ctx, &["a.md".to_string()]).await.unwrap();
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].kind, SpecChangeKind::Modified);
    let diff = changed[0].diff.as_ref().expect("diff present for a changed blob sha");
    assert!(diff.contains("-old line"));
    assert!(diff.contains("+new line"));
}

#[tokio::test]
async fn context_paths_content_appends_readable_files_and_skips_missing_ones() {
    let dir = tempfile::tempdir().expect("tempdir");
    tokio::fs::write(dir.path().join("NOTES.md"), "house style notes").await.expect("write");

    let mut ctx = run_context(StateStore::new(EngineState::new()), Arc::new(FakeSpecs::default()), Vec::new());
    ctx.repo_root = dir.path().to_path_buf();
    ctx.context_paths = vec![PathBuf::from("NOTES.md"), PathBuf::from("missing.md")];

    let sections = context_paths_content(&ctx).await.unwrap();
    assert_eq!(sections.len(), 1);
    assert!(sections[0].contains("# Context: NOTES.md"));
    assert!(sections[0].contains("house style notes"));
}
