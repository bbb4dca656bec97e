// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use decree_core::event::{ImplementorOutcome, ImplementorResult};

fn active_planner_run() -> (SessionId, AgentRun) {
    let session_id = SessionId::new();
    let run = AgentRun {
        session_id: session_id.clone(),
        role_fields: RoleFields::Planner { spec_paths: vec!["a.md".into()] },
        status: AgentRunStatus::Running,
        started_at_ms: 0,
        log_file_path: None,
        error: None,
    };
    (session_id, run)
}

#[tokio::test]
async fn role_singleton_rejects_with_uniform_reason_for_every_role() {
    let store = StateStore::new(EngineState::new());
    let (session_id, run) = active_planner_run();
    let mut state = store.get_state();
    state.agent_runs.insert(session_id, run);
    store.set_state(state);

    let exec = executor(
        store,
        Arc::new(FakeWorkItems::default()),
        Arc::new(FakeRevisions::default()),
        Arc::new(FakeSpecs::default()),
    );

    let events = exec.execute(Command::RequestPlannerRun { spec_paths: vec!["b.md".into()] }).await;
    assert_eq!(events, vec![Event::CommandRejected { command: "requestPlannerRun".into(), reason: "role already active".into() }]);
}

#[tokio::test]
async fn role_singleton_allows_a_different_role_while_one_is_active() {
    let store = StateStore::new(EngineState::new());
    let (session_id, run) = active_planner_run();
    let mut state = store.get_state();
    state.agent_runs.insert(session_id, run);
    store.set_state(state);

    let exec = executor(
        store,
        Arc::new(FakeWorkItems::default()),
        Arc::new(FakeRevisions::default()),
        Arc::new(FakeSpecs::default()),
    );

    let events = exec.execute(Command::RequestImplementorRun { work_item_id: "1".into() }).await;
    assert!(matches!(events.as_slice(), [Event::ImplementorRequested { .. }]));
}

#[tokio::test]
async fn create_work_item_forwards_to_provider() {
    let work_items = Arc::new(FakeWorkItems::default());
    let exec = executor(
        StateStore::new(EngineState::new()),
        work_items.clone(),
        Arc::new(FakeRevisions::default()),
        Arc::new(FakeSpecs::default()),
    );

    let events = exec
        .execute(Command::CreateWorkItem {
            title: "t".into(),
            body: "b".into(),
            labels: vec!["l".into()],
            blocked_by: vec![],
        })
        .await;

    assert!(events.is_empty());
    assert_eq!(work_items.created.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn create_revision_from_patch_passes_body_through() {
    let revisions = Arc::new(FakeRevisions::default());
    let exec = executor(
        StateStore::new(EngineState::new()),
        Arc::new(FakeWorkItems::default()),
        revisions.clone(),
        Arc::new(FakeSpecs::default()),
    );

    exec.execute(Command::CreateRevisionFromPatch {
        work_item_id: "1".into(),
        branch_name: "decree/1".into(),
        title: "implement thing".into(),
        patch: "diff --git a/f b/f\n".into(),
        body: "implement thing\n\n<!-- decree:blockedBy #2 -->".into(),
    })
    .await;

    let created = revisions.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].4, "implement thing\n\n<!-- decree:blockedBy #2 -->");
}

#[tokio::test]
async fn apply_implementor_result_rejects_completed_outcome_with_no_patch() {
    let revisions = Arc::new(FakeRevisions::default());
    let exec = executor(
        StateStore::new(EngineState::new()),
        Arc::new(FakeWorkItems::default()),
        revisions.clone(),
        Arc::new(FakeSpecs::default()),
    );

    let events = exec
        .execute(Command::ApplyImplementorResult {
            session_id: SessionId::new(),
            work_item_id: "1".into(),
            result: ImplementorResult { outcome: ImplementorOutcome::Completed, summary: "done".into(), patch: None },
        })
        .await;

    assert!(matches!(events.as_slice(), [Event::CommandFailed { command, .. }] if command == "applyImplementorResult"));
    assert!(revisions.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn apply_implementor_result_embeds_blocked_by_marker_from_the_work_item() {
    let work_items = Arc::new(FakeWorkItems::default());
    *work_items.item.lock().unwrap() = Some(WorkItem { blocked_by: vec!["7".into()], ..work_item_fixture("1", WorkItemStatus::InProgress) });
    let revisions = Arc::new(FakeRevisions::default());
    let exec = executor(StateStore::new(EngineState::new()), work_items, revisions.clone(), Arc::new(FakeSpecs::default()));

    exec.execute(Command::ApplyImplementorResult {
        session_id: SessionId::new(),
        work_item_id: "1".into(),
        result: ImplementorResult {
            outcome: ImplementorOutcome::Completed,
            summary: "done".into(),
            patch: Some("diff --git a/f b/f\n".into()),
        },
    })
    .await;

    let created = revisions.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert!(created[0].4.contains("<!-- decree:blockedBy #7 -->"));
}

#[tokio::test]
async fn apply_reviewer_result_posts_the_review() {
    let revisions = Arc::new(FakeRevisions::default());
    let exec = executor(
        StateStore::new(EngineState::new()),
        Arc::new(FakeWorkItems::default()),
        revisions.clone(),
        Arc::new(FakeSpecs::default()),
    );

    exec.execute(Command::ApplyReviewerResult {
        session_id: SessionId::new(),
        work_item_id: "1".into(),
        revision_id: "r1".into(),
        result: decree_core::event::ReviewerResult {
            review: Review { verdict: decree_core::event::ReviewVerdict::Approve, summary: "lgtm".into(), comments: vec![] },
        },
    })
    .await;

    assert_eq!(revisions.posted_reviews.lock().unwrap().len(), 1);
}
