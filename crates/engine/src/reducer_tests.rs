// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use decree_core::{EngineState, FailReason, RoleFields, SessionId};

#[test]
fn work_item_changed_upserts() {
    let state = EngineState::new();
    let item = decree_core::test_support::work_item_fixture("1", decree_core::WorkItemStatus::Pending);
    let event = Event::WorkItemChanged { id: "1".into(), new: Some(item) };
    let next = reduce(&state, &event, 0);
    assert!(next.work_item("1").is_some());
}

#[test]
fn work_item_changed_with_none_deletes() {
    let mut state = EngineState::new();
    state.work_items.insert(
        "1".into(),
        decree_core::test_support::work_item_fixture("1", decree_core::WorkItemStatus::Pending),
    );
    let event = Event::WorkItemChanged { id: "1".into(), new: None };
    let next = reduce(&state, &event, 0);
    assert!(next.work_item("1").is_none());
}

#[test]
fn requested_inserts_new_run() {
    let state = EngineState::new();
    let session_id = SessionId::new();
    let event = Event::ImplementorRequested {
        session_id: session_id.clone(),
        role_fields: RoleFields::Implementor { work_item_id: "1".into(), branch_name: "b".into() },
    };
    let next = reduce(&state, &event, 1000);
    let run = next.agent_run(&session_id).unwrap();
    assert_eq!(run.status, AgentRunStatus::Requested);
    assert_eq!(run.started_at_ms, 1000);
}

#[test]
fn started_transitions_requested_to_running() {
    let state = EngineState::new();
    let session_id = SessionId::new();
    let requested = Event::ImplementorRequested {
        session_id: session_id.clone(),
        role_fields: RoleFields::Implementor { work_item_id: "1".into(), branch_name: "b".into() },
    };
    let state = reduce(&state, &requested, 0);
    let started = Event::ImplementorStarted { session_id: session_id.clone(), log_file_path: Some("log".into()) };
    let state = reduce(&state, &started, 0);
    let run = state.agent_run(&session_id).unwrap();
    assert_eq!(run.status, AgentRunStatus::Running);
    assert_eq!(run.log_file_path.as_deref(), Some("log"));
}

#[test]
fn illegal_transition_is_dropped() {
    let state = EngineState::new();
    let session_id = SessionId::new();
    let requested = Event::ImplementorRequested {
        session_id: session_id.clone(),
        role_fields: RoleFields::Implementor { work_item_id: "1".into(), branch_name: "b".into() },
    };
    let state = reduce(&state, &requested, 0);
    // Requested cannot jump straight to Completed.
    let completed = Event::ImplementorCompleted {
        session_id: session_id.clone(),
        result: decree_core::event::ImplementorResult {
            outcome: decree_core::event::ImplementorOutcome::Completed,
            summary: "done".into(),
            patch: Some("diff".into()),
        },
    };
    let state = reduce(&state, &completed, 0);
    assert_eq!(state.agent_run(&session_id).unwrap().status, AgentRunStatus::Requested);
}

#[test]
fn failed_retains_error_text_and_maps_reason() {
    let state = EngineState::new();
    let session_id = SessionId::new();
    let state = reduce(
        &state,
        &Event::ImplementorRequested {
            session_id: session_id.clone(),
            role_fields: RoleFields::Implementor { work_item_id: "1".into(), branch_name: "b".into() },
        },
        0,
    );
    let state = reduce(
        &state,
        &Event::ImplementorStarted { session_id: session_id.clone(), log_file_path: None },
        0,
    );
    let state = reduce(
        &state,
        &Event::ImplementorFailed {
            session_id: session_id.clone(),
            reason: FailReason::Timeout,
            error: Some("deadline exceeded".into()),
        },
        0,
    );
    let run = state.agent_run(&session_id).unwrap();
    assert_eq!(run.status, AgentRunStatus::TimedOut);
    assert_eq!(run.error.as_deref(), Some("deadline exceeded"));
}

#[test]
fn planner_completed_records_last_planned_sha() {
    let mut state = EngineState::new();
    state.specs.insert(
        "docs/a.md".into(),
        decree_core::Spec {
            file_path: "docs/a.md".into(),
            blob_sha: "abc123".into(),
            frontmatter_status: decree_core::FrontmatterStatus::Approved,
        },
    );
    let session_id = SessionId::new();
    let state = reduce(
        &state,
        &Event::PlannerRequested {
            session_id: session_id.clone(),
            role_fields: RoleFields::Planner { spec_paths: vec!["docs/a.md".into()] },
        },
        0,
    );
    let state = reduce(
        &state,
        &Event::PlannerStarted { session_id: session_id.clone(), log_file_path: None },
        0,
    );
    let state = reduce(
        &state,
        &Event::PlannerCompleted {
            session_id: session_id.clone(),
            spec_paths: vec!["docs/a.md".into()],
            result: decree_core::event::PlannerResult { create: vec![], close: vec![], update: vec![] },
        },
        0,
    );
    assert_eq!(state.last_planned_shas.get("docs/a.md"), Some(&"abc123".to_string()));
}

#[test]
fn command_rejected_appends_error_entry() {
    let state = EngineState::new();
    let event = Event::CommandRejected { command: "requestImplementorRun".into(), reason: "role already active".into() };
    let next = reduce(&state, &event, 42);
    assert_eq!(next.errors.len(), 1);
    assert_eq!(next.errors[0].at_ms, 42);
}

#[test]
fn user_events_do_not_mutate_state() {
    let state = EngineState::new();
    let event = Event::UserCancelledRun { session_id: SessionId::new() };
    let next = reduce(&state, &event, 0);
    assert_eq!(next, state);
}
