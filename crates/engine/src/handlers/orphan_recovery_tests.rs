// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use decree_core::test_support::work_item_fixture;
use decree_core::{AgentRun, AgentRunStatus, SessionId};

#[test]
fn in_progress_without_active_run_resets_to_pending() {
    let state = EngineState::new();
    let item = work_item_fixture("1", WorkItemStatus::InProgress);
    let event = Event::WorkItemChanged { id: "1".into(), new: Some(item) };
    assert_eq!(
        handle(&event, &state),
        vec![Command::TransitionWorkItemStatus { work_item_id: "1".into(), new_status: WorkItemStatus::Pending }]
    );
}

#[test]
fn in_progress_with_active_run_is_left_alone() {
    let mut state = EngineState::new();
    let session_id = SessionId::new();
    state.agent_runs.insert(
        session_id.clone(),
        AgentRun {
            session_id,
            role_fields: RoleFields::Implementor { work_item_id: "1".into(), branch_name: "decree/1".into() },
            status: AgentRunStatus::Running,
            started_at_ms: 0,
            log_file_path: None,
            error: None,
        },
    );
    let item = work_item_fixture("1", WorkItemStatus::InProgress);
    let event = Event::WorkItemChanged { id: "1".into(), new: Some(item) };
    assert!(handle(&event, &state).is_empty());
}

#[test]
fn review_without_active_reviewer_resets_to_pending() {
    let state = EngineState::new();
    let item = work_item_fixture("1", WorkItemStatus::Review);
    let event = Event::WorkItemChanged { id: "1".into(), new: Some(item) };
    assert_eq!(
        handle(&event, &state),
        vec![Command::TransitionWorkItemStatus { work_item_id: "1".into(), new_status: WorkItemStatus::Pending }]
    );
}

#[test]
fn other_statuses_are_untouched() {
    let state = EngineState::new();
    let item = work_item_fixture("1", WorkItemStatus::Closed);
    let event = Event::WorkItemChanged { id: "1".into(), new: Some(item) };
    assert!(handle(&event, &state).is_empty());
}
