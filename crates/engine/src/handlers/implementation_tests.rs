// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use decree_core::test_support::work_item_fixture;
use decree_core::{
    event::{ImplementorOutcome, ImplementorResult},
    AgentRun, AgentRunStatus, FailReason, SessionId,
};

#[test]
fn ready_item_requests_implementor_run() {
    let state = EngineState::new();
    let item = work_item_fixture("1", WorkItemStatus::Ready);
    let event = Event::WorkItemChanged { id: "1".into(), new: Some(item) };
    assert_eq!(handle(&event, &state), vec![Command::RequestImplementorRun { work_item_id: "1".into() }]);
}

#[test]
fn implementor_requested_marks_item_in_progress() {
    let state = EngineState::new();
    let event = Event::ImplementorRequested {
        session_id: SessionId::new(),
        role_fields: RoleFields::Implementor { work_item_id: "1".into(), branch_name: "decree/1".into() },
    };
    assert_eq!(
        handle(&event, &state),
        vec![Command::TransitionWorkItemStatus { work_item_id: "1".into(), new_status: WorkItemStatus::InProgress }]
    );
}

fn implementor_run(session_id: SessionId, work_item_id: &str) -> AgentRun {
    AgentRun {
        session_id,
        role_fields: RoleFields::Implementor { work_item_id: work_item_id.into(), branch_name: "decree/1".into() },
        status: AgentRunStatus::Running,
        started_at_ms: 0,
        log_file_path: None,
        error: None,
    }
}

#[test]
fn implementor_completed_applies_result_for_its_work_item() {
    let mut state = EngineState::new();
    let session_id = SessionId::new();
    state.agent_runs.insert(session_id.clone(), implementor_run(session_id.clone(), "1"));
    let event = Event::ImplementorCompleted {
        session_id: session_id.clone(),
        result: ImplementorResult { outcome: ImplementorOutcome::Completed, summary: "done".into(), patch: Some("diff".into()) },
    };
    let commands = handle(&event, &state);
    assert_eq!(commands.len(), 1);
    assert!(matches!(&commands[0], Command::ApplyImplementorResult { work_item_id, .. } if work_item_id == "1"));
}

#[test]
fn implementor_failed_returns_item_to_pending() {
    let mut state = EngineState::new();
    let session_id = SessionId::new();
    state.agent_runs.insert(session_id.clone(), implementor_run(session_id.clone(), "1"));
    let event = Event::ImplementorFailed { session_id, reason: FailReason::Error, error: Some("boom".into()) };
    assert_eq!(
        handle(&event, &state),
        vec![Command::TransitionWorkItemStatus { work_item_id: "1".into(), new_status: WorkItemStatus::Pending }]
    );
}
