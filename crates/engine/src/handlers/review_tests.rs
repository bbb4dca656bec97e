// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use decree_core::test_support::{revision_fixture, work_item_fixture};
use decree_core::{
    event::{Review, ReviewVerdict, ReviewerResult},
    AgentRun, AgentRunStatus, FailReason, Pipeline, SessionId,
};

#[test]
fn successful_pipeline_requests_reviewer_when_item_in_review() {
    let mut state = EngineState::new();
    state.work_items.insert("1".into(), work_item_fixture("1", WorkItemStatus::Review));
    let mut revision = revision_fixture("r1", Some("1"));
    revision.pipeline = Some(Pipeline { status: PipelineStatus::Success, url: None, reason: None });
    let event = Event::RevisionChanged { id: "r1".into(), new: Some(revision) };
    assert_eq!(
        handle(&event, &state),
        vec![Command::RequestReviewerRun { work_item_id: "1".into(), revision_id: "r1".into() }]
    );
}

#[test]
fn pending_pipeline_does_not_request_reviewer() {
    let mut state = EngineState::new();
    state.work_items.insert("1".into(), work_item_fixture("1", WorkItemStatus::Review));
    let mut revision = revision_fixture("r1", Some("1"));
    revision.pipeline = Some(Pipeline { status: PipelineStatus::Pending, url: None, reason: None });
    let event = Event::RevisionChanged { id: "r1".into(), new: Some(revision) };
    assert!(handle(&event, &state).is_empty());
}

#[test]
fn reviewer_failed_returns_item_to_pending() {
    let mut state = EngineState::new();
    let session_id = SessionId::new();
    state.agent_runs.insert(
        session_id.clone(),
        AgentRun {
            session_id: session_id.clone(),
            role_fields: RoleFields::Reviewer { work_item_id: "1".into(), revision_id: "r1".into() },
            status: AgentRunStatus::Running,
            started_at_ms: 0,
            log_file_path: None,
            error: None,
        },
    );
    let event = Event::ReviewerFailed { session_id, reason: FailReason::Cancelled, error: None };
    assert_eq!(
        handle(&event, &state),
        vec![Command::TransitionWorkItemStatus { work_item_id: "1".into(), new_status: WorkItemStatus::Pending }]
    );
}

#[test]
fn reviewer_completed_applies_result() {
    let mut state = EngineState::new();
    let session_id = SessionId::new();
    state.agent_runs.insert(
        session_id.clone(),
        AgentRun {
            session_id: session_id.clone(),
            role_fields: RoleFields::Reviewer { work_item_id: "1".into(), revision_id: "r1".into() },
            status: AgentRunStatus::Running,
            started_at_ms: 0,
            log_file_path: None,
            error: None,
        },
    );
    let event = Event::ReviewerCompleted {
        session_id: session_id.clone(),
        result: ReviewerResult { review: Review { verdict: ReviewVerdict::Approve, summary: "lgtm".into(), comments: vec![] } },
    };
    let commands = handle(&event, &state);
    assert_eq!(commands.len(), 1);
    assert!(matches!(&commands[0], Command::ApplyReviewerResult { revision_id, .. } if revision_id == "r1"));
}
