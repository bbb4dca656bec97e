// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use decree_core::{Command, EngineState, Event, PipelineStatus, RoleFields, WorkItemStatus};

pub fn handle(event: &Event, state: &EngineState) -> Vec<Command> {
    match event {
        Event::RevisionChanged { id, new: Some(revision) } => {
            let Some(pipeline) = &revision.pipeline else { return Vec::new() };
            if pipeline.status != PipelineStatus::Success {
                return Vec::new();
            }
            let Some(work_item_id) = &revision.work_item_id else { return Vec::new() };
            let Some(item) = state.work_item(work_item_id) else { return Vec::new() };
            if item.status != WorkItemStatus::Review {
                return Vec::new();
            }
            vec![Command::RequestReviewerRun { work_item_id: work_item_id.clone(), revision_id: id.clone() }]
        }

        Event::ReviewerCompleted { session_id, result } => {
            let Some(run) = state.agent_run(session_id) else { return Vec::new() };
            let RoleFields::Reviewer { work_item_id, revision_id } = &run.role_fields else { return Vec::new() };
            vec![Command::ApplyReviewerResult {
                session_id: session_id.clone(),
                work_item_id: work_item_id.clone(),
                revision_id: revision_id.clone(),
                result: result.clone(),
            }]
        }

        Event::ReviewerFailed { session_id, .. } => {
            let Some(run) = state.agent_run(session_id) else { return Vec::new() };
            let RoleFields::Reviewer { work_item_id, .. } = &run.role_fields else { return Vec::new() };
            vec![Command::TransitionWorkItemStatus {
                work_item_id: work_item_id.clone(),
                new_status: WorkItemStatus::Pending,
            }]
        }

        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "review_tests.rs"]
mod tests;
