// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use decree_core::{Command, EngineState, Event, RoleFields, WorkItemStatus};

pub fn handle(event: &Event, state: &EngineState) -> Vec<Command> {
    match event {
        Event::WorkItemChanged { id, new: Some(item) } if item.status == WorkItemStatus::Ready => {
            vec![Command::RequestImplementorRun { work_item_id: id.clone() }]
        }

        Event::ImplementorRequested { role_fields: RoleFields::Implementor { work_item_id, .. }, .. } => {
            vec![Command::TransitionWorkItemStatus {
                work_item_id: work_item_id.clone(),
                new_status: WorkItemStatus::InProgress,
            }]
        }

        Event::ImplementorCompleted { session_id, result } => {
            let Some(run) = state.agent_run(session_id) else { return Vec::new() };
            let RoleFields::Implementor { work_item_id, .. } = &run.role_fields else { return Vec::new() };
            vec![Command::ApplyImplementorResult {
                session_id: session_id.clone(),
                work_item_id: work_item_id.clone(),
                result: result.clone(),
            }]
        }

        Event::ImplementorFailed { session_id, .. } => {
            let Some(run) = state.agent_run(session_id) else { return Vec::new() };
            let RoleFields::Implementor { work_item_id, .. } = &run.role_fields else { return Vec::new() };
            vec![Command::TransitionWorkItemStatus {
                work_item_id: work_item_id.clone(),
                new_status: WorkItemStatus::Pending,
            }]
        }

        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "implementation_tests.rs"]
mod tests;
