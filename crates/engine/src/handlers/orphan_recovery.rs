// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Orphan recovery: enforces invariant I2 (no work item sits in `in-progress`
//! or `review` without a matching active run) by watching for observed
//! status changes with no corresponding run, and resetting those items to
//! `pending` so they re-enter the readiness/implementation flow.

use decree_core::{Command, EngineState, Event, RoleFields, Role, WorkItemStatus};

fn has_active_run_for_item(state: &EngineState, role: Role, work_item_id: &str) -> bool {
    state.agent_runs.values().any(|run| {
        run.status.is_active()
            && run.role() == role
            && match &run.role_fields {
                RoleFields::Implementor { work_item_id: id, .. } => id == work_item_id,
                RoleFields::Reviewer { work_item_id: id, .. } => id == work_item_id,
                RoleFields::Planner { .. } => false,
            }
    })
}

pub fn handle(event: &Event, state: &EngineState) -> Vec<Command> {
    let Event::WorkItemChanged { id, new: Some(item) } = event else {
        return Vec::new();
    };

    let role = match item.status {
        WorkItemStatus::InProgress => Role::Implementor,
        WorkItemStatus::Review => Role::Reviewer,
        _ => return Vec::new(),
    };

    if has_active_run_for_item(state, role, id) {
        return Vec::new();
    }

    vec![Command::TransitionWorkItemStatus { work_item_id: id.clone(), new_status: WorkItemStatus::Pending }]
}

#[cfg(test)]
#[path = "orphan_recovery_tests.rs"]
mod tests;
