// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use decree_core::{Command, EngineState, Event, WorkItemStatus};

/// When a work item reaches a terminal-for-dependents status, every pending
/// dependent that is now fully unblocked becomes `ready`.
pub fn handle(event: &Event, state: &EngineState) -> Vec<Command> {
    let Event::WorkItemChanged { id, new: Some(item) } = event else {
        return Vec::new();
    };
    if !item.status.is_terminal_for_dependents() {
        return Vec::new();
    }

    state
        .work_items
        .values()
        .filter(|dependent| dependent.status == WorkItemStatus::Pending)
        .filter(|dependent| dependent.blocked_by.iter().any(|dep| dep == id))
        .filter(|dependent| dependent.is_unblocked(|dep_id| state.work_item(dep_id)))
        .map(|dependent| Command::TransitionWorkItemStatus {
            work_item_id: dependent.id.clone(),
            new_status: WorkItemStatus::Ready,
        })
        .collect()
}

#[cfg(test)]
#[path = "dependency_resolution_tests.rs"]
mod tests;
