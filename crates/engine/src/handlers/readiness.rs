// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use decree_core::{Command, EngineState, Event, WorkItemStatus};

/// A `pending` item whose dependencies have all resolved becomes `ready`.
pub fn handle(event: &Event, state: &EngineState) -> Vec<Command> {
    let Event::WorkItemChanged { id, new: Some(item) } = event else {
        return Vec::new();
    };
    if item.status != WorkItemStatus::Pending {
        return Vec::new();
    }
    if !item.is_unblocked(|dep_id| state.work_item(dep_id)) {
        return Vec::new();
    }
    vec![Command::TransitionWorkItemStatus { work_item_id: id.clone(), new_status: WorkItemStatus::Ready }]
}

#[cfg(test)]
#[path = "readiness_tests.rs"]
mod tests;
