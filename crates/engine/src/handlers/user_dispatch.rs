// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Translates user-originated events into the same commands the other
//! handlers would produce. User events never mutate the store directly
//! — this handler is their only effect.

use decree_core::{Command, EngineState, Event};

pub fn handle(event: &Event, state: &EngineState) -> Vec<Command> {
    match event {
        Event::UserRequestedImplementorRun { work_item_id } => {
            vec![Command::RequestImplementorRun { work_item_id: work_item_id.clone() }]
        }

        Event::UserCancelledRun { session_id } => {
            if state.agent_run(session_id).is_none() {
                return Vec::new();
            }
            vec![Command::CancelAgentRun { session_id: session_id.clone() }]
        }

        Event::UserTransitionedStatus { work_item_id, new_status } => {
            vec![Command::TransitionWorkItemStatus { work_item_id: work_item_id.clone(), new_status: *new_status }]
        }

        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "user_dispatch_tests.rs"]
mod tests;
