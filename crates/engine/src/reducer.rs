// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event reducer: a pure `(state, event, now_ms) -> state'` function.
//! `now_ms` is threaded in explicitly rather than read from a clock so the
//! reducer stays a pure function of its inputs.

use decree_core::{AgentRun, AgentRunStatus, ErrorKind, Event};

/// Applies `event` to `state`, returning the next state. `state` is never
/// mutated in place by callers — each call clones what it needs (invariant
/// I5: every mutation replaces the mapping it touches with a new value).
pub fn reduce(state: &decree_core::EngineState, event: &Event, now_ms: u64) -> decree_core::EngineState {
    let mut next = state.clone();

    match event {
        Event::WorkItemChanged { id, new } => match new {
            Some(item) => {
                next.work_items.insert(id.clone(), item.clone());
            }
            None => {
                next.work_items.shift_remove(id);
            }
        },

        Event::RevisionChanged { id, new } => match new {
            Some(revision) => {
                next.revisions.insert(id.clone(), revision.clone());
            }
            None => {
                next.revisions.shift_remove(id);
            }
        },

        Event::SpecChanged { spec } => {
            next.specs.insert(spec.file_path.clone(), spec.clone());
        }

        Event::PlannerRequested { session_id, role_fields }
        | Event::ImplementorRequested { session_id, role_fields }
        | Event::ReviewerRequested { session_id, role_fields } => {
            next.agent_runs.insert(
                session_id.clone(),
                AgentRun {
                    session_id: session_id.clone(),
                    role_fields: role_fields.clone(),
                    status: AgentRunStatus::Requested,
                    started_at_ms: now_ms,
                    log_file_path: None,
                    error: None,
                },
            );
        }

        Event::PlannerStarted { session_id, log_file_path }
        | Event::ImplementorStarted { session_id, log_file_path }
        | Event::ReviewerStarted { session_id, log_file_path } => {
            transition(&mut next, session_id, AgentRunStatus::Running, |run| {
                run.log_file_path = log_file_path.clone();
            });
        }

        Event::PlannerCompleted { session_id, spec_paths, result: _ } => {
            transition(&mut next, session_id, AgentRunStatus::Completed, |_| {});
            for path in spec_paths {
                if let Some(spec) = next.specs.get(path) {
                    next.last_planned_shas.insert(path.clone(), spec.blob_sha.clone());
                }
            }
        }

        Event::ImplementorCompleted { session_id, .. } | Event::ReviewerCompleted { session_id, .. } => {
            transition(&mut next, session_id, AgentRunStatus::Completed, |_| {});
        }

        Event::PlannerFailed { session_id, reason, error }
        | Event::ImplementorFailed { session_id, reason, error }
        | Event::ReviewerFailed { session_id, reason, error } => {
            transition(&mut next, session_id, reason.into_status(), |run| {
                run.error = error.clone();
            });
        }

        Event::CommandRejected { command, reason } => {
            next.push_error(ErrorKind::Rejected, format!("{command}: {reason}"), now_ms);
        }

        Event::CommandFailed { command, error } => {
            next.push_error(ErrorKind::Provider, format!("{command}: {error}"), now_ms);
        }

        // User events do not mutate the store directly; only handlers react
        // to them.
        Event::UserRequestedImplementorRun { .. }
        | Event::UserCancelledRun { .. }
        | Event::UserTransitionedStatus { .. } => {}
    }

    next
}

/// Applies an `AgentRunStatus` transition if legal, logging and dropping the
/// event otherwise. `mutate` is applied to the run after a legal transition,
/// before it is written back.
fn transition(
    state: &mut decree_core::EngineState,
    session_id: &decree_core::id::SessionId,
    next_status: AgentRunStatus,
    mutate: impl FnOnce(&mut AgentRun),
) {
    let Some(run) = state.agent_runs.get(session_id) else {
        tracing::warn!(%session_id, "transition for unknown agent run dropped");
        return;
    };
    if !run.status.can_transition_to(next_status) {
        tracing::warn!(%session_id, from = ?run.status, to = ?next_status, "illegal agent run transition dropped");
        return;
    }
    let mut run = run.clone();
    run.status = next_status;
    mutate(&mut run);
    state.agent_runs.insert(session_id.clone(), run);
}

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod tests;
