// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::agent_run::RoleFields;

fn run(role: Role, status: AgentRunStatus) -> AgentRun {
    AgentRun {
        session_id: SessionId::new(),
        role_fields: match role {
            Role::Planner => RoleFields::Planner { spec_paths: vec![] },
            Role::Implementor => {
                RoleFields::Implementor { work_item_id: "1".into(), branch_name: "b".into() }
            }
            Role::Reviewer => {
                RoleFields::Reviewer { work_item_id: "1".into(), revision_id: "r".into() }
            }
        },
        status,
        started_at_ms: 0,
        log_file_path: None,
        error: None,
    }
}

#[test]
fn active_run_for_role_ignores_terminal_runs() {
    let mut state = EngineState::new();
    let r = run(Role::Planner, AgentRunStatus::Completed);
    state.agent_runs.insert(r.session_id.clone(), r);
    assert!(state.active_run_for_role(Role::Planner).is_none());
}

#[test]
fn active_run_for_role_finds_running_session() {
    let mut state = EngineState::new();
    let r = run(Role::Implementor, AgentRunStatus::Running);
    let id = r.session_id.clone();
    state.agent_runs.insert(id.clone(), r);
    assert_eq!(state.active_run_for_role(Role::Implementor).unwrap().session_id, id);
}

#[test]
fn error_ring_evicts_oldest_past_cap() {
    let mut state = EngineState::new();
    for i in 0..MAX_ERROR_ENTRIES + 5 {
        state.push_error(ErrorKind::Provider, format!("err-{i}"), i as u64);
    }
    assert_eq!(state.errors.len(), MAX_ERROR_ENTRIES);
    assert_eq!(state.errors.first().unwrap().message, "err-5");
    assert_eq!(state.errors.last().unwrap().message, format!("err-{}", MAX_ERROR_ENTRIES + 4));
}
