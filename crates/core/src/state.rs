// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! EngineState: the single snapshot the reducer replaces wholesale on every
//! event. Readers always see a complete, consistent state — there is
//! no partial mutation visible across a `store.dispatch` call.

use crate::agent_run::{AgentRun, AgentRunStatus, Role};
use crate::error::{ErrorEntry, ErrorKind};
use crate::id::SessionId;
use crate::revision::Revision;
use crate::spec::Spec;
use crate::work_item::WorkItem;
use indexmap::IndexMap;

/// Oldest entries are evicted once the error ring exceeds this length.
pub const MAX_ERROR_ENTRIES: usize = 50;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineState {
    pub work_items: IndexMap<String, WorkItem>,
    pub revisions: IndexMap<String, Revision>,
    pub specs: IndexMap<String, Spec>,
    pub agent_runs: IndexMap<SessionId, AgentRun>,
    pub errors: Vec<ErrorEntry>,
    /// The blob SHA the planner was last run against, per spec file path.
    /// Loaded from the planner cache (`decree-storage`) at startup.
    pub last_planned_shas: IndexMap<String, String>,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active (requested or running) run for `role`, if any — invariant
    /// I1 guarantees at most one exists at a time, so the first match found
    /// is the only one.
    pub fn active_run_for_role(&self, role: Role) -> Option<&AgentRun> {
        self.agent_runs.values().find(|run| run.role() == role && run.status.is_active())
    }

    pub fn agent_run(&self, session_id: &SessionId) -> Option<&AgentRun> {
        self.agent_runs.get(session_id)
    }

    pub fn work_item(&self, id: &str) -> Option<&WorkItem> {
        self.work_items.get(id)
    }

    /// Pushes a new error entry, evicting the oldest if the ring is at
    /// capacity. Returns the new state (callers clone `EngineState` before
    /// mutating, per the reducer's copy-on-write convention).
    pub fn push_error(&mut self, kind: ErrorKind, message: impl Into<String>, at_ms: u64) {
        if self.errors.len() >= MAX_ERROR_ENTRIES {
            self.errors.remove(0);
        }
        self.errors.push(ErrorEntry { kind, message: message.into(), at_ms });
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
