// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! AgentRun: the record of one planner/implementor/reviewer invocation, and
//! the status transition table the reducer enforces (invariant I3).

use crate::id::SessionId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Planner,
    Implementor,
    Reviewer,
}

crate::simple_display! {
    Role {
        Planner => "planner",
        Implementor => "implementor",
        Reviewer => "reviewer",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentRunStatus {
    Requested,
    Running,
    Completed,
    Failed,
    TimedOut,
    Cancelled,
}

impl AgentRunStatus {
    /// Non-terminal statuses count against the role singleton (invariant I1).
    pub fn is_active(self) -> bool {
        matches!(self, AgentRunStatus::Requested | AgentRunStatus::Running)
    }

    pub fn is_terminal(self) -> bool {
        !self.is_active()
    }

    /// `requested` only reaches `running` or `cancelled`; `running` reaches any
    /// of the four terminal states; terminal states have no outgoing edges.
    pub fn can_transition_to(self, next: AgentRunStatus) -> bool {
        use AgentRunStatus::*;
        matches!(
            (self, next),
            (Requested, Running)
                | (Requested, Cancelled)
                | (Running, Completed)
                | (Running, Failed)
                | (Running, TimedOut)
                | (Running, Cancelled)
        )
    }
}

/// Why a `*Failed` lifecycle event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailReason {
    Error,
    Timeout,
    Cancelled,
}

impl FailReason {
    pub fn into_status(self) -> AgentRunStatus {
        match self {
            FailReason::Error => AgentRunStatus::Failed,
            FailReason::Timeout => AgentRunStatus::TimedOut,
            FailReason::Cancelled => AgentRunStatus::Cancelled,
        }
    }
}

/// Role-specific fields carried on an `AgentRun`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum RoleFields {
    Planner { spec_paths: Vec<String> },
    Implementor { work_item_id: String, branch_name: String },
    Reviewer { work_item_id: String, revision_id: String },
}

impl RoleFields {
    pub fn role(&self) -> Role {
        match self {
            RoleFields::Planner { .. } => Role::Planner,
            RoleFields::Implementor { .. } => Role::Implementor,
            RoleFields::Reviewer { .. } => Role::Reviewer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRun {
    pub session_id: SessionId,
    pub role_fields: RoleFields,
    pub status: AgentRunStatus,
    pub started_at_ms: u64,
    #[serde(default)]
    pub log_file_path: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AgentRun {
    pub fn role(&self) -> Role {
        self.role_fields.role()
    }
}

/// Parameters passed to the agent runtime adapter's `start_agent`.
#[derive(Debug, Clone)]
pub struct AgentStartParams {
    pub session_id: SessionId,
    pub role_fields: RoleFields,
}

#[cfg(test)]
#[path = "agent_run_tests.rs"]
mod tests;
