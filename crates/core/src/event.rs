// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events that trigger state transitions in the engine.
//!
//! Serializes with `{"type": "event:name", ...fields}` via `#[serde(tag = "type")]`.

use crate::agent_run::{FailReason, Role, RoleFields};
use crate::id::SessionId;
use crate::revision::Revision;
use crate::spec::Spec;
use crate::work_item::WorkItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    // -- observation --
    #[serde(rename = "workItemChanged")]
    WorkItemChanged {
        id: String,
        /// `None` when the item was observed deleted (status observation
        /// returned null).
        new: Option<WorkItem>,
    },

    #[serde(rename = "revisionChanged")]
    RevisionChanged {
        id: String,
        new: Option<Revision>,
    },

    #[serde(rename = "specChanged")]
    SpecChanged { spec: Spec },

    // -- agent lifecycle: planner --
    #[serde(rename = "plannerRequested")]
    PlannerRequested { session_id: SessionId, role_fields: RoleFields },
    #[serde(rename = "plannerStarted")]
    PlannerStarted { session_id: SessionId, log_file_path: Option<String> },
    #[serde(rename = "plannerCompleted")]
    PlannerCompleted { session_id: SessionId, spec_paths: Vec<String>, result: PlannerResult },
    #[serde(rename = "plannerFailed")]
    PlannerFailed { session_id: SessionId, reason: FailReason, error: Option<String> },

    // -- agent lifecycle: implementor --
    #[serde(rename = "implementorRequested")]
    ImplementorRequested { session_id: SessionId, role_fields: RoleFields },
    #[serde(rename = "implementorStarted")]
    ImplementorStarted { session_id: SessionId, log_file_path: Option<String> },
    #[serde(rename = "implementorCompleted")]
    ImplementorCompleted { session_id: SessionId, result: ImplementorResult },
    #[serde(rename = "implementorFailed")]
    ImplementorFailed { session_id: SessionId, reason: FailReason, error: Option<String> },

    // -- agent lifecycle: reviewer --
    #[serde(rename = "reviewerRequested")]
    ReviewerRequested { session_id: SessionId, role_fields: RoleFields },
    #[serde(rename = "reviewerStarted")]
    ReviewerStarted { session_id: SessionId, log_file_path: Option<String> },
    #[serde(rename = "reviewerCompleted")]
    ReviewerCompleted { session_id: SessionId, result: ReviewerResult },
    #[serde(rename = "reviewerFailed")]
    ReviewerFailed { session_id: SessionId, reason: FailReason, error: Option<String> },

    // -- error --
    #[serde(rename = "commandRejected")]
    CommandRejected { command: String, reason: String },
    #[serde(rename = "commandFailed")]
    CommandFailed { command: String, error: String },

    // -- user --
    #[serde(rename = "userRequestedImplementorRun")]
    UserRequestedImplementorRun { work_item_id: String },
    #[serde(rename = "userCancelledRun")]
    UserCancelledRun { session_id: SessionId },
    #[serde(rename = "userTransitionedStatus")]
    UserTransitionedStatus { work_item_id: String, new_status: crate::work_item::WorkItemStatus },
}

impl Event {
    /// The role a lifecycle event pertains to, if any.
    pub fn role(&self) -> Option<Role> {
        use Event::*;
        match self {
            PlannerRequested { .. }
            | PlannerStarted { .. }
            | PlannerCompleted { .. }
            | PlannerFailed { .. } => Some(Role::Planner),
            ImplementorRequested { .. }
            | ImplementorStarted { .. }
            | ImplementorCompleted { .. }
            | ImplementorFailed { .. } => Some(Role::Implementor),
            ReviewerRequested { .. }
            | ReviewerStarted { .. }
            | ReviewerCompleted { .. }
            | ReviewerFailed { .. } => Some(Role::Reviewer),
            _ => None,
        }
    }
}

/// `{role:'planner', create:[...], close:[...], update:[...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerResult {
    #[serde(default)]
    pub create: Vec<PlannerCreate>,
    #[serde(default)]
    pub close: Vec<String>,
    #[serde(default)]
    pub update: Vec<PlannerUpdate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerCreate {
    pub temp_id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub blocked_by: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerUpdate {
    pub work_item_id: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImplementorOutcome {
    Completed,
    Blocked,
    ValidationFailure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementorResult {
    pub outcome: ImplementorOutcome,
    pub summary: String,
    /// Populated by the adapter after the session ends, from its own diff of
    /// the worktree against the default branch — never trusted from the
    /// agent's own structured output, which is why this is never
    /// deserialized. Present iff `outcome == Completed`; an empty diff is a
    /// hard error at the adapter layer, never represented here as `Some("")`.
    #[serde(skip_deserializing, default)]
    pub patch: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewVerdict {
    Approve,
    NeedsChanges,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewComment {
    pub path: String,
    #[serde(default)]
    pub line: Option<u32>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub verdict: ReviewVerdict,
    pub summary: String,
    #[serde(default)]
    pub comments: Vec<ReviewComment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewerResult {
    pub review: Review,
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
