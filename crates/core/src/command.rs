// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commands: the side-effecting work a handler asks the executor to perform.
//! Handlers are pure `(event, state) -> Vec<Command>`; only the
//! executor touches the provider, the agent runtime, or the clock.

use crate::event::{ImplementorResult, PlannerResult, Review, ReviewerResult};
use crate::id::SessionId;
use crate::work_item::WorkItemStatus;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start a planner session over the given approved spec paths. Rejected
    /// by the executor's role singleton if a planner run is already active.
    RequestPlannerRun { spec_paths: Vec<String> },
    /// Start an implementor session for a ready work item.
    RequestImplementorRun { work_item_id: String },
    /// Start a reviewer session for a revision ready to review.
    RequestReviewerRun { work_item_id: String, revision_id: String },
    /// Cooperatively cancel a running session of any role.
    CancelAgentRun { session_id: SessionId },

    /// Fan out a completed planner session's structured output into
    /// `CreateWorkItem`/`UpdateWorkItem`/`CloseWorkItem` writes.
    ApplyPlannerResult { session_id: SessionId, spec_paths: Vec<String>, result: PlannerResult },
    /// Fan out a completed implementor session: on `completed`, a revision
    /// from the extracted patch; otherwise a status transition.
    ApplyImplementorResult { session_id: SessionId, work_item_id: String, result: ImplementorResult },
    /// Fan out a completed reviewer session's verdict into a posted review
    /// and the corresponding work item status transition.
    ApplyReviewerResult {
        session_id: SessionId,
        work_item_id: String,
        revision_id: String,
        result: ReviewerResult,
    },

    CreateWorkItem { title: String, body: String, labels: Vec<String>, blocked_by: Vec<String> },
    UpdateWorkItem { work_item_id: String, body: Option<String>, labels: Option<Vec<String>> },
    TransitionWorkItemStatus { work_item_id: String, new_status: WorkItemStatus },
    CloseWorkItem { work_item_id: String },

    CreateRevisionFromPatch { work_item_id: String, branch_name: String, title: String, patch: String, body: String },
    UpdateRevision { revision_id: String, body: Option<String> },
    CommentOnRevision { revision_id: String, body: String },
    PostRevisionReview { revision_id: String, review: Review },
    UpdateRevisionReview { review_id: String, review: Review },

    /// Append an error entry to the bounded in-memory error log.
    RecordError { kind: crate::error::ErrorKind, message: String },
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
