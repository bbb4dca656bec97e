// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Work item: a trackable unit of work on the code-hosting provider
//! (analogous to an issue).

use serde::{Deserialize, Serialize};

/// Opaque provider-assigned identifier for a work item (e.g. an issue number
/// as a string). Never minted locally.
pub type WorkItemId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkItemStatus {
    Pending,
    Ready,
    InProgress,
    Review,
    Approved,
    NeedsRefinement,
    Blocked,
    Closed,
}

impl WorkItemStatus {
    /// `closed` or `approved` — the two statuses that can unblock dependents.
    pub fn is_terminal_for_dependents(self) -> bool {
        matches!(self, WorkItemStatus::Closed | WorkItemStatus::Approved)
    }
}

crate::simple_display! {
    WorkItemStatus {
        Pending => "pending",
        Ready => "ready",
        InProgress => "in-progress",
        Review => "review",
        Approved => "approved",
        NeedsRefinement => "needs-refinement",
        Blocked => "blocked",
        Closed => "closed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: WorkItemId,
    pub title: String,
    /// Fetched on demand; `None` when the item was observed but its body
    /// hasn't been retrieved yet.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub complexity: Option<String>,
    pub created_at_ms: u64,
    pub status: WorkItemStatus,
    #[serde(default)]
    pub blocked_by: Vec<WorkItemId>,
    #[serde(default)]
    pub linked_revision: Option<String>,
}

impl WorkItem {
    /// True when every entry in `blocked_by` resolves in `store` to a
    /// terminal-for-dependents status (closed or approved). An empty
    /// `blocked_by` list is vacuously unblocked.
    pub fn is_unblocked<'a>(&self, lookup: impl Fn(&str) -> Option<&'a WorkItem>) -> bool {
        self.blocked_by.iter().all(|dep_id| {
            lookup(dep_id).is_some_and(|dep| dep.status.is_terminal_for_dependents())
        })
    }
}

#[cfg(test)]
#[path = "work_item_tests.rs"]
mod tests;
