// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test-only builders and proptest strategies, gated behind `test-support`
//! so downstream crates can depend on them from their own test targets
//! without pulling `proptest` into release builds.

use crate::revision::{Pipeline, PipelineStatus, Revision};
use crate::work_item::{Priority, WorkItem, WorkItemStatus};
use proptest::prelude::*;

pub fn work_item_fixture(id: &str, status: WorkItemStatus) -> WorkItem {
    WorkItem {
        id: id.to_string(),
        title: format!("work item {id}"),
        body: Some(String::new()),
        priority: Some(Priority::Medium),
        complexity: None,
        created_at_ms: 0,
        status,
        blocked_by: Vec::new(),
        linked_revision: None,
    }
}

pub fn revision_fixture(id: &str, work_item_id: Option<&str>) -> Revision {
    Revision {
        id: id.to_string(),
        title: format!("revision {id}"),
        url: format!("https://example.invalid/revisions/{id}"),
        head_sha: "0".repeat(40),
        head_ref: format!("decree/{id}"),
        author: "decree-bot".to_string(),
        body: String::new(),
        is_draft: false,
        work_item_id: work_item_id.map(str::to_string),
        pipeline: None,
        review_id: None,
    }
}

pub fn arb_work_item_status() -> impl Strategy<Value = WorkItemStatus> {
    prop_oneof![
        Just(WorkItemStatus::Pending),
        Just(WorkItemStatus::Ready),
        Just(WorkItemStatus::InProgress),
        Just(WorkItemStatus::Review),
        Just(WorkItemStatus::Approved),
        Just(WorkItemStatus::NeedsRefinement),
        Just(WorkItemStatus::Blocked),
        Just(WorkItemStatus::Closed),
    ]
}

pub fn arb_pipeline_status() -> impl Strategy<Value = PipelineStatus> {
    prop_oneof![
        Just(PipelineStatus::Success),
        Just(PipelineStatus::Failure),
        Just(PipelineStatus::Pending),
    ]
}

pub fn arb_pipeline() -> impl Strategy<Value = Pipeline> {
    arb_pipeline_status().prop_map(|status| Pipeline { status, url: None, reason: None })
}

#[cfg(test)]
#[path = "test_support_tests.rs"]
mod tests;
