// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Provider traits: the seams to the code-hosting
//! provider's work items, revisions, and spec tree. The concrete client is
//! out of scope — these traits are the contract the executor and reconciler
//! code against.

use crate::error::AdapterError;
use async_trait::async_trait;
use decree_core::{Review, Revision, RevisionFile, ReviewHistory, Spec, WorkItem, WorkItemStatus};

#[async_trait]
pub trait WorkItemProvider: Send + Sync {
    async fn list_open(&self) -> Result<Vec<WorkItem>, AdapterError>;
    async fn get_work_item(&self, work_item_id: &str) -> Result<Option<WorkItem>, AdapterError>;
    async fn get_work_item_body(&self, work_item_id: &str) -> Result<String, AdapterError>;
    async fn create(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
        blocked_by: &[String],
    ) -> Result<WorkItem, AdapterError>;
    async fn update(
        &self,
        work_item_id: &str,
        body: Option<&str>,
        labels: Option<&[String]>,
    ) -> Result<(), AdapterError>;
    async fn transition_status(&self, work_item_id: &str, new_status: WorkItemStatus) -> Result<(), AdapterError>;
    async fn close(&self, work_item_id: &str) -> Result<(), AdapterError>;
}

#[async_trait]
pub trait RevisionProvider: Send + Sync {
    async fn list_open(&self) -> Result<Vec<Revision>, AdapterError>;
    async fn get_revision(&self, revision_id: &str) -> Result<Option<Revision>, AdapterError>;
    async fn get_revision_files(&self, revision_id: &str) -> Result<Vec<RevisionFile>, AdapterError>;
    async fn get_review_history(&self, revision_id: &str) -> Result<ReviewHistory, AdapterError>;
    async fn create_from_patch(
        &self,
        work_item_id: &str,
        branch_name: &str,
        title: &str,
        patch: &str,
        body: &str,
    ) -> Result<Revision, AdapterError>;
    async fn update(&self, revision_id: &str, body: Option<&str>) -> Result<(), AdapterError>;
    async fn mark_ready(&self, revision_id: &str) -> Result<(), AdapterError>;
    async fn comment(&self, revision_id: &str, body: &str) -> Result<(), AdapterError>;
    async fn post_review(&self, revision_id: &str, review: &Review) -> Result<(), AdapterError>;
    async fn update_review(&self, review_id: &str, review: &Review) -> Result<(), AdapterError>;
}

#[async_trait]
pub trait SpecProvider: Send + Sync {
    /// Walks the configured specs directory and returns every spec found,
    /// with frontmatter status defaulting to `draft` on parse failure.
    async fn list_specs(&self) -> Result<Vec<Spec>, AdapterError>;
    async fn get_spec_content(&self, blob_sha: &str) -> Result<String, AdapterError>;
}
