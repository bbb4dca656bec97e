// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder provider and agent adapters. A concrete code-hosting client
//! and LLM SDK wrapper are external collaborators this crate does not ship
//! (see `decree-adapters::provider` and `decree-adapters::agent`); wiring a
//! real deployment means swapping these out for implementations of the same
//! traits. Until then `decree run` still exercises the full event loop and
//! scheduler against an empty, never-changing view of the provider.

use async_trait::async_trait;
use decree_adapters::agent::{AgentAdapter, AgentSession};
use decree_adapters::provider::{RevisionProvider, SpecProvider, WorkItemProvider};
use decree_adapters::AdapterError;
use decree_core::{
    AgentStartParams, Review, ReviewHistory, Revision, RevisionFile, Spec, WorkItem, WorkItemStatus,
};
use std::time::Duration;

pub struct NullWorkItemProvider;

#[async_trait]
impl WorkItemProvider for NullWorkItemProvider {
    async fn list_open(&self) -> Result<Vec<WorkItem>, AdapterError> {
        Ok(Vec::new())
    }

    async fn get_work_item(&self, _work_item_id: &str) -> Result<Option<WorkItem>, AdapterError> {
        Ok(None)
    }

    async fn get_work_item_body(&self, _work_item_id: &str) -> Result<String, AdapterError> {
        Ok(String::new())
    }

    async fn create(
        &self,
        _title: &str,
        _body: &str,
        _labels: &[String],
        _blocked_by: &[String],
    ) -> Result<WorkItem, AdapterError> {
        Err(AdapterError::Definition("no code-hosting client is configured".into()))
    }

    async fn update(&self, _work_item_id: &str, _body: Option<&str>, _labels: Option<&[String]>) -> Result<(), AdapterError> {
        Err(AdapterError::Definition("no code-hosting client is configured".into()))
    }

    async fn transition_status(&self, _work_item_id: &str, _new_status: WorkItemStatus) -> Result<(), AdapterError> {
        Err(AdapterError::Definition("no code-hosting client is configured".into()))
    }

    async fn close(&self, _work_item_id: &str) -> Result<(), AdapterError> {
        Err(AdapterError::Definition("no code-hosting client is configured".into()))
    }
}

pub struct NullRevisionProvider;

#[async_trait]
impl RevisionProvider for NullRevisionProvider {
    async fn list_open(&self) -> Result<Vec<Revision>, AdapterError> {
        Ok(Vec::new())
    }

    async fn get_revision(&self, _revision_id: &str) -> Result<Option<Revision>, AdapterError> {
        Ok(None)
    }

    async fn get_revision_files(&self, _revision_id: &str) -> Result<Vec<RevisionFile>, AdapterError> {
        Ok(Vec::new())
    }

    async fn get_review_history(&self, _revision_id: &str) -> Result<ReviewHistory, AdapterError> {
        Ok(ReviewHistory::default())
    }

    async fn create_from_patch(
        &self,
        _work_item_id: &str,
        _branch_name: &str,
        _title: &str,
        _patch: &str,
        _body: &str,
    ) -> Result<Revision, AdapterError> {
        Err(AdapterError::Definition("no code-hosting client is configured".into()))
    }

    async fn update(&self, _revision_id: &str, _body: Option<&str>) -> Result<(), AdapterError> {
        Err(AdapterError::Definition("no code-hosting client is configured".into()))
    }

    async fn mark_ready(&self, _revision_id: &str) -> Result<(), AdapterError> {
        Err(AdapterError::Definition("no code-hosting client is configured".into()))
    }

    async fn comment(&self, _revision_id: &str, _body: &str) -> Result<(), AdapterError> {
        Err(AdapterError::Definition("no code-hosting client is configured".into()))
    }

    async fn post_review(&self, _revision_id: &str, _review: &Review) -> Result<(), AdapterError> {
        Err(AdapterError::Definition("no code-hosting client is configured".into()))
    }

    async fn update_review(&self, _review_id: &str, _review: &Review) -> Result<(), AdapterError> {
        Err(AdapterError::Definition("no code-hosting client is configured".into()))
    }
}

pub struct NullSpecProvider;

#[async_trait]
impl SpecProvider for NullSpecProvider {
    async fn list_specs(&self) -> Result<Vec<Spec>, AdapterError> {
        Ok(Vec::new())
    }

    async fn get_spec_content(&self, _blob_sha: &str) -> Result<String, AdapterError> {
        Ok(String::new())
    }
}

pub struct NullAgentAdapter;

#[async_trait]
impl AgentAdapter for NullAgentAdapter {
    async fn start_agent(
        &self,
        _params: AgentStartParams,
        _prompt: String,
        _timeout: Duration,
    ) -> Result<AgentSession, AdapterError> {
        Err(AdapterError::Definition("no agent adapter is configured".into()))
    }

    async fn cancel_agent(&self, _session_id: &decree_core::SessionId) -> Result<(), AdapterError> {
        Ok(())
    }
}
