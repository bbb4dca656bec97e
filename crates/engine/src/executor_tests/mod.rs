// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod agent;
mod core;

use super::*;
use async_trait::async_trait;
use decree_adapters::agent::AgentSession;
use decree_core::test_support::work_item_fixture;
use decree_core::{FakeClock, Revision, RevisionFile, Review, ReviewHistory, Spec, WorkItem, WorkItemStatus};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::oneshot;

#[derive(Default)]
struct FakeWorkItems {
    item: Mutex<Option<WorkItem>>,
    created: Mutex<Vec<(String, String, Vec<String>, Vec<String>)>>,
    updated: Mutex<Vec<(String, Option<String>, Option<Vec<String>>)>>,
}

#[async_trait]
impl WorkItemProvider for FakeWorkItems {
    async fn list_open(&self) -> Result<Vec<WorkItem>, AdapterError> {
        Ok(self.item.lock().unwrap().clone().into_iter().collect())
    }
    async fn get_work_item(&self, _work_item_id: &str) -> Result<Option<WorkItem>, AdapterError> {
        Ok(self.item.lock().unwrap().clone())
    }
    async fn get_work_item_body(&self, _work_item_id: &str) -> Result<String, AdapterError> {
        Ok(self.item.lock().unwrap().as_ref().and_then(|i| i.body.clone()).unwrap_or_default())
    }
    async fn create(&self, title: &str, body: &str, labels: &[String], blocked_by: &[String]) -> Result<WorkItem, AdapterError> {
        self.created.lock().unwrap().push((title.to_string(), body.to_string(), labels.to_vec(), blocked_by.to_vec()));
        Ok(work_item_fixture("new", WorkItemStatus::Pending))
    }
    async fn update(&self, work_item_id: &str, body: Option<&str>, labels: Option<&[String]>) -> Result<(), AdapterError> {
        self.updated.lock().unwrap().push((work_item_id.to_string(), body.map(str::to_string), labels.map(<[String]>::to_vec)));
        Ok(())
    }
    async fn transition_status(&self, _work_item_id: &str, _new_status: WorkItemStatus) -> Result<(), AdapterError> {
        Ok(())
    }
    async fn close(&self, _work_item_id: &str) -> Result<(), AdapterError> {
        Ok(())
    }
}

#[derive(Default)]
struct FakeRevisions {
    created: Mutex<Vec<(String, String, String, String, String)>>,
    posted_reviews: Mutex<Vec<(String, Review)>>,
}

#[async_trait]
impl RevisionProvider for FakeRevisions {
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
        work_item_id: &str,
        branch_name: &str,
        title: &str,
        patch: &str,
        body: &str,
    ) -> Result<Revision, AdapterError> {
        self.created.lock().unwrap().push((
            work_item_id.to_string(),
            branch_name.to_string(),
            title.to_string(),
            patch.to_string(),
            body.to_string(),
        ));
        Ok(decree_core::test_support::revision_fixture("r1", Some(work_item_id)))
    }
    async fn update(&self, _revision_id: &str, _body: Option<&str>) -> Result<(), AdapterError> {
        Ok(())
    }
    async fn mark_ready(&self, _revision_id: &str) -> Result<(), AdapterError> {
        Ok(())
    }
    async fn comment(&self, _revision_id: &str, _body: &str) -> Result<(), AdapterError> {
        Ok(())
    }
    async fn post_review(&self, revision_id: &str, review: &Review) -> Result<(), AdapterError> {
        self.posted_reviews.lock().unwrap().push((revision_id.to_string(), review.clone()));
        Ok(())
    }
    async fn update_review(&self, _review_id: &str, _review: &Review) -> Result<(), AdapterError> {
        Ok(())
    }
}

#[derive(Default)]
struct FakeSpecs {
    content: HashMap<String, String>,
}

#[async_trait]
impl SpecProvider for FakeSpecs {
    async fn list_specs(&self) -> Result<Vec<Spec>, AdapterError> {
        Ok(Vec::new())
    }
    async fn get_spec_content(&self, blob_sha: &str) -> Result<String, AdapterError> {
        self.content.get(blob_sha).cloned().ok_or_else(|| AdapterError::Provider(format!("no content for {blob_sha}")))
    }
}

/// Never actually starts a session: its one caller (`spawn_agent_session`) is
/// fire-and-forget, so the background task settling on an immediate failure
/// is harmless for tests that only assert the command's synchronous return.
struct FakeAgentAdapter;

#[async_trait]
impl AgentAdapter for FakeAgentAdapter {
    async fn start_agent(
        &self,
        params: AgentStartParams,
        _prompt: String,
        _timeout: Duration,
    ) -> Result<AgentSession, AdapterError> {
        let (_output_tx, output_rx) = mpsc::channel(1);
        let (result_tx, result_rx) = oneshot::channel();
        let _ = result_tx.send(Err(AdapterError::Agent("fake adapter never completes a session".into())));
        Ok(AgentSession { session_id: params.session_id, output: output_rx, result: result_rx })
    }

    async fn cancel_agent(&self, _session_id: &SessionId) -> Result<(), AdapterError> {
        Ok(())
    }
}

fn executor(
    store: StateStore,
    work_items: Arc<FakeWorkItems>,
    revisions: Arc<FakeRevisions>,
    specs: Arc<FakeSpecs>,
) -> CommandExecutor<FakeClock> {
    let (event_tx, _event_rx) = mpsc::channel(16);
    CommandExecutor::new(
        store,
        work_items,
        revisions,
        specs,
        Arc::new(FakeAgentAdapter),
        event_tx,
        PathBuf::from("/repo"),
        "main".to_string(),
        Duration::from_secs(3600),
        None,
        Vec::new(),
        RetryPolicy::default(),
        FakeClock::new(),
    )
}
