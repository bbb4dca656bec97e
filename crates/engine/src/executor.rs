// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command executor: turns a `Command` into provider writes and
//! agent-start calls, enforces the role-singleton concurrency guard, and
//! re-emits lifecycle events. Provider writes are wrapped in the retry
//! helper; agent sessions run in the background and report back
//! through the event channel threaded in at construction.

use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::store::StateStore;
use decree_adapters::agent::prompt::{
    build_implementor_prompt, build_planner_prompt, build_reviewer_prompt, SpecChangeContext, SpecChangeKind,
};
use decree_adapters::agent::schema::StructuredOutput;
use decree_adapters::agent::session_log::{session_log_path, SessionLog, SessionOutcome};
use decree_adapters::agent::worktree;
use decree_adapters::agent::AgentAdapter;
use decree_adapters::provider::{RevisionProvider, SpecProvider, WorkItemProvider};
use decree_adapters::AdapterError;
use decree_core::event::{ImplementorOutcome, ImplementorResult, PlannerResult, ReviewerResult};
use decree_core::{format_blocked_by_marker, AgentStartParams, Clock, Command, Event, FailReason, Role, RoleFields, SessionId};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[async_trait::async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, command: Command) -> Vec<Event>;

    async fn execute_all(&self, commands: Vec<Command>) -> Vec<Event> {
        let mut events = Vec::new();
        for command in commands {
            events.extend(self.execute(command).await);
        }
        events
    }
}

pub struct CommandExecutor<C: Clock> {
    store: StateStore,
    work_items: Arc<dyn WorkItemProvider>,
    revisions: Arc<dyn RevisionProvider>,
    specs: Arc<dyn SpecProvider>,
    agent: Arc<dyn AgentAdapter>,
    event_tx: mpsc::Sender<Event>,
    repo_root: PathBuf,
    default_branch: String,
    max_agent_duration: Duration,
    logs_dir: Option<PathBuf>,
    context_paths: Vec<PathBuf>,
    retry_policy: RetryPolicy,
    clock: C,
}

impl<C: Clock + 'static> CommandExecutor<C> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store: StateStore,
        work_items: Arc<dyn WorkItemProvider>,
        revisions: Arc<dyn RevisionProvider>,
        specs: Arc<dyn SpecProvider>,
        agent: Arc<dyn AgentAdapter>,
        event_tx: mpsc::Sender<Event>,
        repo_root: PathBuf,
        default_branch: String,
        max_agent_duration: Duration,
        logs_dir: Option<PathBuf>,
        context_paths: Vec<PathBuf>,
        retry_policy: RetryPolicy,
        clock: C,
    ) -> Self {
        Self {
            store,
            work_items,
            revisions,
            specs,
            agent,
            event_tx,
            repo_root,
            default_branch,
            max_agent_duration,
            logs_dir,
            context_paths,
            retry_policy,
            clock,
        }
    }

    fn role_available(&self, role: Role) -> bool {
        self.store.get_state().active_run_for_role(role).is_none()
    }

    fn reject(command_label: &str, reason: impl Into<String>) -> Event {
        Event::CommandRejected { command: command_label.to_string(), reason: reason.into() }
    }

    fn failed(command_label: &str, error: &AdapterError) -> Event {
        Event::CommandFailed { command: command_label.to_string(), error: error.to_string() }
    }

    /// Starts an agent session in the background and wires its lifecycle
    /// into `event_tx`. Returns the immediate `*Requested` event; `Started`
    /// and `Completed`/`Failed` follow asynchronously.
    fn spawn_agent_session(&self, session_id: SessionId, role_fields: RoleFields) {
        let agent = self.agent.clone();
        let work_items = self.work_items.clone();
        let revisions = self.revisions.clone();
        let specs = self.specs.clone();
        let store = self.store.clone();
        let event_tx = self.event_tx.clone();
        let repo_root = self.repo_root.clone();
        let default_branch = self.default_branch.clone();
        let timeout = self.max_agent_duration;
        let logs_dir = self.logs_dir.clone();
        let context_paths = self.context_paths.clone();
        let started_at_ms = self.clock.epoch_ms();

        tokio::spawn(async move {
            run_agent_session(
                RunContext {
                    agent,
                    work_items,
                    revisions,
                    specs,
                    store,
                    repo_root,
                    default_branch,
                    timeout,
                    logs_dir,
                    context_paths,
                    started_at_ms,
                },
                session_id,
                role_fields,
                event_tx,
            )
            .await;
        });
    }
}

#[async_trait::async_trait]
impl<C: Clock + 'static> Executor for CommandExecutor<C> {
    async fn execute(&self, command: Command) -> Vec<Event> {
        match command {
            Command::RequestPlannerRun { spec_paths } => {
                if !self.role_available(Role::Planner) {
                    return vec![Self::reject("requestPlannerRun", "role already active")];
                }
                let session_id = SessionId::new();
                let role_fields = RoleFields::Planner { spec_paths };
                self.spawn_agent_session(session_id.clone(), role_fields.clone());
                vec![Event::PlannerRequested { session_id, role_fields }]
            }

            Command::RequestImplementorRun { work_item_id } => {
                if !self.role_available(Role::Implementor) {
                    return vec![Self::reject("requestImplementorRun", "role already active")];
                }
                let session_id = SessionId::new();
                let role_fields =
                    RoleFields::Implementor { work_item_id: work_item_id.clone(), branch_name: format!("decree/{work_item_id}") };
                self.spawn_agent_session(session_id.clone(), role_fields.clone());
                vec![Event::ImplementorRequested { session_id, role_fields }]
            }

            Command::RequestReviewerRun { work_item_id, revision_id } => {
                if !self.role_available(Role::Reviewer) {
                    return vec![Self::reject("requestReviewerRun", "role already active")];
                }
                let session_id = SessionId::new();
                let role_fields = RoleFields::Reviewer { work_item_id, revision_id };
                self.spawn_agent_session(session_id.clone(), role_fields.clone());
                vec![Event::ReviewerRequested { session_id, role_fields }]
            }

            Command::CancelAgentRun { session_id } => {
                if let Err(e) = self.agent.cancel_agent(&session_id).await {
                    return vec![Self::failed("cancelAgentRun", &e)];
                }
                Vec::new()
            }

            Command::ApplyPlannerResult { session_id: _, spec_paths: _, result } => {
                self.apply_planner_result(result).await
            }

            Command::ApplyImplementorResult { session_id: _, work_item_id, result } => {
                self.apply_implementor_result(work_item_id, result).await
            }

            Command::ApplyReviewerResult { session_id: _, work_item_id: _, revision_id, result } => {
                self.apply_reviewer_result(revision_id, result).await
            }

            Command::CreateWorkItem { title, body, labels, blocked_by } => {
                let provider = self.work_items.clone();
                let res = retry_with_backoff(&self.retry_policy, || {
                    provider.create(&title, &body, &labels, &blocked_by)
                })
                .await;
                match res {
                    Ok(_) => Vec::new(),
                    Err(e) => vec![Self::failed("createWorkItem", &e)],
                }
            }

            Command::UpdateWorkItem { work_item_id, body, labels } => {
                let provider = self.work_items.clone();
                let res = retry_with_backoff(&self.retry_policy, || {
                    provider.update(&work_item_id, body.as_deref(), labels.as_deref())
                })
                .await;
                match res {
                    Ok(()) => Vec::new(),
                    Err(e) => vec![Self::failed("updateWorkItem", &e)],
                }
            }

            Command::TransitionWorkItemStatus { work_item_id, new_status } => {
                let provider = self.work_items.clone();
                let res =
                    retry_with_backoff(&self.retry_policy, || provider.transition_status(&work_item_id, new_status)).await;
                match res {
                    Ok(()) => Vec::new(),
                    Err(e) => vec![Self::failed("transitionWorkItemStatus", &e)],
                }
            }

            Command::CloseWorkItem { work_item_id } => {
                let provider = self.work_items.clone();
                let res = retry_with_backoff(&self.retry_policy, || provider.close(&work_item_id)).await;
                match res {
                    Ok(()) => Vec::new(),
                    Err(e) => vec![Self::failed("closeWorkItem", &e)],
                }
            }

            Command::CreateRevisionFromPatch { work_item_id, branch_name, title, patch, body } => {
                let provider = self.revisions.clone();
                let res = retry_with_backoff(&self.retry_policy, || {
                    provider.create_from_patch(&work_item_id, &branch_name, &title, &patch, &body)
                })
                .await;
                match res {
                    Ok(_) => Vec::new(),
                    Err(e) => vec![Self::failed("createRevisionFromPatch", &e)],
                }
            }

            Command::UpdateRevision { revision_id, body } => {
                let provider = self.revisions.clone();
                let res = retry_with_backoff(&self.retry_policy, || provider.update(&revision_id, body.as_deref())).await;
                match res {
                    Ok(()) => Vec::new(),
                    Err(e) => vec![Self::failed("updateRevision", &e)],
                }
            }

            Command::CommentOnRevision { revision_id, body } => {
                let provider = self.revisions.clone();
                let res = retry_with_backoff(&self.retry_policy, || provider.comment(&revision_id, &body)).await;
                match res {
                    Ok(()) => Vec::new(),
                    Err(e) => vec![Self::failed("commentOnRevision", &e)],
                }
            }

            Command::PostRevisionReview { revision_id, review } => {
                let provider = self.revisions.clone();
                let res = retry_with_backoff(&self.retry_policy, || provider.post_review(&revision_id, &review)).await;
                match res {
                    Ok(()) => Vec::new(),
                    Err(e) => vec![Self::failed("postRevisionReview", &e)],
                }
            }

            Command::UpdateRevisionReview { review_id, review } => {
                let provider = self.revisions.clone();
                let res = retry_with_backoff(&self.retry_policy, || provider.update_review(&review_id, &review)).await;
                match res {
                    Ok(()) => Vec::new(),
                    Err(e) => vec![Self::failed("updateRevisionReview", &e)],
                }
            }

            Command::RecordError { kind, message } => {
                vec![Event::CommandFailed { command: format!("{kind}"), error: message }]
            }
        }
    }
}

impl<C: Clock + 'static> CommandExecutor<C> {
    /// Fans a completed planner session's structured output into provider
    /// writes: creates/updates/closes work items per the result.
    async fn apply_planner_result(&self, result: PlannerResult) -> Vec<Event> {
        let mut events = Vec::new();
        for create in result.create {
            let res = retry_with_backoff(&self.retry_policy, || {
                self.work_items.create(&create.title, &create.body, &create.labels, &create.blocked_by)
            })
            .await;
            if let Err(e) = res {
                events.push(Self::failed("createWorkItem", &e));
            }
        }
        for update in result.update {
            let res = retry_with_backoff(&self.retry_policy, || {
                self.work_items.update(&update.work_item_id, update.body.as_deref(), update.labels.as_deref())
            })
            .await;
            if let Err(e) = res {
                events.push(Self::failed("updateWorkItem", &e));
            }
        }
        for work_item_id in result.close {
            let res = retry_with_backoff(&self.retry_policy, || self.work_items.close(&work_item_id)).await;
            if let Err(e) = res {
                events.push(Self::failed("closeWorkItem", &e));
            }
        }
        events
    }

    /// On `completed`, creates a revision from the extracted patch; on
    /// `blocked`/`validation-failure`, returns the item to `needs-refinement`
    /// or `pending` by appending a comment and leaving status transitions to
    /// the handler layer, which already requested this on `implementorFailed`
    /// — here we only handle the success path's provider write.
    async fn apply_implementor_result(&self, work_item_id: String, result: ImplementorResult) -> Vec<Event> {
        match result.outcome {
            ImplementorOutcome::Completed => {
                let Some(patch) = result.patch.filter(|p| !p.is_empty()) else {
                    return vec![Self::failed("applyImplementorResult", &AdapterError::Agent("completed outcome with no patch".into()))];
                };
                let blocked_by = match self.work_items.get_work_item(&work_item_id).await {
                    Ok(Some(item)) => item.blocked_by,
                    Ok(None) => Vec::new(),
                    Err(e) => return vec![Self::failed("applyImplementorResult", &e)],
                };
                let body = match format_blocked_by_marker(&blocked_by) {
                    Some(marker) => format!("{}\n\n{marker}", result.summary),
                    None => result.summary.clone(),
                };
                let branch_name = format!("decree/{work_item_id}");
                let res = retry_with_backoff(&self.retry_policy, || {
                    self.revisions.create_from_patch(&work_item_id, &branch_name, &result.summary, &patch, &body)
                })
                .await;
                match res {
                    Ok(_) => Vec::new(),
                    Err(e) => vec![Self::failed("createRevisionFromPatch", &e)],
                }
            }
            ImplementorOutcome::Blocked | ImplementorOutcome::ValidationFailure => {
                let res =
                    retry_with_backoff(&self.retry_policy, || self.work_items.update(&work_item_id, Some(&result.summary), None))
                        .await;
                match res {
                    Ok(()) => Vec::new(),
                    Err(e) => vec![Self::failed("updateWorkItem", &e)],
                }
            }
        }
    }

    async fn apply_reviewer_result(&self, revision_id: String, result: ReviewerResult) -> Vec<Event> {
        let res = retry_with_backoff(&self.retry_policy, || self.revisions.post_review(&revision_id, &result.review)).await;
        match res {
            Ok(()) => Vec::new(),
            Err(e) => vec![Self::failed("postRevisionReview", &e)],
        }
    }
}

struct RunContext {
    agent: Arc<dyn AgentAdapter>,
    work_items: Arc<dyn WorkItemProvider>,
    revisions: Arc<dyn RevisionProvider>,
    specs: Arc<dyn SpecProvider>,
    store: StateStore,
    repo_root: PathBuf,
    default_branch: String,
    timeout: Duration,
    logs_dir: Option<PathBuf>,
    context_paths: Vec<PathBuf>,
    started_at_ms: u64,
}

/// Assembles the trigger prompt, runs the agent to completion (or timeout),
/// validates its structured result, and emits `*Started` followed by
/// `*Completed`/`*Failed` on `event_tx`. Always cleans up the implementor's
/// worktree on the way out, regardless of outcome.
async fn run_agent_session(ctx: RunContext, session_id: SessionId, role_fields: RoleFields, event_tx: mpsc::Sender<Event>) {
    let role = role_fields.role();
    let prompt = match build_prompt(&ctx, &role_fields).await {
        Ok(prompt) => prompt,
        Err(e) => {
            let _ = event_tx.send(fail_event(role, session_id, FailReason::Error, Some(e.to_string()))).await;
            return;
        }
    };

    let worktree_path = if let RoleFields::Implementor { branch_name, .. } = &role_fields {
        match worktree::create_worktree(&ctx.repo_root, branch_name, &ctx.default_branch).await {
            Ok(path) => Some(path),
            Err(e) => {
                let _ = event_tx.send(fail_event(role, session_id, FailReason::Error, Some(e.to_string()))).await;
                return;
            }
        }
    } else {
        None
    };

    let params = AgentStartParams { session_id: session_id.clone(), role_fields: role_fields.clone() };
    let mut session = match ctx.agent.start_agent(params, prompt, ctx.timeout).await {
        Ok(session) => session,
        Err(e) => {
            cleanup_worktree(&ctx, &role_fields, &worktree_path).await;
            let _ = event_tx.send(fail_event(role, session_id, FailReason::Error, Some(e.to_string()))).await;
            return;
        }
    };

    let log_file_path =
        ctx.logs_dir.as_ref().map(|dir| session_log_path(dir, ctx.started_at_ms, role, work_item_id_of(&role_fields)));
    let _ = event_tx
        .send(started_event(role, session_id.clone(), log_file_path.as_ref().map(|p| p.display().to_string())))
        .await;

    let mut log = match &log_file_path {
        Some(path) => SessionLog::create(path.clone(), &format!("# session {session_id} ({role})")).await.ok(),
        None => None,
    };

    while let Some(chunk) = session.output.recv().await {
        if let Some(log) = log.as_mut() {
            let _ = log.append_message("agent", &chunk).await;
        }
    }

    let outcome = session.result.await;
    let outcome = match outcome {
        Ok(Ok(structured)) => match attach_verified_patch(&ctx, &worktree_path, structured).await {
            Ok(structured) => Ok(Ok(structured)),
            Err(e) => Ok(Err(e)),
        },
        other => other,
    };

    cleanup_worktree(&ctx, &role_fields, &worktree_path).await;

    let final_event = match outcome {
        Ok(Ok(structured)) => completed_event(session_id.clone(), &role_fields, structured),
        Ok(Err(e)) => fail_event(role, session_id.clone(), classify_error(&e), Some(e.to_string())),
        Err(_) => fail_event(role, session_id.clone(), FailReason::Cancelled, Some("agent result channel dropped".into())),
    };

    if let Some(log) = log {
        let session_outcome = match &final_event {
            Event::PlannerCompleted { .. } | Event::ImplementorCompleted { .. } | Event::ReviewerCompleted { .. } => {
                SessionOutcome::Completed
            }
            _ => match &final_event {
                Event::PlannerFailed { reason, .. } | Event::ImplementorFailed { reason, .. } | Event::ReviewerFailed { reason, .. } => {
                    match reason {
                        FailReason::Cancelled => SessionOutcome::Cancelled,
                        _ => SessionOutcome::Failed,
                    }
                }
                _ => SessionOutcome::Failed,
            },
        };
        let _ = log.finish(session_outcome).await;
    }

    let _ = event_tx.send(final_event).await;
}

fn work_item_id_of(role_fields: &RoleFields) -> Option<&str> {
    match role_fields {
        RoleFields::Planner { .. } => None,
        RoleFields::Implementor { work_item_id, .. } | RoleFields::Reviewer { work_item_id, .. } => Some(work_item_id),
    }
}

fn classify_error(error: &AdapterError) -> FailReason {
    match error {
        AdapterError::Timeout => FailReason::Timeout,
        AdapterError::Cancelled => FailReason::Cancelled,
        _ => FailReason::Error,
    }
}

fn started_event(role: Role, session_id: SessionId, log_file_path: Option<String>) -> Event {
    match role {
        Role::Planner => Event::PlannerStarted { session_id, log_file_path },
        Role::Implementor => Event::ImplementorStarted { session_id, log_file_path },
        Role::Reviewer => Event::ReviewerStarted { session_id, log_file_path },
    }
}

fn fail_event(role: Role, session_id: SessionId, reason: FailReason, error: Option<String>) -> Event {
    match role {
        Role::Planner => Event::PlannerFailed { session_id, reason, error },
        Role::Implementor => Event::ImplementorFailed { session_id, reason, error },
        Role::Reviewer => Event::ReviewerFailed { session_id, reason, error },
    }
}

fn completed_event(session_id: SessionId, role_fields: &RoleFields, output: StructuredOutput) -> Event {
    match output {
        StructuredOutput::Planner(result) => {
            let spec_paths = match role_fields {
                RoleFields::Planner { spec_paths } => spec_paths.clone(),
                _ => Vec::new(),
            };
            Event::PlannerCompleted { session_id, spec_paths, result }
        }
        StructuredOutput::Implementor(result) => Event::ImplementorCompleted { session_id, result },
        StructuredOutput::Reviewer(result) => Event::ReviewerCompleted { session_id, result },
    }
}

/// The agent is never the source of truth for its own diff: on a `completed`
/// outcome, this replaces whatever (unparsed) patch claim the structured
/// output carried with a real diff of the worktree against the default
/// branch, failing the run if that diff comes up empty.
async fn attach_verified_patch(
    ctx: &RunContext,
    worktree_path: &Option<PathBuf>,
    output: StructuredOutput,
) -> Result<StructuredOutput, AdapterError> {
    let StructuredOutput::Implementor(mut result) = output else {
        return Ok(output);
    };
    if result.outcome != ImplementorOutcome::Completed {
        return Ok(StructuredOutput::Implementor(result));
    }
    let Some(worktree_path) = worktree_path else {
        return Err(AdapterError::Agent("completed outcome with no worktree to diff".into()));
    };
    let diff = worktree::diff_against_default_branch(worktree_path, &ctx.default_branch).await?;
    if diff.is_empty() {
        return Err(AdapterError::Agent("completed outcome produced an empty diff".into()));
    }
    result.patch = Some(diff);
    Ok(StructuredOutput::Implementor(result))
}

async fn cleanup_worktree(ctx: &RunContext, role_fields: &RoleFields, path: &Option<PathBuf>) {
    if let (RoleFields::Implementor { branch_name, .. }, Some(path)) = (role_fields, path) {
        worktree::force_remove_worktree(&ctx.repo_root, path, branch_name).await;
    }
}

async fn build_prompt(ctx: &RunContext, role_fields: &RoleFields) -> Result<String, AdapterError> {
    let mut prompt = build_role_prompt(ctx, role_fields).await?;
    for extra in context_paths_content(ctx).await? {
        prompt.push_str(&extra);
    }
    Ok(prompt)
}

/// One changed-spec section per path, classified `added` when no prior blob
/// SHA is on record and `modified` (with a unified diff against that prior
/// SHA) otherwise.
async fn spec_change_contexts(ctx: &RunContext, spec_paths: &[String]) -> Result<Vec<SpecChangeContext>, AdapterError> {
    let state = ctx.store.get_state();
    let mut changed = Vec::with_capacity(spec_paths.len());
    for path in spec_paths {
        let prior_sha = state.last_planned_shas.get(path).cloned();
        let Some(prior_sha) = prior_sha else {
            changed.push(SpecChangeContext { path: path.clone(), kind: SpecChangeKind::Added, diff: None });
            continue;
        };
        let current_sha = state.specs.get(path).map(|spec| spec.blob_sha.clone());
        let diff = match &current_sha {
            Some(current_sha) if current_sha != &prior_sha => {
                let old_content = ctx.specs.get_spec_content(&prior_sha).await?;
                let new_content = ctx.specs.get_spec_content(current_sha).await?;
                Some(unified_spec_diff(&old_content, &new_content))
            }
            _ => None,
        };
        changed.push(SpecChangeContext { path: path.clone(), kind: SpecChangeKind::Modified, diff });
    }
    Ok(changed)
}

fn unified_spec_diff(old: &str, new: &str) -> String {
    similar::TextDiff::from_lines(old, new).unified_diff().context_radius(3).to_string()
}

/// Reads every configured context file relative to the repo root, each
/// rendered as its own appended section; unreadable files are skipped.
async fn context_paths_content(ctx: &RunContext) -> Result<Vec<String>, AdapterError> {
    let mut sections = Vec::with_capacity(ctx.context_paths.len());
    for path in &ctx.context_paths {
        let full_path = ctx.repo_root.join(path);
        match tokio::fs::read_to_string(&full_path).await {
            Ok(content) => sections.push(format!("\n\n# Context: {}\n\n{content}", path.display())),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "context path unreadable, skipping"),
        }
    }
    Ok(sections)
}

async fn build_role_prompt(ctx: &RunContext, role_fields: &RoleFields) -> Result<String, AdapterError> {
    match role_fields {
        RoleFields::Planner { spec_paths } => {
            let changed = spec_change_contexts(ctx, spec_paths).await?;
            let open_items = ctx.work_items.list_open().await?;
            let refs: Vec<&decree_core::WorkItem> = open_items.iter().collect();
            Ok(build_planner_prompt(&changed, &refs))
        }

        RoleFields::Implementor { work_item_id, .. } => {
            let Some(item) = ctx.work_items.get_work_item(work_item_id).await? else {
                return Err(AdapterError::Agent(format!("work item {work_item_id} not found")));
            };
            let linked_revision = match &item.linked_revision {
                Some(revision_id) => ctx.revisions.get_revision(revision_id).await?,
                None => None,
            };
            let (files, history) = match &linked_revision {
                Some(revision) => {
                    let files = ctx.revisions.get_revision_files(&revision.id).await?;
                    let history = ctx.revisions.get_review_history(&revision.id).await?;
                    (files, Some(history))
                }
                None => (Vec::new(), None),
            };
            Ok(build_implementor_prompt(&item, linked_revision.as_ref(), &files, history.as_ref()))
        }

        RoleFields::Reviewer { work_item_id, revision_id } => {
            let Some(item) = ctx.work_items.get_work_item(work_item_id).await? else {
                return Err(AdapterError::Agent(format!("work item {work_item_id} not found")));
            };
            let Some(revision) = ctx.revisions.get_revision(revision_id).await? else {
                return Err(AdapterError::Agent(format!("revision {revision_id} not found")));
            };
            let files = ctx.revisions.get_revision_files(revision_id).await?;
            let history = ctx.revisions.get_review_history(revision_id).await?;
            Ok(build_reviewer_prompt(&item, &revision, &files, &history))
        }
    }
}

#[cfg(test)]
#[path = "executor_tests/mod.rs"]
mod tests;
