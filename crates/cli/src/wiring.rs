// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Composes the engine, the reconciler's scheduler, and a set of adapters
//! into a running process: loads the planner cache, runs every
//! poller once so the first state is coherent, reaps worktrees left behind
//! by a prior crash, then hands off to the scheduler and event loop until
//! `shutdown` fires.

use decree_adapters::agent::AgentAdapter;
use decree_adapters::provider::{RevisionProvider, SpecProvider, WorkItemProvider};
use decree_adapters::Config;
use decree_core::SystemClock;
use decree_engine::{startup, CommandExecutor, EventLoop, Executor, RetryPolicy, StateStore};
use decree_reconciler::{PollIntervals, Scheduler};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// The provider/agent seam a real deployment supplies; this binary ships
/// only the null-object fallbacks in [`crate::null_adapters`].
pub struct Deps {
    pub work_items: Arc<dyn WorkItemProvider>,
    pub revisions: Arc<dyn RevisionProvider>,
    pub specs: Arc<dyn SpecProvider>,
    pub agent: Arc<dyn AgentAdapter>,
}

fn retry_policy_from(config: &Config) -> RetryPolicy {
    RetryPolicy {
        base: Duration::from_millis(config.retry.base_backoff_ms),
        cap: Duration::from_millis(config.retry.max_backoff_ms),
        max_attempts: config.retry.max_attempts,
    }
}

/// `0` means "no limit" in [`Config`]; translated to a generous ceiling
/// rather than an actually-infinite timeout so a runaway session can't wedge
/// the role singleton forever.
fn max_agent_duration_from(config: &Config) -> Duration {
    if config.max_agent_duration == 0 {
        Duration::from_secs(60 * 60 * 24)
    } else {
        Duration::from_secs(config.max_agent_duration)
    }
}

pub async fn run(config: Config, repo_root: PathBuf, deps: Deps, shutdown: CancellationToken) -> anyhow::Result<()> {
    config.validate(&repo_root).await?;

    let cache_path = repo_root.join(".decree").join("planner-cache.json");
    let initial_state = startup::build_initial_state(&cache_path).await;
    let store = StateStore::new(initial_state);

    let logs_dir = config.logging.agent_sessions.then(|| config.logging.logs_dir.clone());
    let (event_tx, mut event_rx) = tokio::sync::mpsc::channel(256);

    let executor: Arc<dyn Executor> = Arc::new(CommandExecutor::new(
        store.clone(),
        deps.work_items.clone(),
        deps.revisions.clone(),
        deps.specs.clone(),
        deps.agent,
        event_tx,
        repo_root.clone(),
        config.default_branch.clone(),
        max_agent_duration_from(&config),
        logs_dir,
        config.context_paths.clone(),
        retry_policy_from(&config),
        SystemClock,
    ));

    let mut event_loop = EventLoop::new(store.clone(), SystemClock, executor);
    let handle = event_loop.handle();

    // Agent sessions report their lifecycle asynchronously on `event_tx`,
    // outside the executor's own return value; forward those onto the
    // event loop's queue for as long as the process runs.
    let forward_handle = handle.clone();
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            forward_handle.enqueue(event);
        }
    });

    let intervals = PollIntervals {
        work_items: Duration::from_secs(config.poll_intervals.work_items_secs),
        revisions_and_specs: Duration::from_secs(config.poll_intervals.revisions_and_specs_secs),
    };
    let scheduler = Scheduler::new(
        store.clone(),
        deps.work_items,
        deps.revisions,
        deps.specs,
        handle,
        retry_policy_from(&config),
        intervals,
    );

    scheduler.poll_all_once().await;
    event_loop.drain_pending().await;

    if let Err(error) = startup::reap_orphaned_worktrees(&repo_root, &store.get_state()).await {
        tracing::warn!(%error, "failed to reap orphaned worktrees at startup");
    }

    let scheduler_task = tokio::spawn(scheduler.run(shutdown.clone()));
    event_loop.run(shutdown).await;
    let _ = scheduler_task.await;

    Ok(())
}
