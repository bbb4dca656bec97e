// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent runtime adapter: worktree setup, context assembly, running
//! the agent process, streaming its output, enforcing the duration timeout,
//! validating its structured result, and cleaning up on the way out.

pub mod definition;
pub mod prompt;
pub mod schema;
pub mod session_log;
pub mod worktree;

use crate::error::AdapterError;
use async_trait::async_trait;
use decree_core::{AgentStartParams, SessionId};
use schema::StructuredOutput;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// A live agent invocation. `output` streams raw text chunks as the agent
/// works; `result` resolves once the session ends, whether with a
/// validated structured result, an error, or a timeout/cancellation.
pub struct AgentSession {
    pub session_id: SessionId,
    pub output: mpsc::Receiver<String>,
    pub result: oneshot::Receiver<Result<StructuredOutput, AdapterError>>,
}

/// The seam between the engine's executor and a concrete agent runtime
/// (a CLI subprocess, a hosted API, ...). One session runs one role once.
#[async_trait]
pub trait AgentAdapter: Send + Sync {
    /// Starts a session for `params.role_fields`'s role with the assembled
    /// trigger `prompt`, enforcing `timeout` as a hard wall-clock limit.
    async fn start_agent(
        &self,
        params: AgentStartParams,
        prompt: String,
        timeout: Duration,
    ) -> Result<AgentSession, AdapterError>;

    /// Requests cancellation of a running session; a no-op if it already
    /// ended. Cleanup (worktree removal, log footer) still happens on the
    /// session's own end-of-life path, not here.
    async fn cancel_agent(&self, session_id: &SessionId) -> Result<(), AdapterError>;
}
