// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error handling design: a closed `ErrorKind` taxonomy, a bounded
//! ring of recent `ErrorEntry` records kept in `EngineState`, and the
//! `EngineError` used for fallible operations throughout the workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A provider call (work item, revision, or spec read/write) failed
    /// after exhausting retries.
    Provider,
    /// The agent runtime adapter failed to start, run, or collect output
    /// from a session.
    Agent,
    /// A command was rejected before being dispatched (e.g. role singleton
    /// already occupied).
    Rejected,
    /// Local storage (planner cache) could not be read or written.
    Storage,
    /// A bash command failed shell-command validation.
    Validation,
}

crate::simple_display! {
    ErrorKind {
        Provider => "provider",
        Agent => "agent",
        Rejected => "rejected",
        Storage => "storage",
        Validation => "validation",
    }
}

/// One entry in the bounded error ring (invariant: at most 50 entries,
/// oldest evicted first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub kind: ErrorKind,
    pub message: String,
    pub at_ms: u64,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("provider error: {0}")]
    Provider(String),

    #[error("agent runtime error: {0}")]
    Agent(String),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("command rejected: {0}")]
    Rejected(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Provider(_) => ErrorKind::Provider,
            EngineError::Agent(_) => ErrorKind::Agent,
            EngineError::Storage(_) | EngineError::Serde(_) => ErrorKind::Storage,
            EngineError::Rejected(_) => ErrorKind::Rejected,
            EngineError::Validation(_) => ErrorKind::Validation,
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Implemented by any error the retry/backoff helper (in
/// `decree-engine::retry`) can inspect to decide whether to retry. Lives
/// here rather than in `decree-engine` so `decree-adapters` can implement it
/// for its own error type without a circular crate dependency.
pub trait RetryableError {
    fn http_status(&self) -> Option<u16>;

    /// Parsed `Retry-After` header value in seconds, for a 429 response that
    /// carried one.
    fn retry_after_secs(&self) -> Option<u64> {
        None
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
