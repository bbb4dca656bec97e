// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use decree_core::RetryableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("provider request failed: {0}")]
    Provider(String),

    #[error("provider request failed with HTTP {status}: {message}")]
    ProviderHttp { status: u16, message: String, retry_after_secs: Option<u64> },

    #[error("agent runtime error: {0}")]
    Agent(String),

    #[error("agent session timed out")]
    Timeout,

    #[error("agent session cancelled")]
    Cancelled,

    #[error("structured output did not match the {role} schema: {reason}")]
    SchemaMismatch { role: String, reason: String },

    #[error("agent definition error: {0}")]
    Definition(String),

    #[error("worktree error: {0}")]
    Worktree(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RetryableError for AdapterError {
    fn http_status(&self) -> Option<u16> {
        match self {
            AdapterError::ProviderHttp { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn retry_after_secs(&self) -> Option<u64> {
        match self {
            AdapterError::ProviderHttp { retry_after_secs, .. } => *retry_after_secs,
            _ => None,
        }
    }
}
