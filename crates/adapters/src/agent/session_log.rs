// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-session log files: one file per agent session under a
//! configured directory, named `<epoch>-<role>[-<workItemID>].log`.

use crate::error::AdapterError;
use decree_core::Role;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    Failed,
    Cancelled,
}

impl SessionOutcome {
    fn as_str(self) -> &'static str {
        match self {
            SessionOutcome::Completed => "completed",
            SessionOutcome::Failed => "failed",
            SessionOutcome::Cancelled => "cancelled",
        }
    }
}

pub fn session_log_path(log_dir: &Path, epoch_ms: u64, role: Role, work_item_id: Option<&str>) -> PathBuf {
    let name = match work_item_id {
        Some(id) => format!("{epoch_ms}-{role}-{id}.log"),
        None => format!("{epoch_ms}-{role}.log"),
    };
    log_dir.join(name)
}

pub struct SessionLog {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl SessionLog {
    pub async fn create(path: PathBuf, header: &str) -> Result<Self, AdapterError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let file = File::create(&path).await?;
        let mut writer = BufWriter::new(file);
        writer.write_all(header.as_bytes()).await?;
        writer.write_all(b"\n\n").await?;
        Ok(Self { writer, path })
    }

    pub async fn append_message(&mut self, speaker: &str, body: &str) -> Result<(), AdapterError> {
        self.writer.write_all(format!("## {speaker}\n\n{body}\n\n").as_bytes()).await?;
        Ok(())
    }

    pub async fn finish(mut self, outcome: SessionOutcome) -> Result<PathBuf, AdapterError> {
        self.writer.write_all(format!("---\noutcome: {}\n", outcome.as_str()).as_bytes()).await?;
        self.writer.flush().await?;
        Ok(self.path)
    }
}

#[cfg(test)]
#[path = "session_log_tests.rs"]
mod tests;
