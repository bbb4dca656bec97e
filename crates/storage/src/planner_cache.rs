// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Planner cache: the last spec tree the planner ran against, so startup can
//! diff the provider's current tree against the previous one instead of
//! re-running the planner for specs it has already seen.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CURRENT_CACHE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedSpecEntry {
    #[serde(rename = "blobSHA")]
    pub blob_sha: String,
    pub frontmatter_status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CachedSnapshot {
    #[serde(rename = "treeSHA")]
    pub tree_sha: String,
    #[serde(default)]
    pub files: HashMap<String, CachedSpecEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheFile {
    #[serde(rename = "v")]
    version: u32,
    snapshot: CachedSnapshot,
    #[serde(rename = "commitSHA")]
    commit_sha: String,
}

/// `lastPlannedSHAs`, plus the commit it was captured at. The engine loads
/// this once at startup into `EngineState::last_planned_shas`; nothing reads
/// it again afterward — the reducer's own copy is authoritative from then
/// on, and this file is only ever rewritten, never re-read mid-run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerCache {
    pub snapshot: CachedSnapshot,
    pub commit_sha: String,
}

impl PlannerCache {
    /// Loads the cache from `path`. A missing file, a file that isn't valid
    /// JSON, or a file stamped with a schema version this build doesn't
    /// recognize all resolve to an empty, untrusted cache rather than an
    /// error — the next planner poll just treats every spec as unseen.
    pub async fn load(path: &Path) -> Self {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "could not read planner cache, ignoring");
                return Self::default();
            }
        };

        match serde_json::from_slice::<CacheFile>(&bytes) {
            Ok(file) if file.version == CURRENT_CACHE_VERSION => {
                PlannerCache { snapshot: file.snapshot, commit_sha: file.commit_sha }
            }
            Ok(file) => {
                tracing::warn!(path = %path.display(), version = file.version, "planner cache schema version mismatch, ignoring");
                Self::default()
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "planner cache is not valid JSON, ignoring");
                Self::default()
            }
        }
    }

    /// Overwrites `path` atomically: the new content lands in a sibling temp
    /// file first, then a rename swaps it into place, so a crash mid-write
    /// never leaves a half-written cache for the next boot to trip over.
    /// Callers treat a write failure as best-effort (logged, non-fatal) —
    /// the cache is an optimization, not a durability requirement.
    pub async fn save(&self, path: &Path) -> Result<(), CacheError> {
        let file = CacheFile {
            version: CURRENT_CACHE_VERSION,
            snapshot: self.snapshot.clone(),
            commit_sha: self.commit_sha.clone(),
        };
        let body = serde_json::to_vec_pretty(&file)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp_path = tmp_path_for(path);
        tokio::fs::write(&tmp_path, &body).await?;
        tokio::fs::rename(&tmp_path, path).await?;
        Ok(())
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    path.with_file_name(format!(".{file_name}.tmp"))
}

#[cfg(test)]
#[path = "planner_cache_tests.rs"]
mod tests;
