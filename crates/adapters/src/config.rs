// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed configuration, loaded from TOML. Validated once at startup so
//! the engine fails fast rather than surfacing a misconfiguration mid-run.

use crate::error::AdapterError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

fn default_default_branch() -> String {
    "main".to_string()
}

fn default_max_agent_duration() -> u64 {
    0
}

fn default_work_items_poll_secs() -> u64 {
    30
}

fn default_revisions_and_specs_poll_secs() -> u64 {
    5
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_backoff_ms() -> u64 {
    2_000
}

fn default_max_backoff_ms() -> u64 {
    30_000
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderCredentials {
    pub app_id: String,
    pub private_key: String,
    pub installation_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub agent_sessions: bool,
    pub logs_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollIntervals {
    #[serde(default = "default_work_items_poll_secs")]
    pub work_items_secs: u64,
    #[serde(default = "default_revisions_and_specs_poll_secs")]
    pub revisions_and_specs_secs: u64,
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self {
            work_items_secs: default_work_items_poll_secs(),
            revisions_and_specs_secs: default_revisions_and_specs_poll_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_base_backoff_ms")]
    pub base_backoff_ms: u64,
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_backoff_ms: default_base_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub repository: String,
    pub provider: ProviderCredentials,
    pub specs_dir: PathBuf,
    #[serde(default = "default_default_branch")]
    pub default_branch: String,
    #[serde(default = "default_max_agent_duration")]
    pub max_agent_duration: u64,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub context_paths: Vec<PathBuf>,
    pub role_assignment: HashMap<String, String>,
    #[serde(default)]
    pub poll_intervals: PollIntervals,
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Config {
    pub fn from_str(raw: &str) -> Result<Self, AdapterError> {
        toml::from_str(raw).map_err(|e| AdapterError::Definition(format!("invalid config: {e}")))
    }

    pub async fn from_path(path: &Path) -> Result<Self, AdapterError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Self::from_str(&raw)
    }

    /// Loads from the path named by `DECREE_CONFIG`, or `decree.toml` in the
    /// current directory if unset. Env overrides and XDG discovery beyond
    /// this single variable are out of scope.
    pub async fn from_env() -> Result<Self, AdapterError> {
        let path = std::env::var_os("DECREE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("decree.toml"));
        Self::from_path(&path).await
    }

    /// Validates fields the `toml` deserializer can't enforce structurally:
    /// `repository` parses as `owner/repo`, and `specsDir` exists or
    /// can be created, relative to `repo_root`.
    pub async fn validate(&self, repo_root: &Path) -> Result<(), AdapterError> {
        let parts: Vec<&str> = self.repository.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(AdapterError::Definition(format!(
                "repository {:?} must be in \"owner/repo\" form",
                self.repository
            )));
        }

        let specs_dir = repo_root.join(&self.specs_dir);
        if !specs_dir.exists() {
            tokio::fs::create_dir_all(&specs_dir).await.map_err(|e| {
                AdapterError::Definition(format!("specsDir {:?} does not exist and could not be created: {e}", specs_dir))
            })?;
        }

        for role in ["planner", "implementor", "reviewer"] {
            if !self.role_assignment.contains_key(role) {
                return Err(AdapterError::Definition(format!("role_assignment is missing an entry for {role:?}")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
