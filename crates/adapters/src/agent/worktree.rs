// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worktree lifecycle: the implementor role runs inside a
//! disposable `git worktree`, force-reset from the default branch on setup
//! and always removed on session end. Startup recovery force-removes any
//! worktree left behind by a crashed process.

use crate::error::AdapterError;
use std::path::{Path, PathBuf};
use tokio::process::Command;

fn worktrees_dir(repo: &Path) -> PathBuf {
    repo.join(".worktrees")
}

pub fn worktree_path(repo: &Path, branch_name: &str) -> PathBuf {
    worktrees_dir(repo).join(branch_name)
}

async fn run_git(repo: &Path, args: &[&str]) -> Result<(), AdapterError> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(args)
        .output()
        .await
        .map_err(AdapterError::Io)?;
    if !output.status.success() {
        return Err(AdapterError::Worktree(format!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        )));
    }
    Ok(())
}

/// Force-removes any stale worktree at `<repo>/.worktrees/<branch_name>`,
/// then creates a fresh one force-reset from `default_branch` and installs
/// its dependencies.
pub async fn create_worktree(repo: &Path, branch_name: &str, default_branch: &str) -> Result<PathBuf, AdapterError> {
    let path = worktree_path(repo, branch_name);
    force_remove_worktree(repo, &path, branch_name).await;

    if let Err(e) = run_git(
        repo,
        &["worktree", "add", "-f", "-B", branch_name, path.to_str().unwrap_or_default(), default_branch],
    )
    .await
    {
        force_remove_worktree(repo, &path, branch_name).await;
        return Err(e);
    }

    if let Err(e) = install_dependencies(&path).await {
        force_remove_worktree(repo, &path, branch_name).await;
        return Err(e);
    }

    Ok(path)
}

/// Detects a package manifest at the worktree root and runs its install
/// command; a worktree with no recognized manifest is left untouched.
async fn install_dependencies(worktree: &Path) -> Result<(), AdapterError> {
    let Some((program, args)) = detect_install_command(worktree).await else {
        return Ok(());
    };

    let output = Command::new(program)
        .args(args)
        .current_dir(worktree)
        .output()
        .await
        .map_err(AdapterError::Io)?;
    if !output.status.success() {
        return Err(AdapterError::Worktree(format!(
            "dependency install ({program}) failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }
    Ok(())
}

async fn detect_install_command(worktree: &Path) -> Option<(&'static str, &'static [&'static str])> {
    if tokio::fs::try_exists(worktree.join("package-lock.json")).await.unwrap_or(false) {
        Some(("npm", &["ci"]))
    } else if tokio::fs::try_exists(worktree.join("package.json")).await.unwrap_or(false) {
        Some(("npm", &["install"]))
    } else if tokio::fs::try_exists(worktree.join("Cargo.toml")).await.unwrap_or(false) {
        Some(("cargo", &["fetch"]))
    } else if tokio::fs::try_exists(worktree.join("go.mod")).await.unwrap_or(false) {
        Some(("go", &["mod", "download"]))
    } else {
        None
    }
}

/// Best-effort removal of a worktree and its branch; failures are logged and
/// swallowed since this runs on both the happy path and crash recovery.
pub async fn force_remove_worktree(repo: &Path, path: &Path, branch_name: &str) {
    if let Some(path_str) = path.to_str() {
        if let Err(e) = run_git(repo, &["worktree", "remove", "--force", path_str]).await {
            tracing::debug!(branch_name, error = %e, "worktree remove failed (may not exist)");
        }
    }
    if let Err(e) = run_git(repo, &["branch", "-D", branch_name]).await {
        tracing::debug!(branch_name, error = %e, "branch delete failed (may not exist)");
    }
}

/// Extracts a unified diff of the worktree's current state against
/// `default_branch`. An empty string means no changes were made.
pub async fn diff_against_default_branch(worktree: &Path, default_branch: &str) -> Result<String, AdapterError> {
    let output = Command::new("git")
        .arg("-C")
        .arg(worktree)
        .args(["diff", default_branch, "--"])
        .output()
        .await
        .map_err(AdapterError::Io)?;
    if !output.status.success() {
        return Err(AdapterError::Worktree(format!(
            "git diff failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Enumerates worktrees under `<repo>/.worktrees`, force-removing any whose
/// branch name is not in `active_branch_names` — run once at startup.
pub async fn reap_orphaned_worktrees(repo: &Path, active_branch_names: &[String]) -> Result<(), AdapterError> {
    let dir = worktrees_dir(repo);
    let mut entries = match tokio::fs::read_dir(&dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(AdapterError::Io(e)),
    };

    while let Some(entry) = entries.next_entry().await.map_err(AdapterError::Io)? {
        let Some(branch_name) = entry.file_name().to_str().map(str::to_string) else { continue };
        if active_branch_names.iter().any(|b| b == &branch_name) {
            continue;
        }
        force_remove_worktree(repo, &entry.path(), &branch_name).await;
    }
    Ok(())
}

#[cfg(test)]
#[path = "worktree_tests.rs"]
mod tests;
