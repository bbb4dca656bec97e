// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn worktree_path_is_nested_under_dot_worktrees() {
    let repo = Path::new("/repo");
    let path = worktree_path(repo, "decree/42");
    assert_eq!(path, Path::new("/repo/.worktrees/decree/42"));
}

#[tokio::test]
async fn reap_on_missing_worktrees_dir_is_a_noop() {
    let repo = tempfile::tempdir().expect("tempdir");
    let result = reap_orphaned_worktrees(repo.path(), &[]).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn detects_npm_ci_over_npm_install_when_lockfile_present() {
    let dir = tempfile::tempdir().expect("tempdir");
    tokio::fs::write(dir.path().join("package.json"), "{}").await.expect("write");
    tokio::fs::write(dir.path().join("package-lock.json"), "{}").await.expect("write");
    let (program, args) = detect_install_command(dir.path()).await.expect("command");
    assert_eq!(program, "npm");
    assert_eq!(args, &["ci"]);
}

#[tokio::test]
async fn no_recognized_manifest_yields_no_install_command() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(detect_install_command(dir.path()).await.is_none());
}
