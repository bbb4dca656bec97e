// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger-prompt assembly. Pure string formatting over pre-fetched
//! context — fetching the context (diffs, revision files, review history)
//! is the executor's job, not this module's.

use decree_core::{Pipeline, PipelineStatus, Revision, RevisionFile, ReviewHistory, WorkItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecChangeKind {
    Added,
    Modified,
}

#[derive(Debug, Clone)]
pub struct SpecChangeContext {
    pub path: String,
    pub kind: SpecChangeKind,
    /// Unified diff against the prior blob SHA; `None` when `kind == Added`.
    pub diff: Option<String>,
}

pub fn build_planner_prompt(changed_specs: &[SpecChangeContext], work_items: &[&WorkItem]) -> String {
    let mut out = String::new();
    out.push_str("# Changed specs\n\n");
    for spec in changed_specs {
        match spec.kind {
            SpecChangeKind::Added => {
                out.push_str(&format!("## {} (added)\n\n", spec.path));
            }
            SpecChangeKind::Modified => {
                out.push_str(&format!("## {} (modified)\n\n", spec.path));
                if let Some(diff) = &spec.diff {
                    out.push_str("```diff\n");
                    out.push_str(diff);
                    out.push_str("\n```\n\n");
                }
            }
        }
    }

    out.push_str("# Existing work items\n\n");
    for item in work_items {
        out.push_str(&format!("## #{} {} ({})\n\n", item.id, item.title, item.status));
        if let Some(body) = &item.body {
            out.push_str(body);
            out.push_str("\n\n");
        }
    }

    out
}

pub fn build_implementor_prompt(
    work_item: &WorkItem,
    revision: Option<&Revision>,
    revision_files: &[RevisionFile],
    review_history: Option<&ReviewHistory>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Work item #{}: {}\n\n", work_item.id, work_item.title));
    out.push_str(&format!("Status: {}\n\n", work_item.status));
    if let Some(body) = &work_item.body {
        out.push_str(body);
        out.push_str("\n\n");
    }

    if let Some(revision) = revision {
        append_revision_context(&mut out, revision, revision_files, review_history, true);
    }

    out
}

pub fn build_reviewer_prompt(
    work_item: &WorkItem,
    revision: &Revision,
    revision_files: &[RevisionFile],
    review_history: &ReviewHistory,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Work item #{}: {}\n\n", work_item.id, work_item.title));
    if let Some(body) = &work_item.body {
        out.push_str(body);
        out.push_str("\n\n");
    }
    append_revision_context(&mut out, revision, revision_files, Some(review_history), false);
    out
}

fn append_revision_context(
    out: &mut String,
    revision: &Revision,
    revision_files: &[RevisionFile],
    review_history: Option<&ReviewHistory>,
    include_pipeline: bool,
) {
    out.push_str(&format!("# Revision: {}\n\n{}\n\n", revision.title, revision.url));

    if !revision_files.is_empty() {
        out.push_str("## Files\n\n");
        for file in revision_files {
            out.push_str(&format!("- `{}` ({:?})\n", file.path, file.status));
            if let Some(patch) = &file.patch {
                out.push_str("```diff\n");
                out.push_str(patch);
                out.push_str("\n```\n");
            }
        }
        out.push('\n');
    }

    if include_pipeline {
        if let Some(Pipeline { status: PipelineStatus::Failure, reason, url }) = &revision.pipeline {
            out.push_str("## CI status: failure\n\n");
            if let Some(reason) = reason {
                out.push_str(&format!("Reason: {reason}\n"));
            }
            if let Some(url) = url {
                out.push_str(&format!("Details: {url}\n"));
            }
            out.push('\n');
        }
    }

    if let Some(history) = review_history {
        if !history.reviews.is_empty() {
            out.push_str("## Prior review submissions\n\n");
            for review in &history.reviews {
                out.push_str(&format!("- {} ({}): {}\n", review.author, review.state, review.body));
            }
            out.push('\n');
        }
        if !history.inline_comments.is_empty() {
            out.push_str("## Prior inline comments\n\n");
            for comment in &history.inline_comments {
                let at_line = comment.line.map(|l| format!(":{l}")).unwrap_or_default();
                out.push_str(&format!("- {}{}: {} — {}\n", comment.path, at_line, comment.author, comment.body));
            }
            out.push('\n');
        }
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
