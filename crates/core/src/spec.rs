// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spec: a markdown design document under the configured `specsDir`, watched
//! by the planner.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontmatterStatus {
    #[default]
    Draft,
    Approved,
    Deprecated,
}

crate::simple_display! {
    FrontmatterStatus {
        Draft => "draft",
        Approved => "approved",
        Deprecated => "deprecated",
    }
}

impl FrontmatterStatus {
    /// Unknown/unparseable frontmatter `status` values fall back to `draft`
    /// rather than rejecting the spec outright.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw {
            "approved" => FrontmatterStatus::Approved,
            "deprecated" => FrontmatterStatus::Deprecated,
            "draft" => FrontmatterStatus::Draft,
            _ => FrontmatterStatus::Draft,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    pub file_path: String,
    pub blob_sha: String,
    #[serde(default)]
    pub frontmatter_status: FrontmatterStatus,
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
