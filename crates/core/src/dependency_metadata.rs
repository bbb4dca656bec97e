// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency metadata marker: the HTML comment the planner embeds in a work
//! item body to record `blockedBy` edges out-of-band from provider-native
//! dependency fields.

use regex::Regex;
use std::sync::OnceLock;

const MARKER_PREFIX: &str = "<!-- decree:blockedBy ";
const MARKER_SUFFIX: &str = " -->";

#[allow(clippy::expect_used)]
fn pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<!-- decree:blockedBy ((?:#\d+\s*)+)-->").expect("static marker pattern is valid")
    })
}

/// Formats `#<id> #<id> ...` into the embeddable marker. Returns `None` for
/// an empty id list — a work item with no dependencies carries no marker.
pub fn format_blocked_by_marker(ids: &[String]) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    let refs = ids.iter().map(|id| format!("#{id}")).collect::<Vec<_>>().join(" ");
    Some(format!("{MARKER_PREFIX}{refs}{MARKER_SUFFIX}"))
}

/// Parses the first marker found in `body`, returning the ids it lists in
/// order. Returns an empty vec when no marker is present.
pub fn parse_blocked_by_marker(body: &str) -> Vec<String> {
    let Some(caps) = pattern().captures(body) else {
        return Vec::new();
    };
    caps[1]
        .split_whitespace()
        .filter_map(|tok| tok.strip_prefix('#'))
        .map(|id| id.to_string())
        .collect()
}

#[cfg(test)]
#[path = "dependency_metadata_tests.rs"]
mod tests;
