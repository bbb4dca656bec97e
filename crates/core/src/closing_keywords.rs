// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Closing-keyword matcher: binds a revision to a work item by scanning its
//! body for GitHub-style `closes #12` references.

use regex::Regex;
use std::sync::OnceLock;

#[allow(clippy::expect_used)]
fn pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:close[sd]?|fix(?:e[sd])?|resolve[sd]?)\s*:?\s*#(\d+)")
            .expect("static closing-keyword pattern is valid")
    })
}

/// Returns the numeric id of the first closing-keyword reference found in
/// `body`, or `None` if there isn't one. Only the first match is honored —
/// a revision closes at most one work item.
pub fn match_closing_keyword(body: &str) -> Option<String> {
    pattern().captures(body).map(|caps| caps[1].to_string())
}

#[cfg(test)]
#[path = "closing_keywords_tests.rs"]
mod tests;
