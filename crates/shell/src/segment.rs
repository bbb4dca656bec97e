// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote-aware splitting of a shell command string into top-level segments,
//! and extraction of a segment's leading token. Single quotes are opaque;
//! double quotes allow `\"` escapes; a backslash escapes the next character
//! outside quotes. An unterminated quote is tolerated — everything after it
//! is treated as still inside the quote rather than erroring.

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    Single,
    Double,
}

/// Splits `input` on the top-level operators `|`, `||`, `&&`, `;`, and
/// newline, ignoring matches inside quotes or after an escaping backslash.
/// Empty segments (consecutive operators, leading/trailing operators) are
/// dropped.
pub fn segment(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut quote: Option<Quote> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match quote {
            None => {
                if c == '\'' {
                    quote = Some(Quote::Single);
                    current.push(c);
                    i += 1;
                    continue;
                }
                if c == '"' {
                    quote = Some(Quote::Double);
                    current.push(c);
                    i += 1;
                    continue;
                }
                if c == '\\' && i + 1 < chars.len() {
                    current.push(c);
                    current.push(chars[i + 1]);
                    i += 2;
                    continue;
                }
                if c == '\n' || c == ';' {
                    segments.push(std::mem::take(&mut current));
                    i += 1;
                    continue;
                }
                if c == '|' {
                    segments.push(std::mem::take(&mut current));
                    i += if chars.get(i + 1) == Some(&'|') { 2 } else { 1 };
                    continue;
                }
                if c == '&' && chars.get(i + 1) == Some(&'&') {
                    segments.push(std::mem::take(&mut current));
                    i += 2;
                    continue;
                }
                current.push(c);
                i += 1;
            }
            Some(Quote::Single) => {
                current.push(c);
                if c == '\'' {
                    quote = None;
                }
                i += 1;
            }
            Some(Quote::Double) => {
                if c == '\\' && i + 1 < chars.len() {
                    current.push(c);
                    current.push(chars[i + 1]);
                    i += 2;
                    continue;
                }
                current.push(c);
                if c == '"' {
                    quote = None;
                }
                i += 1;
            }
        }
    }
    segments.push(current);

    segments.into_iter().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect()
}

/// The first whitespace-delimited token of `segment`, with surrounding
/// quotes and escaping removed — e.g. `"git" commit` yields `git`.
pub fn first_token(segment: &str) -> String {
    let chars: Vec<char> = segment.trim_start().chars().collect();
    let mut token = String::new();
    let mut quote: Option<Quote> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match quote {
            None => {
                if c.is_whitespace() {
                    break;
                }
                if c == '\'' {
                    quote = Some(Quote::Single);
                    i += 1;
                    continue;
                }
                if c == '"' {
                    quote = Some(Quote::Double);
                    i += 1;
                    continue;
                }
                if c == '\\' && i + 1 < chars.len() {
                    token.push(chars[i + 1]);
                    i += 2;
                    continue;
                }
                token.push(c);
                i += 1;
            }
            Some(Quote::Single) => {
                if c == '\'' {
                    quote = None;
                } else {
                    token.push(c);
                }
                i += 1;
            }
            Some(Quote::Double) => {
                if c == '\\' && i + 1 < chars.len() {
                    token.push(chars[i + 1]);
                    i += 2;
                    continue;
                }
                if c == '"' {
                    quote = None;
                } else {
                    token.push(c);
                }
                i += 1;
            }
        }
    }
    token
}

/// Replaces quoted content with spaces so blocklist scanning can't be
/// tripped by dangerous-looking text inside a quoted argument (e.g. a
/// commit message containing the word `rm`). Same length as `input`.
pub fn mask_quoted(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out: Vec<char> = vec![' '; chars.len()];
    let mut quote: Option<Quote> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match quote {
            None => {
                if c == '\'' {
                    quote = Some(Quote::Single);
                    i += 1;
                    continue;
                }
                if c == '"' {
                    quote = Some(Quote::Double);
                    i += 1;
                    continue;
                }
                if c == '\\' && i + 1 < chars.len() {
                    out[i] = c;
                    out[i + 1] = chars[i + 1];
                    i += 2;
                    continue;
                }
                out[i] = c;
                i += 1;
            }
            Some(Quote::Single) => {
                if c == '\'' {
                    quote = None;
                }
                i += 1;
            }
            Some(Quote::Double) => {
                if c == '\\' && i + 1 < chars.len() {
                    i += 2;
                    continue;
                }
                if c == '"' {
                    quote = None;
                }
                i += 1;
            }
        }
    }
    out.into_iter().collect()
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
