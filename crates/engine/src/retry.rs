// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retry/backoff helper: wraps a nullary async operation, retrying
//! HTTP 429/500/502/503/504 up to 3 attempts with full-jitter exponential
//! backoff (honoring `Retry-After` on 429), and propagating everything else
//! immediately.

use decree_core::RetryableError;
use rand::Rng;
use std::future::Future;
use std::time::Duration;

const BASE: Duration = Duration::from_secs(2);
const CAP: Duration = Duration::from_secs(30);
const MAX_ATTEMPTS: u32 = 3;

const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub base: Duration,
    pub cap: Duration,
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { base: BASE, cap: CAP, max_attempts: MAX_ATTEMPTS }
    }
}

pub type RetryError<E> = E;

/// Computes the exponential-backoff delay for `attempt` (1-based), with full
/// jitter: uniform in `[0, base * 2^(attempt-1)]`, capped at `cap`.
fn backoff_delay(attempt: u32, policy: &RetryPolicy) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16);
    let computed = policy.base.saturating_mul(1u32 << exponent).min(policy.cap);
    let computed_ms = computed.as_millis().min(u128::from(u64::MAX)) as u64;
    let jittered_ms = rand::thread_rng().gen_range(0..=computed_ms);
    Duration::from_millis(jittered_ms)
}

/// Runs `op` until it succeeds, a non-retryable error is returned, or
/// `policy.max_attempts` attempts have been made.
pub async fn retry_with_backoff<F, Fut, T, E>(policy: &RetryPolicy, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: RetryableError,
{
    let mut attempt = 0u32;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                attempt += 1;
                let status = err.http_status();
                let is_retryable = status.is_some_and(|s| RETRYABLE_STATUSES.contains(&s));
                if !is_retryable || attempt >= policy.max_attempts {
                    return Err(err);
                }
                let delay = if status == Some(429) {
                    match err.retry_after_secs() {
                        Some(secs) if secs > 0 => Duration::from_secs(secs),
                        _ => backoff_delay(attempt, policy),
                    }
                } else {
                    backoff_delay(attempt, policy)
                };
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
