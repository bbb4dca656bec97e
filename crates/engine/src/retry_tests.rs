// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::sync::atomic::{AtomicU32, Ordering};

struct TestError {
    status: Option<u16>,
}

impl RetryableError for TestError {
    fn http_status(&self) -> Option<u16> {
        self.status
    }
}

#[test]
fn backoff_delay_never_exceeds_cap() {
    let policy = RetryPolicy::default();
    for attempt in 1..10 {
        let delay = backoff_delay(attempt, &policy);
        assert!(delay <= policy.cap);
    }
}

#[tokio::test]
async fn succeeds_without_retry_on_first_try() {
    let policy = RetryPolicy { base: Duration::from_millis(1), cap: Duration::from_millis(5), max_attempts: 3 };
    let calls = AtomicU32::new(0);
    let result: Result<u32, TestError> = retry_with_backoff(&policy, || {
        calls.fetch_add(1, Ordering::Relaxed);
        async { Ok(42) }
    })
    .await;
    assert_eq!(result.unwrap(), 42);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[tokio::test]
async fn retries_retryable_status_up_to_max_attempts() {
    let policy = RetryPolicy { base: Duration::from_millis(1), cap: Duration::from_millis(5), max_attempts: 3 };
    let calls = AtomicU32::new(0);
    let result: Result<u32, TestError> = retry_with_backoff(&policy, || {
        calls.fetch_add(1, Ordering::Relaxed);
        async { Err(TestError { status: Some(503) }) }
    })
    .await;
    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::Relaxed), 3);
}

#[tokio::test]
async fn non_retryable_status_propagates_immediately() {
    let policy = RetryPolicy::default();
    let calls = AtomicU32::new(0);
    let result: Result<u32, TestError> = retry_with_backoff(&policy, || {
        calls.fetch_add(1, Ordering::Relaxed);
        async { Err(TestError { status: Some(404) }) }
    })
    .await;
    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[tokio::test]
async fn retry_after_header_is_honored_on_429() {
    struct WithRetryAfter;
    impl RetryableError for WithRetryAfter {
        fn http_status(&self) -> Option<u16> {
            Some(429)
        }
        fn retry_after_secs(&self) -> Option<u64> {
            Some(0)
        }
    }
    let policy = RetryPolicy { base: Duration::from_millis(1), cap: Duration::from_millis(2), max_attempts: 2 };
    let calls = AtomicU32::new(0);
    let result: Result<u32, WithRetryAfter> = retry_with_backoff(&policy, || {
        calls.fetch_add(1, Ordering::Relaxed);
        async { Err(WithRetryAfter) }
    })
    .await;
    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}
