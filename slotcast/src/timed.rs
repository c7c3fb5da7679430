// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Race combinators for bounding waits.
//!
//! [`with_timeout`] and [`with_timeout_cancellable`] race an operation
//! against a timer (and optionally a [`CancellationToken`]). The race is a
//! pure three-way select - no polling loop is introduced - and is terminal
//! on the first signal: a losing operation is abandoned, never retracted,
//! so a published value still reaches every other waiter.
//!
//! [`poll_until`] is the one deliberate polling helper, for conditions
//! that have no wakeup to subscribe to.

use slotcast_core::{CancellationToken, Result, SlotcastError};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Races `operation` against a timer of `limit`.
///
/// # Errors
///
/// Returns [`SlotcastError::Timeout`] when the timer fires first. The
/// operation's eventual result, if any, is discarded from this caller's
/// perspective only.
///
/// # Example
///
/// ```
/// use slotcast::timed::with_timeout;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let quick = async { 12 };
/// assert_eq!(with_timeout(quick, Duration::from_secs(1)).await.unwrap(), 12);
/// # }
/// ```
pub async fn with_timeout<F>(operation: F, limit: Duration) -> Result<F::Output>
where
    F: Future,
{
    tokio::select! {
        biased;
        output = operation => Ok(output),
        () = sleep(limit) => {
            trace!("bounded wait expired");
            Err(SlotcastError::timeout(limit))
        }
    }
}

/// Races `operation` against a timer of `limit` and a cancellation token.
///
/// Terminal on the first signal. The `biased` polling order - operation,
/// then cancel, then timer - makes simultaneous wakeups deterministic.
///
/// # Errors
///
/// Returns [`SlotcastError::Cancelled`] when the token fires first and
/// [`SlotcastError::Timeout`] when the timer does. Neither affects the
/// operation's source or any other waiter on it.
pub async fn with_timeout_cancellable<F>(
    operation: F,
    limit: Duration,
    token: &CancellationToken,
) -> Result<F::Output>
where
    F: Future,
{
    tokio::select! {
        biased;
        output = operation => Ok(output),
        () = token.cancelled() => {
            trace!("bounded wait cancelled");
            Err(SlotcastError::Cancelled)
        }
        () = sleep(limit) => {
            trace!("bounded wait expired");
            Err(SlotcastError::timeout(limit))
        }
    }
}

/// Polls an asynchronous condition until it holds or `timeout` elapses.
///
/// The condition is evaluated immediately, then once per `interval`.
/// Returns `true` as soon as it holds, `false` on timeout. For sources
/// with a real wakeup prefer awaiting them directly; this is for external
/// state that offers nothing to subscribe to.
pub async fn poll_until<C, Fut>(mut condition: C, timeout: Duration, interval: Duration) -> bool
where
    C: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let started = Instant::now();
    loop {
        if condition().await {
            return true;
        }
        if started.elapsed() >= timeout {
            return false;
        }
        sleep(interval).await;
    }
}
