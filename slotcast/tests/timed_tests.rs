// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use slotcast::timed::{poll_until, with_timeout, with_timeout_cancellable};
use slotcast::{CancellationToken, SlotcastError, ValueSource};
use slotcast_test_utils::helpers::expect_resolved_within;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn operation_finishing_first_wins() -> anyhow::Result<()> {
    let operation = async {
        sleep(Duration::from_millis(50)).await;
        17
    };

    let value = with_timeout(operation, Duration::from_millis(100)).await?;
    assert_eq!(value, 17);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn timer_finishing_first_times_out() {
    let result = with_timeout(sleep(Duration::from_millis(200)), Duration::from_millis(100)).await;

    let error = result.unwrap_err();
    assert!(matches!(
        error,
        SlotcastError::Timeout {
            duration
        } if duration == Duration::from_millis(100)
    ));
    assert!(error.is_recoverable());
}

#[tokio::test(start_paused = true)]
async fn cancellation_beats_both_operation_and_timer() {
    // Arrange: cancel at 25ms, operation at 200ms, timer at 100ms
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        sleep(Duration::from_millis(25)).await;
        trigger.cancel();
    });

    // Act
    let result = with_timeout_cancellable(
        sleep(Duration::from_millis(200)),
        Duration::from_millis(100),
        &token,
    )
    .await;

    // Assert
    assert!(matches!(result.unwrap_err(), SlotcastError::Cancelled));
}

#[tokio::test(start_paused = true)]
async fn untriggered_token_does_not_interfere() -> anyhow::Result<()> {
    let token = CancellationToken::new();
    let operation = async {
        sleep(Duration::from_millis(50)).await;
        "done"
    };

    let value =
        with_timeout_cancellable(operation, Duration::from_millis(100), &token).await?;
    assert_eq!(value, "done");

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn abandoned_wait_does_not_disturb_other_waiters() {
    // Arrange: two waiters on the same source, one of them bounded
    let source = ValueSource::new();
    let patient = source.wait();
    let hurried = source.wait();

    // Act: the bounded wait expires; the value arrives afterwards
    let timed_out = with_timeout(hurried.resolved(), Duration::from_millis(50)).await;
    assert!(timed_out.is_err());

    source.publish(3);

    // Assert: the other waiter is served, and even the abandoned handle
    // still observes the resolution
    assert_eq!(expect_resolved_within(&patient, 1_000).await, 3);
    assert_eq!(hurried.try_get(), Some(3));
}

#[tokio::test(start_paused = true)]
async fn poll_until_reports_the_condition_becoming_true() {
    let flag = Arc::new(AtomicBool::new(false));
    let setter = flag.clone();
    tokio::spawn(async move {
        sleep(Duration::from_millis(300)).await;
        setter.store(true, Ordering::Release);
    });

    let satisfied = poll_until(
        || {
            let flag = flag.clone();
            async move { flag.load(Ordering::Acquire) }
        },
        Duration::from_secs(2),
        Duration::from_millis(100),
    )
    .await;

    assert!(satisfied);
}

#[tokio::test(start_paused = true)]
async fn poll_until_gives_up_at_the_timeout() {
    let satisfied = poll_until(
        || async { false },
        Duration::from_millis(300),
        Duration::from_millis(100),
    )
    .await;

    assert!(!satisfied);
}
