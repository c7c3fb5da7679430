// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use slotcast::{CachingValueSource, SlotcastError};
use slotcast_test_utils::test_data::{reading_pressure, reading_temperature, Reading};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, Instant};

#[tokio::test(start_paused = true)]
async fn get_times_out_when_nothing_was_ever_set() {
    // Arrange
    let source = CachingValueSource::<Reading>::new();
    let started = Instant::now();

    // Act
    let result = source
        .get(Duration::ZERO, Some(Duration::from_millis(50)))
        .await;

    // Assert: failed with a timeout, at the timeout
    assert!(matches!(
        result.unwrap_err(),
        SlotcastError::Timeout { .. }
    ));
    assert!(started.elapsed() >= Duration::from_millis(50));
    assert!(started.elapsed() < Duration::from_millis(100));
}

#[tokio::test(start_paused = true)]
async fn fresh_cache_is_served_without_waiting() -> anyhow::Result<()> {
    let source = CachingValueSource::new();
    source.set_next(reading_temperature());

    let value = source.get(Duration::from_millis(100), None).await?;
    assert_eq!(value, reading_temperature());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn max_age_is_evaluated_per_call() -> anyhow::Result<()> {
    // Arrange: a value that is 200ms old by the time we ask
    let source = CachingValueSource::new();
    source.set_next(reading_pressure());
    sleep(Duration::from_millis(200)).await;

    // Still young enough for a 300ms tolerance
    let tolerant = source.get(Duration::from_millis(300), None).await?;
    assert_eq!(tolerant, reading_pressure());

    // But stale for a 100ms one: the bounded wait for a fresh value expires
    let strict = source
        .get(Duration::from_millis(100), Some(Duration::from_millis(50)))
        .await;
    assert!(matches!(strict.unwrap_err(), SlotcastError::Timeout { .. }));

    // The timed-out call left the cache untouched for everyone else
    let later = source.get(Duration::from_secs(10), None).await?;
    assert_eq!(later, reading_pressure());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn zero_max_age_never_accepts_the_cache() {
    let source = CachingValueSource::new();
    source.set_next(reading_temperature());

    // Freshly set, yet a zero max age still demands the *next* value
    let result = source
        .get(Duration::ZERO, Some(Duration::from_millis(50)))
        .await;
    assert!(matches!(
        result.unwrap_err(),
        SlotcastError::Timeout { .. }
    ));
}

#[tokio::test(start_paused = true)]
async fn waiting_get_is_released_by_the_next_set() -> anyhow::Result<()> {
    let source = CachingValueSource::new();
    source.set_next(reading_temperature());

    let getter = tokio::spawn({
        let source = source.clone();
        async move {
            source
                .get(Duration::ZERO, Some(Duration::from_secs(1)))
                .await
        }
    });

    // Let the getter register on the pending generation, then feed it
    sleep(Duration::from_millis(1)).await;
    source.set_next(reading_pressure());

    assert_eq!(getter.await??, reading_pressure());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn fan_out_serves_every_concurrent_getter() -> anyhow::Result<()> {
    let source = CachingValueSource::new();

    let getters: Vec<_> = (0..16)
        .map(|_| {
            tokio::spawn({
                let source = source.clone();
                async move {
                    source
                        .get(Duration::ZERO, Some(Duration::from_secs(1)))
                        .await
                }
            })
        })
        .collect();

    // All sixteen are parked on the same generation before the set
    sleep(Duration::from_millis(1)).await;
    source.set_next(Arc::new(reading_temperature()));

    let mut values = Vec::new();
    for getter in getters {
        values.push(getter.await??);
    }
    assert!(values.iter().all(|value| Arc::ptr_eq(value, &values[0])));

    Ok(())
}
