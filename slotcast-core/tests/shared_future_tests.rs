// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use slotcast_core::SharedFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test]
async fn all_observers_see_the_same_resolution() {
    let future = SharedFuture::pending();
    let first = future.clone();
    let second = future.clone();

    future.resolve(Arc::new("shared".to_string()));

    let got_first = first.resolved().await;
    let got_second = second.resolved().await;
    assert!(Arc::ptr_eq(&got_first, &got_second));
}

#[tokio::test]
async fn try_get_is_none_until_resolution() {
    let future = SharedFuture::pending();

    assert!(!future.is_resolved());
    assert_eq!(future.try_get(), None);

    future.resolve(7);

    assert!(future.is_resolved());
    assert_eq!(future.try_get(), Some(7));
}

#[tokio::test(start_paused = true)]
async fn stays_pending_until_resolved() {
    let future = SharedFuture::<i32>::pending();

    tokio::select! {
        _value = future.resolved() => panic!("resolved without a value being set"),
        () = sleep(Duration::from_millis(50)) => {}
    }

    future.resolve(1);
    assert_eq!(future.resolved().await, 1);
}

#[tokio::test]
async fn waiters_registered_before_resolution_are_woken() {
    let future = SharedFuture::pending();
    let observer = future.clone();

    let waiter = tokio::spawn(async move { observer.resolved().await });
    tokio::task::yield_now().await;

    future.resolve(9);
    assert_eq!(waiter.await.unwrap(), 9);
}

#[tokio::test]
async fn late_waiter_resolves_immediately() {
    let future = SharedFuture::pending();
    future.resolve(3);

    assert_eq!(future.resolved().await, 3);
}

#[test]
#[should_panic(expected = "resolved twice")]
fn second_resolution_panics() {
    let future = SharedFuture::pending();
    future.resolve(1);
    future.resolve(2);
}
