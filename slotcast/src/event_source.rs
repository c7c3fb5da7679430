// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronization point for multiple awaiters on a single signal source.

use crate::value_source::ValueSource;
use slotcast_core::{GracePeriod, Result, SharedFuture};

/// A payload-less [`ValueSource`]: producers signal, consumers wait for
/// the act of signalling itself.
///
/// Grace semantics are identical to the value variant - with a
/// [`GracePeriod`], a waiter arriving shortly after a signal is released
/// immediately instead of waiting for the next one.
///
/// # Example
///
/// ```
/// use slotcast::EventSource;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let source = EventSource::new();
/// let waiter = source.wait();
///
/// source.signal();
/// waiter.resolved().await;
/// # }
/// ```
#[derive(Clone)]
pub struct EventSource {
    signaller: ValueSource<()>,
}

impl std::fmt::Debug for EventSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSource").finish_non_exhaustive()
    }
}

impl EventSource {
    /// Creates an event source with no grace period.
    #[must_use]
    pub fn new() -> Self {
        Self {
            signaller: ValueSource::new(),
        }
    }

    /// Creates an event source with the given staleness tolerance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for a zero grace window.
    pub fn with_grace(grace: GracePeriod) -> Result<Self> {
        Ok(Self {
            signaller: ValueSource::with_grace(grace)?,
        })
    }

    /// Sends a signal to current awaiters.
    pub fn signal(&self) {
        self.signaller.publish(());
    }

    /// Returns a handle on the signal this waiter should await, per the
    /// source's grace configuration.
    #[must_use]
    pub fn wait(&self) -> SharedFuture<()> {
        self.signaller.wait()
    }
}

impl Default for EventSource {
    fn default() -> Self {
        Self::new()
    }
}
