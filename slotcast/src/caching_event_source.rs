// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Signal variant of the caching source.

use crate::caching_value_source::CachingValueSource;
use slotcast_core::Result;
use std::time::Duration;

/// A payload-less [`CachingValueSource`]: producers signal, consumers wait
/// for a signal no older than their per-call `max_age`.
///
/// Typical in health-check style code: "was there a heartbeat in the last
/// second? wait up to 50ms for one, otherwise report down."
///
/// # Example
///
/// ```
/// use slotcast::CachingEventSource;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> slotcast::Result<()> {
/// let source = CachingEventSource::new();
/// source.signal();
///
/// source.wait(Duration::from_secs(1), None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CachingEventSource {
    signaller: CachingValueSource<()>,
}

impl CachingEventSource {
    /// Creates a source with no signal yet recorded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            signaller: CachingValueSource::new(),
        }
    }

    /// Records a signal, releasing everyone currently waiting.
    pub fn signal(&self) {
        self.signaller.set_next(());
    }

    /// Waits for a signal no older than `max_age`.
    ///
    /// Completes immediately if the last signal is young enough; a
    /// `max_age` of zero always waits for the next one.
    ///
    /// # Errors
    ///
    /// With `timeout` set, returns `Timeout` when it elapses before a
    /// signal arrives.
    pub async fn wait(&self, max_age: Duration, timeout: Option<Duration>) -> Result<()> {
        self.signaller.get(max_age, timeout).await
    }
}

impl Default for CachingEventSource {
    fn default() -> Self {
        Self::new()
    }
}
