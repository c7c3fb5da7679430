// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Single-slot broadcast sources with staleness windows and bounded waits.
//!
//! One or more producers push "latest value" or "latest signal" events into
//! a source; any number of independent consumers observe them. Each source
//! holds exactly one live slot - the pending generation the next publish
//! resolves - plus the most recently published value, and decides per
//! waiter whether the latter is still fresh enough to serve.
//!
//! # Overview
//!
//! - [`ValueSource<T>`] - publish values; waiters get the next one, or the
//!   last one while it is within the source's [`GracePeriod`]
//! - [`EventSource`] - the same, specialized to a payload-less signal
//! - [`CachingValueSource<T>`] - freshness window (`max_age`) and optional
//!   timeout supplied per call instead of fixed at construction
//! - [`CachingEventSource`] - signal variant of the above
//! - [`timed`] - race combinators: [`with_timeout`],
//!   [`with_timeout_cancellable`], and the [`poll_until`] helper
//! - [`CircularBuffer<T>`] - fixed-capacity deque collaborator with
//!   opposite-end eviction
//!
//! # Example
//!
//! ```
//! use slotcast::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> slotcast::Result<()> {
//! let source = CachingValueSource::new();
//! source.set_next(21);
//!
//! // Young enough: served from the cache, no suspension.
//! let value = source.get(Duration::from_secs(1), None).await?;
//! assert_eq!(value, 21);
//!
//! // max_age of zero never accepts the cache; bound the wait instead.
//! let next = source.get(Duration::ZERO, Some(Duration::from_millis(10))).await;
//! assert!(next.is_err());
//! # Ok(())
//! # }
//! ```

// Conditional tracing, compiled out entirely without the feature
#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*);
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub mod caching_event_source;
pub mod caching_value_source;
pub mod circular_buffer;
pub mod event_source;
pub mod prelude;
pub mod timed;
pub mod value_source;

pub use self::caching_event_source::CachingEventSource;
pub use self::caching_value_source::CachingValueSource;
pub use self::circular_buffer::CircularBuffer;
pub use self::event_source::EventSource;
pub use self::timed::{poll_until, with_timeout, with_timeout_cancellable};
pub use self::value_source::ValueSource;

pub use slotcast_core::{
    CancellationToken, GracePeriod, Resolved, Result, SharedFuture, SlotcastError,
};
