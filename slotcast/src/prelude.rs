// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the commonly used types and functions.
//!
//! ```ignore
//! use slotcast::prelude::*;
//!
//! let source = ValueSource::with_grace(GracePeriod::Within(window))?;
//! let value = with_timeout(source.wait().resolved(), limit).await?;
//! ```
//!
//! # Contents
//!
//! ## Sources
//!
//! - [`ValueSource`] / [`EventSource`] - grace period fixed at construction
//! - [`CachingValueSource`] / [`CachingEventSource`] - per-call `max_age`
//!
//! ## Combinators
//!
//! - [`with_timeout`] / [`with_timeout_cancellable`] - bounded waits
//! - [`poll_until`] - polling fallback for unsubscribable conditions
//!
//! ## Supporting types
//!
//! - [`GracePeriod`], [`SharedFuture`], [`CancellationToken`]
//! - [`CircularBuffer`] collaborator
//! - [`SlotcastError`] and the [`Result`] alias

pub use crate::caching_event_source::CachingEventSource;
pub use crate::caching_value_source::CachingValueSource;
pub use crate::circular_buffer::CircularBuffer;
pub use crate::event_source::EventSource;
pub use crate::timed::{poll_until, with_timeout, with_timeout_cancellable};
pub use crate::value_source::ValueSource;

pub use slotcast_core::{CancellationToken, GracePeriod, Result, SharedFuture, SlotcastError};
