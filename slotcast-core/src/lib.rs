// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core building blocks for the slotcast broadcast sources.
//!
//! This crate holds the pieces the source crates are assembled from:
//!
//! - [`SharedFuture`] - a single-assignment, multi-observer future cell
//! - [`GracePeriod`] - the staleness tolerance configuration for a source
//! - [`CancellationToken`] - a clonable, runtime-agnostic cancel signal
//! - [`SlotcastError`] / [`Result`] - the error taxonomy shared by all crates
//!
//! Everything here is runtime-agnostic: wakeups go through
//! `event-listener`, so the types work on any executor.

pub mod cancellation_token;
pub mod error;
pub mod grace_period;
pub mod shared_future;

pub use self::cancellation_token::CancellationToken;
pub use self::error::{Result, SlotcastError};
pub use self::grace_period::GracePeriod;
pub use self::shared_future::{Resolved, SharedFuture};
