// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Shared helpers and sample data for the slotcast test suites.

pub mod helpers;
pub mod test_data;

pub use self::test_data::Reading;
