// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Sample payload used across the test suites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub channel: String,
    pub value: i64,
}

impl Reading {
    pub fn new(channel: impl Into<String>, value: i64) -> Self {
        Self {
            channel: channel.into(),
            value,
        }
    }
}

pub fn reading_temperature() -> Reading {
    Reading::new("temperature", 21)
}

pub fn reading_pressure() -> Reading {
    Reading::new("pressure", 1013)
}

pub fn reading_humidity() -> Reading {
    Reading::new("humidity", 58)
}
