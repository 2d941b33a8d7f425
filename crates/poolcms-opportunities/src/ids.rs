// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Time-based opportunity ids

use chrono::Utc;

/// Observed ids at or above this bound are far beyond any millisecond clock
/// reading and are not tracked, so increments never overflow.
const OBSERVE_CEILING: i64 = i64::MAX / 2;

/// Issues ids from the wall clock in milliseconds
///
/// Ids are strictly increasing: when the clock has not moved past the last
/// issued id, the next id is the last one plus one.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    /// Issue an id as if the clock read `now_ms`
    pub fn next_id_at(&mut self, now_ms: i64) -> String {
        let id = match self.last {
            Some(last) if now_ms <= last => last.saturating_add(1),
            _ => now_ms,
        };
        self.last = Some(id);
        id.to_string()
    }

    /// Account for an id that was issued elsewhere (e.g. a seeded record)
    ///
    /// Non-numeric ids, and numeric ids too large to ever be generated,
    /// cannot collide with generated ones and are ignored.
    pub fn observe(&mut self, id: &str) {
        if let Ok(value) = id.parse::<i64>() {
            if value >= OBSERVE_CEILING {
                return;
            }
            self.last = Some(self.last.map_or(value, |last| last.max(value)));
        }
    }
}
