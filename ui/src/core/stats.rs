//! Summary statistics over the full event list.
//!
//! Mean and median are taken over the events whose timestamp parses
//! (see [`parse_instant`]); the rest are tallied in `undated` so a single bad
//! record cannot turn the mean into garbage. With nothing to average, both
//! dates are `None` and the UI shows "Unavailable".
//!
//! Median policy: the instants are sorted ascending and the element at
//! `n / 2` is taken. For even `n` that is the upper of the two middle
//! instants, never an average of the two.

use api::EventRecord;
use time::OffsetDateTime;

use super::timing::parse_instant;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventStats {
    pub count: usize,
    pub mean_date: Option<OffsetDateTime>,
    pub median_date: Option<OffsetDateTime>,
    /// Events whose timestamp could not be parsed (excluded from mean/median).
    pub undated: usize,
}

impl EventStats {
    pub fn from_events(events: &[EventRecord]) -> Self {
        let count = events.len();
        if count == 0 {
            return Self::default();
        }

        // Working copy; `events` keeps its display order.
        let mut instants: Vec<i128> = Vec::with_capacity(count);
        for event in events {
            match parse_instant(&event.datetime_utc) {
                Some(ts) => instants.push(ts.unix_timestamp_nanos()),
                None => tracing::warn!(
                    id = %event.id,
                    raw = %event.datetime_utc,
                    "skipping unparseable event timestamp"
                ),
            }
        }
        let undated = count - instants.len();

        instants.sort_unstable();

        Self {
            count,
            mean_date: mean(&instants).and_then(from_nanos),
            median_date: upper_median(&instants).and_then(from_nanos),
            undated,
        }
    }

    pub fn has_dates(&self) -> bool {
        self.mean_date.is_some()
    }
}

fn mean(nanos: &[i128]) -> Option<i128> {
    if nanos.is_empty() {
        None
    } else {
        Some(nanos.iter().sum::<i128>() / nanos.len() as i128)
    }
}

fn upper_median(sorted: &[i128]) -> Option<i128> {
    sorted.get(sorted.len() / 2).copied()
}

fn from_nanos(nanos: i128) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
}
