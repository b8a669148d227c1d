//! Sorting events into upcoming, recent and stale buckets.

use chrono::{DateTime, Duration, Utc};

use crate::event::EventRecord;

/// Events partitioned around a pivot time.
#[derive(Debug, Default, Clone)]
pub struct Classification {
    /// Starting at or after `now`, soonest first.
    pub upcoming: Vec<EventRecord>,
    /// Within the retention window before `now`, most recent first.
    pub recent_past: Vec<EventRecord>,
    /// Older than the retention window, oldest first.
    pub stale: Vec<EventRecord>,
}

impl Classification {
    pub fn len(&self) -> usize {
        self.upcoming.len() + self.recent_past.len() + self.stale.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `records` into exactly one bucket each.
///
/// Equal start times are ordered by id.
pub fn classify(records: Vec<EventRecord>, now: DateTime<Utc>, window: Duration) -> Classification {
    // A window reaching past chrono's date range means nothing is stale.
    let cutoff = now.checked_sub_signed(window);
    let mut classification = Classification::default();

    for record in records {
        let start = record.start_utc();
        if start >= now {
            classification.upcoming.push(record);
        } else if cutoff.is_none_or(|cutoff| start >= cutoff) {
            classification.recent_past.push(record);
        } else {
            classification.stale.push(record);
        }
    }

    classification
        .upcoming
        .sort_by(|a, b| a.start_utc().cmp(&b.start_utc()).then_with(|| a.id.cmp(&b.id)));
    classification
        .recent_past
        .sort_by(|a, b| b.start_utc().cmp(&a.start_utc()).then_with(|| a.id.cmp(&b.id)));
    classification
        .stale
        .sort_by(|a, b| a.start_utc().cmp(&b.start_utc()).then_with(|| a.id.cmp(&b.id)));

    classification
}
