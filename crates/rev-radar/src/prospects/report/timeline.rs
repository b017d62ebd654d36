use super::super::domain::Prospect;
use super::super::scoring::intent_level;
use super::views::{IntentBreakdown, IntentTimeline, TimelineBucket};
use chrono::{Duration, NaiveDate, Utc};
use std::collections::BTreeMap;

pub const DEFAULT_TIMELINE_DAYS: u32 = 31;
/// Longest window the command line accepts.
pub const MAX_TIMELINE_DAYS: u32 = 3650;

/// Daily intent counts for the trailing window ending today (UTC).
pub fn intent_timeline(records: &[Prospect], window_days: u32) -> IntentTimeline {
    intent_timeline_at(records, window_days, Utc::now().date_naive())
}

/// Buckets are keyed by the calendar date of `last_activity`. Records dated outside
/// `[today - window_days + 1, today]` are left out of the buckets but still counted in
/// the summary. The window stops early at the earliest representable date.
pub fn intent_timeline_at(
    records: &[Prospect],
    window_days: u32,
    today: NaiveDate,
) -> IntentTimeline {
    let mut days: BTreeMap<NaiveDate, IntentBreakdown> = (0..window_days as i64)
        .map_while(|offset| today.checked_sub_signed(Duration::days(offset)))
        .map(|date| (date, IntentBreakdown::default()))
        .collect();
    let mut summary = IntentBreakdown::default();

    for prospect in records {
        let level = intent_level(prospect.intent_score);
        summary.record(level);
        if let Some(bucket) = days.get_mut(&prospect.last_activity.date_naive()) {
            bucket.record(level);
        }
    }

    let buckets = days
        .into_iter()
        .map(|(date, counts)| TimelineBucket {
            date,
            high: counts.high,
            medium: counts.medium,
            low: counts.low,
        })
        .collect();

    IntentTimeline {
        window_days,
        buckets,
        summary,
    }
}
