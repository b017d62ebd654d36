use super::domain::{IntentLevel, Prospect};
use super::scoring::intent_level;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How far back `sourced_date` may lie for a record to stay in view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    Last30Days,
    Last60Days,
    Last90Days,
    Last6Months,
    Last12Months,
    #[default]
    AllTime,
}

impl TimeWindow {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Last30Days,
            Self::Last60Days,
            Self::Last90Days,
            Self::Last6Months,
            Self::Last12Months,
            Self::AllTime,
        ]
    }

    pub const fn days(self) -> Option<i64> {
        match self {
            Self::Last30Days => Some(30),
            Self::Last60Days => Some(60),
            Self::Last90Days => Some(90),
            Self::Last6Months => Some(180),
            Self::Last12Months => Some(365),
            Self::AllTime => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Last30Days => "Last 30 Days",
            Self::Last60Days => "Last 60 Days",
            Self::Last90Days => "Last 90 Days",
            Self::Last6Months => "Last 6 Months",
            Self::Last12Months => "Last 12 Months",
            Self::AllTime => "All Time",
        }
    }

    fn admits(self, prospect: &Prospect, now: DateTime<Utc>) -> bool {
        match self.days() {
            Some(days) => now - prospect.sourced_date <= Duration::days(days),
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported time window '{0}' (expected 30, 60, 90, 180, 365 or all)")]
pub struct UnknownTimeWindow(pub String);

impl FromStr for TimeWindow {
    type Err = UnknownTimeWindow;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::AllTime);
        }

        let days = trimmed
            .parse::<i64>()
            .map_err(|_| UnknownTimeWindow(value.to_string()))?;
        Self::ordered()
            .into_iter()
            .find(|window| window.days() == Some(days))
            .ok_or_else(|| UnknownTimeWindow(value.to_string()))
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentFilter {
    #[default]
    All,
    Only(IntentLevel),
}

impl IntentFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(level) => level.label(),
        }
    }

    fn admits(self, prospect: &Prospect) -> bool {
        match self {
            Self::All => true,
            Self::Only(level) => intent_level(prospect.intent_score) == level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported intent filter '{0}' (expected all, high, medium or low)")]
pub struct UnknownIntentFilter(pub String);

impl FromStr for IntentFilter {
    type Err = UnknownIntentFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        IntentLevel::ordered()
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(value.trim()))
            .map(Self::Only)
            .ok_or_else(|| UnknownIntentFilter(value.to_string()))
    }
}

impl fmt::Display for IntentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Time window AND intent level, applied in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProspectFilter {
    pub window: TimeWindow,
    pub intent: IntentFilter,
}

impl ProspectFilter {
    pub fn new(window: TimeWindow, intent: IntentFilter) -> Self {
        Self { window, intent }
    }

    /// Samples the clock once for this call.
    pub fn apply(&self, records: &[Prospect]) -> Vec<Prospect> {
        self.apply_at(records, Utc::now())
    }

    pub fn apply_at(&self, records: &[Prospect], now: DateTime<Utc>) -> Vec<Prospect> {
        records
            .iter()
            .filter(|prospect| self.window.admits(prospect, now) && self.intent.admits(prospect))
            .cloned()
            .collect()
    }
}

pub fn filter(records: &[Prospect], window: TimeWindow, intent: IntentFilter) -> Vec<Prospect> {
    ProspectFilter::new(window, intent).apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prospects::testing::{prospect, reference_now};

    fn sourced(id: u32, days_ago: i64, intent: u8) -> Prospect {
        let mut record = prospect(id);
        record.sourced_date = reference_now() - Duration::days(days_ago);
        record.intent_score = intent;
        record
    }

    fn ids(records: &[Prospect]) -> Vec<u32> {
        records.iter().map(|record| record.id.0).collect()
    }

    #[test]
    fn parses_time_windows() {
        assert_eq!("30".parse::<TimeWindow>(), Ok(TimeWindow::Last30Days));
        assert_eq!("180".parse::<TimeWindow>(), Ok(TimeWindow::Last6Months));
        assert_eq!("ALL".parse::<TimeWindow>(), Ok(TimeWindow::AllTime));
        assert!("45".parse::<TimeWindow>().is_err());
        assert!("week".parse::<TimeWindow>().is_err());
    }

    #[test]
    fn parses_intent_filters() {
        assert_eq!("All".parse::<IntentFilter>(), Ok(IntentFilter::All));
        assert_eq!(
            "medium".parse::<IntentFilter>(),
            Ok(IntentFilter::Only(IntentLevel::Medium))
        );
        assert!("urgent".parse::<IntentFilter>().is_err());
    }

    #[test]
    fn boundary_day_is_included() {
        let records = vec![sourced(1, 30, 50), sourced(2, 31, 50), sourced(3, 0, 50)];
        let filter = ProspectFilter::new(TimeWindow::Last30Days, IntentFilter::All);

        let kept = filter.apply_at(&records, reference_now());

        assert_eq!(ids(&kept), vec![1, 3]);
    }

    #[test]
    fn all_time_keeps_everything() {
        let records = vec![sourced(1, 900, 10), sourced(2, 5, 90)];
        let kept = ProspectFilter::default().apply_at(&records, reference_now());
        assert_eq!(kept, records);
    }

    #[test]
    fn predicates_combine_as_conjunction() {
        let records = vec![
            sourced(1, 10, 85),
            sourced(2, 10, 40),
            sourced(3, 120, 90),
            sourced(4, 60, 70),
        ];
        let filter = ProspectFilter::new(
            TimeWindow::Last90Days,
            IntentFilter::Only(IntentLevel::High),
        );

        let kept = filter.apply_at(&records, reference_now());

        assert_eq!(ids(&kept), vec![1, 4]);
        assert_eq!(records.len(), 4, "input untouched");
    }
}
