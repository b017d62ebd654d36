use super::super::domain::{IntentLevel, Prospect, ProspectId, Quadrant, SalesRep, Stage};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IntentBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl IntentBreakdown {
    pub(crate) fn record(&mut self, level: IntentLevel) {
        match level {
            IntentLevel::High => self.high += 1,
            IntentLevel::Medium => self.medium += 1,
            IntentLevel::Low => self.low += 1,
        }
    }

    pub fn count(&self, level: IntentLevel) -> usize {
        match level {
            IntentLevel::High => self.high,
            IntentLevel::Medium => self.medium,
            IntentLevel::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Funnel counts with Opportunity and Negotiation merged into `opp`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageBreakdown {
    pub lead: usize,
    pub mql: usize,
    pub sal: usize,
    pub sql: usize,
    pub opp: usize,
}

impl StageBreakdown {
    pub(crate) fn record(&mut self, stage: Stage) {
        match stage {
            Stage::Lead => self.lead += 1,
            Stage::Mql => self.mql += 1,
            Stage::Sal => self.sal += 1,
            Stage::Sql => self.sql += 1,
            Stage::Opportunity | Stage::Negotiation => self.opp += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryMetrics {
    pub total_prospects: usize,
    pub avg_last_activity: u32,
    pub intent_breakdown: IntentBreakdown,
    pub stage_breakdown: StageBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagePipelineEntry {
    pub stage: Stage,
    pub stage_label: &'static str,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl StagePipelineEntry {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// A prospect paired with its hotness score; the record itself is left untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedProspect {
    pub hotness_score: u8,
    pub prospect: Prospect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepEffectiveness {
    pub rep: SalesRep,
    pub rep_label: &'static str,
    pub total_calls: u64,
    pub avg_call_duration: u32,
    pub avg_call_quality: u32,
    pub avg_days_since_activity: u32,
    pub active_prospects: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineBucket {
    pub date: NaiveDate,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentTimeline {
    pub window_days: u32,
    pub buckets: Vec<TimelineBucket>,
    /// Counts every input record, including those outside the window.
    pub summary: IntentBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub fit_band: &'static str,
    pub count: usize,
    pub total_deal_size: u64,
}

impl HeatmapCell {
    pub fn avg_deal_size(&self) -> u64 {
        if self.count == 0 {
            0
        } else {
            self.total_deal_size / self.count as u64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapRow {
    pub intent: IntentLevel,
    pub intent_label: &'static str,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentFitHeatmap {
    pub rows: Vec<HeatmapRow>,
}

impl IntentFitHeatmap {
    pub fn cell(&self, intent: IntentLevel, fit_column: usize) -> Option<&HeatmapCell> {
        self.rows
            .iter()
            .find(|row| row.intent == intent)
            .and_then(|row| row.cells.get(fit_column))
    }

    /// Largest cell count, floored at 1 so it can scale intensities.
    pub fn max_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter().map(|cell| cell.count))
            .max()
            .unwrap_or(0)
            .max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuadrantSummary {
    pub quadrant: Quadrant,
    pub label: &'static str,
    pub count: usize,
    pub prospect_ids: Vec<ProspectId>,
    pub recommendations: [&'static str; 3],
}
