use super::super::domain::Prospect;
use super::super::filter::ProspectFilter;
use super::heatmap::intent_fit_heatmap;
use super::summary::{
    pipeline_by_intent, quadrant_breakdown, rep_effectiveness, summary_metrics, top_prospects,
    DEFAULT_TOP_PROSPECTS,
};
use super::timeline::{intent_timeline_at, DEFAULT_TIMELINE_DAYS};
use super::views::{
    IntentFitHeatmap, IntentTimeline, QuadrantSummary, RankedProspect, RepEffectiveness,
    StagePipelineEntry, SummaryMetrics,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardOptions {
    pub filter: ProspectFilter,
    pub top_limit: usize,
    pub timeline_days: u32,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            filter: ProspectFilter::default(),
            top_limit: DEFAULT_TOP_PROSPECTS,
            timeline_days: DEFAULT_TIMELINE_DAYS,
        }
    }
}

/// Every dashboard view computed from one filtered working set.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub options: DashboardOptions,
    pub source_prospects: usize,
    pub summary: SummaryMetrics,
    pub pipeline: Vec<StagePipelineEntry>,
    pub top_prospects: Vec<RankedProspect>,
    pub reps: Vec<RepEffectiveness>,
    pub timeline: IntentTimeline,
    pub heatmap: IntentFitHeatmap,
    pub quadrants: Vec<QuadrantSummary>,
}

impl DashboardReport {
    pub fn build(records: &[Prospect], options: DashboardOptions) -> Self {
        Self::build_at(records, options, Utc::now())
    }

    pub fn build_at(records: &[Prospect], options: DashboardOptions, now: DateTime<Utc>) -> Self {
        let working = options.filter.apply_at(records, now);

        Self {
            generated_at: now,
            options,
            source_prospects: records.len(),
            summary: summary_metrics(&working),
            pipeline: pipeline_by_intent(&working),
            top_prospects: top_prospects(&working, options.top_limit),
            reps: rep_effectiveness(&working),
            timeline: intent_timeline_at(&working, options.timeline_days, now.date_naive()),
            heatmap: intent_fit_heatmap(&working),
            quadrants: quadrant_breakdown(&working),
        }
    }
}
