mod dashboard;
mod heatmap;
mod summary;
mod timeline;
pub mod views;

pub use dashboard::{DashboardOptions, DashboardReport};
pub use heatmap::{intent_fit_heatmap, FitBand};
pub use summary::{
    pipeline_by_intent, quadrant_breakdown, rep_effectiveness, summary_metrics, top_prospects,
    DEFAULT_TOP_PROSPECTS,
};
pub use timeline::{
    intent_timeline, intent_timeline_at, DEFAULT_TIMELINE_DAYS, MAX_TIMELINE_DAYS,
};
