//! Prospect records and the scoring, filtering and aggregation built on top of them.

pub mod detail;
pub mod domain;
pub mod filter;
pub mod generator;
pub mod import;
pub mod importance;
pub mod report;
pub mod scoring;

#[cfg(test)]
pub(crate) mod testing;

pub use detail::ProspectDetail;
pub use domain::{
    contacts_at_company, find_prospect, Industry, IntentLevel, Prospect, ProspectId, Quadrant,
    Role, SalesRep, Signal, SignalKind, Stage,
};
pub use filter::{
    filter, IntentFilter, ProspectFilter, TimeWindow, UnknownIntentFilter, UnknownTimeWindow,
};
pub use generator::{generate_prospects, GeneratorConfig, ProspectGenerator};
pub use import::{load_dataset, load_json, to_json, ProspectCsvImporter, ProspectImportError};
pub use importance::{
    feature_importance, feature_importance_by_name, Direction, FeatureContribution, Metric,
    UnknownMetric,
};
pub use report::{DashboardOptions, DashboardReport};
pub use scoring::{hotness_score, intent_color, intent_level, quadrant, DetailMetrics};
