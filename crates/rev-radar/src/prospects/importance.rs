//! Explains the detail gauges by ranking the factors behind each one.

use super::domain::Prospect;
use super::scoring::{hotness_score, REFERENCE_DEAL_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gauges that can be broken down into contributing factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Potential,
    SalesEffectiveness,
    CloseProbability,
}

impl Metric {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::Potential,
            Self::SalesEffectiveness,
            Self::CloseProbability,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Potential => "Potential",
            Self::SalesEffectiveness => "Sales Effectiveness",
            Self::CloseProbability => "Close Probability",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric '{0}' (expected Potential, Sales Effectiveness or Close Probability)")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    /// Accepts display labels as well as snake/kebab-case spellings.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .map(|ch| match ch {
                '-' | '_' => ' ',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        Self::ordered()
            .into_iter()
            .find(|metric| metric.label().to_ascii_lowercase() == normalized)
            .ok_or_else(|| UnknownMetric(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    fn when(positive: bool) -> Self {
        if positive {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// One factor's share of a gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureContribution {
    pub name: &'static str,
    pub weight: f64,
    pub direction: Direction,
}

impl FeatureContribution {
    fn new(name: &'static str, weight: f64, direction: Direction) -> Self {
        Self {
            name,
            weight,
            direction,
        }
    }
}

/// Ranks the four factors behind `metric`, heaviest first.
///
/// Ties keep the factor declaration order. Direction does not affect ranking.
pub fn feature_importance(metric: Metric, prospect: &Prospect) -> Vec<FeatureContribution> {
    let mut factors = match metric {
        Metric::Potential => potential_factors(prospect),
        Metric::SalesEffectiveness => sales_effectiveness_factors(prospect),
        Metric::CloseProbability => close_probability_factors(prospect),
    };
    factors.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    factors
}

/// Parses `metric_name` at the boundary; unknown names are rejected.
pub fn feature_importance_by_name(
    metric_name: &str,
    prospect: &Prospect,
) -> Result<Vec<FeatureContribution>, UnknownMetric> {
    let metric = metric_name.parse::<Metric>()?;
    Ok(feature_importance(metric, prospect))
}

fn potential_factors(prospect: &Prospect) -> Vec<FeatureContribution> {
    let senior = prospect.role.is_senior();
    let tech = prospect.industry == super::domain::Industry::Technology;
    let capped_deal = prospect.deal_size.min(REFERENCE_DEAL_SIZE) as f64;

    vec![
        FeatureContribution::new(
            "Role Seniority",
            if senior { 25.0 } else { 5.0 },
            Direction::when(senior),
        ),
        FeatureContribution::new(
            "Industry Match (Tech)",
            if tech { 20.0 } else { 2.0 },
            Direction::when(tech),
        ),
        FeatureContribution::new(
            "Deal Size",
            capped_deal / REFERENCE_DEAL_SIZE as f64 * 15.0,
            Direction::when(prospect.deal_size >= 250_000),
        ),
        FeatureContribution::new("Company Size", 10.0, Direction::Positive),
    ]
}

fn sales_effectiveness_factors(prospect: &Prospect) -> Vec<FeatureContribution> {
    let idle_days = prospect.days_since_last_activity.min(30) as f64;

    vec![
        FeatureContribution::new(
            "Call Quality Score",
            prospect.call_quality_score as f64 / 100.0 * 30.0,
            Direction::when(prospect.call_quality_score >= 60),
        ),
        FeatureContribution::new(
            "Engagement Score",
            prospect.engagement_score as f64 / 100.0 * 25.0,
            Direction::when(prospect.engagement_score >= 50),
        ),
        FeatureContribution::new(
            "Recent Activity",
            (30.0 - idle_days) / 30.0 * 15.0,
            Direction::when(prospect.days_since_last_activity < 15),
        ),
        FeatureContribution::new(
            "Calls Made",
            prospect.calls_made as f64 / 20.0 * 10.0,
            Direction::Positive,
        ),
    ]
}

fn close_probability_factors(prospect: &Prospect) -> Vec<FeatureContribution> {
    let hotness = hotness_score(prospect);
    let pipeline_days = prospect.days_in_pipeline.min(90) as f64;

    vec![
        FeatureContribution::new(
            "Hotness Score",
            hotness as f64 / 100.0 * 35.0,
            Direction::when(hotness >= 65),
        ),
        FeatureContribution::new(
            "Fit Score",
            prospect.fit_score as f64 / 100.0 * 20.0,
            Direction::when(prospect.fit_score >= 50),
        ),
        FeatureContribution::new(
            "In Opportunity Stage",
            if prospect.stage.is_opportunity() {
                15.0
            } else {
                0.0
            },
            Direction::Positive,
        ),
        FeatureContribution::new(
            "Days in Pipeline",
            (90.0 - pipeline_days) / 90.0 * 10.0,
            Direction::when(prospect.days_in_pipeline < 60),
        ),
    ]
}
