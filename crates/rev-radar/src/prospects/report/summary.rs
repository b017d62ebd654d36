use super::super::domain::{Prospect, Quadrant, SalesRep, Stage};
use super::super::scoring::{hotness_score, intent_level, quadrant};
use super::views::{
    IntentBreakdown, QuadrantSummary, RankedProspect, RepEffectiveness, StageBreakdown,
    StagePipelineEntry, SummaryMetrics,
};

pub const DEFAULT_TOP_PROSPECTS: usize = 20;

/// Headline counts for the summary cards. Empty input yields all zeros.
pub fn summary_metrics(records: &[Prospect]) -> SummaryMetrics {
    let mut intent_breakdown = IntentBreakdown::default();
    let mut stage_breakdown = StageBreakdown::default();
    let mut idle_days: u64 = 0;

    for prospect in records {
        intent_breakdown.record(intent_level(prospect.intent_score));
        stage_breakdown.record(prospect.stage);
        idle_days += prospect.days_since_last_activity as u64;
    }

    SummaryMetrics {
        total_prospects: records.len(),
        avg_last_activity: rounded_mean(idle_days, records.len()),
        intent_breakdown,
        stage_breakdown,
    }
}

/// Stage x intent contingency table over all six funnel stages.
pub fn pipeline_by_intent(records: &[Prospect]) -> Vec<StagePipelineEntry> {
    Stage::ordered()
        .into_iter()
        .map(|stage| {
            let mut counts = IntentBreakdown::default();
            records
                .iter()
                .filter(|prospect| prospect.stage == stage)
                .for_each(|prospect| counts.record(intent_level(prospect.intent_score)));

            StagePipelineEntry {
                stage,
                stage_label: stage.label(),
                high: counts.high,
                medium: counts.medium,
                low: counts.low,
            }
        })
        .collect()
}

/// Highest hotness first. Equal scores keep their input order.
pub fn top_prospects(records: &[Prospect], limit: usize) -> Vec<RankedProspect> {
    let mut ranked: Vec<(u8, &Prospect)> = records
        .iter()
        .map(|prospect| (hotness_score(prospect), prospect))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    ranked
        .into_iter()
        .take(limit)
        .map(|(hotness_score, prospect)| RankedProspect {
            hotness_score,
            prospect: prospect.clone(),
        })
        .collect()
}

/// Call rollups for every rep, including reps with no prospects in view.
pub fn rep_effectiveness(records: &[Prospect]) -> Vec<RepEffectiveness> {
    SalesRep::ordered()
        .into_iter()
        .map(|rep| {
            let owned: Vec<&Prospect> = records
                .iter()
                .filter(|prospect| prospect.sales_rep == rep)
                .collect();
            let count = owned.len();
            let total_calls: u64 = owned.iter().map(|p| p.calls_made as u64).sum();
            let duration: u64 = owned.iter().map(|p| p.last_call_duration as u64).sum();
            let quality: u64 = owned.iter().map(|p| p.call_quality_score as u64).sum();
            let idle: u64 = owned
                .iter()
                .map(|p| p.days_since_last_activity as u64)
                .sum();

            RepEffectiveness {
                rep,
                rep_label: rep.label(),
                total_calls,
                avg_call_duration: rounded_mean(duration, count),
                avg_call_quality: rounded_mean(quality, count),
                avg_days_since_activity: rounded_mean(idle, count),
                active_prospects: count,
            }
        })
        .collect()
}

/// Quadrant membership with the playbook for each bucket.
pub fn quadrant_breakdown(records: &[Prospect]) -> Vec<QuadrantSummary> {
    let mut summaries: Vec<QuadrantSummary> = Quadrant::ordered()
        .into_iter()
        .map(|quadrant| QuadrantSummary {
            quadrant,
            label: quadrant.label(),
            count: 0,
            prospect_ids: Vec::new(),
            recommendations: quadrant.recommendations(),
        })
        .collect();

    for prospect in records {
        let bucket = quadrant(prospect);
        if let Some(summary) = summaries.iter_mut().find(|entry| entry.quadrant == bucket) {
            summary.count += 1;
            summary.prospect_ids.push(prospect.id);
        }
    }

    summaries
}

/// Mean rounded half up; zero when there is nothing to average.
fn rounded_mean(sum: u64, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    let count = count as u64;
    ((2 * sum + count) / (2 * count)) as u32
}
