//! Plain-text renderings of the report views, written the way the terminal demo reads.

use crate::infra::{format_currency, percent_bar};
use rev_radar::prospects::report::views::{
    IntentFitHeatmap, IntentTimeline, QuadrantSummary, RankedProspect, RepEffectiveness,
    StagePipelineEntry, SummaryMetrics,
};
use rev_radar::prospects::{
    DashboardReport, FeatureContribution, IntentLevel, Metric, ProspectDetail,
};
use std::io::{self, Write};

pub(crate) fn summary(out: &mut dyn Write, summary: &SummaryMetrics) -> io::Result<()> {
    writeln!(out, "Pipeline summary")?;
    writeln!(out, "- {} prospects", summary.total_prospects)?;
    writeln!(
        out,
        "- {} days since last activity on average",
        summary.avg_last_activity
    )?;
    let intent = &summary.intent_breakdown;
    writeln!(
        out,
        "- Intent: {} high | {} medium | {} low",
        intent.high, intent.medium, intent.low
    )?;
    let stages = &summary.stage_breakdown;
    writeln!(
        out,
        "- Funnel: Lead {} > MQL {} > SAL {} > SQL {} > Opp {}",
        stages.lead, stages.mql, stages.sal, stages.sql, stages.opp
    )
}

pub(crate) fn pipeline(out: &mut dyn Write, pipeline: &[StagePipelineEntry]) -> io::Result<()> {
    writeln!(out, "Pipeline by intent")?;
    for entry in pipeline {
        writeln!(
            out,
            "  - {:<12} {:>5} total | {:>4} high | {:>4} medium | {:>4} low",
            entry.stage_label,
            entry.total(),
            entry.high,
            entry.medium,
            entry.low
        )?;
    }
    Ok(())
}

pub(crate) fn top_prospects(out: &mut dyn Write, ranked: &[RankedProspect]) -> io::Result<()> {
    writeln!(out, "Top prospects")?;
    if ranked.is_empty() {
        return writeln!(out, "  none match the current filters");
    }
    for (rank, entry) in ranked.iter().enumerate() {
        let prospect = &entry.prospect;
        writeln!(
            out,
            "  {:>2}. [{:>3}] {} ({}, {}) | {} | {} | {}",
            rank + 1,
            entry.hotness_score,
            prospect.name,
            prospect.role.label(),
            prospect.company,
            prospect.stage.label(),
            format_currency(prospect.deal_size as u64),
            prospect.sales_rep.label()
        )?;
    }
    Ok(())
}

pub(crate) fn reps(out: &mut dyn Write, reps: &[RepEffectiveness]) -> io::Result<()> {
    writeln!(out, "Sales rep effectiveness")?;
    for rep in reps {
        writeln!(
            out,
            "  - {:<6} {:>4} prospects | {:>5} calls | {:>3} min avg call | {:>3} quality | {:>3} days since activity",
            rep.rep_label,
            rep.active_prospects,
            rep.total_calls,
            rep.avg_call_duration,
            rep.avg_call_quality,
            rep.avg_days_since_activity
        )?;
    }
    Ok(())
}

pub(crate) fn timeline(out: &mut dyn Write, timeline: &IntentTimeline) -> io::Result<()> {
    writeln!(out, "Intent timeline (last {} days)", timeline.window_days)?;
    for bucket in &timeline.buckets {
        writeln!(
            out,
            "  {} | {:>3} high | {:>3} medium | {:>3} low",
            bucket.date, bucket.high, bucket.medium, bucket.low
        )?;
    }
    let summary = &timeline.summary;
    writeln!(
        out,
        "  Overall: {} high | {} medium | {} low",
        summary.high, summary.medium, summary.low
    )
}

pub(crate) fn heatmap(out: &mut dyn Write, heatmap: &IntentFitHeatmap) -> io::Result<()> {
    writeln!(out, "Intent x fit heatmap")?;
    let max = heatmap.max_count();
    for row in &heatmap.rows {
        writeln!(out, "  {}", row.intent_label)?;
        for cell in &row.cells {
            writeln!(
                out,
                "    fit {:<8} {:>4} {} | avg deal {}",
                cell.fit_band,
                cell.count,
                percent_bar(cell.count, max, 20),
                format_currency(cell.avg_deal_size())
            )?;
        }
    }
    Ok(())
}

pub(crate) fn quadrants(out: &mut dyn Write, quadrants: &[QuadrantSummary]) -> io::Result<()> {
    writeln!(out, "Quadrants")?;
    for summary in quadrants {
        writeln!(out, "  - {}: {} prospects", summary.label, summary.count)?;
        for recommendation in summary.recommendations {
            writeln!(out, "      * {}", recommendation)?;
        }
    }
    Ok(())
}

pub(crate) fn detail(out: &mut dyn Write, detail: &ProspectDetail) -> io::Result<()> {
    let prospect = &detail.prospect;
    writeln!(
        out,
        "{} | {} at {} ({})",
        prospect.name,
        prospect.role.label(),
        prospect.company,
        prospect.industry.label()
    )?;
    writeln!(
        out,
        "- {} | {} | {}",
        prospect.email, prospect.phone, prospect.linkedin_url
    )?;
    writeln!(
        out,
        "- Stage {} | {} in pipeline for {} days | rep {}",
        prospect.stage.label(),
        format_currency(prospect.deal_size as u64),
        prospect.days_in_pipeline,
        prospect.sales_rep.label()
    )?;
    writeln!(
        out,
        "- Intent {} ({}) | quadrant {} | hotness {}",
        detail.intent.label(),
        prospect.intent_score,
        detail.quadrant.label(),
        detail.metrics.hotness
    )?;
    writeln!(
        out,
        "- Gauges: potential {} | sales effectiveness {} | close probability {}",
        detail.metrics.potential,
        detail.metrics.sales_effectiveness,
        detail.metrics.close_probability
    )?;

    writeln!(out, "Contacts at {}", prospect.company)?;
    for contact in &detail.contacts {
        writeln!(out, "  - #{} {} ({})", contact.id, contact.name, contact.role)?;
    }

    if !prospect.signals.is_empty() {
        writeln!(out, "Recent signals")?;
        for signal in &prospect.signals {
            writeln!(
                out,
                "  - {} {}",
                signal.date.format("%Y-%m-%d"),
                signal.description
            )?;
        }
    }
    Ok(())
}

pub(crate) fn drivers(
    out: &mut dyn Write,
    metric: Metric,
    value: u8,
    factors: &[FeatureContribution],
) -> io::Result<()> {
    writeln!(out, "{} drivers ({})", metric.label(), value)?;
    for factor in factors {
        writeln!(
            out,
            "  - {:<20} {:>5.1} {}",
            factor.name,
            factor.weight,
            factor.direction.label()
        )?;
    }
    Ok(())
}

pub(crate) fn dashboard(out: &mut dyn Write, report: &DashboardReport) -> io::Result<()> {
    writeln!(
        out,
        "Rev Radar dashboard ({} | {} intent) generated {}",
        report.options.filter.window,
        report.options.filter.intent,
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    )?;
    writeln!(
        out,
        "{} of {} prospects in view",
        report.summary.total_prospects, report.source_prospects
    )?;

    writeln!(out)?;
    summary(out, &report.summary)?;
    writeln!(out)?;
    pipeline(out, &report.pipeline)?;
    writeln!(out)?;
    top_prospects(out, &report.top_prospects)?;
    writeln!(out)?;
    reps(out, &report.reps)?;
    writeln!(out)?;
    timeline(out, &report.timeline)?;
    writeln!(out)?;
    heatmap(out, &report.heatmap)?;
    writeln!(out)?;
    quadrants(out, &report.quadrants)?;

    let hot = report
        .heatmap
        .rows
        .iter()
        .find(|row| row.intent == IntentLevel::High)
        .and_then(|row| row.cells.last())
        .map(|cell| cell.count)
        .unwrap_or(0);
    writeln!(out, "\nHigh intent, ideal fit: {} prospects", hot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rev_radar::prospects::report::views::{IntentBreakdown, StageBreakdown};

    fn rendered(run: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buffer = Vec::new();
        run(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn summary_lists_intent_and_funnel_counts() {
        let metrics = SummaryMetrics {
            total_prospects: 10,
            avg_last_activity: 6,
            intent_breakdown: IntentBreakdown {
                high: 2,
                medium: 5,
                low: 3,
            },
            stage_breakdown: StageBreakdown {
                lead: 4,
                mql: 3,
                sal: 1,
                sql: 1,
                opp: 1,
            },
        };

        let text = rendered(|out| summary(out, &metrics));
        assert!(text.contains("- 10 prospects"));
        assert!(text.contains("Intent: 2 high | 5 medium | 3 low"));
        assert!(text.contains("Lead 4 > MQL 3 > SAL 1 > SQL 1 > Opp 1"));
    }

    #[test]
    fn empty_top_list_says_so() {
        let text = rendered(|out| top_prospects(out, &[]));
        assert!(text.contains("none match the current filters"));
    }
}
