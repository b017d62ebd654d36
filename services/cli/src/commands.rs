use crate::render;
use chrono::{DateTime, Utc};
use clap::Args;
use rev_radar::error::AppError;
use rev_radar::prospects::report::{
    intent_fit_heatmap, intent_timeline_at, pipeline_by_intent, quadrant_breakdown,
    rep_effectiveness, summary_metrics, top_prospects, DEFAULT_TIMELINE_DAYS,
    DEFAULT_TOP_PROSPECTS, MAX_TIMELINE_DAYS,
};
use rev_radar::prospects::{
    to_json, DashboardOptions, DashboardReport, FeatureContribution, IntentFilter, Metric, Prospect,
    ProspectDetail, ProspectFilter, ProspectId, TimeWindow,
};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Sourced-date window: 30, 60, 90, 180, 365 or all
    #[arg(long, default_value = "all")]
    pub(crate) window: TimeWindow,
    /// Intent level: all, high, medium or low
    #[arg(long, default_value = "all")]
    pub(crate) intent: IntentFilter,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl ReportArgs {
    pub(crate) fn filter(&self) -> ProspectFilter {
        ProspectFilter::new(self.window, self.intent)
    }

    fn working_set(&self, prospects: &[Prospect], now: DateTime<Utc>) -> Vec<Prospect> {
        let filter = self.filter();
        let working = filter.apply_at(prospects, now);
        debug!(
            window = %filter.window,
            intent = %filter.intent,
            matched = working.len(),
            "applied prospect filter"
        );
        working
    }
}

#[derive(Args, Debug)]
pub(crate) struct TopArgs {
    #[command(flatten)]
    pub(crate) report: ReportArgs,
    /// Number of prospects to list
    #[arg(long, default_value_t = DEFAULT_TOP_PROSPECTS)]
    pub(crate) limit: usize,
}

#[derive(Args, Debug)]
pub(crate) struct TimelineArgs {
    #[command(flatten)]
    pub(crate) report: ReportArgs,
    /// Trailing days to bucket, ending today (UTC)
    #[arg(
        long,
        default_value_t = DEFAULT_TIMELINE_DAYS,
        value_parser = clap::value_parser!(u32).range(1..=MAX_TIMELINE_DAYS as i64)
    )]
    pub(crate) days: u32,
}

#[derive(Args, Debug)]
pub(crate) struct ExplainArgs {
    /// Prospect id to explain
    #[arg(long)]
    pub(crate) id: u32,
    /// Potential, Sales Effectiveness or Close Probability (default: all three)
    #[arg(long)]
    pub(crate) metric: Option<String>,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_summary(
    out: &mut dyn Write,
    prospects: &[Prospect],
    args: &ReportArgs,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let summary = summary_metrics(&args.working_set(prospects, now));
    if args.json {
        return write_json(out, &summary);
    }
    render::summary(out, &summary)?;
    Ok(())
}

pub(crate) fn run_pipeline(
    out: &mut dyn Write,
    prospects: &[Prospect],
    args: &ReportArgs,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let pipeline = pipeline_by_intent(&args.working_set(prospects, now));
    if args.json {
        return write_json(out, &pipeline);
    }
    render::pipeline(out, &pipeline)?;
    Ok(())
}

pub(crate) fn run_top(
    out: &mut dyn Write,
    prospects: &[Prospect],
    args: &TopArgs,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let ranked = top_prospects(&args.report.working_set(prospects, now), args.limit);
    if args.report.json {
        return write_json(out, &ranked);
    }
    render::top_prospects(out, &ranked)?;
    Ok(())
}

pub(crate) fn run_reps(
    out: &mut dyn Write,
    prospects: &[Prospect],
    args: &ReportArgs,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let reps = rep_effectiveness(&args.working_set(prospects, now));
    if args.json {
        return write_json(out, &reps);
    }
    render::reps(out, &reps)?;
    Ok(())
}

pub(crate) fn run_timeline(
    out: &mut dyn Write,
    prospects: &[Prospect],
    args: &TimelineArgs,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let working = args.report.working_set(prospects, now);
    let timeline = intent_timeline_at(&working, args.days, now.date_naive());
    if args.report.json {
        return write_json(out, &timeline);
    }
    render::timeline(out, &timeline)?;
    Ok(())
}

pub(crate) fn run_heatmap(
    out: &mut dyn Write,
    prospects: &[Prospect],
    args: &ReportArgs,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let heatmap = intent_fit_heatmap(&args.working_set(prospects, now));
    if args.json {
        return write_json(out, &heatmap);
    }
    render::heatmap(out, &heatmap)?;
    Ok(())
}

pub(crate) fn run_quadrants(
    out: &mut dyn Write,
    prospects: &[Prospect],
    args: &ReportArgs,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let quadrants = quadrant_breakdown(&args.working_set(prospects, now));
    if args.json {
        return write_json(out, &quadrants);
    }
    render::quadrants(out, &quadrants)?;
    Ok(())
}

#[derive(Serialize)]
struct ExplainOutput {
    detail: ProspectDetail,
    drivers: Vec<MetricDrivers>,
}

#[derive(Serialize)]
struct MetricDrivers {
    metric: Metric,
    value: u8,
    factors: Vec<FeatureContribution>,
}

pub(crate) fn run_explain(
    out: &mut dyn Write,
    prospects: &[Prospect],
    args: &ExplainArgs,
) -> Result<(), AppError> {
    let metrics = match args.metric.as_deref() {
        Some(raw) => vec![raw.parse::<Metric>()?],
        None => Metric::ordered().to_vec(),
    };
    let id = ProspectId(args.id);
    let detail = ProspectDetail::build(prospects, id).ok_or(AppError::UnknownProspect(id))?;

    let drivers = metrics
        .into_iter()
        .map(|metric| MetricDrivers {
            metric,
            value: gauge_value(&detail, metric),
            factors: detail.drivers(metric),
        })
        .collect();
    let output = ExplainOutput { detail, drivers };

    if args.json {
        return write_json(out, &output);
    }
    render::detail(out, &output.detail)?;
    for driver in &output.drivers {
        render::drivers(out, driver.metric, driver.value, &driver.factors)?;
    }
    Ok(())
}

pub(crate) fn run_generate(out: &mut dyn Write, prospects: &[Prospect]) -> Result<(), AppError> {
    writeln!(out, "{}", to_json(prospects)?)?;
    Ok(())
}

pub(crate) fn run_dashboard(
    out: &mut dyn Write,
    prospects: &[Prospect],
    args: &ReportArgs,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let options = DashboardOptions {
        filter: args.filter(),
        ..DashboardOptions::default()
    };
    let report = DashboardReport::build_at(prospects, options, now);
    if args.json {
        return write_json(out, &report);
    }
    render::dashboard(out, &report)?;
    Ok(())
}

fn gauge_value(detail: &ProspectDetail, metric: Metric) -> u8 {
    match metric {
        Metric::Potential => detail.metrics.potential,
        Metric::SalesEffectiveness => detail.metrics.sales_effectiveness,
        Metric::CloseProbability => detail.metrics.close_probability,
    }
}

fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<(), AppError> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rev_radar::prospects::{generate_prospects, GeneratorConfig, IntentLevel};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn sample() -> Vec<Prospect> {
        generate_prospects(GeneratorConfig::new(42, now()).with_prospect_cap(60))
    }

    fn output_of(run: impl FnOnce(&mut Vec<u8>) -> Result<(), AppError>) -> String {
        let mut buffer = Vec::new();
        run(&mut buffer).expect("command succeeds");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn report_args_default_to_unfiltered() {
        assert_eq!(ReportArgs::default().filter(), ProspectFilter::default());
    }

    #[test]
    fn filtered_summary_counts_only_matching_intent() {
        let prospects = sample();
        let args = ReportArgs {
            intent: IntentFilter::Only(IntentLevel::Low),
            json: true,
            ..ReportArgs::default()
        };
        let text = output_of(|out| run_summary(out, &prospects, &args, now()));
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");

        let low = prospects
            .iter()
            .filter(|prospect| prospect.intent_score < 30)
            .count();
        assert_eq!(value["total_prospects"], low);
        assert_eq!(value["intent_breakdown"]["high"], 0);
    }

    #[test]
    fn summary_json_reports_the_filtered_total() {
        let prospects = sample();
        let args = ReportArgs {
            json: true,
            ..ReportArgs::default()
        };
        let text = output_of(|out| run_summary(out, &prospects, &args, now()));
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["total_prospects"], prospects.len());
    }

    #[test]
    fn top_respects_the_limit() {
        let prospects = sample();
        let args = TopArgs {
            report: ReportArgs {
                json: true,
                ..ReportArgs::default()
            },
            limit: 3,
        };
        let text = output_of(|out| run_top(out, &prospects, &args, now()));
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value.as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn explain_rejects_unknown_ids_and_metrics() {
        let prospects = sample();
        let mut buffer = Vec::new();

        let missing = ExplainArgs {
            id: 9_999,
            metric: None,
            json: false,
        };
        assert!(matches!(
            run_explain(&mut buffer, &prospects, &missing),
            Err(AppError::UnknownProspect(ProspectId(9_999)))
        ));

        let bad_metric = ExplainArgs {
            id: 1,
            metric: Some("charisma".to_string()),
            json: false,
        };
        assert!(matches!(
            run_explain(&mut buffer, &prospects, &bad_metric),
            Err(AppError::Metric(_))
        ));
    }

    #[test]
    fn explain_text_lists_each_requested_metric() {
        let prospects = sample();
        let args = ExplainArgs {
            id: 1,
            metric: None,
            json: false,
        };
        let text = output_of(|out| run_explain(out, &prospects, &args));
        assert!(text.contains("Potential drivers"));
        assert!(text.contains("Sales Effectiveness drivers"));
        assert!(text.contains("Close Probability drivers"));
    }

    #[test]
    fn generate_emits_a_loadable_dataset() {
        let prospects = sample();
        let text = output_of(|out| run_generate(out, &prospects));
        let reloaded = rev_radar::prospects::load_json(text.as_bytes()).expect("reloads");
        assert_eq!(reloaded, prospects);
    }

    #[test]
    fn dashboard_text_includes_every_section() {
        let prospects = sample();
        let args = ReportArgs::default();
        let text = output_of(|out| run_dashboard(out, &prospects, &args, now()));
        for heading in [
            "Pipeline summary",
            "Pipeline by intent",
            "Top prospects",
            "Sales rep effectiveness",
            "Intent timeline",
            "Intent x fit heatmap",
            "Quadrants",
        ] {
            assert!(text.contains(heading), "missing section {heading}");
        }
    }
}
