use crate::commands::{
    run_dashboard, run_explain, run_generate, run_heatmap, run_pipeline, run_quadrants, run_reps,
    run_summary, run_timeline, run_top, ExplainArgs, ReportArgs, TimelineArgs, TopArgs,
};
use crate::infra::load_prospects;
use chrono::Utc;
use clap::{Parser, Subcommand};
use rev_radar::config::AppConfig;
use rev_radar::error::AppError;
use rev_radar::telemetry;
use std::io::{self, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Rev Radar",
    about = "Score, filter and summarize a sales prospect pipeline from the command line",
    version
)]
struct Cli {
    /// Load prospects from a .csv or .json file instead of generating them
    #[arg(long, global = true)]
    dataset: Option<String>,
    /// Seed for the synthetic dataset (overrides RADAR_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Headline totals, intent mix and funnel counts
    Summary(ReportArgs),
    /// Intent mix per pipeline stage
    Pipeline(ReportArgs),
    /// Hottest prospects, best first
    Top(TopArgs),
    /// Call activity per sales rep
    Reps(ReportArgs),
    /// Daily intent counts by last activity date
    Timeline(TimelineArgs),
    /// Intent by fit grid with deal totals
    Heatmap(ReportArgs),
    /// Fit by engagement strategy buckets
    Quadrants(ReportArgs),
    /// Gauges, colleagues and score drivers for one prospect
    Explain(ExplainArgs),
    /// Print the working dataset as JSON
    Generate,
    /// Every report for one filtered working set (default command)
    Dashboard(ReportArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let mut dataset = config.dataset.clone();
    if let Some(path) = cli.dataset.as_deref() {
        dataset = dataset.with_path(path)?;
    }
    if let Some(seed) = cli.seed {
        dataset = dataset.with_seed(seed);
    }

    let now = Utc::now();
    let prospects = load_prospects(&dataset, now)?;
    let command = cli
        .command
        .unwrap_or_else(|| Command::Dashboard(ReportArgs::default()));
    info!(
        environment = ?config.environment,
        prospects = prospects.len(),
        "rev radar ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Summary(args) => run_summary(&mut out, &prospects, &args, now)?,
        Command::Pipeline(args) => run_pipeline(&mut out, &prospects, &args, now)?,
        Command::Top(args) => run_top(&mut out, &prospects, &args, now)?,
        Command::Reps(args) => run_reps(&mut out, &prospects, &args, now)?,
        Command::Timeline(args) => run_timeline(&mut out, &prospects, &args, now)?,
        Command::Heatmap(args) => run_heatmap(&mut out, &prospects, &args, now)?,
        Command::Quadrants(args) => run_quadrants(&mut out, &prospects, &args, now)?,
        Command::Explain(args) => run_explain(&mut out, &prospects, &args)?,
        Command::Generate => run_generate(&mut out, &prospects)?,
        Command::Dashboard(args) => run_dashboard(&mut out, &prospects, &args, now)?,
    }
    out.flush()?;

    Ok(())
}
