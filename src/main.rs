use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{LevelFilter, info};

use riskmap_core::RiskMapper;
use riskmap_core::core::loader::load_run_records;
use riskmap_core::report::summary::render_summary;
use riskmap_core::report::{MappingReport, StatusReport, to_json_string, to_toml_string};

#[derive(Parser)]
#[command(name = "riskmap")]
#[command(about = "Map benchmark metric categories to governance risk indicators", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the weighted category -> indicator mapping report
    Map(MapArgs),

    /// Evaluate per-model pass/fail status from benchmark run results
    Status(StatusArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Benchmark schema JSON (metric groups)
    #[arg(long)]
    schema: PathBuf,

    /// Governance playbook JSON (risk-indicator entries)
    #[arg(long)]
    playbook: PathBuf,

    /// Optional groups-metadata JSON sidecar
    #[arg(long)]
    groups_metadata: Option<PathBuf>,

    /// Benchmark version label recorded in report metadata
    #[arg(long, default_value = "v0.4.0")]
    benchmark_version: String,
}

#[derive(Args)]
struct MapArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output file for the mapping report
    #[arg(long)]
    out: PathBuf,

    /// Output serialization format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Skip the stdout summary table
    #[arg(long)]
    no_summary: bool,
}

#[derive(Args)]
struct StatusArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Benchmark run results JSON (result records)
    #[arg(long)]
    results: PathBuf,

    /// Output file for the status report
    #[arg(long)]
    out: PathBuf,

    /// Output serialization format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Toml,
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn load_mapper(input: &InputArgs) -> Result<RiskMapper> {
    RiskMapper::from_files(
        &input.schema,
        &input.playbook,
        input.groups_metadata.as_deref(),
    )
    .context("loading input datasets")
}

fn serialize<T: serde::Serialize>(report: &T, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => to_json_string(report)?,
        OutputFormat::Toml => to_toml_string(report)?,
    };
    Ok(text)
}

fn run_map(args: MapArgs) -> Result<()> {
    let mapper = load_mapper(&args.input)?;
    let report = MappingReport::build(
        &mapper,
        &args.input.benchmark_version,
        &args.input.playbook.display().to_string(),
    );
    info!(
        "mapped {} categories onto {} indicator pairs",
        report.category_count(),
        report.pair_count()
    );

    let text = serialize(&report, args.format)?;
    fs::write(&args.out, text)
        .with_context(|| format!("writing mapping report to {}", args.out.display()))?;
    info!("wrote mapping report to {}", args.out.display());

    if !args.no_summary {
        print!("{}", render_summary(&report));
    }
    Ok(())
}

fn run_status(args: StatusArgs) -> Result<()> {
    let mapper = load_mapper(&args.input)?;
    let records = load_run_records(&args.results).context("loading run results")?;

    let report = StatusReport::build(
        &mapper,
        &records,
        &args.input.benchmark_version,
        &args.input.playbook.display().to_string(),
    );
    info!(
        "evaluated {} models, {} failing cells",
        report.model_count(),
        report.failure_count()
    );

    let text = serialize(&report, args.format)?;
    fs::write(&args.out, text)
        .with_context(|| format!("writing status report to {}", args.out.display()))?;
    info!("wrote status report to {}", args.out.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Map(args) => run_map(args),
        Commands::Status(args) => run_status(args),
    }
}
