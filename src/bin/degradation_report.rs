//! Electrode degradation report
//!
//! Prints the experiment report for a JSON data file, or for the built-in
//! reference dataset when no path is given.
//!
//! Usage: `degradation-report [DATA] [--json]`
//!
//! Set `RUST_LOG=debug` to trace each pipeline stage.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use degradation_ledger::format::Precision;
use degradation_ledger::mass::Electrode;
use degradation_ledger::report::{ExperimentReport, TrackStatus};
use degradation_ledger::source::JsonFileSource;
use degradation_ledger::{dataset, track::TrackSummary};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "degradation-report", about = "Electrode degradation experiment report")]
struct Args {
    /// Experiment data file (JSON); the reference dataset is used when omitted
    #[arg(value_hint = ValueHint::FilePath)]
    data: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let report = match &args.data {
        Some(path) => ExperimentReport::build(&JsonFileSource::new(path))
            .with_context(|| format!("failed to build report from {}", path.display()))?,
        None => ExperimentReport::build(&dataset::hydrostar())
            .context("failed to build report from reference dataset")?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &ExperimentReport) {
    println!("=== Electrode Degradation Experiment ===\n");

    let overview = report.overview();
    println!("Experiment start: {}", overview.experiment_start);
    for track in &overview.tracks {
        let hours = track
            .total_hours
            .map_or_else(|| "unavailable".to_string(), |h| format!("{h:.1} hrs"));
        println!("Track {}: {} runs, {hours}", track.id, track.run_count);
    }

    for track in report.tracks() {
        println!("\n--- {} ---", track.label());
        match track.status() {
            TrackStatus::Ready(summary) => print_track(summary),
            TrackStatus::Failed { reason } => println!("  Unable to compute results: {reason}"),
        }
    }

    let comparison = report.comparison();
    println!("\n=== Comparison summary ===");
    println!("{:<24}{}", "Metric", comparison.columns().join("\t"));
    for row in comparison.rows() {
        println!("{:<24}{}", row.label(), row.formatted().join("\t"));
    }

    println!("\n=== Electrode images ===");
    for panel in report.electrodes() {
        println!("{}", panel.label);
        println!("  {} ({})", panel.before, panel.before_caption);
        match &panel.after_caption {
            Some(caption) => println!("  {} ({caption})", panel.after),
            None => println!("  {}", panel.after),
        }
    }
}

fn print_track(summary: &TrackSummary) {
    let mass = summary.mass();
    let mass_precision = Precision::Hundredths;
    for electrode in Electrode::ALL {
        println!(
            "  {} mass loss: {} g ({})",
            electrode.name(),
            mass_precision.format(mass.loss(electrode)),
            mass.change(electrode)
        );
    }
    println!("  Total mass loss: {} g", mass_precision.format(mass.loss_total()));
    println!(
        "  Total energy: {} Wh",
        Precision::Tenths.format(summary.runs().total_energy())
    );

    println!("  Run log:");
    for run in summary.runs().runs() {
        println!(
            "    {}  {}  {:>6.2} h  {:>7.2} W -> {:>7.2} W  {:>8.2} Wh",
            run.date(),
            run.time_range(),
            run.hours(),
            run.record().power_start(),
            run.record().power_end(),
            run.energy()
        );
    }
}
