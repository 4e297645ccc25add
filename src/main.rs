use clap::Parser;
use color_eyre::eyre::bail;
use geo_evidence::utils::expand_paths;
use geo_evidence::{
    Coordinate, DEFAULT_RANGE_KM, GeoFence, ImageEvidence, ImageReport, ImageStatus,
};
use serde_json::json;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Check that evidence photos were captured near a reference location.
///
/// Exits with status 2 when the batch is rejected.
#[derive(Parser, Debug)]
#[command(name = "geo-evidence", version)]
struct Cli {
    /// Reference location: `POINT(lng lat)`, `SRID=4326;POINT (lng lat)` or `lat,lng`
    #[arg(short, long, allow_hyphen_values = true)]
    reference: Coordinate,

    /// Maximum distance between a photo and the reference, in kilometers
    #[arg(long, env = "GEO_EVIDENCE_RANGE_KM", default_value_t = DEFAULT_RANGE_KM)]
    range_km: f64,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Also report on every photo, not just the first failing one
    #[arg(long)]
    report: bool,

    /// Descend into hidden directories and include hidden files
    #[arg(long)]
    include_hidden: bool,

    /// Photo files, or directories to search for photos
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Exit status of a rejected batch.
const REJECTED: u8 = 2;

fn write_reports(out: &mut impl Write, reports: &[ImageReport]) -> io::Result<()> {
    for report in reports {
        let status = match report.status {
            ImageStatus::WithinRange => "ok",
            ImageStatus::OutOfRange => "out of range",
            ImageStatus::MissingLocationData => "no location",
        };
        let position = report
            .coordinate
            .map_or_else(|| "-".to_string(), |c| c.to_string());
        let distance = report
            .distance_km
            .map_or_else(|| "-".to_string(), |d| format!("{d:.2} km"));
        writeln!(
            out,
            "{:>3}  {:<12}  {:<24}  {:>12}  {}",
            report.index, status, position, distance, report.label
        )?;
    }
    Ok(())
}

/// Validates the photos named on the command line and writes the outcome to `out`.
fn run(cli: Cli, out: &mut impl Write) -> color_eyre::Result<ExitCode> {
    let fence = GeoFence::builder()
        .reference(cli.reference)
        .range_km(cli.range_km)
        .build()?;

    let files = expand_paths(&cli.paths, cli.include_hidden)?;
    if files.is_empty() {
        bail!("No photos found in the given paths");
    }
    let images = ImageEvidence::load_all(&files)?;
    info!(images = images.len(), reference = %fence.reference(), range_km = fence.range_km(), "loaded photos");

    let outcome = fence.validate(&images);
    let reports = cli.report.then(|| fence.inspect(&images));

    if cli.json {
        let output = match &reports {
            Some(reports) => json!({ "outcome": outcome, "images": reports }),
            None => serde_json::to_value(&outcome)?,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        if let Some(reports) = &reports {
            write_reports(out, reports)?;
        }
        writeln!(out, "{}", outcome.reason)?;
    }

    Ok(if outcome.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(REJECTED)
    })
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    run(cli, &mut io::stdout().lock())
}

#[cfg(test)]
#[allow(dead_code)]
#[path = "test_support.rs"]
mod test_support;
