//! D'Agri Talk Security Dashboard
//!
//! Aggregates CI security scan results into one static HTML page.
//!
//! Usage:
//!   dagri-secdash --reports-dir security-reports
//!
//! Exits non-zero when any scan source reports critical findings, so CI can
//! gate on it.

use anyhow::{Context, Result};
use clap::Parser;
use dagri_secdash::{render_dashboard, SecurityReport, DASHBOARD_FILENAME};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "dagri-secdash")]
#[command(about = "Aggregate security scan reports into an HTML dashboard")]
struct Args {
    /// Directory containing the scanner JSON reports
    #[arg(short, long, default_value = "security-reports")]
    reports_dir: PathBuf,

    /// Output path for the HTML dashboard (defaults into the reports dir)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let report = SecurityReport::load(&args.reports_dir);
    let html = render_dashboard(&report);

    let output = args
        .output
        .unwrap_or_else(|| args.reports_dir.join(DASHBOARD_FILENAME));
    std::fs::write(&output, html)
        .with_context(|| format!("Failed to write dashboard to {}", output.display()))?;
    info!("Security dashboard generated: {}", output.display());

    info!("Security scan summary:");
    for (title, summary) in report.sections() {
        info!("   {title}: {} vulnerabilities", summary.vulnerabilities);
    }
    let total_critical = report.total_critical();
    info!("   Total critical: {total_critical}");

    if total_critical > 0 {
        std::process::exit(1);
    }
    Ok(())
}
