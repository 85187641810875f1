//! D'Agri Talk Monitoring Tool
//!
//! Runs out-of-band on a schedule (cron or CI), independent of the request
//! path.
//!
//! Usage:
//!   dagri-monitor --config monitor.json check
//!   dagri-monitor --config monitor.json provision

use anyhow::Result;
use clap::{Parser, Subcommand};
use dagri_monitor::{
    AlertManager, EmailChannel, GatewayMetricsClient, MonitorConfig, NotifyChannel, Provisioner,
    SlackChannel,
};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "dagri-monitor")]
#[command(about = "D'Agri Talk metric polling, alerting and provisioning")]
struct Args {
    /// Path to the monitor configuration file
    #[arg(short, long, default_value = "monitor.json", env = "DAGRI_MONITOR_CONFIG")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Poll metrics once and alert on exceeded thresholds
    Check,
    /// Provision the dashboard and alarms on the gateway
    Provision,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let config = MonitorConfig::load(&args.config)?;

    match args.command {
        Command::Check => {
            let mut manager = AlertManager::new(config.thresholds.clone());
            manager.add_channel(Box::new(SlackChannel::new(&config.slack)));
            manager.add_channel(Box::new(EmailChannel::new(&config.email)));
            manager.add_channel(Box::new(NotifyChannel::new(&config.notify)));

            let provider = GatewayMetricsClient::new(config.metrics.clone());
            let triggered = manager.check_and_alert(&provider).await?;
            if triggered.is_empty() {
                info!("All metrics within thresholds");
            } else {
                info!("Alerts dispatched for: {}", triggered.join(", "));
            }
        }
        Command::Provision => {
            let provisioner = Provisioner::new(config.metrics.base_url.clone());
            provisioner.put_dashboard(&config.dashboard).await?;
            let count = provisioner.put_alarms(&config.dashboard).await?;
            info!("Provisioned dashboard and {count} alarms");
        }
    }

    Ok(())
}
