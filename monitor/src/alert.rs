//! Threshold evaluation and alert dispatch.

use crate::channel::AlertChannel;
use crate::error::MonitorResult;
use crate::metrics::{
    MetricsProvider, METRIC_5XX_COUNT, METRIC_REQUEST_COUNT, METRIC_RESPONSE_TIME,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info};

/// Alert severity, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// Attachment color used by chat channels.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Info => "#36a64f",
            Self::Warning => "#ff9500",
            Self::Error => "#ff0000",
            Self::Critical => "#8B0000",
        }
    }

    /// Upper-case label for message titles.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One alert, ready for dispatch.
#[derive(Debug, Clone)]
pub struct Alert {
    pub severity: Severity,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    /// Creates an alert stamped with the current time.
    pub fn new(severity: Severity, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            subject: subject.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Trip points for the evaluator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// Average response time above this many seconds trips an alert.
    pub response_time_secs: f64,
    /// 5xx responses divided by total requests above this fraction trips.
    pub error_rate: f64,
    /// Trailing window to evaluate, in minutes.
    pub window_mins: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            response_time_secs: 2.0,
            error_rate: 0.05,
            window_mins: 15,
        }
    }
}

/// Evaluates thresholds and fans alerts out to the configured channels.
pub struct AlertManager {
    thresholds: Thresholds,
    channels: Vec<Box<dyn AlertChannel>>,
}

impl AlertManager {
    /// Creates a manager with no channels yet.
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            channels: Vec::new(),
        }
    }

    /// Registers a dispatch channel.
    pub fn add_channel(&mut self, channel: Box<dyn AlertChannel>) {
        self.channels.push(channel);
    }

    /// Polls the provider and returns the list of tripped conditions,
    /// without dispatching anything.
    pub async fn evaluate(&self, provider: &dyn MetricsProvider) -> MonitorResult<Vec<String>> {
        let window = Duration::from_secs(self.thresholds.window_mins * 60);
        let mut triggered = Vec::new();

        if let Some(avg) = provider.average(METRIC_RESPONSE_TIME, window).await? {
            debug!("average response time over window: {avg:.3}s");
            if avg > self.thresholds.response_time_secs {
                triggered.push("High response time detected".to_string());
            }
        }

        let total = provider.sum(METRIC_REQUEST_COUNT, window).await?;
        if total > 0.0 {
            let errors = provider.sum(METRIC_5XX_COUNT, window).await?;
            let rate = errors / total;
            debug!("error rate over window: {rate:.4} ({errors}/{total})");
            if rate > self.thresholds.error_rate {
                triggered.push("High error rate detected".to_string());
            }
        }

        Ok(triggered)
    }

    /// Checks thresholds and, when any trip, sends ONE aggregated message to
    /// every configured channel. Returns the tripped conditions.
    pub async fn check_and_alert(
        &self,
        provider: &dyn MetricsProvider,
    ) -> MonitorResult<Vec<String>> {
        let triggered = self.evaluate(provider).await?;
        if triggered.is_empty() {
            debug!("all metrics within thresholds");
            return Ok(triggered);
        }

        let lines: Vec<String> = triggered.iter().map(|t| format!("- {t}")).collect();
        let message = format!(
            "The following issues were detected:\n{}",
            lines.join("\n")
        );
        let alert = Alert::new(Severity::Error, "System Alert", message);
        self.dispatch(&alert).await;
        Ok(triggered)
    }

    /// Sends an alert through every available channel. A failing channel is
    /// logged and skipped; dispatch is fire-and-forget, never retried.
    pub async fn dispatch(&self, alert: &Alert) {
        for channel in &self.channels {
            if !channel.is_available() {
                debug!("skipping unavailable channel {}", channel.name());
                continue;
            }
            match channel.send(alert).await {
                Ok(()) => info!("{} alert sent successfully", channel.name()),
                Err(e) => error!("Failed to send {} alert: {e}", channel.name()),
            }
        }
    }
}
