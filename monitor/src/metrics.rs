//! Metrics gateway client.
//!
//! The gateway exposes CloudWatch-style series: a metric name plus a
//! load-balancer dimension, queried over a trailing window with a fixed
//! period and statistic. The base URL is configurable so tests can point a
//! client at a mock server.

use crate::error::{MonitorError, MonitorResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Average target response time, in seconds.
pub const METRIC_RESPONSE_TIME: &str = "TargetResponseTime";
/// Requests handled by the load balancer.
pub const METRIC_REQUEST_COUNT: &str = "RequestCount";
/// Responses with a 5xx status from the targets.
pub const METRIC_5XX_COUNT: &str = "HTTPCode_Target_5XX_Count";

/// Where and what to poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Base URL of the metrics gateway.
    pub base_url: String,
    /// Load-balancer dimension value for all queries.
    pub load_balancer: String,
    /// Datapoint aggregation period in seconds.
    pub period_secs: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9090".to_string(),
            load_balancer: "dagri-talk-dev-alb".to_string(),
            period_secs: 300,
        }
    }
}

/// One aggregated datapoint from a series.
#[derive(Debug, Clone, Deserialize)]
pub struct Datapoint {
    /// Seconds since epoch.
    pub timestamp: i64,
    pub value: f64,
}

#[derive(Debug, Deserialize)]
struct SeriesResponse {
    datapoints: Vec<Datapoint>,
}

/// Source of metric series, abstracted so the evaluator can be driven by a
/// stub in tests.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    /// Average of the metric over the trailing window, `None` when the
    /// series has no datapoints.
    async fn average(&self, metric: &str, window: Duration) -> MonitorResult<Option<f64>>;

    /// Sum of the metric over the trailing window (0 when empty).
    async fn sum(&self, metric: &str, window: Duration) -> MonitorResult<f64>;
}

/// HTTP client for the metrics gateway.
pub struct GatewayMetricsClient {
    config: MetricsConfig,
    client: reqwest::Client,
}

impl GatewayMetricsClient {
    /// Creates a client for the configured gateway.
    pub fn new(config: MetricsConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn fetch(
        &self,
        metric: &str,
        stat: &str,
        window: Duration,
    ) -> MonitorResult<Vec<Datapoint>> {
        let end = chrono::Utc::now().timestamp();
        let start = end - window.as_secs() as i64;
        let url = format!("{}/api/v1/metrics/{}", self.config.base_url, metric);

        let query: Vec<(&str, String)> = vec![
            ("dimension", self.config.load_balancer.clone()),
            ("start", start.to_string()),
            ("end", end.to_string()),
            ("period", self.config.period_secs.to_string()),
            ("stat", stat.to_string()),
        ];

        let resp = self.client.get(&url).query(&query).send().await?;
        if !resp.status().is_success() {
            return Err(MonitorError::Api(format!(
                "metrics gateway returned {} for {metric}",
                resp.status()
            )));
        }
        let body: SeriesResponse = resp.json().await?;
        Ok(body.datapoints)
    }
}

#[async_trait]
impl MetricsProvider for GatewayMetricsClient {
    async fn average(&self, metric: &str, window: Duration) -> MonitorResult<Option<f64>> {
        let datapoints = self.fetch(metric, "Average", window).await?;
        if datapoints.is_empty() {
            return Ok(None);
        }
        let sum: f64 = datapoints.iter().map(|dp| dp.value).sum();
        Ok(Some(sum / datapoints.len() as f64))
    }

    async fn sum(&self, metric: &str, window: Duration) -> MonitorResult<f64> {
        let datapoints = self.fetch(metric, "Sum", window).await?;
        Ok(datapoints.iter().map(|dp| dp.value).sum())
    }
}
