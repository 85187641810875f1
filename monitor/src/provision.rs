//! Declarative dashboard and alarm provisioning.
//!
//! The dashboard body and alarm definitions are plain JSON values; `PUT`ting
//! them to the gateway is idempotent, so provisioning can run on every
//! deploy.

use crate::error::{MonitorError, MonitorResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

/// Names of the monitored infrastructure pieces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub dashboard_name: String,
    pub load_balancer: String,
    pub cluster: String,
    pub backend_service: String,
    pub frontend_service: String,
    pub db_instance: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dashboard_name: "DAgriTalk-Production-Dashboard".to_string(),
            load_balancer: "dagri-talk-dev-alb".to_string(),
            cluster: "dagri-talk-dev-cluster".to_string(),
            backend_service: "dagri-talk-backend-dev".to_string(),
            frontend_service: "dagri-talk-frontend-dev".to_string(),
            db_instance: "dagri-talk-dev-db".to_string(),
        }
    }
}

/// Builds the dashboard body: request/latency/status series, service CPU and
/// memory, database performance, healthy-host and request-count tiles, and a
/// recent-errors log view.
pub fn dashboard_body(cfg: &DashboardConfig) -> Value {
    json!({
        "widgets": [
            {
                "type": "metric",
                "x": 0, "y": 0, "width": 12, "height": 6,
                "properties": {
                    "metrics": [
                        ["LoadBalancer", "RequestCount", "Name", cfg.load_balancer],
                        [".", "TargetResponseTime", ".", "."],
                        [".", "HTTPCode_Target_2XX_Count", ".", "."],
                        [".", "HTTPCode_Target_4XX_Count", ".", "."],
                        [".", "HTTPCode_Target_5XX_Count", ".", "."]
                    ],
                    "view": "timeSeries",
                    "stacked": false,
                    "title": "Load Balancer Metrics",
                    "period": 300
                }
            },
            {
                "type": "metric",
                "x": 12, "y": 0, "width": 12, "height": 6,
                "properties": {
                    "metrics": [
                        ["Service", "CPUUtilization", "Name", cfg.backend_service, "Cluster", cfg.cluster],
                        [".", "MemoryUtilization", ".", ".", ".", "."],
                        [".", "CPUUtilization", "Name", cfg.frontend_service, "Cluster", cfg.cluster],
                        [".", "MemoryUtilization", ".", ".", ".", "."]
                    ],
                    "view": "timeSeries",
                    "stacked": false,
                    "title": "Service Metrics",
                    "period": 300
                }
            },
            {
                "type": "log",
                "x": 0, "y": 6, "width": 16, "height": 6,
                "properties": {
                    "query": "fields @timestamp, @message | filter @message like /ERROR/ | sort @timestamp desc | limit 20",
                    "source": cfg.backend_service,
                    "title": "Recent Application Errors",
                    "view": "table"
                }
            },
            {
                "type": "metric",
                "x": 0, "y": 12, "width": 12, "height": 6,
                "properties": {
                    "metrics": [
                        ["Database", "CPUUtilization", "Instance", cfg.db_instance],
                        [".", "DatabaseConnections", ".", "."],
                        [".", "ReadLatency", ".", "."],
                        [".", "WriteLatency", ".", "."]
                    ],
                    "view": "timeSeries",
                    "stacked": false,
                    "title": "Database Performance",
                    "period": 300
                }
            },
            {
                "type": "number",
                "x": 12, "y": 12, "width": 6, "height": 3,
                "properties": {
                    "metrics": [
                        ["LoadBalancer", "HealthyHostCount", "Name", cfg.load_balancer]
                    ],
                    "view": "singleValue",
                    "title": "Healthy Hosts"
                }
            },
            {
                "type": "number",
                "x": 18, "y": 12, "width": 6, "height": 3,
                "properties": {
                    "metrics": [
                        ["LoadBalancer", "RequestCount", "Name", cfg.load_balancer]
                    ],
                    "view": "singleValue",
                    "title": "Total Requests (5min)",
                    "period": 300,
                    "stat": "Sum"
                }
            }
        ]
    })
}

/// Builds the alarm definitions.
pub fn alarm_definitions(cfg: &DashboardConfig) -> Vec<Value> {
    vec![
        json!({
            "name": "DAgriTalk-High-Error-Rate",
            "description": "High error rate detected",
            "metric": "HTTPCode_Target_5XX_Count",
            "dimension": cfg.load_balancer,
            "statistic": "Sum",
            "comparison": "GreaterThanThreshold",
            "threshold": 10.0,
            "period": 300,
            "evaluation_periods": 2
        }),
        json!({
            "name": "DAgriTalk-High-Response-Time",
            "description": "High response time detected",
            "metric": "TargetResponseTime",
            "dimension": cfg.load_balancer,
            "statistic": "Average",
            "comparison": "GreaterThanThreshold",
            "threshold": 2.0,
            "period": 300,
            "evaluation_periods": 3
        }),
        json!({
            "name": "DAgriTalk-Low-Healthy-Hosts",
            "description": "Load balancer has too few healthy targets",
            "metric": "HealthyHostCount",
            "dimension": cfg.load_balancer,
            "statistic": "Minimum",
            "comparison": "LessThanThreshold",
            "threshold": 1.0,
            "period": 300,
            "evaluation_periods": 1
        }),
        json!({
            "name": "DAgriTalk-High-Backend-CPU",
            "description": "Backend service CPU is saturated",
            "metric": "CPUUtilization",
            "dimension": cfg.backend_service,
            "statistic": "Average",
            "comparison": "GreaterThanThreshold",
            "threshold": 80.0,
            "period": 300,
            "evaluation_periods": 3
        }),
    ]
}

/// Pushes dashboards and alarms to the gateway.
pub struct Provisioner {
    base_url: String,
    client: reqwest::Client,
}

impl Provisioner {
    /// Creates a provisioner for the given gateway.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// PUTs the dashboard body under its configured name.
    pub async fn put_dashboard(&self, cfg: &DashboardConfig) -> MonitorResult<()> {
        let url = format!("{}/api/v1/dashboards/{}", self.base_url, cfg.dashboard_name);
        let resp = self
            .client
            .put(&url)
            .json(&dashboard_body(cfg))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(MonitorError::Api(format!(
                "dashboard upload returned {}",
                resp.status()
            )));
        }
        info!("Dashboard {} provisioned", cfg.dashboard_name);
        Ok(())
    }

    /// PUTs every alarm definition; returns how many were provisioned.
    pub async fn put_alarms(&self, cfg: &DashboardConfig) -> MonitorResult<usize> {
        let alarms = alarm_definitions(cfg);
        for alarm in &alarms {
            let name = alarm["name"].as_str().unwrap_or("unnamed");
            let url = format!("{}/api/v1/alarms/{}", self.base_url, name);
            let resp = self.client.put(&url).json(alarm).send().await?;
            if !resp.status().is_success() {
                return Err(MonitorError::Api(format!(
                    "alarm {name} upload returned {}",
                    resp.status()
                )));
            }
            info!("Alarm {name} provisioned");
        }
        Ok(alarms.len())
    }
}
