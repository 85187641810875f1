//! Out-of-band monitoring and alerting for D'Agri Talk.
//!
//! Runs independently of the request path on a schedule. One invocation:
//! polls the metrics gateway over a trailing window, compares the series
//! against configured thresholds, and — when anything trips — composes a
//! single aggregated message and dispatches it to every configured channel.
//!
//! The same binary also provisions the observability surface declaratively:
//! dashboard body and alarm definitions are built as JSON values and PUT to
//! the gateway.

mod alert;
mod channel;
mod config;
mod error;
mod metrics;
mod provision;

pub use alert::{Alert, AlertManager, Severity, Thresholds};
pub use channel::{
    build_email_payload, build_notify_payload, build_slack_payload, AlertChannel, EmailChannel,
    EmailConfig, NotifyChannel, NotifyConfig, SlackChannel, SlackConfig,
};
pub use config::MonitorConfig;
pub use error::{MonitorError, MonitorResult};
pub use metrics::{
    Datapoint, GatewayMetricsClient, MetricsConfig, MetricsProvider, METRIC_5XX_COUNT,
    METRIC_REQUEST_COUNT, METRIC_RESPONSE_TIME,
};
pub use provision::{alarm_definitions, dashboard_body, DashboardConfig, Provisioner};
