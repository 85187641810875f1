//! Slack notification channel.
//!
//! One-way incoming-webhook messages with a color-coded attachment per
//! severity.

use super::AlertChannel;
use crate::alert::Alert;
use crate::error::{MonitorError, MonitorResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Slack channel settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Incoming webhook URL; empty disables the channel.
    #[serde(default)]
    pub webhook_url: String,
}

/// Slack incoming-webhook channel.
pub struct SlackChannel {
    webhook_url: String,
    client: reqwest::Client,
}

impl SlackChannel {
    /// Creates a channel from configuration.
    pub fn new(config: &SlackConfig) -> Self {
        Self {
            webhook_url: config.webhook_url.clone(),
            client: reqwest::Client::new(),
        }
    }
}

/// Builds the webhook payload: one attachment colored by severity, with the
/// alert message and a timestamp field.
pub fn build_slack_payload(alert: &Alert) -> serde_json::Value {
    json!({
        "attachments": [
            {
                "color": alert.severity.color(),
                "fields": [
                    {
                        "title": format!("D'Agri Talk Alert - {}", alert.severity.label()),
                        "value": alert.message,
                        "short": false
                    },
                    {
                        "title": "Timestamp",
                        "value": alert.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                        "short": true
                    }
                ]
            }
        ]
    })
}

#[async_trait]
impl AlertChannel for SlackChannel {
    fn name(&self) -> &str {
        "slack"
    }

    fn is_available(&self) -> bool {
        !self.webhook_url.is_empty()
    }

    async fn send(&self, alert: &Alert) -> MonitorResult<()> {
        let payload = build_slack_payload(alert);
        let resp = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(MonitorError::Api(format!(
                "slack webhook returned {}",
                resp.status()
            )));
        }
        Ok(())
    }
}
