//! Pub/sub notification channel.
//!
//! Publishes the alert to a topic on a notification bridge, the counterpart
//! of an SNS publish.

use super::AlertChannel;
use crate::alert::Alert;
use crate::error::{MonitorError, MonitorResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Notification-bridge settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Publish endpoint; empty disables the channel.
    #[serde(default)]
    pub publish_url: String,
    /// Topic to publish on.
    #[serde(default)]
    pub topic: String,
}

/// Topic-publish channel.
pub struct NotifyChannel {
    config: NotifyConfig,
    client: reqwest::Client,
}

impl NotifyChannel {
    /// Creates a channel from configuration.
    pub fn new(config: &NotifyConfig) -> Self {
        Self {
            config: config.clone(),
            client: reqwest::Client::new(),
        }
    }
}

/// Builds the publish payload.
pub fn build_notify_payload(config: &NotifyConfig, alert: &Alert) -> serde_json::Value {
    json!({
        "topic": config.topic,
        "subject": format!("[D'Agri Talk] {}", alert.subject),
        "message": alert.message,
    })
}

#[async_trait]
impl AlertChannel for NotifyChannel {
    fn name(&self) -> &str {
        "notify"
    }

    fn is_available(&self) -> bool {
        !self.config.publish_url.is_empty() && !self.config.topic.is_empty()
    }

    async fn send(&self, alert: &Alert) -> MonitorResult<()> {
        let payload = build_notify_payload(&self.config, alert);
        let resp = self
            .client
            .post(&self.config.publish_url)
            .json(&payload)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(MonitorError::Api(format!(
                "notification bridge returned {}",
                resp.status()
            )));
        }
        Ok(())
    }
}
