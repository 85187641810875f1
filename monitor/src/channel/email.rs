//! Email notification channel.
//!
//! Posts to a mail-gateway HTTP API (JSON body, bearer auth) rather than
//! speaking SMTP directly; the gateway owns delivery and retries.

use super::AlertChannel;
use crate::alert::Alert;
use crate::error::{MonitorError, MonitorResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Mail-gateway settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Gateway send endpoint; empty disables the channel.
    #[serde(default)]
    pub api_url: String,
    /// Bearer token for the gateway.
    #[serde(default)]
    pub api_key: String,
    /// Sender address.
    #[serde(default)]
    pub from_email: String,
    /// Recipient addresses.
    #[serde(default)]
    pub recipients: Vec<String>,
}

/// HTTP mail-gateway channel.
pub struct EmailChannel {
    config: EmailConfig,
    client: reqwest::Client,
}

impl EmailChannel {
    /// Creates a channel from configuration.
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            config: config.clone(),
            client: reqwest::Client::new(),
        }
    }
}

/// Builds the gateway payload with the standard alert body.
pub fn build_email_payload(config: &EmailConfig, alert: &Alert) -> serde_json::Value {
    let body = format!(
        "D'Agri Talk Monitoring Alert\n\n\
         Time: {}\n\n\
         Message:\n{}\n\n\
         Please investigate immediately.\n\n\
         ---\n\
         D'Agri Talk Monitoring System",
        alert.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        alert.message,
    );
    json!({
        "from": config.from_email,
        "to": config.recipients,
        "subject": format!("[D'Agri Talk Alert] {}", alert.subject),
        "text": body,
    })
}

#[async_trait]
impl AlertChannel for EmailChannel {
    fn name(&self) -> &str {
        "email"
    }

    fn is_available(&self) -> bool {
        !self.config.api_url.is_empty() && !self.config.recipients.is_empty()
    }

    async fn send(&self, alert: &Alert) -> MonitorResult<()> {
        let payload = build_email_payload(&self.config, alert);
        let resp = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(MonitorError::Api(format!(
                "mail gateway returned {}",
                resp.status()
            )));
        }
        Ok(())
    }
}
