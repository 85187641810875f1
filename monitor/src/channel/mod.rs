//! Alert dispatch channels.
//!
//! Every outbound transport is an HTTP POST: a Slack incoming webhook, a
//! mail-gateway API, and a generic pub/sub notify endpoint. Channels are
//! independent; the manager sends the same alert to each one that reports
//! itself available.

mod email;
mod notify;
mod slack;

pub use email::{build_email_payload, EmailChannel, EmailConfig};
pub use notify::{build_notify_payload, NotifyChannel, NotifyConfig};
pub use slack::{build_slack_payload, SlackChannel, SlackConfig};

use crate::alert::Alert;
use crate::error::MonitorResult;
use async_trait::async_trait;

/// One way to deliver an alert.
#[async_trait]
pub trait AlertChannel: Send + Sync {
    /// Short channel name for logs.
    fn name(&self) -> &str;

    /// Whether the channel is configured well enough to attempt a send.
    fn is_available(&self) -> bool;

    /// Delivers the alert.
    async fn send(&self, alert: &Alert) -> MonitorResult<()>;
}
