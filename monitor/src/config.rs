//! Monitor configuration file.

use crate::alert::Thresholds;
use crate::channel::{EmailConfig, NotifyConfig, SlackConfig};
use crate::error::{MonitorError, MonitorResult};
use crate::metrics::MetricsConfig;
use crate::provision::DashboardConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything one `dagri-monitor` invocation needs, loaded from a JSON file.
/// Every section has defaults so a minimal config can name only the
/// channels it wants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub slack: SlackConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl MonitorConfig {
    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> MonitorResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| MonitorError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| MonitorError::Config(format!("cannot parse {}: {e}", path.display())))
    }
}
