//! Scan-report loading and per-source analysis.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File name of the rendered dashboard inside the reports directory.
pub const DASHBOARD_FILENAME: &str = "security-dashboard.html";

/// Aggregated status of one scan source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    Clean,
    Warning,
    Critical,
    NoData,
}

impl ScanStatus {
    /// CSS class used by the dashboard cards.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Clean => "status-clean",
            Self::Warning => "status-warning",
            Self::Critical => "status-critical",
            Self::NoData => "status-no_data",
        }
    }
}

/// Vulnerability tallies for one scan source.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub status: ScanStatus,
    pub vulnerabilities: u64,
    pub critical: u64,
    pub high: u64,
    pub moderate: u64,
    pub low: u64,
}

impl ScanSummary {
    fn no_data() -> Self {
        Self {
            status: ScanStatus::NoData,
            vulnerabilities: 0,
            critical: 0,
            high: 0,
            moderate: 0,
            low: 0,
        }
    }

    fn from_counts(critical: u64, high: u64, moderate: u64, low: u64) -> Self {
        let status = if critical > 0 {
            ScanStatus::Critical
        } else if high > 0 {
            ScanStatus::Warning
        } else {
            ScanStatus::Clean
        };
        Self {
            status,
            vulnerabilities: critical + high + moderate + low,
            critical,
            high,
            moderate,
            low,
        }
    }
}

/// Analyzes `cargo audit --json` output. Dependency advisories carry no
/// uniform severity, so any finding counts as critical — the same rule the
/// Python dependency scanner applied.
pub fn analyze_cargo_audit(report: Option<&Value>) -> ScanSummary {
    let Some(report) = report else {
        return ScanSummary::no_data();
    };
    let count = report["vulnerabilities"]["count"]
        .as_u64()
        .or_else(|| {
            report["vulnerabilities"]["list"]
                .as_array()
                .map(|l| l.len() as u64)
        })
        .unwrap_or(0);
    ScanSummary::from_counts(count, 0, 0, 0)
}

/// Analyzes `npm audit --json` output (`metadata.vulnerabilities` buckets).
pub fn analyze_npm_audit(report: Option<&Value>) -> ScanSummary {
    let Some(report) = report else {
        return ScanSummary::no_data();
    };
    let vulns = &report["metadata"]["vulnerabilities"];
    let bucket = |name: &str| vulns[name].as_u64().unwrap_or(0);
    ScanSummary::from_counts(
        bucket("critical"),
        bucket("high"),
        bucket("moderate"),
        bucket("low"),
    )
}

/// Analyzes a Trivy container-image report (`Results[].Vulnerabilities[]`).
pub fn analyze_trivy(report: Option<&Value>) -> ScanSummary {
    let Some(report) = report else {
        return ScanSummary::no_data();
    };

    let (mut critical, mut high, mut moderate, mut low) = (0, 0, 0, 0);
    for result in report["Results"].as_array().into_iter().flatten() {
        for vuln in result["Vulnerabilities"].as_array().into_iter().flatten() {
            match vuln["Severity"].as_str().unwrap_or("").to_uppercase().as_str() {
                "CRITICAL" => critical += 1,
                "HIGH" => high += 1,
                "MEDIUM" => moderate += 1,
                _ => low += 1,
            }
        }
    }
    ScanSummary::from_counts(critical, high, moderate, low)
}

/// Analyzes a Checkov infrastructure report. Failed checks are warnings —
/// policy findings, not exploitable vulnerabilities.
pub fn analyze_checkov(report: Option<&Value>) -> ScanSummary {
    let Some(report) = report else {
        return ScanSummary::no_data();
    };
    let failed = report["summary"]["failed"].as_u64().unwrap_or(0);
    ScanSummary::from_counts(0, failed, 0, 0)
}

/// The aggregate across all scan sources.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityReport {
    pub backend_deps: ScanSummary,
    pub frontend_deps: ScanSummary,
    pub backend_image: ScanSummary,
    pub frontend_image: ScanSummary,
    pub infrastructure: ScanSummary,
    pub generated_at: DateTime<Utc>,
}

impl SecurityReport {
    /// Loads the fixed set of scan reports from a directory. Missing or
    /// unparseable files read as no data, with a warning.
    pub fn load(reports_dir: &Path) -> Self {
        let backend_deps = load_json(reports_dir, "cargo-audit.json");
        let frontend_deps = load_json(reports_dir, "npm-audit.json");
        let backend_image = load_json(reports_dir, "trivy-backend-image.json");
        let frontend_image = load_json(reports_dir, "trivy-frontend-image.json");
        let infrastructure = load_json(reports_dir, "checkov-terraform.json");

        Self {
            backend_deps: analyze_cargo_audit(backend_deps.as_ref()),
            frontend_deps: analyze_npm_audit(frontend_deps.as_ref()),
            backend_image: analyze_trivy(backend_image.as_ref()),
            frontend_image: analyze_trivy(frontend_image.as_ref()),
            infrastructure: analyze_checkov(infrastructure.as_ref()),
            generated_at: Utc::now(),
        }
    }

    /// Card title and summary for every source, in display order.
    pub fn sections(&self) -> [(&'static str, &ScanSummary); 5] {
        [
            ("Backend Dependencies", &self.backend_deps),
            ("Frontend Dependencies", &self.frontend_deps),
            ("Backend Container", &self.backend_image),
            ("Frontend Container", &self.frontend_image),
            ("Infrastructure", &self.infrastructure),
        ]
    }

    /// Criticals across every source; non-zero fails the CI gate.
    pub fn total_critical(&self) -> u64 {
        self.sections().iter().map(|(_, s)| s.critical).sum()
    }
}

fn load_json(dir: &Path, filename: &str) -> Option<Value> {
    let path = dir.join(filename);
    if !path.exists() {
        return None;
    }
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Could not read {filename}: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Could not parse {filename}: {e}");
            None
        }
    }
}
