//! Security-report aggregation for D'Agri Talk.
//!
//! Reads the JSON output of the CI security scanners from a reports
//! directory, tallies vulnerability counts per source, and renders one
//! static HTML page with a color-coded status per scan type. A missing or
//! unparseable report degrades to "no data" — the aggregator itself never
//! fails on scanner output.

mod html;
mod report;

pub use html::render_dashboard;
pub use report::{
    analyze_cargo_audit, analyze_checkov, analyze_npm_audit, analyze_trivy, ScanStatus,
    ScanSummary, SecurityReport, DASHBOARD_FILENAME,
};
