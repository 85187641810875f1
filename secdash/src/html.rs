//! Static HTML rendering for the security dashboard.

use crate::report::SecurityReport;

/// Renders the dashboard page: one color-coded card per scan source, a
/// totals summary and standing recommendations.
pub fn render_dashboard(report: &SecurityReport) -> String {
    let mut cards = String::new();
    for (title, summary) in report.sections() {
        cards.push_str(&format!(
            r#"        <div class="card {class}">
            <h3>{title}</h3>
            <div class="metric">{total}</div>
            <p>Vulnerabilities found</p>
            <small>Critical: {critical}, High: {high}</small>
        </div>
"#,
            class = summary.status.css_class(),
            total = summary.vulnerabilities,
            critical = summary.critical,
            high = summary.high,
        ));
    }

    let mut summary_items = String::new();
    for (title, summary) in report.sections() {
        summary_items.push_str(&format!(
            "        <li><strong>{title}:</strong> {} vulnerabilities found</li>\n",
            summary.vulnerabilities
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>D'Agri Talk Security Dashboard</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        .dashboard {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 20px; }}
        .card {{ border: 1px solid #ddd; border-radius: 8px; padding: 20px; }}
        .status-clean {{ border-left: 5px solid #28a745; }}
        .status-warning {{ border-left: 5px solid #ffc107; }}
        .status-critical {{ border-left: 5px solid #dc3545; }}
        .status-no_data {{ border-left: 5px solid #6c757d; }}
        .metric {{ font-size: 2em; font-weight: bold; }}
        .timestamp {{ color: #666; font-size: 0.9em; }}
    </style>
</head>
<body>
    <h1>D'Agri Talk Security Dashboard</h1>
    <p class="timestamp">Last updated: {timestamp}</p>

    <div class="dashboard">
{cards}    </div>

    <h2>Security Scan Summary</h2>
    <ul>
{summary_items}    </ul>

    <h2>Security Recommendations</h2>
    <ul>
        <li>Regularly update dependencies to latest secure versions</li>
        <li>Monitor security advisories for used packages</li>
        <li>Implement runtime security monitoring</li>
        <li>Review and address high-severity vulnerabilities promptly</li>
    </ul>
</body>
</html>
"#,
        timestamp = report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}
