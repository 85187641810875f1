use dagri_secdash::{ScanStatus, SecurityReport};
use serde_json::json;
use std::path::Path;

fn write_report(dir: &Path, name: &str, value: serde_json::Value) {
    std::fs::write(dir.join(name), serde_json::to_string(&value).unwrap()).unwrap();
}

#[test]
fn empty_directory_reads_as_no_data_everywhere() {
    let dir = tempfile::tempdir().unwrap();
    let report = SecurityReport::load(dir.path());

    for (_, summary) in report.sections() {
        assert_eq!(summary.status, ScanStatus::NoData);
        assert_eq!(summary.vulnerabilities, 0);
    }
    assert_eq!(report.total_critical(), 0);
}

#[test]
fn cargo_audit_findings_are_critical() {
    let dir = tempfile::tempdir().unwrap();
    write_report(
        dir.path(),
        "cargo-audit.json",
        json!({ "vulnerabilities": { "found": true, "count": 2, "list": [{}, {}] } }),
    );

    let report = SecurityReport::load(dir.path());
    assert_eq!(report.backend_deps.status, ScanStatus::Critical);
    assert_eq!(report.backend_deps.vulnerabilities, 2);
    assert_eq!(report.total_critical(), 2);
}

#[test]
fn npm_audit_buckets_drive_status() {
    let dir = tempfile::tempdir().unwrap();
    write_report(
        dir.path(),
        "npm-audit.json",
        json!({ "metadata": { "vulnerabilities": { "critical": 0, "high": 3, "moderate": 1, "low": 4 } } }),
    );

    let report = SecurityReport::load(dir.path());
    assert_eq!(report.frontend_deps.status, ScanStatus::Warning);
    assert_eq!(report.frontend_deps.vulnerabilities, 8);
    assert_eq!(report.frontend_deps.high, 3);
    assert_eq!(report.total_critical(), 0);
}

#[test]
fn trivy_severities_are_tallied() {
    let dir = tempfile::tempdir().unwrap();
    write_report(
        dir.path(),
        "trivy-backend-image.json",
        json!({ "Results": [
            { "Vulnerabilities": [
                { "Severity": "CRITICAL" },
                { "Severity": "HIGH" },
                { "Severity": "MEDIUM" },
                { "Severity": "LOW" }
            ] },
            { "Vulnerabilities": [ { "Severity": "critical" } ] }
        ] }),
    );

    let report = SecurityReport::load(dir.path());
    assert_eq!(report.backend_image.status, ScanStatus::Critical);
    assert_eq!(report.backend_image.critical, 2);
    assert_eq!(report.backend_image.high, 1);
    assert_eq!(report.backend_image.vulnerabilities, 5);
}

#[test]
fn trivy_without_findings_is_clean() {
    let dir = tempfile::tempdir().unwrap();
    write_report(
        dir.path(),
        "trivy-frontend-image.json",
        json!({ "Results": [ { "Vulnerabilities": [] } ] }),
    );

    let report = SecurityReport::load(dir.path());
    assert_eq!(report.frontend_image.status, ScanStatus::Clean);
}

#[test]
fn checkov_failures_warn_but_never_fail_the_gate() {
    let dir = tempfile::tempdir().unwrap();
    write_report(
        dir.path(),
        "checkov-terraform.json",
        json!({ "summary": { "passed": 40, "failed": 6 } }),
    );

    let report = SecurityReport::load(dir.path());
    assert_eq!(report.infrastructure.status, ScanStatus::Warning);
    assert_eq!(report.infrastructure.vulnerabilities, 6);
    assert_eq!(report.total_critical(), 0);
}

#[test]
fn malformed_report_degrades_to_no_data() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("npm-audit.json"), "{not json").unwrap();

    let report = SecurityReport::load(dir.path());
    assert_eq!(report.frontend_deps.status, ScanStatus::NoData);
}

#[test]
fn total_critical_sums_across_sources() {
    let dir = tempfile::tempdir().unwrap();
    write_report(
        dir.path(),
        "cargo-audit.json",
        json!({ "vulnerabilities": { "count": 1 } }),
    );
    write_report(
        dir.path(),
        "npm-audit.json",
        json!({ "metadata": { "vulnerabilities": { "critical": 2 } } }),
    );
    write_report(
        dir.path(),
        "trivy-backend-image.json",
        json!({ "Results": [ { "Vulnerabilities": [ { "Severity": "CRITICAL" } ] } ] }),
    );

    let report = SecurityReport::load(dir.path());
    assert_eq!(report.total_critical(), 4);
}
