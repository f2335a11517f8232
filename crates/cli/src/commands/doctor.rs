use std::collections::BTreeSet;

use outfitter_core::config::{AppConfig, LoadOptions};
use outfitter_core::{catalog_issues, classify, MAX_TEMPERATURE_C, MIN_TEMPERATURE_C};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(options: LoadOptions, json_output: bool) -> String {
    let report = build_report(options);

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report(options: LoadOptions) -> DoctorReport {
    let checks = vec![check_config(options), check_catalog_integrity(), check_band_coverage()];

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_config(options: LoadOptions) -> DoctorCheck {
    match AppConfig::load(options) {
        Ok(_) => DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Pass,
            details: "configuration loaded and validated".to_string(),
        },
        Err(error) => DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn check_catalog_integrity() -> DoctorCheck {
    let issues = catalog_issues();
    if issues.is_empty() {
        DoctorCheck {
            name: "catalog_integrity",
            status: CheckStatus::Pass,
            details: "3 bands with 3 outfits, 5 accessories and 5 shoes each".to_string(),
        }
    } else {
        DoctorCheck {
            name: "catalog_integrity",
            status: CheckStatus::Fail,
            details: issues.join("; "),
        }
    }
}

/// Walks the accepted range in 0.1 degree steps and checks that bands never
/// step back and that every band is reachable.
fn check_band_coverage() -> DoctorCheck {
    let lowest = (MIN_TEMPERATURE_C * 10.0).round() as i32;
    let highest = (MAX_TEMPERATURE_C * 10.0).round() as i32;

    let mut seen = BTreeSet::new();
    let mut previous = classify(MIN_TEMPERATURE_C);
    for step in lowest..=highest {
        let temperature = f64::from(step) / 10.0;
        let band = classify(temperature);
        if band < previous {
            return DoctorCheck {
                name: "band_coverage",
                status: CheckStatus::Fail,
                details: format!("band dropped from {previous} to {band} at {temperature:.1}°C"),
            };
        }
        seen.insert(band);
        previous = band;
    }

    if seen.len() == 3 {
        DoctorCheck {
            name: "band_coverage",
            status: CheckStatus::Pass,
            details: format!(
                "cold, moderate and hot all reachable between {MIN_TEMPERATURE_C:.1}°C and {MAX_TEMPERATURE_C:.1}°C"
            ),
        }
    } else {
        DoctorCheck {
            name: "band_coverage",
            status: CheckStatus::Fail,
            details: format!("only {} band(s) reachable in the accepted range", seen.len()),
        }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
