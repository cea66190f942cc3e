// src/report.rs

use crate::core::knowledge_base::get_finding_details;
use crate::core::models::{AnalysisFinding, ScanReport, Severity};

/// Renders the final report to stdout.
///
/// The layout mirrors the scan: one status line per checker, the detailed
/// findings with their knowledge-base explanations, and the risk label last
/// so it is the line a user's eye lands on.
pub fn print_report(report: &ScanReport) {
    println!();
    println!("=== Scan results for {} ===", report.target_url);
    println!();

    print_ssl_line(report);
    print_domain_age_line(report);
    print_headers_line(report);

    let findings: Vec<&AnalysisFinding> = report
        .ssl_results
        .analysis
        .iter()
        .chain(report.domain_age_results.analysis.iter())
        .chain(report.headers_results.analysis.iter())
        .collect();

    if !findings.is_empty() {
        println!();
        println!("Findings:");
        for finding in findings {
            print_finding(finding);
        }
    }

    println!();
    println!("Risk score: {}/10", report.risk.score);
    println!("Risk level for {}: {}", report.target_url, report.risk.level);
}

fn print_ssl_line(report: &ScanReport) {
    match &report.ssl_results.scan {
        Ok(Some(data)) if data.is_https => {
            println!("  HTTPS          : yes (final URL {})", data.final_url);
        }
        Ok(Some(data)) => {
            println!("  HTTPS          : no (final URL {})", data.final_url);
        }
        Ok(None) => {
            println!("  HTTPS          : no");
        }
        Err(e) => {
            println!("  HTTPS          : check failed ({})", e);
        }
    }
}

fn print_domain_age_line(report: &ScanReport) {
    match &report.domain_age_results.scan {
        Ok(Some(data)) => {
            println!(
                "  Domain age     : {} days (registered {}, rated {})",
                data.age_days,
                data.creation_date.format("%Y-%m-%d"),
                report.domain_age_results.rating()
            );
        }
        Ok(None) => {
            println!("  Domain age     : unknown (no usable creation date)");
        }
        Err(e) => {
            println!("  Domain age     : unknown ({})", e);
        }
    }
}

fn print_headers_line(report: &ScanReport) {
    let results = &report.headers_results;
    if let Some(e) = &results.error {
        println!("  Headers        : check failed ({})", e);
        return;
    }
    let describe = |present: bool| if present { "present" } else { "missing" };
    println!(
        "  Headers        : Strict-Transport-Security {}, X-Content-Type-Options {} (rated {})",
        describe(matches!(&results.hsts, Ok(Some(_)))),
        describe(matches!(&results.x_content_type_options, Ok(Some(_)))),
        results.rating()
    );
}

fn print_finding(finding: &AnalysisFinding) {
    let tag = match finding.severity {
        Severity::Critical => "CRIT",
        Severity::Warning => "WARN",
        Severity::Info => "INFO",
    };

    match get_finding_details(&finding.code) {
        Some(detail) => {
            println!("  [{}] {}: {}", tag, detail.category, detail.title);
            println!("         {}", detail.description);
            println!("         Advice: {}", detail.remediation);
        }
        None => {
            // A code without catalog text still gets surfaced rather than dropped.
            println!("  [{}] {}", tag, finding.code);
        }
    }
}
