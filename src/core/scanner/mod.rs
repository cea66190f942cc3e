// src/core/scanner/mod.rs

// This file acts as the public interface for the `scanner` module.
// It declares and makes all checker submodules public.
pub mod domain_age_scanner;
pub mod headers_scanner;
pub mod ssl_scanner;

use tracing::info;

use crate::core::models::{ScanConfig, ScanReport};
use crate::core::scoring::calculate_risk;
use self::domain_age_scanner::run_domain_age_scan;
use self::headers_scanner::run_headers_scan;
use self::ssl_scanner::run_ssl_scan;

/// Executes all three checkers and folds their signals into a scored report.
///
/// This is the main orchestration function. The checkers are independent of
/// one another, so they run concurrently via `tokio::join!`; the aggregation
/// below is order-independent and the scoring is deterministic, so the
/// resulting report is identical to a sequential run.
///
/// # Arguments
///
/// * `url` - The normalized, scheme-prefixed target URL.
/// * `config` - Checker timeouts.
///
/// # Returns
///
/// A `ScanReport` combining the raw checker results and the risk assessment.
pub async fn run_full_scan(url: &str, config: &ScanConfig) -> ScanReport {
    info!(url, "Starting full scan.");

    let (ssl_results, domain_age_results, headers_results) = tokio::join!(
        run_ssl_scan(url, config),
        run_domain_age_scan(url, config),
        run_headers_scan(url, config)
    );

    let risk = calculate_risk(
        ssl_results.is_secure(),
        domain_age_results.rating(),
        headers_results.rating(),
    );

    info!(score = risk.score, level = %risk.level, "Full scan finished.");

    ScanReport {
        target_url: url.to_string(),
        ssl_results,
        domain_age_results,
        headers_results,
        risk,
    }
}
