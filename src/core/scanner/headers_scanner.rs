// src/core/scanner/headers_scanner.rs

use tracing::{debug, error, info, warn};

use crate::core::models::{AnalysisFinding, HeaderData, HeadersResults, ScanConfig, ScanResult, Severity};
use reqwest::header::HeaderMap;

/// Checks for the presence of a specific HTTP header in a `HeaderMap`.
///
/// Header-name lookups on a `HeaderMap` are case-insensitive, matching HTTP
/// semantics. Non-UTF-8 values are recorded with a placeholder so presence is
/// still registered.
///
/// # Arguments
/// * `headers` - A reference to the `HeaderMap` from the HTTP response.
/// * `name` - The name of the header to check (e.g., "strict-transport-security").
///
/// # Returns
/// A `ScanResult<HeaderData>` which is `Ok(Some(HeaderData))` if the header is
/// found and `Ok(None)` if it is not.
fn check_header(headers: &HeaderMap, name: &str) -> ScanResult<HeaderData> {
    debug!(header_name = name, "Checking for header.");
    if let Some(value) = headers.get(name) {
        match value.to_str() {
            Ok(s) => {
                debug!(header_name = name, value = s, "Header found.");
                Ok(Some(HeaderData { value: s.to_string() }))
            }
            Err(_) => {
                warn!(header_name = name, "Header found but contained invalid UTF-8.");
                Ok(Some(HeaderData { value: "[Invalid UTF-8]".to_string() }))
            }
        }
    } else {
        debug!(header_name = name, "Header not found.");
        Ok(None)
    }
}

/// Runs the security-header check.
///
/// Sends a HEAD request with the configured timeout and inspects the response
/// for exactly two headers: `Strict-Transport-Security` and
/// `X-Content-Type-Options`. No other headers influence the score. A failed
/// request is absorbed into the `error` field, which downstream reads as the
/// Unknown rating.
///
/// # Arguments
/// * `url` - The normalized, scheme-prefixed target URL.
/// * `config` - Checker timeouts.
///
/// # Returns
/// A `HeadersResults` struct containing the found headers and analysis findings.
pub async fn run_headers_scan(url: &str, config: &ScanConfig) -> HeadersResults {
    info!(url, "Starting headers scan.");

    let client = match reqwest::Client::builder()
        .user_agent(concat!("urlrisk/", env!("CARGO_PKG_VERSION")))
        .timeout(config.http_timeout)
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Failed to build HTTP client for headers scan.");
            let mut results = HeadersResults::default();
            results.error = Some(format!("Failed to build HTTP client: {}", e));
            results.analysis = analyze_headers_results(&results);
            return results;
        }
    };

    match client.head(url).send().await {
        Ok(response) => {
            info!(status = %response.status(), "Received HTTP response for headers scan.");
            let headers = response.headers();
            let mut results = HeadersResults {
                error: None,
                hsts: check_header(headers, "strict-transport-security"),
                x_content_type_options: check_header(headers, "x-content-type-options"),
                analysis: Vec::new(),
            };
            results.analysis = analyze_headers_results(&results);
            info!(findings = %results.analysis.len(), "Headers scan finished.");
            results
        }
        Err(e) => {
            error!(url, error = %e, "HEAD request failed for headers scan.");
            let mut results = HeadersResults::default();
            results.error = Some(format!("HEAD request failed: {}", e));
            results.analysis = analyze_headers_results(&results);
            results
        }
    }
}

/// Generates findings for each of the two headers that is missing, or a
/// single finding when the request itself failed.
fn analyze_headers_results(results: &HeadersResults) -> Vec<AnalysisFinding> {
    debug!("Analyzing collected header data.");
    let mut analyses = Vec::new();

    if results.error.is_some() {
        debug!("Request error detected, adding HEADERS_REQUEST_FAILED finding.");
        analyses.push(AnalysisFinding::new(Severity::Critical, "HEADERS_REQUEST_FAILED"));
        return analyses;
    }

    if let Ok(None) = &results.hsts {
        debug!("HSTS header missing, adding Warning finding.");
        analyses.push(AnalysisFinding::new(Severity::Warning, "HEADERS_HSTS_MISSING"));
    }

    if let Ok(None) = &results.x_content_type_options {
        debug!("X-Content-Type-Options header missing, adding Warning finding.");
        analyses.push(AnalysisFinding::new(Severity::Warning, "HEADERS_X_CONTENT_TYPE_OPTIONS_MISSING"));
    }

    analyses
}
