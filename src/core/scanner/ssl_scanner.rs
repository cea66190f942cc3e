// src/core/scanner/ssl_scanner.rs

use tracing::{debug, error, info};

use crate::core::models::{AnalysisFinding, ScanConfig, ScanResult, Severity, SslData, SslResults};

/// Runs the SSL check: a GET request that follows redirects, after which the
/// scheme of the final URL decides the signal.
///
/// The request uses the configured timeout. Any failure — timeout,
/// connection refusal, DNS failure — is recorded in the results struct and
/// never propagated; a failed check reads as "not secure".
///
/// # Arguments
/// * `url` - The normalized, scheme-prefixed target URL.
/// * `config` - Checker timeouts.
///
/// # Returns
/// An `SslResults` struct containing the observed final URL and analysis findings.
pub async fn run_ssl_scan(url: &str, config: &ScanConfig) -> SslResults {
    info!(url, "Starting SSL scan.");

    let client = match reqwest::Client::builder()
        .user_agent(concat!("urlrisk/", env!("CARGO_PKG_VERSION")))
        .timeout(config.http_timeout)
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Failed to build HTTP client for SSL scan.");
            let mut results = SslResults::default();
            results.scan = Err(format!("Failed to build HTTP client: {}", e));
            results.analysis = analyze_ssl_results(&results);
            return results;
        }
    };

    let scan = match client.get(url).send().await {
        Ok(response) => {
            // reqwest follows redirects by default, so `response.url()` is the
            // final URL of the chain. The literal prefix comparison mirrors
            // what the rating is defined against.
            let final_url = response.url().to_string();
            let is_https = final_url.starts_with("https://");
            info!(status = %response.status(), final_url, is_https, "Received response for SSL scan.");
            Ok(Some(SslData { final_url, is_https }))
        }
        Err(e) => {
            error!(url, error = %e, "HTTP request failed for SSL scan.");
            Err(format!("HTTP request failed: {}", e))
        }
    };

    let mut results = SslResults {
        scan,
        analysis: Vec::new(),
    };
    results.analysis = analyze_ssl_results(&results);

    info!(findings = %results.analysis.len(), "SSL scan finished.");
    results
}

/// Turns the raw SSL scan outcome into findings for the report.
fn analyze_ssl_results(results: &SslResults) -> Vec<AnalysisFinding> {
    debug!("Analyzing SSL scan outcome.");
    let mut analyses = Vec::new();

    match &results.scan {
        Err(_) => {
            debug!("Request failed, adding SSL_REQUEST_FAILED finding.");
            analyses.push(AnalysisFinding::new(Severity::Critical, "SSL_REQUEST_FAILED"));
        }
        Ok(Some(data)) if !data.is_https => {
            debug!(final_url = %data.final_url, "Final URL is not HTTPS, adding SSL_NOT_ENFORCED finding.");
            analyses.push(AnalysisFinding::new(Severity::Critical, "SSL_NOT_ENFORCED"));
        }
        _ => {}
    }

    analyses
}
