use httpmock::prelude::*;
use httpmock::Method::HEAD;

use urlrisk::core::models::{Rating, RiskLevel, ScanConfig};
use urlrisk::core::scanner::headers_scanner::run_headers_scan;
use urlrisk::core::scanner::ssl_scanner::run_ssl_scan;
use urlrisk::core::scanner::run_full_scan;

fn test_config() -> ScanConfig {
    ScanConfig {
        http_timeout: std::time::Duration::from_secs(2),
        whois_timeout: Some(std::time::Duration::from_secs(1)),
    }
}

#[tokio::test]
async fn headers_scan_rates_low_when_both_headers_present() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(HEAD).path("/");
        then.status(200)
            .header("Strict-Transport-Security", "max-age=63072000")
            .header("X-Content-Type-Options", "nosniff");
    });

    let results = run_headers_scan(&server.url("/"), &test_config()).await;

    assert!(results.error.is_none());
    assert_eq!(results.rating(), Rating::Low);
    assert!(results.analysis.is_empty());
}

#[tokio::test]
async fn headers_scan_rates_high_when_headers_missing() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(HEAD).path("/");
        then.status(200);
    });

    let results = run_headers_scan(&server.url("/"), &test_config()).await;

    assert_eq!(results.rating(), Rating::High);
    let codes: Vec<&str> = results.analysis.iter().map(|f| f.code.as_str()).collect();
    assert!(codes.contains(&"HEADERS_HSTS_MISSING"));
    assert!(codes.contains(&"HEADERS_X_CONTENT_TYPE_OPTIONS_MISSING"));
}

#[tokio::test]
async fn headers_scan_rates_high_when_one_header_missing() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(HEAD).path("/");
        then.status(200)
            .header("Strict-Transport-Security", "max-age=63072000");
    });

    let results = run_headers_scan(&server.url("/"), &test_config()).await;

    assert_eq!(results.rating(), Rating::High);
    let codes: Vec<&str> = results.analysis.iter().map(|f| f.code.as_str()).collect();
    assert_eq!(codes, vec!["HEADERS_X_CONTENT_TYPE_OPTIONS_MISSING"]);
}

#[tokio::test]
async fn headers_scan_rates_unknown_when_unreachable() {
    // Port 1 is reliably closed; the request fails without any timeout wait.
    let results = run_headers_scan("http://127.0.0.1:1/", &test_config()).await;

    assert!(results.error.is_some());
    assert_eq!(results.rating(), Rating::Unknown);
    let codes: Vec<&str> = results.analysis.iter().map(|f| f.code.as_str()).collect();
    assert_eq!(codes, vec!["HEADERS_REQUEST_FAILED"]);
}

#[tokio::test]
async fn ssl_scan_flags_plain_http_final_url() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200);
    });

    let results = run_ssl_scan(&server.url("/"), &test_config()).await;

    assert!(!results.is_secure());
    let codes: Vec<&str> = results.analysis.iter().map(|f| f.code.as_str()).collect();
    assert_eq!(codes, vec!["SSL_NOT_ENFORCED"]);
}

#[tokio::test]
async fn ssl_scan_inspects_url_after_redirects() {
    let server = MockServer::start();
    let _redirect = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(302).header("Location", server.url("/landing"));
    });
    let _landing = server.mock(|when, then| {
        when.method(GET).path("/landing");
        then.status(200);
    });

    let results = run_ssl_scan(&server.url("/"), &test_config()).await;

    let data = results.scan.as_ref().unwrap().as_ref().unwrap();
    assert!(data.final_url.ends_with("/landing"));
    assert!(!data.is_https);
}

#[tokio::test]
async fn ssl_scan_treats_request_failure_as_insecure() {
    let results = run_ssl_scan("http://127.0.0.1:1/", &test_config()).await;

    assert!(results.scan.is_err());
    assert!(!results.is_secure());
    let codes: Vec<&str> = results.analysis.iter().map(|f| f.code.as_str()).collect();
    assert_eq!(codes, vec!["SSL_REQUEST_FAILED"]);
}

#[tokio::test]
async fn full_scan_aggregates_signals_into_a_report() {
    // A bare HTTP mock with no security headers: SSL contributes 3, the
    // domain age lookup fails for a loopback IP and contributes 2, and the
    // missing headers contribute 4, landing at 9 (High Risk).
    let server = MockServer::start();
    let _get = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200);
    });
    let _head = server.mock(|when, then| {
        when.method(HEAD).path("/");
        then.status(200);
    });

    let url = server.url("/");
    let report = run_full_scan(&url, &test_config()).await;

    assert_eq!(report.target_url, url);
    assert!(!report.ssl_results.is_secure());
    assert_eq!(report.domain_age_results.rating(), Rating::Unknown);
    assert_eq!(report.headers_results.rating(), Rating::High);
    assert_eq!(report.risk.score, 9);
    assert_eq!(report.risk.level, RiskLevel::High);
}
