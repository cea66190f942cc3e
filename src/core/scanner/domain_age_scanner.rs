// src/core/scanner/domain_age_scanner.rs

use tracing::{debug, error, info, warn};

use crate::core::models::{AnalysisFinding, DomainAgeData, DomainAgeResults, ScanConfig, ScanResult, Severity};
use crate::core::target::registrable_domain;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::time::Duration;
use tokio::task::spawn_blocking;
use whois_rust::{WhoIs, WhoIsLookupOptions};

// TLD-to-server map in the node-whois servers.json format, embedded so the
// lookup works without any on-disk configuration.
const WHOIS_SERVERS: &str = include_str!("whois_servers.json");

// WHOIS record keys that carry the registration date. Registries disagree on
// the spelling, so several spellings are recognized.
const CREATION_DATE_KEYS: &[&str] = &[
    "creation date",
    "created",
    "created on",
    "registered on",
    "registration time",
];

/// Runs the domain-age check: a WHOIS lookup on the registrable domain
/// followed by age arithmetic against the creation date.
///
/// The WHOIS protocol exchange is blocking, so it is moved off the async
/// runtime onto a blocking task. Every failure mode — unextractable domain,
/// unknown TLD, connection failure, a record without a parseable creation
/// date — is absorbed into the results struct and reads as the Unknown
/// rating downstream.
///
/// # Arguments
/// * `url` - The normalized, scheme-prefixed target URL.
/// * `config` - Checker timeouts; `whois_timeout: None` leaves the lookup unbounded.
///
/// # Returns
/// A `DomainAgeResults` struct containing the creation date, the computed age
/// in whole days, and analysis findings.
pub async fn run_domain_age_scan(url: &str, config: &ScanConfig) -> DomainAgeResults {
    info!(url, "Starting domain age scan.");

    let scan = match registrable_domain(url) {
        Ok(domain) => {
            let timeout = config.whois_timeout;
            debug!(domain, "Spawning blocking task for WHOIS lookup.");
            spawn_blocking(move || perform_whois_lookup(&domain, timeout))
                .await
                .unwrap_or_else(|e| {
                    error!(panic = %e, "Blocking WHOIS lookup task panicked!");
                    Err(format!("Task panicked: {}", e))
                })
        }
        Err(e) => {
            warn!(url, error = %e, "Could not extract a domain for the WHOIS lookup.");
            Err(e)
        }
    };

    let mut results = DomainAgeResults {
        scan,
        analysis: Vec::new(),
    };
    results.analysis = analyze_domain_age_results(&results);

    info!(findings = %results.analysis.len(), "Domain age scan finished.");
    results
}

fn perform_whois_lookup(domain: &str, timeout: Option<Duration>) -> ScanResult<DomainAgeData> {
    debug!(domain, "Performing WHOIS lookup.");

    let whois = WhoIs::from_string(WHOIS_SERVERS).map_err(|e| {
        error!(error = ?e, "Failed to load embedded WHOIS server list");
        format!("WHOIS server list error: {:?}", e)
    })?;

    let mut options = WhoIsLookupOptions::from_string(domain).map_err(|e| {
        error!(domain, error = ?e, "WHOIS lookup options rejected the domain");
        format!("WHOIS options error: {:?}", e)
    })?;
    options.timeout = timeout;

    let raw = whois.lookup(options).map_err(|e| {
        error!(domain, error = ?e, "WHOIS lookup failed");
        format!("WHOIS lookup failed: {:?}", e)
    })?;

    debug!(domain, response_len = raw.len(), "WHOIS response received.");

    // Registries can report several creation dates (one per registrar); only
    // the first is used.
    let Some(first) = extract_creation_dates(&raw).into_iter().next() else {
        warn!(domain, "WHOIS record carries no creation date.");
        return Ok(None);
    };

    let Some(creation_date) = parse_creation_date(&first) else {
        warn!(domain, value = %first, "Creation date could not be parsed.");
        return Ok(None);
    };

    let age_days = Utc::now().signed_duration_since(creation_date).num_days();
    info!(domain, %creation_date, age_days, "Computed domain age.");

    Ok(Some(DomainAgeData {
        domain: domain.to_string(),
        creation_date,
        age_days,
    }))
}

/// Collects the values of all creation-date lines in a raw WHOIS response,
/// in the order the registry reported them.
fn extract_creation_dates(raw: &str) -> Vec<String> {
    let mut dates = Vec::new();
    for line in raw.lines() {
        let line = line.trim();
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim().to_lowercase();
            let value = value.trim();
            if CREATION_DATE_KEYS.contains(&key.as_str()) && !value.is_empty() {
                dates.push(value.to_string());
            }
        }
    }
    dates
}

/// Parses a creation-date string in the formats commonly seen in WHOIS
/// responses. Returns `None` for anything unrecognized.
fn parse_creation_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    // "1997-09-15T04:00:00Z" and offset variants.
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt.with_timezone(&Utc));
    }

    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y.%m.%d %H:%M:%S"];
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%b-%Y", "%d.%m.%Y", "%Y.%m.%d"];
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            let naive = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    None
}

/// Turns the domain-age outcome into findings for the report.
fn analyze_domain_age_results(results: &DomainAgeResults) -> Vec<AnalysisFinding> {
    debug!("Analyzing domain age outcome.");
    let mut analyses = Vec::new();

    match &results.scan {
        Err(_) => {
            debug!("Lookup failed, adding AGE_LOOKUP_FAILED finding.");
            analyses.push(AnalysisFinding::new(Severity::Warning, "AGE_LOOKUP_FAILED"));
        }
        Ok(None) => {
            debug!("No usable creation date, adding AGE_LOOKUP_FAILED finding.");
            analyses.push(AnalysisFinding::new(Severity::Warning, "AGE_LOOKUP_FAILED"));
        }
        Ok(Some(data)) => {
            if data.age_days < 365 {
                debug!(age_days = data.age_days, "Domain is young, adding AGE_DOMAIN_YOUNG finding.");
                analyses.push(AnalysisFinding::new(Severity::Critical, "AGE_DOMAIN_YOUNG"));
            }
        }
    }

    analyses
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn extracts_first_of_multiple_creation_dates() {
        let raw = "Domain Name: EXAMPLE.COM\n\
                   Creation Date: 1997-09-15T04:00:00Z\n\
                   Creation Date: 1997-09-15T07:00:00+0000\n\
                   Registry Expiry Date: 2027-09-14T04:00:00Z\n";
        let dates = extract_creation_dates(raw);
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0], "1997-09-15T04:00:00Z");
    }

    #[test]
    fn recognizes_alternate_key_spellings() {
        let raw = "    Registered on: 01-Aug-2014\n";
        assert_eq!(extract_creation_dates(raw), vec!["01-Aug-2014".to_string()]);

        let raw = "created: 2004-03-25\n";
        assert_eq!(extract_creation_dates(raw), vec!["2004-03-25".to_string()]);
    }

    #[test]
    fn ignores_unrelated_lines() {
        let raw = "Updated Date: 2023-09-09T00:00:00Z\nRegistrar: Example Inc.\n";
        assert!(extract_creation_dates(raw).is_empty());
    }

    #[test]
    fn parses_common_date_formats() {
        let rfc3339 = parse_creation_date("1997-09-15T04:00:00Z").unwrap();
        assert_eq!(rfc3339.year(), 1997);

        let date_only = parse_creation_date("2004-03-25").unwrap();
        assert_eq!((date_only.year(), date_only.month(), date_only.day()), (2004, 3, 25));

        let spaced = parse_creation_date("2004-03-25 11:15:00").unwrap();
        assert_eq!(spaced.year(), 2004);

        let nominet = parse_creation_date("01-Aug-2014").unwrap();
        assert_eq!((nominet.year(), nominet.month(), nominet.day()), (2014, 8, 1));
    }

    #[test]
    fn unparseable_date_yields_none() {
        assert!(parse_creation_date("before Aug-1996").is_none());
        assert!(parse_creation_date("").is_none());
    }

    #[test]
    fn young_domain_gets_a_finding() {
        let results = DomainAgeResults {
            scan: Ok(Some(DomainAgeData {
                domain: "example.com".to_string(),
                creation_date: Utc::now(),
                age_days: 12,
            })),
            analysis: Vec::new(),
        };
        let findings = analyze_domain_age_results(&results);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, "AGE_DOMAIN_YOUNG");
    }
}
