// src/core/models.rs

use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use std::time::Duration;

// --- Reusable Result Types ---
// A custom type alias for a checker outcome: an optional success value or a
// String error. Checkers absorb their own failures into this shape instead of
// propagating them; the scorer maps the `Err`/`None` branches onto the
// `Unknown` rating.
pub type ScanResult<T> = Result<Option<T>, String>;

// --- Core Data Models ---

// An enumeration representing the severity level of a finding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

// A struct representing an analysis finding, containing a severity level and a string code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisFinding {
    pub severity: Severity,
    pub code: String,
}

impl AnalysisFinding {
    // A constructor function to create a new `AnalysisFinding` instance.
    pub fn new(severity: Severity, code: &str) -> Self {
        Self { severity, code: code.to_string() }
    }
}

/// The categorical value a checker contributes to the risk score.
///
/// `High` means the checker observed something risky, `Low` means the check
/// passed, `Unknown` means the lookup itself failed and nothing could be
/// concluded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, strum::Display)]
pub enum Rating {
    High,
    Low,
    Unknown,
}

/// The three-tier label the final score is mapped onto.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, strum::Display)]
pub enum RiskLevel {
    #[strum(serialize = "Low Risk")]
    Low,
    #[strum(serialize = "Medium Risk")]
    Medium,
    #[strum(serialize = "High Risk")]
    High,
}

// --- Checker Configuration ---

/// Timeouts for the individual checkers, passed in rather than hard-coded so
/// tests can simulate slow or failing endpoints.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Per-request timeout for the GET and HEAD checks.
    pub http_timeout: Duration,
    /// Timeout for the WHOIS lookup. `None` leaves the lookup unbounded,
    /// matching the historical behavior of this tool; a hung WHOIS server
    /// then blocks that checker until the connection dies on its own.
    pub whois_timeout: Option<Duration>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            http_timeout: Duration::from_secs(5),
            whois_timeout: None,
        }
    }
}

// --- SSL Checker Models ---

// The data observed by a successful GET: where the redirect chain ended up
// and whether that final URL is served over HTTPS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SslData {
    pub final_url: String,
    pub is_https: bool,
}

// A struct that aggregates the results of the SSL check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SslResults {
    pub scan: ScanResult<SslData>,
    pub analysis: Vec<AnalysisFinding>,
}

impl Default for SslResults {
    fn default() -> Self {
        Self {
            scan: Ok(None),
            analysis: Vec::new(),
        }
    }
}

impl SslResults {
    /// The boolean SSL signal: true only when the request succeeded and the
    /// final post-redirect URL is HTTPS. A failed request counts as insecure,
    /// not unknown.
    pub fn is_secure(&self) -> bool {
        matches!(&self.scan, Ok(Some(data)) if data.is_https)
    }
}

// --- Domain Age Checker Models ---

// Creation date and computed age for the registrable domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainAgeData {
    pub domain: String,
    pub creation_date: DateTime<Utc>,
    pub age_days: i64,
}

// A struct that aggregates the results of the WHOIS-based age check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainAgeResults {
    pub scan: ScanResult<DomainAgeData>,
    pub analysis: Vec<AnalysisFinding>,
}

impl Default for DomainAgeResults {
    fn default() -> Self {
        Self {
            scan: Ok(None),
            analysis: Vec::new(),
        }
    }
}

impl DomainAgeResults {
    /// Maps the WHOIS outcome onto a rating. Domains younger than a year rate
    /// `High`. The comparison is a literal `age_days < 365`, so a creation
    /// date in the future (negative age) also rates `High`; callers rely on
    /// that exact behavior. A failed lookup or a record without a usable
    /// creation date rates `Unknown`.
    pub fn rating(&self) -> Rating {
        match &self.scan {
            Ok(Some(data)) => {
                if data.age_days < 365 {
                    Rating::High
                } else {
                    Rating::Low
                }
            }
            Ok(None) | Err(_) => Rating::Unknown,
        }
    }
}

// --- Header Checker Models ---

// A struct to hold a single header's value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderData {
    pub value: String,
}

// A struct that aggregates the results of the security-header check. Only the
// two headers that feed the score are inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadersResults {
    pub hsts: ScanResult<HeaderData>,
    pub x_content_type_options: ScanResult<HeaderData>,
    pub error: Option<String>,
    pub analysis: Vec<AnalysisFinding>,
}

impl Default for HeadersResults {
    fn default() -> Self {
        Self {
            hsts: Ok(None),
            x_content_type_options: Ok(None),
            error: None,
            analysis: Vec::new(),
        }
    }
}

impl HeadersResults {
    /// Maps header presence onto a rating: `Unknown` when the HEAD request
    /// failed, `High` when either header is missing, `Low` when both are
    /// present.
    pub fn rating(&self) -> Rating {
        if self.error.is_some() {
            return Rating::Unknown;
        }
        let hsts_present = matches!(&self.hsts, Ok(Some(_)));
        let xcto_present = matches!(&self.x_content_type_options, Ok(Some(_)));
        if hsts_present && xcto_present {
            Rating::Low
        } else {
            Rating::High
        }
    }
}

// --- Main Report ---

/// The weighted score and the label it maps onto.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
}

// A main report struct that combines the results of all individual checkers
// and the computed assessment into a single value, built once per invocation
// and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub target_url: String,
    pub ssl_results: SslResults,
    pub domain_age_results: DomainAgeResults,
    pub headers_results: HeadersResults,
    pub risk: RiskAssessment,
}
