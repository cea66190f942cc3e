//! This module is the static, read-only catalog of every finding the
//! checkers can produce, with human-readable explanations and remediation
//! steps. Keeping the texts data-driven means the checkers emit bare codes
//! and the presenter stays a dumb renderer.

use crate::core::models::Severity;
use std::fmt;

/// Defines the high-level categories for findings, used to group related
/// issues in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FindingCategory {
    /// Findings about transport security (HTTPS on the final URL).
    Ssl,
    /// Findings about domain registration age.
    DomainAge,
    /// Findings about HTTP security headers.
    Headers,
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingCategory::Ssl => write!(f, "Transport Security"),
            FindingCategory::DomainAge => write!(f, "Domain Age"),
            FindingCategory::Headers => write!(f, "HTTP Security Headers"),
        }
    }
}

/// All the detail needed to present one finding to a user.
pub struct FindingDetail {
    /// A unique, machine-readable identifier (e.g., "HEADERS_HSTS_MISSING").
    pub code: &'static str,
    /// A short, human-readable title.
    pub title: &'static str,
    /// The category this finding belongs to.
    pub category: FindingCategory,
    /// The severity level of the finding.
    pub severity: Severity,
    /// An easy-to-understand explanation of what the finding means.
    pub description: &'static str,
    /// Actionable advice for the site operator.
    pub remediation: &'static str,
}

/// The centralized, static knowledge base of all possible findings.
static FINDINGS: &[FindingDetail] = &[
    // --- Transport security ---
    FindingDetail {
        code: "SSL_NOT_ENFORCED",
        title: "Connection is not HTTPS",
        category: FindingCategory::Ssl,
        severity: Severity::Critical,
        description: "After following all redirects, the site is served over plain HTTP. \
                      Anything you submit to it can be read or altered in transit, which is \
                      a common trait of phishing pages.",
        remediation: "Serve the site over HTTPS and redirect all HTTP traffic to it.",
    },
    FindingDetail {
        code: "SSL_REQUEST_FAILED",
        title: "Site could not be reached",
        category: FindingCategory::Ssl,
        severity: Severity::Critical,
        description: "The HTTPS check could not complete because the request failed \
                      (timeout, refused connection, or DNS failure). The connection is \
                      treated as not secure.",
        remediation: "Verify the URL is correct and the site is online, then rescan.",
    },
    // --- Domain age ---
    FindingDetail {
        code: "AGE_DOMAIN_YOUNG",
        title: "Domain registered less than a year ago",
        category: FindingCategory::DomainAge,
        severity: Severity::Critical,
        description: "The domain's WHOIS creation date is under 365 days old. Phishing \
                      campaigns overwhelmingly use freshly registered domains that are \
                      discarded once blocklisted.",
        remediation: "Young domains are not necessarily malicious; treat the site with \
                      extra caution until it has history.",
    },
    FindingDetail {
        code: "AGE_LOOKUP_FAILED",
        title: "Domain age could not be determined",
        category: FindingCategory::DomainAge,
        severity: Severity::Warning,
        description: "The WHOIS lookup failed or the record carries no parseable creation \
                      date, so the domain's age is unknown and scored conservatively.",
        remediation: "Some registries redact registration data; no action may be possible.",
    },
    // --- HTTP security headers ---
    FindingDetail {
        code: "HEADERS_HSTS_MISSING",
        title: "Strict-Transport-Security header missing",
        category: FindingCategory::Headers,
        severity: Severity::Warning,
        description: "Without HSTS, browsers will still attempt plain-HTTP connections to \
                      the site, leaving visitors open to protocol downgrade attacks.",
        remediation: "Send 'Strict-Transport-Security: max-age=31536000' on all HTTPS responses.",
    },
    FindingDetail {
        code: "HEADERS_X_CONTENT_TYPE_OPTIONS_MISSING",
        title: "X-Content-Type-Options header missing",
        category: FindingCategory::Headers,
        severity: Severity::Warning,
        description: "Without 'nosniff', browsers may MIME-sniff responses and execute \
                      content the server never declared as active.",
        remediation: "Send 'X-Content-Type-Options: nosniff' on all responses.",
    },
    FindingDetail {
        code: "HEADERS_REQUEST_FAILED",
        title: "Security headers could not be inspected",
        category: FindingCategory::Headers,
        severity: Severity::Critical,
        description: "The HEAD request failed, so the presence of the security headers is \
                      unknown and scored conservatively.",
        remediation: "Verify the site is online and answers HEAD requests, then rescan.",
    },
];

/// Looks up the full detail for a finding code emitted by a checker.
pub fn get_finding_details(code: &str) -> Option<&'static FindingDetail> {
    FINDINGS.iter().find(|detail| detail.code == code)
}
