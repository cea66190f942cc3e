// src/core/target.rs

use tracing::{debug, warn};
use url::Url;

/// Normalizes raw user input into a URL the checkers can use.
///
/// The input is trimmed and, when it does not already start with the literal
/// prefix `http`, `http://` is prepended. This is deliberately a prefix check
/// and not a scheme parse — input like `httpfoo.com` is treated as already
/// carrying a scheme, preserving the tool's historical behavior. The result
/// is then validated with a real URL parse so that empty or garbage input is
/// rejected here instead of surfacing as an HTTP client error mid-scan.
///
/// # Returns
/// The scheme-prefixed URL string, or a human-readable error for input that
/// cannot be turned into a usable URL.
pub fn normalize_url(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("no URL provided".to_string());
    }

    let normalized = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    match Url::parse(&normalized) {
        Ok(parsed) => {
            if parsed.host_str().is_none() {
                warn!(url = %normalized, "Normalized URL has no host.");
                return Err(format!("'{}' has no host to scan", trimmed));
            }
            debug!(url = %normalized, "Input normalized.");
            Ok(normalized)
        }
        Err(e) => {
            warn!(input = trimmed, error = %e, "Input rejected by URL parser.");
            Err(format!("'{}' is not a valid URL: {}", trimmed, e))
        }
    }
}

/// Extracts the domain to hand to the WHOIS client.
///
/// Registries answer for the registrable name, not for arbitrary hosts, so a
/// leading `www.` is stripped and hosts with deeper subdomains fall back to
/// their last two labels. Multi-label public suffixes (`.co.uk` and friends)
/// are not special-cased; a mis-extracted name simply fails the lookup and
/// the age signal degrades to Unknown as designed.
pub fn registrable_domain(url: &str) -> Result<String, String> {
    let parsed = Url::parse(url).map_err(|e| format!("URL parse error: {}", e))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| "URL has no host".to_string())?;

    if host.parse::<std::net::IpAddr>().is_ok() {
        return Err(format!("'{}' is an IP address, not a registered domain", host));
    }

    let host = host.strip_prefix("www.").unwrap_or(host);
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return Err(format!("'{}' is not a registrable domain", host));
    }

    let domain = if labels.len() > 2 {
        labels[labels.len() - 2..].join(".")
    } else {
        host.to_string()
    };

    debug!(url, domain, "Extracted registrable domain.");
    Ok(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepends_scheme_when_missing() {
        assert_eq!(normalize_url("example.com").unwrap(), "http://example.com");
        assert_eq!(
            normalize_url("  example.com/login  ").unwrap(),
            "http://example.com/login"
        );
    }

    #[test]
    fn keeps_existing_scheme() {
        assert_eq!(
            normalize_url("https://example.com").unwrap(),
            "https://example.com"
        );
        assert_eq!(
            normalize_url("http://example.com").unwrap(),
            "http://example.com"
        );
    }

    #[test]
    fn prefix_check_is_literal_not_a_scheme_parse() {
        // Anything starting with the bytes "http" is taken at face value,
        // so this malformed input fails at the parse step rather than being
        // prefixed a second time.
        assert!(normalize_url("httpfoo.com").is_err());
    }

    #[test]
    fn rejects_empty_and_hostless_input() {
        assert!(normalize_url("").is_err());
        assert!(normalize_url("   ").is_err());
    }

    #[test]
    fn extracts_registrable_domain() {
        assert_eq!(
            registrable_domain("http://example.com/path").unwrap(),
            "example.com"
        );
        assert_eq!(
            registrable_domain("https://www.example.com").unwrap(),
            "example.com"
        );
        assert_eq!(
            registrable_domain("https://mail.corp.example.com").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn rejects_ip_hosts_for_whois() {
        assert!(registrable_domain("http://192.168.1.10/").is_err());
    }
}
