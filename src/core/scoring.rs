// src/core/scoring.rs

use tracing::debug;

use crate::core::models::{Rating, RiskAssessment, RiskLevel};

// Fixed contribution weights. These values and the tier thresholds below are
// load-bearing: downstream consumers compare labels across runs, so the
// mapping must stay bit-for-bit stable.
const WEIGHT_NO_SSL: u8 = 3;
const WEIGHT_AGE_HIGH: u8 = 3;
const WEIGHT_AGE_UNKNOWN: u8 = 2;
const WEIGHT_HEADERS_HIGH: u8 = 4;
const WEIGHT_HEADERS_UNKNOWN: u8 = 2;

/// Combines the three checker signals into a weighted score and its label.
///
/// Pure and deterministic: no I/O, no hidden state, identical inputs always
/// produce the identical assessment. The maximum reachable score is 10
/// (3 + 3 + 4), the minimum 0.
///
/// # Arguments
/// * `ssl_secure` - The SSL signal; `false` adds 3.
/// * `domain_age` - The domain-age rating; High adds 3, Unknown 2, Low 0.
/// * `headers` - The security-header rating; High adds 4, Unknown 2, Low 0.
pub fn calculate_risk(ssl_secure: bool, domain_age: Rating, headers: Rating) -> RiskAssessment {
    let mut score: u8 = 0;

    if !ssl_secure {
        score += WEIGHT_NO_SSL;
    }

    match domain_age {
        Rating::High => score += WEIGHT_AGE_HIGH,
        Rating::Unknown => score += WEIGHT_AGE_UNKNOWN,
        Rating::Low => {}
    }

    match headers {
        Rating::High => score += WEIGHT_HEADERS_HIGH,
        Rating::Unknown => score += WEIGHT_HEADERS_UNKNOWN,
        Rating::Low => {}
    }

    // Tier thresholds: 0..=3 Low, 4..=6 Medium, 7..=10 High.
    let level = if score <= 3 {
        RiskLevel::Low
    } else if score <= 6 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };

    debug!(ssl_secure, %domain_age, %headers, score, %level, "Risk score computed.");

    RiskAssessment { score, level }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_all_checks_pass() {
        let risk = calculate_risk(true, Rating::Low, Rating::Low);
        assert_eq!(risk.score, 0);
        assert_eq!(risk.level, RiskLevel::Low);
    }

    #[test]
    fn scenario_no_ssl_young_domain_good_headers() {
        let risk = calculate_risk(false, Rating::High, Rating::Low);
        assert_eq!(risk.score, 6);
        assert_eq!(risk.level, RiskLevel::Medium);
    }

    #[test]
    fn scenario_everything_risky() {
        let risk = calculate_risk(false, Rating::High, Rating::High);
        assert_eq!(risk.score, 10);
        assert_eq!(risk.level, RiskLevel::High);
    }

    #[test]
    fn scenario_lookups_failed_but_ssl_ok() {
        let risk = calculate_risk(true, Rating::Unknown, Rating::Unknown);
        assert_eq!(risk.score, 4);
        assert_eq!(risk.level, RiskLevel::Medium);
    }

    #[test]
    fn tier_boundaries() {
        // score 3: highest Low tier value.
        let risk = calculate_risk(false, Rating::Low, Rating::Low);
        assert_eq!(risk.score, 3);
        assert_eq!(risk.level, RiskLevel::Low);

        // score 4: lowest Medium tier value.
        let risk = calculate_risk(true, Rating::Low, Rating::High);
        assert_eq!(risk.score, 4);
        assert_eq!(risk.level, RiskLevel::Medium);

        // score 6: highest Medium tier value.
        let risk = calculate_risk(false, Rating::High, Rating::Low);
        assert_eq!(risk.score, 6);
        assert_eq!(risk.level, RiskLevel::Medium);

        // score 7: lowest High tier value.
        let risk = calculate_risk(false, Rating::Low, Rating::High);
        assert_eq!(risk.score, 7);
        assert_eq!(risk.level, RiskLevel::High);
    }

    #[test]
    fn deterministic_over_all_inputs() {
        let ratings = [Rating::High, Rating::Low, Rating::Unknown];
        for ssl in [true, false] {
            for age in ratings {
                for headers in ratings {
                    let first = calculate_risk(ssl, age, headers);
                    let second = calculate_risk(ssl, age, headers);
                    assert_eq!(first, second);
                    assert!(first.score <= 10);
                }
            }
        }
    }
}
