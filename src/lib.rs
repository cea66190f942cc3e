// src/lib.rs

//! Core library for `urlrisk`: a coarse phishing-risk gauge for a single URL.
//!
//! Three independent checkers (HTTPS on the final resolved URL, WHOIS domain
//! age, security response headers) feed a fixed-weight scorer that maps the
//! combined score onto a three-tier risk label.

pub mod core;
pub mod logging;
pub mod report;
