// src/main.rs

use color_eyre::eyre::{eyre, Result};
use std::io::{self, Write};
use tracing::info;

use urlrisk::core::models::ScanConfig;
use urlrisk::core::scanner::run_full_scan;
use urlrisk::core::target::normalize_url;
use urlrisk::{logging, report};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    println!("=== Website Risk Detection Tool ===");
    print!("Enter website URL (e.g. https://example.com): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    // Malformed input is rejected here, before any network call, so the
    // checkers only ever see a URL the HTTP client will accept.
    let url = normalize_url(&input).map_err(|e| eyre!(e))?;
    info!(url, "Scanning target.");

    println!();
    println!("Analyzing the website...");

    let scan_report = run_full_scan(&url, &ScanConfig::default()).await;
    report::print_report(&scan_report);

    Ok(())
}
