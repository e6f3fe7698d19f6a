use colored::*;

use conformance_checker::{ApiClient, ConformanceChecker};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    println!("{}", "🚗 Rino Rental Sorong API Conformance Checker".bright_blue().bold());
    println!("{}", "=============================================".bright_blue());

    let client = ApiClient::from_env();
    println!("Testing API at: {}", client.api_base().bright_yellow());

    let mut checker = ConformanceChecker::new(client);
    let report = checker.run_all().await;
    report.print_summary();

    if !report.overall_pass() {
        std::process::exit(1);
    }
    Ok(())
}
