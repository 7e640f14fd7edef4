//! cafe-finder CLI entry point
//!
//! Nearby cafe finder - CLI + local web API

use cafe_finder::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
