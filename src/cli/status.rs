//! Status command handler
//!
//! Shows effective search settings and whether the local server is up.

use crate::cli::init_logging;
use crate::config::Config;
use crate::error::Result;
use crate::poi::clamp_radius;
use clap::Args;

/// Status command arguments
#[derive(Args)]
pub struct StatusArgs {
    /// Check if server is running (tries to connect)
    #[arg(long)]
    pub server: bool,
}

/// Run the status command
pub async fn run(args: StatusArgs) -> Result<()> {
    init_logging("warn");

    let config = Config::load()?;

    println!("cafe-finder v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("{}", render_settings(&config));

    if args.server {
        println!();
        check_server_status(&config).await;
    }

    Ok(())
}

fn render_settings(config: &Config) -> String {
    let mut out = String::new();

    out.push_str("Search:\n");
    out.push_str(&format!(
        "  Radius:        {} m\n",
        clamp_radius(config.search.radius)
    ));
    out.push_str(&format!("  Display limit: {}\n", config.search.display_limit));
    out.push_str(&format!(
        "  Location:      {}\n",
        if config.location.auto_detect {
            "auto-detect (IP)".to_string()
        } else {
            format!("manual ({})", config.location.default_manual)
        }
    ));
    out.push('\n');

    out.push_str(&format!(
        "Overpass mirrors (timeout {} s, pause {} ms):\n",
        config.overpass.timeout_secs, config.overpass.retry_pause_ms
    ));
    for (i, mirror) in config.overpass.mirrors.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, mirror));
    }

    out
}

/// Check if the server is running
async fn check_server_status(config: &Config) {
    let url = format!("http://{}/api/status", config.server_addr());

    match reqwest::get(&url).await {
        Ok(response) => {
            if response.status().is_success() {
                println!("Server: RUNNING on {}", config.server_addr());
                if let Ok(status) = response.json::<serde_json::Value>().await {
                    if let Some(version) = status.get("version").and_then(|v| v.as_str()) {
                        println!("  Version: {}", version);
                    }
                    if let Some(phase) = status.get("phase").and_then(|v| v.as_str()) {
                        println!("  Session: {}", phase);
                    }
                }
            } else {
                println!("Server: ERROR (status {})", response.status());
            }
        }
        Err(_) => {
            println!("Server: NOT RUNNING on {}", config.server_addr());
        }
    }
}
