//! Find command handler
//!
//! Resolves the origin, fetches and ranks nearby cafes, prints the list.

use crate::cli::init_logging;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::geo::ip_location::IpLocator;
use crate::poi::overpass::OverpassClient;
use crate::poi::SearchRequest;
use crate::present::present;
use crate::session::{search, SearchSession};
use clap::Args;

/// Find command arguments
#[derive(Args)]
pub struct FindArgs {
    /// Location as "lat,lng" (disables auto-detect)
    #[arg(long, allow_hyphen_values = true, conflicts_with = "here")]
    pub location: Option<String>,

    /// Auto-detect location from IP address
    #[arg(long, conflicts_with = "manual")]
    pub here: bool,

    /// Never auto-detect; use --location or the configured default
    #[arg(long)]
    pub manual: bool,

    /// Search radius in meters (clamped to 500..=2000)
    #[arg(long, short = 'r', allow_hyphen_values = true)]
    pub radius: Option<i64>,

    /// Number of cafes to list (at most 20)
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

impl FindArgs {
    /// Auto-detect unless a manual location was requested
    fn auto_detect(&self, config: &Config) -> bool {
        if self.here {
            true
        } else if self.manual || self.location.is_some() {
            false
        } else {
            config.location.auto_detect
        }
    }
}

/// Run the find command
pub async fn run(args: FindArgs) -> Result<()> {
    init_logging("warn");

    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;

    // Check the format before doing any network work
    let format = args.format.clone().unwrap_or(config.output.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

    let mut session = SearchSession::new(args.auto_detect(&config));
    let manual = args
        .location
        .clone()
        .unwrap_or_else(|| config.location.default_manual.clone());

    let wanted_auto = session.auto_detect;
    let locator = IpLocator::new()?;
    let origin = session.resolve_origin(&locator, &manual).await?;
    if wanted_auto && session.auto_detect {
        eprintln!("Detected location: {:.5}, {:.5}", origin.lat(), origin.lng());
    } else if wanted_auto {
        eprintln!("Could not auto-detect location; using {}", manual.trim());
    }

    let request = SearchRequest::new(origin, args.radius.unwrap_or(config.search.radius));
    let client = OverpassClient::new(config.overpass.timeout())?;
    let policy = config.fetch_policy();

    eprintln!("Fetching nearby cafes within {} m...", request.radius_m());
    let results = search(&mut session, &client, &policy, request).await?;

    let limit = args.limit.unwrap_or(config.search.display_limit);
    let presentation = present(results, &config.directions, limit);
    let output = formatter.format(&presentation)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
