//! Human-readable text output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::present::Presentation;

/// Text formatter - numbered list with distances and directions links
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable list"
    }

    fn format(&self, presentation: &Presentation) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "Top {} cafes near you ({} found within {} m of {:.5}, {:.5}):\n\n",
            presentation.entries.len(),
            presentation.total_found,
            presentation.radius_m,
            presentation.origin.lat(),
            presentation.origin.lng()
        ));

        let width = presentation.entries.len().to_string().len();
        for entry in &presentation.entries {
            output.push_str(&format!(
                "{:>width$}. {} - {} m away\n",
                entry.rank,
                entry.name,
                entry.distance_m,
                width = width
            ));
            output.push_str(&format!(
                "{:width$}  Directions: {}\n",
                "",
                entry.directions_url,
                width = width
            ));
        }

        Ok(output)
    }
}
