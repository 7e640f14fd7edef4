//! GPX output formatter
//!
//! Exports the map markers as waypoints so results can be opened in any
//! map application.

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::present::{MarkerKind, Presentation};

/// GPX formatter - outputs GPX waypoint file
pub struct GpxFormatter;

/// Escape text for XML element content
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl OutputFormatter for GpxFormatter {
    fn name(&self) -> &str {
        "gpx"
    }

    fn description(&self) -> &str {
        "GPX waypoint file"
    }

    fn format(&self, presentation: &Presentation) -> Result<String> {
        let mut gpx = String::new();

        // XML header
        gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        gpx.push('\n');
        gpx.push_str(r#"<gpx version="1.1" creator="cafe-finder">"#);
        gpx.push('\n');

        gpx.push_str("  <metadata>\n");
        gpx.push_str(&format!("    <name>cafe-finder search {}</name>\n", presentation.id));
        gpx.push_str("  </metadata>\n");

        for marker in &presentation.markers {
            gpx.push_str(&format!(
                r#"  <wpt lat="{}" lon="{}">"#,
                marker.location.lat(),
                marker.location.lng()
            ));
            gpx.push('\n');
            gpx.push_str(&format!("    <name>{}</name>\n", escape(&marker.label)));

            let symbol = match marker.kind {
                MarkerKind::Origin => "Flag, Blue",
                MarkerKind::Cafe => "Restaurant",
            };
            gpx.push_str(&format!("    <sym>{}</sym>\n", symbol));
            gpx.push_str("  </wpt>\n");
        }

        gpx.push_str("</gpx>\n");
        Ok(gpx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::sample_presentation;

    #[test]
    fn test_gpx_format() {
        let formatter = GpxFormatter;
        let presentation = sample_presentation();

        let output = formatter.format(&presentation).unwrap();

        assert!(output.contains(r#"<?xml version="1.0""#));
        assert!(output.contains(r#"<gpx version="1.1""#));
        assert_eq!(output.matches("<wpt").count(), 4);
        assert!(output.contains("<name>You are here</name>"));
        assert!(output.contains(r#"<wpt lat="12.9716" lon="77.5946">"#));
        assert!(output.ends_with("</gpx>\n"));
    }

    #[test]
    fn test_gpx_escapes_names() {
        let output = GpxFormatter.format(&sample_presentation()).unwrap();
        assert!(output.contains("Tea &amp; Toast &lt;Cafe&gt;"));
        assert!(!output.contains("<Cafe>"));
    }

    #[test]
    fn test_gpx_formatter_info() {
        let formatter = GpxFormatter;
        assert_eq!(formatter.name(), "gpx");
        assert!(!formatter.description().is_empty());
    }
}
