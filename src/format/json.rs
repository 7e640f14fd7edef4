//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::present::Presentation;

/// JSON formatter - outputs the full presentation as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Entries and map markers as JSON"
    }

    fn format(&self, presentation: &Presentation) -> Result<String> {
        Ok(serde_json::to_string_pretty(presentation)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::sample_presentation;

    #[test]
    fn test_json_format() {
        let formatter = JsonFormatter;
        let presentation = sample_presentation();

        let output = formatter.format(&presentation).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.get("id").is_some());
        assert_eq!(parsed["entries"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["markers"].as_array().unwrap().len(), 4);
        assert_eq!(parsed["markers"][0]["kind"], "origin");
        assert_eq!(parsed["entries"][0]["name"], "Unnamed Cafe");
    }

    #[test]
    fn test_json_formatter_info() {
        let formatter = JsonFormatter;
        assert_eq!(formatter.name(), "json");
        assert!(!formatter.description().is_empty());
    }
}
