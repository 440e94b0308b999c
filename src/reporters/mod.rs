//! Output reporters for scored games
//!
//! Supports two output formats:
//! - `text` - Terminal output, optionally with a frame-by-frame table
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::models::GameReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Presentation switches shared by all reporters
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Include the frame-by-frame breakdown
    pub frames: bool,
    /// Emit ANSI styling
    pub color: bool,
}

/// Render a scored game in the specified format
pub fn report(report: &GameReport, format: OutputFormat, options: &RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, options),
        OutputFormat::Json => json::render(report),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Score a fixed mixed game for reporter tests
    pub(crate) fn test_report() -> GameReport {
        crate::scoring::score_game(&[10, 3, 7, 6, 1, 10, 10, 10, 2, 8, 9, 0, 7, 3, 10, 10, 10])
            .expect("legal game")
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("TXT").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_format_display_round_trips() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_report_dispatch() {
        let game = test_report();
        let options = RenderOptions::default();
        let text = report(&game, OutputFormat::Text, &options).expect("render text");
        assert!(text.starts_with("Result is: 193"));
        let json = report(&game, OutputFormat::Json, &options).expect("render json");
        assert!(json.trim_start().starts_with('{'));
    }
}
