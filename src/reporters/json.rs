//! JSON reporter
//!
//! Outputs the full GameReport as pretty-printed JSON.

use crate::models::GameReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &GameReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
