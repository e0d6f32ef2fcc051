use crate::application::read_models::DependencyReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter serializing the read model as pretty JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &DependencyReport) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
    }
}
