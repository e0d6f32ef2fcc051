use crate::application::read_models::DependencyReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the dependency report
///
/// Implementations exist for the console tree and JSON.
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &DependencyReport) -> Result<String>;
}
