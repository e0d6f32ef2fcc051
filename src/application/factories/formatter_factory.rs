use crate::adapters::outbound::formatters::{JsonFormatter, TreeFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Lives in the application layer because it picks infrastructure
/// adapters based on an application-level choice.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`
    ///
    /// `color` only affects the tree formatter.
    ///
    /// # Examples
    /// ```
    /// use transitive_deps::application::dto::OutputFormat;
    /// use transitive_deps::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Tree => Box::new(TreeFormatter::new(color)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Tree => "📝 Rendering dependency tree...",
            OutputFormat::Json => "📝 Rendering JSON report...",
        }
    }
}
