use crate::adapters::outbound::formatters::{JsonFormatter, YamlFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DocumentFormatter;

/// Factory for creating document formatters
///
/// Maps the application-level `OutputFormat` onto the formatter adapters.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use oscal_component_gen::application::dto::OutputFormat;
    /// use oscal_component_gen::application::factories::FormatterFactory;
    /// use oscal_component_gen::ports::outbound::DocumentFormatter;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Yaml);
    /// assert_eq!(formatter.file_extension(), "yaml");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn DocumentFormatter> {
        match format {
            OutputFormat::Yaml => Box::new(YamlFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Yaml => "📝 Encoding component definition as YAML...",
            OutputFormat::Json => "📝 Encoding component definition as JSON...",
        }
    }
}
