use crate::application::dto::{GenerationRequest, GenerationResponse};
use crate::component_definition::services::ComponentDefinitionBuilder;
use crate::ports::outbound::{ControlSource, IdGenerator, ProgressReporter};
use crate::shared::Result;
use chrono::Utc;

/// GenerateComponentDefinitionUseCase - Core use case of the generator
///
/// Reads the control inventory, runs the builder and hands the in-memory
/// document back to the caller, which decides how to encode, store and
/// present it.
///
/// # Type Parameters
/// * `CS` - ControlSource implementation
/// * `IG` - IdGenerator implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateComponentDefinitionUseCase<CS, IG, PR> {
    control_source: CS,
    id_generator: IG,
    progress_reporter: PR,
}

impl<CS, IG, PR> GenerateComponentDefinitionUseCase<CS, IG, PR>
where
    CS: ControlSource,
    IG: IdGenerator,
    PR: ProgressReporter,
{
    /// Creates a new use case with injected dependencies
    pub fn new(control_source: CS, id_generator: IG, progress_reporter: PR) -> Self {
        Self {
            control_source,
            id_generator,
            progress_reporter,
        }
    }

    /// Executes the generation
    ///
    /// # Errors
    /// `SourceUnavailable` and `MalformedInput` are propagated unchanged
    /// (recoverable with `downcast_ref::<ComponentDefinitionError>()`).
    pub fn execute(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading controls from: {}",
            self.control_source.describe()
        ));

        let rows = self.control_source.read_rows()?;
        self.progress_reporter
            .report(&format!("✅ Detected {} control row(s)", rows.len()));

        let last_modified = Utc::now().to_rfc3339();
        let result = if request.show_row_progress {
            ComponentDefinitionBuilder::build_with_progress(
                &self.id_generator,
                &rows,
                last_modified,
                |done, total, row| {
                    self.progress_reporter
                        .report_progress(done, total, Some(row.control_id()))
                },
            )
        } else {
            ComponentDefinitionBuilder::build_at(&self.id_generator, &rows, last_modified)
        };

        let document = match result {
            Ok(document) => document,
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Component definition generation aborted");
                return Err(e.into());
            }
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Built component definition {} with {} component(s)",
            document.uuid(),
            document.components().len()
        ));

        Ok(GenerationResponse::new(document, rows.len()))
    }
}
