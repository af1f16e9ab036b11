//! oscal-component-gen - OSCAL component definitions from CSV control inventories
//!
//! Each data row of the inventory (`control acronym, component name,
//! control description`) becomes one component of an OSCAL component
//! definition, with freshly generated identifiers and fixed organizational
//! metadata. The crate follows hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`component_definition`): Document model and the row-to-document builder
//! - **Application Layer** (`application`): Use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Error types, result alias and security helpers
//!
//! # Example
//!
//! ```no_run
//! use oscal_component_gen::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateComponentDefinitionUseCase::new(
//!     CsvControlReader::from_path("controls.csv"),
//!     UuidGenerator::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(GenerationRequest::default())?;
//!
//! let formatter = YamlFormatter::new();
//! let output = formatter.format(&response.document)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod component_definition;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CsvControlReader, FileSystemDocumentStore, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, YamlFormatter};
    pub use crate::adapters::outbound::identifiers::UuidGenerator;
    pub use crate::application::dto::{GenerationRequest, GenerationResponse, OutputFormat};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::GenerateComponentDefinitionUseCase;
    pub use crate::component_definition::domain::{
        Component, ComponentDefinition, ControlImplementation, ControlRow, ImplementedRequirement,
        Link, Metadata, Party, ResponsibleRole,
    };
    pub use crate::component_definition::services::ComponentDefinitionBuilder;
    pub use crate::ports::outbound::{
        ControlSource, DocumentFormatter, DocumentStore, IdGenerator, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::shared::error::{ComponentDefinitionError, ExitCode};
    pub use crate::shared::Result;
}
