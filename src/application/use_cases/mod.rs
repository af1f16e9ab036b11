/// Use cases module containing application business logic orchestration
mod generate_component_definition;

pub use generate_component_definition::GenerateComponentDefinitionUseCase;
