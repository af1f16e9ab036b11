mod component_definition_builder;

pub use component_definition_builder::ComponentDefinitionBuilder;
