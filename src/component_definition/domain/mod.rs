pub mod catalog;
pub mod control_row;
pub mod document;

pub use control_row::ControlRow;
pub use document::{
    Component, ComponentDefinition, ControlImplementation, ImplementedRequirement, Link,
    Metadata, Party, ResponsibleRole,
};
