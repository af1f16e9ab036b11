use crate::shared::error::ComponentDefinitionError;

/// ControlRow value object: one validated line of the control inventory.
///
/// Columns are positional: `[control acronym, component name, control description, ...]`.
/// Anything past the third column is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRow {
    control_id: String,
    component_name: String,
    description: String,
}

impl ControlRow {
    pub fn new(control_id: String, component_name: String, description: String) -> Self {
        Self {
            control_id,
            component_name,
            description,
        }
    }

    /// Validates a raw record before any field is accessed.
    ///
    /// # Arguments
    /// * `row_number` - 1-based position of the record among the data rows (header excluded)
    /// * `fields` - Raw column values
    ///
    /// # Errors
    /// Returns `MalformedInput` when fewer than three columns are present
    pub fn from_fields(
        row_number: usize,
        fields: &[String],
    ) -> Result<Self, ComponentDefinitionError> {
        match fields {
            [control_id, component_name, description, ..] => Ok(Self::new(
                control_id.clone(),
                component_name.clone(),
                description.clone(),
            )),
            _ => Err(ComponentDefinitionError::MalformedInput {
                row: row_number,
                columns: fields.len(),
            }),
        }
    }

    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
