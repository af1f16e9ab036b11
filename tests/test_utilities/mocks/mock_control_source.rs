use oscal_component_gen::prelude::*;

/// Mock ControlSource serving rows from memory
pub struct MockControlSource {
    pub rows: Vec<Vec<String>>,
    pub should_fail: bool,
}

impl MockControlSource {
    pub fn new(rows: &[&[&str]]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|v| v.to_string()).collect())
                .collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            rows: Vec::new(),
            should_fail: true,
        }
    }
}

impl ControlSource for MockControlSource {
    fn read_rows(&self) -> std::result::Result<Vec<Vec<String>>, ComponentDefinitionError> {
        if self.should_fail {
            return Err(ComponentDefinitionError::SourceUnavailable {
                source_name: "mock".to_string(),
                details: "Mock control source failure".to_string(),
            });
        }
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
