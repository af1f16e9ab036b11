use crate::component_definition::domain::catalog::{
    self, AUTHOR_LINK_REL, AUTHOR_NAME, AUTHOR_PARTY_TYPE, AUTHOR_WEBSITE, COMPONENT_PURPOSE,
    COMPONENT_TYPE, CONTROL_CATALOG_SOURCE, DOCUMENT_TITLE, DOCUMENT_VERSION, OSCAL_VERSION,
    PROVIDER_ROLE_ID,
};
use crate::component_definition::domain::{
    Component, ComponentDefinition, ControlImplementation, ControlRow, ImplementedRequirement,
    Link, Metadata, Party, ResponsibleRole,
};
use crate::ports::outbound::IdGenerator;
use crate::shared::error::ComponentDefinitionError;
use chrono::Utc;

/// ComponentDefinitionBuilder service turning control rows into a component definition
///
/// Pure mapping plus identifier generation: no I/O, no shared state.
/// Each data row becomes exactly one component carrying one control
/// implementation with one implemented requirement.
pub struct ComponentDefinitionBuilder;

impl ComponentDefinitionBuilder {
    /// Builds a component definition stamped with the current time
    ///
    /// # Arguments
    /// * `id_generator` - Source of fresh identifiers
    /// * `rows` - Data rows in input order, header already removed
    ///
    /// # Errors
    /// Returns `MalformedInput` for the first row with fewer than three columns.
    /// No document is produced in that case.
    pub fn build(
        id_generator: &dyn IdGenerator,
        rows: &[Vec<String>],
    ) -> Result<ComponentDefinition, ComponentDefinitionError> {
        Self::build_at(id_generator, rows, Utc::now().to_rfc3339())
    }

    /// Same as [`build`](Self::build) with an explicit `last-modified` timestamp
    pub fn build_at(
        id_generator: &dyn IdGenerator,
        rows: &[Vec<String>],
        last_modified: String,
    ) -> Result<ComponentDefinition, ComponentDefinitionError> {
        Self::build_with_progress(id_generator, rows, last_modified, |_, _, _| {})
    }

    /// Builds the document, calling `on_row(done, total, row)` after each component
    pub fn build_with_progress<F>(
        id_generator: &dyn IdGenerator,
        rows: &[Vec<String>],
        last_modified: String,
        mut on_row: F,
    ) -> Result<ComponentDefinition, ComponentDefinitionError>
    where
        F: FnMut(usize, usize, &ControlRow),
    {
        let document_uuid = id_generator.generate();
        let metadata = Metadata::new(
            DOCUMENT_VERSION.to_string(),
            last_modified,
            OSCAL_VERSION.to_string(),
            DOCUMENT_TITLE.to_string(),
            vec![Self::author_party(id_generator)],
        );

        let components = rows
            .iter()
            .enumerate()
            .map(|(index, fields)| {
                let row = ControlRow::from_fields(index + 1, fields)?;
                let component = Self::build_component(id_generator, &row);
                on_row(index + 1, rows.len(), &row);
                Ok(component)
            })
            .collect::<Result<Vec<_>, ComponentDefinitionError>>()?;

        Ok(ComponentDefinition::new(document_uuid, metadata, components))
    }

    fn author_party(id_generator: &dyn IdGenerator) -> Party {
        Party::new(
            AUTHOR_PARTY_TYPE.to_string(),
            AUTHOR_NAME.to_string(),
            id_generator.generate(),
            vec![Link::new(
                AUTHOR_LINK_REL.to_string(),
                AUTHOR_WEBSITE.to_string(),
            )],
        )
    }

    fn build_component(id_generator: &dyn IdGenerator, row: &ControlRow) -> Component {
        let component_uuid = id_generator.generate();
        let requirement_uuid = id_generator.generate();
        // Provider reference is not tied to any Party of the document.
        let provider_reference = id_generator.generate();
        let implementation_uuid = id_generator.generate();

        let requirement = ImplementedRequirement::new(
            requirement_uuid,
            row.control_id().to_string(),
            row.description().to_string(),
        );

        let implementation = ControlImplementation::new(
            CONTROL_CATALOG_SOURCE.to_string(),
            catalog::control_implementation_description(row.component_name()),
            implementation_uuid,
            vec![requirement],
        );

        Component::new(
            component_uuid,
            row.component_name().to_string(),
            row.description().to_string(),
            COMPONENT_TYPE.to_string(),
            COMPONENT_PURPOSE.to_string(),
            vec![ResponsibleRole::new(
                PROVIDER_ROLE_ID.to_string(),
                vec![provider_reference],
            )],
            vec![implementation],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct SequentialIds {
        next: AtomicUsize,
    }

    impl SequentialIds {
        fn new() -> Self {
            Self {
                next: AtomicUsize::new(0),
            }
        }
    }

    impl IdGenerator for SequentialIds {
        fn generate(&self) -> String {
            format!("id-{}", self.next.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_build_single_row() {
        let ids = SequentialIds::new();
        let rows = vec![row(&["AC-1", "MyApp", "Enforces access control"])];

        let document = ComponentDefinitionBuilder::build(&ids, &rows).unwrap();

        assert_eq!(document.components().len(), 1);
        let component = &document.components()[0];
        assert_eq!(component.title(), "MyApp");
        assert_eq!(component.description(), "Enforces access control");
        assert_eq!(component.component_type(), "software");
        assert_eq!(component.purpose(), "Purpose of the component");

        let implementations = component.control_implementations();
        assert_eq!(implementations.len(), 1);
        assert_eq!(
            implementations[0].description(),
            "Controls implemented by MyApp for inheritance by applications"
        );
        assert_eq!(implementations[0].source(), CONTROL_CATALOG_SOURCE);

        let requirements = implementations[0].implemented_requirements();
        assert_eq!(requirements.len(), 1);
        assert_eq!(requirements[0].control_id(), "AC-1");
        assert_eq!(requirements[0].description(), "Enforces access control");
    }

    #[test]
    fn test_build_metadata_and_author_party() {
        let ids = SequentialIds::new();
        let document =
            ComponentDefinitionBuilder::build_at(&ids, &[], "2024-01-01T00:00:00+00:00".into())
                .unwrap();

        let metadata = document.metadata();
        assert_eq!(metadata.version(), "0.0.1");
        assert_eq!(metadata.oscal_version(), "1.0.4");
        assert_eq!(metadata.title(), "DUBBD");
        assert_eq!(metadata.last_modified(), "2024-01-01T00:00:00+00:00");

        assert_eq!(metadata.parties().len(), 1);
        let party = &metadata.parties()[0];
        assert_eq!(party.party_type(), "organization");
        assert_eq!(party.name(), "Defense Unicorns");
        assert_eq!(party.links().len(), 1);
        assert_eq!(party.links()[0].rel(), "website");
        assert_eq!(party.links()[0].href(), "https://defenseunicorns.com");
    }

    #[test]
    fn test_build_header_only_input() {
        let ids = SequentialIds::new();
        let document = ComponentDefinitionBuilder::build(&ids, &[]).unwrap();

        assert!(document.components().is_empty());
        assert!(!document.uuid().is_empty());
        assert_eq!(document.metadata().parties().len(), 1);
    }

    #[test]
    fn test_build_preserves_row_order() {
        let ids = SequentialIds::new();
        let rows = vec![
            row(&["AC-1", "First", "one"]),
            row(&["AU-2", "Second", "two"]),
            row(&["SC-7", "Third", "three"]),
        ];

        let document = ComponentDefinitionBuilder::build(&ids, &rows).unwrap();
        let titles: Vec<&str> = document.components().iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_build_provider_role_not_linked_to_party() {
        let ids = SequentialIds::new();
        let rows = vec![row(&["AC-1", "MyApp", "desc"])];

        let document = ComponentDefinitionBuilder::build(&ids, &rows).unwrap();
        let party_uuid = document.metadata().parties()[0].uuid();
        let roles = document.components()[0].responsible_roles();

        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].role_id(), "provider");
        assert_eq!(roles[0].party_uuids().len(), 1);
        assert_ne!(roles[0].party_uuids()[0], party_uuid);
    }

    #[test]
    fn test_build_ids_are_distinct() {
        let ids = SequentialIds::new();
        let rows: Vec<Vec<String>> = (0..50)
            .map(|i| row(&[&format!("AC-{}", i), "App", "desc"]))
            .collect();

        let document = ComponentDefinitionBuilder::build(&ids, &rows).unwrap();
        let all_ids = document.all_ids();
        let unique: HashSet<&str> = all_ids.iter().copied().collect();

        // document + party + 4 per component
        assert_eq!(all_ids.len(), 2 + 4 * 50);
        assert_eq!(unique.len(), all_ids.len());
    }

    #[test]
    fn test_build_short_row_aborts() {
        let ids = SequentialIds::new();
        let rows = vec![row(&["AC-1", "MyApp", "desc"]), row(&["AC-2", "Broken"])];

        let err = ComponentDefinitionBuilder::build(&ids, &rows).unwrap_err();
        assert!(matches!(
            err,
            ComponentDefinitionError::MalformedInput { row: 2, columns: 2 }
        ));
    }

    #[test]
    fn test_build_with_progress_reports_each_row() {
        let ids = SequentialIds::new();
        let rows = vec![row(&["AC-1", "A", "one"]), row(&["AC-2", "B", "two"])];
        let mut seen = Vec::new();

        ComponentDefinitionBuilder::build_with_progress(
            &ids,
            &rows,
            "2024-01-01T00:00:00+00:00".to_string(),
            |done, total, row| seen.push((done, total, row.control_id().to_string())),
        )
        .unwrap();

        assert_eq!(
            seen,
            vec![(1, 2, "AC-1".to_string()), (2, 2, "AC-2".to_string())]
        );
    }

    #[test]
    fn test_build_timestamp_is_rfc3339() {
        let ids = SequentialIds::new();
        let document = ComponentDefinitionBuilder::build(&ids, &[]).unwrap();
        let timestamp = document.metadata().last_modified();

        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
