/// Integration tests for the application layer
mod test_utilities;

use oscal_component_gen::prelude::*;
use serde_json::Value;
use std::collections::HashSet;
use tempfile::TempDir;
use test_utilities::mocks::*;

fn erase_generated_fields(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["uuid", "party-uuids", "last-modified"] {
                map.remove(key);
            }
            map.values_mut().for_each(erase_generated_fields);
        }
        Value::Array(items) => items.iter_mut().for_each(erase_generated_fields),
        _ => {}
    }
}

fn generate(source: impl ControlSource) -> Result<GenerationResponse> {
    GenerateComponentDefinitionUseCase::new(source, UuidGenerator::new(), MockProgressReporter::new())
        .execute(GenerationRequest::default())
}

#[test]
fn test_generate_happy_path() {
    let source = MockControlSource::new(&[
        &["AC-1", "MyApp", "Enforces access control"],
        &["AU-2", "Logger", "Records audit events"],
        &["SC-7", "Gateway", "Protects the boundary"],
    ]);
    let progress_reporter = MockProgressReporter::new();

    let use_case = GenerateComponentDefinitionUseCase::new(
        source,
        SequentialIdGenerator::new(),
        progress_reporter.clone(),
    );
    let response = use_case.execute(GenerationRequest::new(true)).unwrap();

    assert_eq!(response.row_count, 3);
    let titles: Vec<&str> = response
        .document
        .components()
        .iter()
        .map(|c| c.title())
        .collect();
    assert_eq!(titles, vec!["MyApp", "Logger", "Gateway"]);

    let messages = progress_reporter.get_messages();
    assert!(messages.iter().any(|m| m.contains("Detected 3 control row(s)")));
    assert!(messages.iter().any(|m| m == "Progress: 3/3 - SC-7"));
    assert!(messages.iter().any(|m| m.starts_with("Completed:")));
}

#[test]
fn test_single_row_mapping() {
    let response =
        generate(MockControlSource::new(&[&["AC-1", "MyApp", "Enforces access control"]]))
            .unwrap();

    let component = &response.document.components()[0];
    assert_eq!(component.title(), "MyApp");
    assert_eq!(component.description(), "Enforces access control");

    let implementations = component.control_implementations();
    assert_eq!(implementations.len(), 1);
    assert_eq!(
        implementations[0].description(),
        "Controls implemented by MyApp for inheritance by applications"
    );
    let requirement = &implementations[0].implemented_requirements()[0];
    assert_eq!(requirement.control_id(), "AC-1");
    assert_eq!(requirement.description(), "Enforces access control");
}

#[test]
fn test_header_only_csv_yields_empty_components() {
    let source = CsvControlReader::from_bytes(
        "header-only.csv",
        "Control Acronym,Component Name,Control Description\n",
    );

    let response = generate(source).unwrap();
    let document = &response.document;

    assert!(document.components().is_empty());
    assert_eq!(document.metadata().title(), "DUBBD");
    assert_eq!(document.metadata().parties().len(), 1);
    assert_eq!(document.metadata().parties()[0].name(), "Defense Unicorns");
}

#[test]
fn test_malformed_row_aborts_generation() {
    let source = CsvControlReader::from_bytes(
        "malformed.csv",
        "h1,h2,h3\nAC-1,MyApp,desc\nAC-2,Other,desc\nAC-3,Broken\n",
    );

    let err = generate(source).unwrap_err();
    match err.downcast_ref::<ComponentDefinitionError>() {
        Some(ComponentDefinitionError::MalformedInput { row, columns }) => {
            assert_eq!(*row, 3);
            assert_eq!(*columns, 2);
        }
        other => panic!("expected MalformedInput, got {:?}", other),
    }
}

#[test]
fn test_source_unavailable_is_propagated() {
    let err = generate(MockControlSource::with_failure()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ComponentDefinitionError>(),
        Some(ComponentDefinitionError::SourceUnavailable { .. })
    ));
}

#[test]
fn test_empty_csv_is_source_unavailable() {
    let err = generate(CsvControlReader::from_bytes("empty.csv", "")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ComponentDefinitionError>(),
        Some(ComponentDefinitionError::SourceUnavailable { .. })
    ));
}

#[test]
fn test_ids_are_pairwise_distinct_for_large_input() {
    let rows: Vec<Vec<String>> = (0..1000)
        .map(|i| {
            vec![
                format!("AC-{}", i),
                format!("Component {}", i),
                "description".to_string(),
            ]
        })
        .collect();

    let document = ComponentDefinitionBuilder::build(&UuidGenerator::new(), &rows).unwrap();
    let ids = document.all_ids();
    let unique: HashSet<&str> = ids.iter().copied().collect();

    assert_eq!(document.components().len(), 1000);
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_structure_is_deterministic_apart_from_generated_fields() {
    let rows: &[&[&str]] = &[
        &["AC-1", "MyApp", "Enforces access control"],
        &["AU-2", "Logger", "Records audit events"],
    ];

    let first = generate(MockControlSource::new(rows)).unwrap().document;
    let second = generate(MockControlSource::new(rows)).unwrap().document;
    assert_ne!(first.uuid(), second.uuid());

    let mut first = serde_json::to_value(&first).unwrap();
    let mut second = serde_json::to_value(&second).unwrap();
    erase_generated_fields(&mut first);
    erase_generated_fields(&mut second);

    assert_eq!(first, second);
}

#[test]
fn test_encoding_is_byte_identical_for_equal_documents() {
    let document = generate(MockControlSource::new(&[&["AC-1", "MyApp", "desc"]]))
        .unwrap()
        .document;
    let copy = document.clone();

    for format in [OutputFormat::Yaml, OutputFormat::Json] {
        let formatter = FormatterFactory::create(format);
        assert_eq!(
            formatter.format(&document).unwrap(),
            formatter.format(&copy).unwrap()
        );
    }
}

#[test]
fn test_stored_documents_are_keyed_by_document_id() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemDocumentStore::open(temp_dir.path()).unwrap();
    let formatter = YamlFormatter::new();

    let first = generate(MockControlSource::new(&[&["AC-1", "First", "desc"]])).unwrap();
    let second = generate(MockControlSource::new(&[&["AC-2", "Second", "desc"]])).unwrap();
    let first_content = formatter.format(&first.document).unwrap();
    let second_content = formatter.format(&second.document).unwrap();

    store
        .save(first.document_id(), formatter.file_extension(), &first_content)
        .unwrap();
    store
        .save(second.document_id(), formatter.file_extension(), &second_content)
        .unwrap();

    assert_eq!(store.latest().unwrap(), Some(second_content));
    assert_eq!(
        store
            .load(first.document_id(), formatter.file_extension())
            .unwrap(),
        Some(first_content)
    );
}
