//! Forest comparison tests, in memory and through the file-level API

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use csdl_compare::compare::compare_forests;
use csdl_compare::xml::parser::parse_document;
use csdl_compare::{
    compare_csdl_paths, CompareError, CompareOptions, CompareOutcome, EdmVersion, NormalizeOptions,
};

fn parse(xml: &str) -> csdl_compare::xml::XmlElement {
    parse_document(xml, "test").unwrap()
}

fn compare(xml_expected: &[&str], xml_actual: &[&str]) -> Result<(), CompareError> {
    let expected: Vec<_> = xml_expected.iter().map(|x| parse(x)).collect();
    let actual: Vec<_> = xml_actual.iter().map(|x| parse(x)).collect();
    compare_forests(
        &expected,
        &actual,
        &NormalizeOptions::default(),
        EdmVersion::V40,
    )
}

const PERSON_SCHEMA: &str = r#"<Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Test.Model">
  <EntityType Name="Person">
    <Key><PropertyRef Name="Id" /></Key>
    <Property Name="Id" Type="Edm.Int32" Nullable="false" />
    <Property Name="Name" Type="Edm.String" />
  </EntityType>
  <EntityContainer Name="Container">
    <EntitySet Name="People" EntityType="Test.Model.Person" />
  </EntityContainer>
</Schema>"#;

#[test]
fn test_schema_equals_itself() {
    compare(&[PERSON_SCHEMA], &[PERSON_SCHEMA]).unwrap();
}

#[test]
fn test_alias_only_difference_compares_equal() {
    let aliased = r#"<Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Test.Model" Alias="Display">
  <EntityType Name="Base" />
  <EntityType Name="Derived" BaseType="Display.Base" />
</Schema>"#;
    let expanded = r#"<Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Test.Model">
  <EntityType Name="Derived" BaseType="Test.Model.Base" />
  <EntityType Name="Base" />
</Schema>"#;
    compare(&[aliased], &[expanded]).unwrap();
}

#[test]
fn test_two_against_one_is_count_mismatch() {
    let other = r#"<Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Other" />"#;
    let err = compare(&[PERSON_SCHEMA, other], &[PERSON_SCHEMA]).unwrap_err();
    match err {
        CompareError::SchemaCountMismatch { expected, actual } => {
            assert_eq!((expected, actual), (2, 1));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_namespace_lookup_failure_names_the_namespace() {
    let lhs = r#"<Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Missing.Side" />"#;
    let rhs = r#"<Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Present.Side" />"#;
    let err = compare(&[lhs], &[rhs]).unwrap_err();
    match err {
        CompareError::NoSchemaForNamespace { namespace } => {
            assert_eq!(namespace, "Missing.Side");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_property_type_difference_is_reported_with_both_forms() {
    let actual = PERSON_SCHEMA.replace("Edm.String", "Edm.Int64");
    let err = compare(&[PERSON_SCHEMA], &[actual.as_str()]).unwrap_err();
    match err {
        CompareError::SchemasDiffer {
            namespace,
            expected_csdl,
            actual_csdl,
        } => {
            assert_eq!(namespace, "Test.Model");
            assert!(expected_csdl.contains("Edm.String"));
            assert!(actual_csdl.contains("Edm.Int64"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_entity_set_difference_is_container_mismatch() {
    let actual = PERSON_SCHEMA.replace(
        r#"<EntitySet Name="People" EntityType="Test.Model.Person" />"#,
        r#"<EntitySet Name="Persons" EntityType="Test.Model.Person" />"#,
    );
    let err = compare(&[PERSON_SCHEMA], &[actual.as_str()]).unwrap_err();
    assert!(matches!(err, CompareError::ContainersDiffer { .. }));
}

#[test]
fn test_mismatch_variants_are_flagged_as_mismatches() {
    let err = compare(&[PERSON_SCHEMA], &[]).unwrap_err();
    assert!(err.is_mismatch());
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_compare_directories_of_documents() {
    let tmp = TempDir::new().unwrap();
    let expected_dir = tmp.path().join("expected");
    let actual_dir = tmp.path().join("actual");
    std::fs::create_dir_all(&expected_dir).unwrap();
    std::fs::create_dir_all(&actual_dir).unwrap();
    write_file(&expected_dir, "model.csdl", PERSON_SCHEMA);
    write_file(&actual_dir, "model.csdl", PERSON_SCHEMA);

    let outcome = compare_csdl_paths(CompareOptions {
        expected_path: expected_dir,
        actual_path: actual_dir,
        version: EdmVersion::V40,
        normalize: NormalizeOptions::default(),
        verbose: false,
    })
    .unwrap();
    assert!(outcome.is_equivalent());
}

#[test]
fn test_compare_files_reports_difference_as_outcome() {
    let tmp = TempDir::new().unwrap();
    let expected = write_file(tmp.path(), "expected.csdl", PERSON_SCHEMA);
    let changed = PERSON_SCHEMA.replace("Edm.String", "Edm.Boolean");
    let actual = write_file(tmp.path(), "actual.csdl", &changed);

    let outcome = compare_csdl_paths(CompareOptions {
        expected_path: expected,
        actual_path: actual,
        version: EdmVersion::V40,
        normalize: NormalizeOptions::default(),
        verbose: false,
    })
    .unwrap();
    match outcome {
        CompareOutcome::Different(err) => assert!(err.is_mismatch()),
        CompareOutcome::Equivalent => panic!("documents should differ"),
    }
}

#[test]
fn test_compare_edmx_envelope_against_bare_schema() {
    let tmp = TempDir::new().unwrap();
    let edmx = format!(
        r#"<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices>{PERSON_SCHEMA}</edmx:DataServices>
</edmx:Edmx>"#
    );
    let expected = write_file(tmp.path(), "metadata.xml", &edmx);
    let actual = write_file(tmp.path(), "model.csdl", PERSON_SCHEMA);

    let outcome = compare_csdl_paths(CompareOptions {
        expected_path: expected,
        actual_path: actual,
        version: EdmVersion::V40,
        normalize: NormalizeOptions::default(),
        verbose: false,
    })
    .unwrap();
    assert!(outcome.is_equivalent());
}

#[test]
fn test_missing_input_path_is_hard_error() {
    let result = compare_csdl_paths(CompareOptions {
        expected_path: PathBuf::from("/nonexistent/expected.csdl"),
        actual_path: PathBuf::from("/nonexistent/actual.csdl"),
        version: EdmVersion::V40,
        normalize: NormalizeOptions::default(),
        verbose: false,
    });
    assert!(result.is_err());
}
