//! Annotation expression equivalence tests

use csdl_compare::edm::{expressions_equivalent, EdmExpression, RecordProperty};
use csdl_compare::CompareError;

fn int(value: i64) -> EdmExpression {
    EdmExpression::IntegerConstant(value)
}

fn string(value: &str) -> EdmExpression {
    EdmExpression::StringConstant(value.to_string())
}

fn address(street: &str, city: &str) -> EdmExpression {
    EdmExpression::Record(vec![
        RecordProperty::new("Street", string(street)),
        RecordProperty::new("City", string(city)),
    ])
}

#[test]
fn test_records_built_in_different_order_are_equivalent() {
    let a = EdmExpression::Record(vec![
        RecordProperty::new("Street", string("Main")),
        RecordProperty::new("City", string("Springfield")),
    ]);
    let b = EdmExpression::Record(vec![
        RecordProperty::new("City", string("Springfield")),
        RecordProperty::new("Street", string("Main")),
    ]);
    assert!(expressions_equivalent(&a, &b).unwrap());
}

#[test]
fn test_collections_are_order_significant() {
    let a = EdmExpression::Collection(vec![
        address("Main", "Springfield"),
        address("Second", "Shelbyville"),
    ]);
    let b = EdmExpression::Collection(vec![
        address("Second", "Shelbyville"),
        address("Main", "Springfield"),
    ]);
    assert!(!expressions_equivalent(&a, &b).unwrap());
}

#[test]
fn test_collection_of_mixed_constants() {
    let a = EdmExpression::Collection(vec![int(1), string("two"), EdmExpression::Null]);
    let b = EdmExpression::Collection(vec![int(1), string("two"), EdmExpression::Null]);
    assert!(expressions_equivalent(&a, &b).unwrap());
}

#[test]
fn test_collection_length_must_match() {
    let a = EdmExpression::Collection(vec![int(1), int(2)]);
    let b = EdmExpression::Collection(vec![int(1), int(2), int(3)]);
    assert!(!expressions_equivalent(&a, &b).unwrap());
}

#[test]
fn test_deeply_nested_graphs_compare_by_structure() {
    let build = || {
        EdmExpression::Record(vec![
            RecordProperty::new(
                "Addresses",
                EdmExpression::Collection(vec![
                    address("Main", "Springfield"),
                    address("Second", "Shelbyville"),
                ]),
            ),
            RecordProperty::new("Count", int(2)),
        ])
    };
    assert!(expressions_equivalent(&build(), &build()).unwrap());
}

#[test]
fn test_record_value_difference_detected() {
    let a = address("Main", "Springfield");
    let b = address("Main", "Ogdenville");
    assert!(!expressions_equivalent(&a, &b).unwrap());
}

#[test]
fn test_kind_mismatch_is_not_equivalent() {
    assert!(!expressions_equivalent(&int(1), &string("1")).unwrap());
    assert!(!expressions_equivalent(&EdmExpression::Null, &address("a", "b")).unwrap());
}

#[test]
fn test_unsupported_kind_raises_instead_of_false() {
    let err = expressions_equivalent(
        &EdmExpression::FloatConstant(1.5),
        &EdmExpression::FloatConstant(1.5),
    )
    .unwrap_err();
    assert!(matches!(err, CompareError::UnsupportedExpression { .. }));
}
