//! Vocabulary annotation value expressions and deep equivalence

use crate::error::CompareError;

/// A resolved annotation value expression.
///
/// Closed set: the equivalence check matches exhaustively, so a new kind is a
/// compile-time responsibility here rather than a silent fallthrough.
#[derive(Debug, Clone, PartialEq)]
pub enum EdmExpression {
    Null,
    IntegerConstant(i64),
    StringConstant(String),
    BooleanConstant(bool),
    FloatConstant(f64),
    Record(Vec<RecordProperty>),
    Collection(Vec<EdmExpression>),
}

/// One property of a record expression.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordProperty {
    pub name: String,
    pub value: EdmExpression,
}

impl RecordProperty {
    pub fn new(name: &str, value: EdmExpression) -> Self {
        RecordProperty {
            name: name.to_string(),
            value,
        }
    }
}

impl EdmExpression {
    pub fn kind_name(&self) -> &'static str {
        match self {
            EdmExpression::Null => "Null",
            EdmExpression::IntegerConstant(_) => "IntegerConstant",
            EdmExpression::StringConstant(_) => "StringConstant",
            EdmExpression::BooleanConstant(_) => "BooleanConstant",
            EdmExpression::FloatConstant(_) => "FloatConstant",
            EdmExpression::Record(_) => "Record",
            EdmExpression::Collection(_) => "Collection",
        }
    }
}

/// Deep equivalence of two annotation value expressions.
///
/// Records compare as unordered property bags: every expected property must
/// find some actual property carrying an equivalent value, ignoring property
/// names and without a one-to-one pairing. Collections compare element-wise
/// in order. Kinds outside the supported set raise
/// [`CompareError::UnsupportedExpression`] rather than reporting a mismatch,
/// so a gap in this oracle is never mistaken for a real difference.
pub fn expressions_equivalent(
    expected: &EdmExpression,
    actual: &EdmExpression,
) -> Result<bool, CompareError> {
    match expected {
        EdmExpression::Null => Ok(matches!(actual, EdmExpression::Null)),

        EdmExpression::IntegerConstant(value) => Ok(match actual {
            EdmExpression::IntegerConstant(actual_value) => actual_value == value,
            _ => false,
        }),

        EdmExpression::StringConstant(value) => Ok(match actual {
            EdmExpression::StringConstant(actual_value) => actual_value == value,
            _ => false,
        }),

        EdmExpression::Record(properties) => match actual {
            EdmExpression::Record(actual_properties) => {
                if properties.len() != actual_properties.len() {
                    return Ok(false);
                }
                for property in properties {
                    let mut matched = false;
                    for actual_property in actual_properties {
                        if expressions_equivalent(&property.value, &actual_property.value)? {
                            matched = true;
                            break;
                        }
                    }
                    if !matched {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        },

        EdmExpression::Collection(items) => match actual {
            EdmExpression::Collection(actual_items) => {
                if items.len() != actual_items.len() {
                    return Ok(false);
                }
                for (item, actual_item) in items.iter().zip(actual_items) {
                    if !expressions_equivalent(item, actual_item)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        },

        EdmExpression::BooleanConstant(_) | EdmExpression::FloatConstant(_) => {
            Err(CompareError::UnsupportedExpression {
                kind: expected.kind_name().to_string(),
            })
        }
    }
}
