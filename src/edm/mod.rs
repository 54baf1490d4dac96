//! EDM vocabulary: built-in primitive types and annotation expressions

pub mod expressions;
pub mod primitives;

pub use expressions::{expressions_equivalent, EdmExpression, RecordProperty};
pub use primitives::{
    primitive_full_name, spatial_default_srid, EdmVersion, EDMX_NAMESPACE, EDM_NAMESPACE,
};
