//! Built-in EDM primitive types, their canonical names, and spatial defaults

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Namespace of CSDL schema elements.
pub const EDM_NAMESPACE: &str = "http://docs.oasis-open.org/odata/ns/edm";

/// Namespace of the EDMX envelope around schema documents.
pub const EDMX_NAMESPACE: &str = "http://docs.oasis-open.org/odata/ns/edmx";

/// Target CSDL schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdmVersion {
    #[default]
    V40,
    V401,
}

impl EdmVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdmVersion::V40 => "4.0",
            EdmVersion::V401 => "4.01",
        }
    }
}

impl std::str::FromStr for EdmVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "4.0" => Ok(EdmVersion::V40),
            "4.01" => Ok(EdmVersion::V401),
            other => Err(format!("unknown CSDL version \"{other}\" (expected 4.0 or 4.01)")),
        }
    }
}

/// Canonical fully-qualified names of the version 4.0 built-in primitives.
const FULL_NAMES_V40: &[&str] = &[
    "Edm.Binary",
    "Edm.Boolean",
    "Edm.Byte",
    "Edm.Date",
    "Edm.DateTimeOffset",
    "Edm.Decimal",
    "Edm.Double",
    "Edm.Duration",
    "Edm.Guid",
    "Edm.Int16",
    "Edm.Int32",
    "Edm.Int64",
    "Edm.SByte",
    "Edm.Single",
    "Edm.Stream",
    "Edm.String",
    "Edm.TimeOfDay",
    "Edm.Geography",
    "Edm.GeographyPoint",
    "Edm.GeographyLineString",
    "Edm.GeographyPolygon",
    "Edm.GeographyMultiPoint",
    "Edm.GeographyMultiLineString",
    "Edm.GeographyMultiPolygon",
    "Edm.GeographyCollection",
    "Edm.Geometry",
    "Edm.GeometryPoint",
    "Edm.GeometryLineString",
    "Edm.GeometryPolygon",
    "Edm.GeometryMultiPoint",
    "Edm.GeometryMultiLineString",
    "Edm.GeometryMultiPolygon",
    "Edm.GeometryCollection",
];

/// Additional built-ins introduced in 4.01.
const FULL_NAMES_V401_EXTRA: &[&str] = &["Edm.Untyped"];

fn build_table(full_names: &[&'static [&'static str]]) -> HashMap<&'static str, &'static str> {
    let mut table = HashMap::new();
    for group in full_names {
        for full in *group {
            table.insert(*full, *full);
            let short = full.strip_prefix("Edm.").unwrap();
            table.insert(short, *full);
        }
    }
    table
}

static PRIMITIVES_V40: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| build_table(&[FULL_NAMES_V40]));

static PRIMITIVES_V401: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| build_table(&[FULL_NAMES_V40, FULL_NAMES_V401_EXTRA]));

/// Default SRID per spatial type: the geography family defaults to WGS 84,
/// the geometry family to 0.
static SPATIAL_DEFAULT_SRID: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for full in FULL_NAMES_V40 {
        let short = full.strip_prefix("Edm.").unwrap();
        if short.starts_with("Geography") {
            table.insert(short, "4326");
        } else if short.starts_with("Geometry") {
            table.insert(short, "0");
        }
    }
    table
});

/// Look up the canonical fully-qualified name for a primitive type name,
/// accepting either the short (`String`) or qualified (`Edm.String`) form.
/// Returns `None` for anything that is not a built-in of the version.
pub fn primitive_full_name(version: EdmVersion, name: &str) -> Option<&'static str> {
    let table = match version {
        EdmVersion::V40 => &*PRIMITIVES_V40,
        EdmVersion::V401 => &*PRIMITIVES_V401,
    };
    table.get(name).copied()
}

/// Default SRID for a spatial primitive name (short or `Edm.`-qualified);
/// `None` for non-spatial types.
pub fn spatial_default_srid(name: &str) -> Option<&'static str> {
    let short = name.strip_prefix("Edm.").unwrap_or(name);
    SPATIAL_DEFAULT_SRID.get(short).copied()
}
