//! Type Classification
//!
//! Maps each type record's raw GraphQL kind tag onto the closed set of
//! structural kinds the planner understands. The classifier is a pure
//! mapping; any tag outside the four recognized kinds is a hard abort for
//! the whole pass, not a per-type skip.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};
use crate::schema::TypeRecord;

/// Type names that are API entry points rather than persisted entities
pub const OPERATION_ROOTS: [&str; 3] = ["Query", "Mutation", "Subscription"];

/// Structural kind of a type record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralKind {
    Object,
    Interface,
    Enum,
    Scalar,
}

impl StructuralKind {
    /// Lowercase label used in logs and plan contexts
    pub fn as_str(&self) -> &'static str {
        match self {
            StructuralKind::Object => "object",
            StructuralKind::Interface => "interface",
            StructuralKind::Enum => "enum",
            StructuralKind::Scalar => "scalar",
        }
    }
}

/// Classify a type record by its raw kind tag.
///
/// The recognized tags are the GraphQL type class names the upstream parser
/// reports. An unrecognized tag means the scaffolder has no artifact set for
/// the type and cannot safely continue.
pub fn classify(record: &TypeRecord) -> Result<StructuralKind> {
    match record.kind.as_str() {
        "GraphQLObjectType" => Ok(StructuralKind::Object),
        "GraphQLInterfaceType" => Ok(StructuralKind::Interface),
        "GraphQLEnumType" => Ok(StructuralKind::Enum),
        "GraphQLScalarType" => Ok(StructuralKind::Scalar),
        other => Err(ScaffoldError::UnhandledKind(other.to_string())),
    }
}

/// Whether an object-kind record is an operation root (query/mutation root).
///
/// Roots take part in interface bookkeeping but are excluded from entity and
/// fixture generation.
pub fn is_operation_root(record: &TypeRecord) -> bool {
    OPERATION_ROOTS.contains(&record.type_name.as_str())
}

/// Registry of personalized scalars: custom scalar types already handled by
/// the generated project's scalar library, for which no definition artifact
/// is planned.
#[derive(Debug, Clone)]
pub struct ScalarRegistry {
    names: BTreeSet<String>,
}

impl ScalarRegistry {
    /// Registry with the scalar set covered by graphql-scalars
    pub fn new() -> Self {
        let names = [
            "Date", "Time", "DateTime", "UtcOffset", "Duration", "LocalDate",
            "LocalTime", "NonNegativeInt", "NonNegativeFloat", "NonPositiveInt",
            "NonPositiveFloat", "PositiveInt", "PositiveFloat", "NegativeInt",
            "NegativeFloat", "UnsignedInt", "UnsignedFloat", "BigInt", "Long",
            "EmailAddress", "PhoneNumber", "PostalCode", "URL", "IPv4", "IPv6",
            "MAC", "Port", "Currency", "USCurrency", "ISBN", "JSON", "JSONObject",
            "Latitude", "Longitude", "GUID", "UUID", "HexColorCode", "Hexadecimal",
            "RegularExpression",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Self { names }
    }

    /// Empty registry (every scalar gets a definition artifact)
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Add extra personalized scalar names
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(extra.into_iter().map(Into::into));
        self
    }

    /// Whether a scalar type is personalized (handled outside the generic
    /// scalar artifact path)
    pub fn contains(&self, type_name: &str) -> bool {
        self.names.contains(type_name)
    }
}

impl Default for ScalarRegistry {
    fn default() -> Self {
        Self::new()
    }
}
