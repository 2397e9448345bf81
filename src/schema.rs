//! Schema document types
//!
//! The validated input boundary: an ordered collection of type records plus
//! project metadata, as delivered by the schema ingestion collaborator.
//! Schema-level validity (syntax, reference resolution) is checked upstream;
//! this crate only re-checks the structural invariants it depends on.

use std::collections::BTreeMap;
use std::collections::HashSet;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Project metadata collected before scaffolding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Project name (also the scaffold output root)
    pub name: String,
    /// Project description
    #[serde(default = "default_description")]
    pub description: String,
    /// Semantic version of the project
    #[serde(default = "default_version")]
    pub version: Version,
    /// Project author
    #[serde(default)]
    pub author: String,
}

fn default_description() -> String {
    "none".to_string()
}

fn default_version() -> Version {
    Version::new(1, 0, 0)
}

impl ProjectMetadata {
    /// Create metadata with the original generator's defaults
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: default_description(),
            version: default_version(),
            author: String::new(),
        }
    }
}

/// A directive annotation on a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    /// Directive name without the leading '@'
    pub name: String,
    /// Directive arguments as name/value pairs
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub args: BTreeMap<String, String>,
}

/// A single field descriptor on a type record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name
    pub name: String,
    /// Declared type: a built-in scalar name or a reference to another type
    pub data_type: String,
    /// Whether the field is a list of its declared type
    #[serde(default)]
    pub is_list: bool,
    /// Whether the field is non-nullable
    #[serde(default)]
    pub non_null: bool,
    /// Directive annotations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

impl Field {
    /// Create a field with no modifiers
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            is_list: false,
            non_null: false,
            directives: Vec::new(),
        }
    }

    /// Names of the directives attached to this field
    pub fn directive_names(&self) -> Vec<&str> {
        self.directives.iter().map(|d| d.name.as_str()).collect()
    }
}

/// One schema-level type as delivered by the ingestion collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRecord {
    /// Unique type name, stable for the whole pass
    pub type_name: String,
    /// Raw GraphQL kind tag as reported upstream (e.g. "GraphQLObjectType")
    pub kind: String,
    /// Ordered field descriptors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    /// Interface type names this type implements (0..N)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implemented_types: Vec<String>,
    /// Enumerated values (enum kinds only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl TypeRecord {
    /// Create a record with a raw kind tag and no members
    pub fn new(type_name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            kind: kind.into(),
            fields: Vec::new(),
            implemented_types: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Add fields (object and interface kinds)
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Add implemented interface names
    pub fn with_interfaces(mut self, interfaces: Vec<String>) -> Self {
        self.implemented_types = interfaces;
        self
    }

    /// Add enumerated values (enum kinds)
    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }
}

/// The full validated schema document: project metadata plus the ordered
/// type record collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Project metadata
    pub project: ProjectMetadata,
    /// Type records in source order
    pub types: Vec<TypeRecord>,
}

impl SchemaDocument {
    /// Create a document from already-validated parts
    pub fn new(project: ProjectMetadata, types: Vec<TypeRecord>) -> Self {
        Self { project, types }
    }

    /// Parse a document from JSON and check the invariants the planner
    /// relies on (type name uniqueness). Anything else is assumed to have
    /// passed upstream validation.
    pub fn from_json(content: &str) -> Result<Self> {
        let document: SchemaDocument = serde_json::from_str(content)
            .map_err(|e| ScaffoldError::UpstreamValidation(e.to_string()))?;
        document.check_unique_names()?;
        Ok(document)
    }

    /// Names of all types in the document, in input order
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.type_name.as_str()).collect()
    }

    fn check_unique_names(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for record in &self.types {
            if !seen.insert(record.type_name.as_str()) {
                return Err(ScaffoldError::UpstreamValidation(format!(
                    "duplicate type name '{}'",
                    record.type_name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_defaults() {
        let meta = ProjectMetadata::new("blog");
        assert_eq!(meta.description, "none");
        assert_eq!(meta.version, Version::new(1, 0, 0));
        assert_eq!(meta.author, "");
    }

    #[test]
    fn test_document_from_json() {
        let json = r#"{
            "project": { "name": "blog" },
            "types": [
                {
                    "typeName": "User",
                    "kind": "GraphQLObjectType",
                    "fields": [
                        { "name": "id", "dataType": "ID", "nonNull": true },
                        { "name": "email", "dataType": "String" }
                    ]
                }
            ]
        }"#;
        let doc = SchemaDocument::from_json(json).unwrap();
        assert_eq!(doc.project.name, "blog");
        assert_eq!(doc.types.len(), 1);
        assert_eq!(doc.types[0].fields[1].data_type, "String");
        assert!(doc.types[0].fields[0].non_null);
    }

    #[test]
    fn test_duplicate_type_names_rejected() {
        let json = r#"{
            "project": { "name": "blog" },
            "types": [
                { "typeName": "User", "kind": "GraphQLObjectType" },
                { "typeName": "User", "kind": "GraphQLObjectType" }
            ]
        }"#;
        let err = SchemaDocument::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate type name 'User'"));
    }

    #[test]
    fn test_type_names_preserve_input_order() {
        let doc = SchemaDocument::new(
            ProjectMetadata::new("blog"),
            vec![
                TypeRecord::new("User", "GraphQLObjectType"),
                TypeRecord::new("Status", "GraphQLEnumType"),
            ],
        );
        assert_eq!(doc.type_names(), vec!["User", "Status"]);
    }

    #[test]
    fn test_directive_names() {
        let mut field = Field::new("posts", "Post");
        field.directives.push(Directive {
            name: "oneToMany".to_string(),
            args: BTreeMap::new(),
        });
        assert_eq!(field.directive_names(), vec!["oneToMany"]);
    }
}
