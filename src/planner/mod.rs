//! Per-Kind Artifact Planning
//!
//! Dispatches each classified type record to its kind-specific artifact set.
//! Planning is pure: it produces [`ArtifactPlan`] values and never touches
//! the filesystem.
//!
//! | kind                  | artifacts                                   |
//! |-----------------------|---------------------------------------------|
//! | Interface             | one type definition                         |
//! | Enum                  | one enum definition                         |
//! | Scalar                | one scalar definition, unless personalized  |
//! | Object (non-root)     | one entity model + create/update/delete fixtures |
//! | Object (root)         | nothing                                     |

pub mod global;

use std::path::PathBuf;

use crate::classify::{is_operation_root, ScalarRegistry, StructuralKind};
use crate::error::{Result, ScaffoldError};
use crate::names::definition_file_name;
use crate::plan::{ArtifactPlan, CrudOperation, FixtureField, PlanContext, TemplateId};
use crate::schema::{Field, TypeRecord};

/// Category directories the planner namespaces destinations under
#[derive(Debug, Clone, PartialEq)]
pub struct OutputLayout {
    /// Entity model directory
    pub entities_dir: PathBuf,
    /// GraphQL type definition directory
    pub type_definitions_dir: PathBuf,
    /// CRUD fixture directory
    pub fixtures_dir: PathBuf,
    /// Infrastructure file directory
    pub terraform_dir: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            entities_dir: PathBuf::from("src/typeorm/entities"),
            type_definitions_dir: PathBuf::from("src/graphql/types"),
            fixtures_dir: PathBuf::from("events"),
            terraform_dir: PathBuf::from("terraform"),
        }
    }
}

/// Plans the artifact set for a single classified type record
pub struct TypePlanner<'a> {
    layout: &'a OutputLayout,
    scalars: &'a ScalarRegistry,
}

impl<'a> TypePlanner<'a> {
    /// Planner over a layout and a personalized-scalar registry
    pub fn new(layout: &'a OutputLayout, scalars: &'a ScalarRegistry) -> Self {
        Self { layout, scalars }
    }

    /// Plan all artifacts for one record, in generation order
    pub fn plan(&self, kind: StructuralKind, record: &TypeRecord) -> Result<Vec<ArtifactPlan>> {
        match kind {
            StructuralKind::Interface => Ok(vec![self.plan_interface(record)]),
            StructuralKind::Enum => Ok(vec![self.plan_enum(record)]),
            StructuralKind::Scalar => Ok(self.plan_scalar(record)),
            StructuralKind::Object => self.plan_object(record),
        }
    }

    fn plan_interface(&self, record: &TypeRecord) -> ArtifactPlan {
        ArtifactPlan::new(
            TemplateId::TypeDefinition,
            self.layout
                .type_definitions_dir
                .join(definition_file_name(&record.type_name)),
            PlanContext::TypeDefinition {
                type_record: record.clone(),
                structural: StructuralKind::Interface,
                // An interface doesn't implement other interfaces
                interfaces: None,
            },
        )
    }

    fn plan_enum(&self, record: &TypeRecord) -> ArtifactPlan {
        ArtifactPlan::new(
            TemplateId::EnumDefinition,
            self.layout
                .type_definitions_dir
                .join(definition_file_name(&record.type_name)),
            PlanContext::EnumDefinition {
                enum_name: record.type_name.clone(),
                enum_values: record.values.clone(),
            },
        )
    }

    fn plan_scalar(&self, record: &TypeRecord) -> Vec<ArtifactPlan> {
        if self.scalars.contains(&record.type_name) {
            return Vec::new();
        }

        vec![ArtifactPlan::new(
            TemplateId::ScalarDefinition,
            self.layout
                .type_definitions_dir
                .join(definition_file_name(&record.type_name)),
            PlanContext::Empty,
        )]
    }

    fn plan_object(&self, record: &TypeRecord) -> Result<Vec<ArtifactPlan>> {
        // Roots are API entry points, not persisted entities
        if is_operation_root(record) {
            return Ok(Vec::new());
        }

        let fixture_fields = sample_fields(record)?;

        let mut plans = Vec::with_capacity(1 + CrudOperation::ALL.len());
        plans.push(ArtifactPlan::new(
            TemplateId::EntityModel,
            self.layout
                .entities_dir
                .join(format!("{}.ts", record.type_name)),
            PlanContext::Entity {
                type_record: record.clone(),
            },
        ));

        for operation in CrudOperation::ALL {
            plans.push(ArtifactPlan::new(
                TemplateId::CrudFixture,
                self.layout
                    .fixtures_dir
                    .join(format!("{}{}.json", operation.as_str(), record.type_name)),
                PlanContext::Fixture {
                    type_name: record.type_name.clone(),
                    operation,
                    fields: fixture_fields.clone(),
                },
            ));
        }

        Ok(plans)
    }
}

/// Build the sampled field list for a record's CRUD fixtures.
///
/// Every field must map; a field the planner cannot shape is an error naming
/// it, never a silent omission.
pub fn sample_fields(record: &TypeRecord) -> Result<Vec<FixtureField>> {
    record
        .fields
        .iter()
        .map(|field| {
            let sample = sample_value(record, field)?;
            Ok(FixtureField {
                name: field.name.clone(),
                sample,
            })
        })
        .collect()
}

fn sample_value(record: &TypeRecord, field: &Field) -> Result<serde_json::Value> {
    let base = match field.data_type.as_str() {
        "ID" => serde_json::json!("1"),
        "String" => serde_json::json!(format!("sample-{}", field.name)),
        "Int" => serde_json::json!(42),
        "Float" => serde_json::json!(4.2),
        "Boolean" => serde_json::json!(true),
        // References are resolved at runtime, not in fixtures
        other if is_type_reference(other) => serde_json::Value::Null,
        _ => {
            return Err(ScaffoldError::MalformedField {
                type_name: record.type_name.clone(),
                field: field.name.clone(),
                declared: field.data_type.clone(),
            })
        }
    };

    if field.is_list {
        Ok(serde_json::Value::Array(vec![base]))
    } else {
        Ok(base)
    }
}

fn is_type_reference(data_type: &str) -> bool {
    let mut chars = data_type.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
