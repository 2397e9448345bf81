//! Artifact Plans
//!
//! A plan is a (template, destination, context) triple. Plans are produced
//! fresh for each pipeline pass and forwarded immediately to the
//! materialization collaborator through the [`PlanSink`] boundary; the
//! planner never renders or writes anything itself.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::classify::StructuralKind;
use crate::error::Result;
use crate::schema::{SchemaDocument, TypeRecord};

/// Identifier of a template in the scaffold catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    // Per-type templates
    TypeDefinition,
    EnumDefinition,
    ScalarDefinition,
    EntityModel,
    CrudFixture,
    // Cross-cutting project templates
    Handler,
    DataSource,
    DataSourceCheck,
    EntryPoint,
    ApiGateway,
    Cognito,
    Iam,
    Lambda,
    TerraformMain,
    Rds,
    Secret,
    TerraformVariables,
    TfVars,
    LocalTestHarness,
    DebugLaunch,
    SetupGuide,
    TsConfig,
    PackageManifest,
    SchemaSnapshot,
}

impl TemplateId {
    /// Path of the template source inside the template catalogue
    pub fn source_path(&self) -> &'static str {
        match self {
            TemplateId::TypeDefinition => "src/graphql/type.ejs",
            TemplateId::EnumDefinition => "src/graphql/typeEnum.ejs",
            TemplateId::ScalarDefinition => "src/graphql/typeScalar.ejs",
            TemplateId::EntityModel => "src/typeorm/type.ejs",
            TemplateId::CrudFixture => "testLambdas/eventMaker.ejs",
            TemplateId::Handler => "src/graphql/globalHandler.ejs",
            TemplateId::DataSource => "src/typeorm/datasource.ejs",
            TemplateId::DataSourceCheck => "src/typeorm/test.ejs",
            TemplateId::EntryPoint => "src/index.js",
            TemplateId::ApiGateway => "terraform/apigateway.tf",
            TemplateId::Cognito => "terraform/cognito.tf",
            TemplateId::Iam => "terraform/iam.tf",
            TemplateId::Lambda => "terraform/lambda.tf",
            TemplateId::TerraformMain => "terraform/main.tf",
            TemplateId::Rds => "terraform/rds.tf",
            TemplateId::Secret => "terraform/secret.tf",
            TemplateId::TerraformVariables => "terraform/variables.tf",
            TemplateId::TfVars => "terraform/terraform.tfvar",
            TemplateId::LocalTestHarness => "testLambdas/template.yaml",
            TemplateId::DebugLaunch => "samConfiguration/launch.json",
            TemplateId::SetupGuide => "readmes/AWS-SETUP-TEST.md",
            TemplateId::TsConfig => "tsconfig.json",
            TemplateId::PackageManifest => "package.json",
            TemplateId::SchemaSnapshot => "schema.json",
        }
    }
}

/// CRUD operation tag on a test fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrudOperation {
    Create,
    Update,
    Delete,
}

impl CrudOperation {
    /// Operations in fixture generation order
    pub const ALL: [CrudOperation; 3] = [
        CrudOperation::Create,
        CrudOperation::Update,
        CrudOperation::Delete,
    ];

    /// Lowercase tag used in fixture file names and contexts
    pub fn as_str(&self) -> &'static str {
        match self {
            CrudOperation::Create => "create",
            CrudOperation::Update => "update",
            CrudOperation::Delete => "delete",
        }
    }
}

/// A field with its deterministic sample value, ready for a fixture context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureField {
    /// Field name
    pub name: String,
    /// Sample value for the fixture payload
    pub sample: serde_json::Value,
}

/// The context object handed to the template renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanContext {
    /// Template needs no per-schema context
    Empty,
    /// Interface-shaped type definition; interfaces never implement other
    /// interfaces, so the implementer linkage is always absent
    TypeDefinition {
        type_record: TypeRecord,
        structural: StructuralKind,
        interfaces: Option<Vec<String>>,
    },
    /// Enum definition keyed by its ordered value list
    EnumDefinition {
        enum_name: String,
        enum_values: Vec<String>,
    },
    /// Entity model keyed by the full type record
    Entity { type_record: TypeRecord },
    /// CRUD fixture keyed by sampled fields, type name and operation tag
    Fixture {
        type_name: String,
        operation: CrudOperation,
        fields: Vec<FixtureField>,
    },
    /// Cross-cutting artifact keyed by the full ordered type collection
    TypeList { types: Vec<TypeRecord> },
    /// Infrastructure artifact keyed by the formatted project name
    AppName { app_name: String },
    /// API entry point with its patch hooks
    EntryPoint {
        import_update: String,
        update_request: String,
    },
    /// Project manifest keyed by project metadata
    ProjectManifest {
        name: String,
        description: String,
        version: String,
        author: String,
    },
    /// Snapshot of the validated schema document
    SchemaSnapshot { document: SchemaDocument },
}

/// A planned unit of output: what to render, where, with which context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactPlan {
    /// Template identifier
    pub template: TemplateId,
    /// Destination path relative to the scaffold output root
    pub destination: PathBuf,
    /// Context object for rendering
    pub context: PlanContext,
}

impl ArtifactPlan {
    /// Create a plan
    pub fn new(template: TemplateId, destination: impl Into<PathBuf>, context: PlanContext) -> Self {
        Self {
            template,
            destination: destination.into(),
            context,
        }
    }
}

/// Output boundary: the materialization collaborator consuming plans in
/// generation order. Writes are expected to be idempotent overwrites.
pub trait PlanSink {
    /// Accept one plan for materialization
    fn accept(&mut self, plan: ArtifactPlan) -> Result<()>;
}

/// In-memory sink collecting plans in generation order
#[derive(Debug, Default)]
pub struct PlanCollector {
    plans: Vec<ArtifactPlan>,
}

impl PlanCollector {
    /// Empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected plans, in generation order
    pub fn plans(&self) -> &[ArtifactPlan] {
        &self.plans
    }

    /// Consume the collector
    pub fn into_plans(self) -> Vec<ArtifactPlan> {
        self.plans
    }
}

impl PlanSink for PlanCollector {
    fn accept(&mut self, plan: ArtifactPlan) -> Result<()> {
        self.plans.push(plan);
        Ok(())
    }
}
