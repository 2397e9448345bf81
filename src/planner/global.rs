//! Global Artifact Planning
//!
//! Runs once after every type record has been processed and plans the
//! cross-cutting artifacts that need the complete collection: the aggregating
//! handler, data-source configuration, infrastructure files and the project
//! manifest pair. An empty type collection is not an error; every
//! project-level artifact is still planned, with empty entity lists.

use crate::names::format_app_name;
use crate::plan::{ArtifactPlan, PlanContext, TemplateId};
use crate::planner::OutputLayout;
use crate::schema::SchemaDocument;

/// Number of plans one global pass produces
pub const GLOBAL_PLAN_COUNT: usize = 19;

/// Plans the cross-cutting project artifacts
pub struct GlobalPlanner<'a> {
    layout: &'a OutputLayout,
}

impl<'a> GlobalPlanner<'a> {
    /// Planner over a layout
    pub fn new(layout: &'a OutputLayout) -> Self {
        Self { layout }
    }

    /// Plan every project-level artifact, in a fixed order
    pub fn plan(&self, document: &SchemaDocument) -> Vec<ArtifactPlan> {
        let types = document.types.clone();
        let app_name = format_app_name(&document.project.name);
        let terraform = |file: &str| self.layout.terraform_dir.join(file);

        let mut plans = Vec::with_capacity(GLOBAL_PLAN_COUNT);

        // Aggregating handler over every object type
        plans.push(ArtifactPlan::new(
            TemplateId::Handler,
            "src/graphql/handler.ts",
            PlanContext::TypeList {
                types: types.clone(),
            },
        ));

        // Data-source configuration listing every persisted entity
        plans.push(ArtifactPlan::new(
            TemplateId::DataSource,
            "src/typeorm/datasource.ts",
            PlanContext::TypeList {
                types: types.clone(),
            },
        ));

        // Sample verification of the data-source layer
        plans.push(ArtifactPlan::new(
            TemplateId::DataSourceCheck,
            "src/typeorm/test.ts",
            PlanContext::TypeList { types },
        ));

        // API entry point; patch hooks start out empty
        plans.push(ArtifactPlan::new(
            TemplateId::EntryPoint,
            "src/index.ts",
            PlanContext::EntryPoint {
                import_update: String::new(),
                update_request: String::new(),
            },
        ));

        // Infrastructure files; a subset needs the formatted project name
        plans.push(ArtifactPlan::new(
            TemplateId::ApiGateway,
            terraform("apigateway.tf"),
            PlanContext::AppName {
                app_name: app_name.clone(),
            },
        ));
        plans.push(ArtifactPlan::new(
            TemplateId::Cognito,
            terraform("cognito.tf"),
            PlanContext::AppName {
                app_name: app_name.clone(),
            },
        ));
        plans.push(ArtifactPlan::new(
            TemplateId::Iam,
            terraform("iam.tf"),
            PlanContext::AppName {
                app_name: app_name.clone(),
            },
        ));
        plans.push(ArtifactPlan::new(
            TemplateId::Lambda,
            terraform("lambda.tf"),
            PlanContext::Empty,
        ));
        plans.push(ArtifactPlan::new(
            TemplateId::TerraformMain,
            terraform("main.tf"),
            PlanContext::Empty,
        ));
        plans.push(ArtifactPlan::new(
            TemplateId::Rds,
            terraform("rds.tf"),
            PlanContext::Empty,
        ));
        plans.push(ArtifactPlan::new(
            TemplateId::Secret,
            terraform("secret.tf"),
            PlanContext::Empty,
        ));
        plans.push(ArtifactPlan::new(
            TemplateId::TerraformVariables,
            terraform("variables.tf"),
            PlanContext::Empty,
        ));
        plans.push(ArtifactPlan::new(
            TemplateId::TfVars,
            terraform("terraform.tfvar"),
            PlanContext::AppName {
                app_name: app_name.clone(),
            },
        ));

        // Local lambda test harness
        plans.push(ArtifactPlan::new(
            TemplateId::LocalTestHarness,
            "src/template.yaml",
            PlanContext::AppName {
                app_name: app_name.clone(),
            },
        ));

        // Editor debug-launch descriptor
        plans.push(ArtifactPlan::new(
            TemplateId::DebugLaunch,
            "src/.vscode/launch.json",
            PlanContext::Empty,
        ));

        // Human-readable setup guide
        plans.push(ArtifactPlan::new(
            TemplateId::SetupGuide,
            "src/AWS-SETUP-TEST.md",
            PlanContext::AppName { app_name },
        ));

        // Build-configuration and manifest pair
        plans.push(ArtifactPlan::new(
            TemplateId::TsConfig,
            "tsconfig.json",
            PlanContext::Empty,
        ));
        plans.push(ArtifactPlan::new(
            TemplateId::PackageManifest,
            "package.json",
            PlanContext::ProjectManifest {
                name: document.project.name.clone(),
                description: document.project.description.clone(),
                version: document.project.version.to_string(),
                author: document.project.author.clone(),
            },
        ));

        // Snapshot of the validated schema for regeneration
        plans.push(ArtifactPlan::new(
            TemplateId::SchemaSnapshot,
            "schema.json",
            PlanContext::SchemaSnapshot {
                document: document.clone(),
            },
        ));

        debug_assert_eq!(plans.len(), GLOBAL_PLAN_COUNT);
        plans
    }
}
