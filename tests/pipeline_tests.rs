//! End-to-end planning pass tests
//!
//! Exercises the full pipeline over small schema documents and checks the
//! per-kind artifact counts, destinations, contexts and determinism.

use std::path::PathBuf;

use gql_scaffold::planner::global::GLOBAL_PLAN_COUNT;
use gql_scaffold::{
    Field, Pipeline, PipelineState, PlanCollector, PlanContext, ProjectMetadata, ScaffoldError,
    SchemaDocument, TemplateId, TypeRecord,
};

fn document(types: Vec<TypeRecord>) -> SchemaDocument {
    SchemaDocument::new(ProjectMetadata::new("blog"), types)
}

fn run(doc: &SchemaDocument) -> (PlanCollector, gql_scaffold::PlanSummary) {
    let mut pipeline = Pipeline::new();
    let mut collector = PlanCollector::new();
    let summary = pipeline.run(doc, &mut collector).unwrap();
    (collector, summary)
}

fn per_type_plans(collector: &PlanCollector) -> Vec<&gql_scaffold::ArtifactPlan> {
    collector
        .plans()
        .iter()
        .take(collector.plans().len() - GLOBAL_PLAN_COUNT)
        .collect()
}

#[test]
fn test_enum_and_interface_plan_exactly_one_artifact() {
    let doc = document(vec![
        TypeRecord::new("Status", "GraphQLEnumType")
            .with_values(vec!["ACTIVE".to_string(), "INACTIVE".to_string()]),
        TypeRecord::new("Node", "GraphQLInterfaceType").with_fields(vec![
            Field::new("id", "ID"),
            Field::new("createdAt", "String"),
            Field::new("updatedAt", "String"),
        ]),
    ]);

    let (collector, summary) = run(&doc);
    let per_type = per_type_plans(&collector);

    // One artifact each, regardless of field count
    assert_eq!(per_type.len(), 2);
    assert_eq!(per_type[0].template, TemplateId::EnumDefinition);
    assert_eq!(per_type[1].template, TemplateId::TypeDefinition);
    assert_eq!(summary.stats.type_definitions, 2);
}

#[test]
fn test_non_root_object_plans_four_artifacts_and_roots_plan_zero() {
    let doc = document(vec![
        TypeRecord::new("Query", "GraphQLObjectType")
            .with_fields(vec![Field::new("users", "User")]),
        TypeRecord::new("User", "GraphQLObjectType")
            .with_fields(vec![Field::new("id", "ID"), Field::new("email", "String")]),
    ]);

    let (collector, summary) = run(&doc);
    let per_type = per_type_plans(&collector);

    assert_eq!(per_type.len(), 4);
    assert_eq!(summary.stats.entities, 1);
    assert_eq!(summary.stats.fixtures, 3);
    assert_eq!(summary.stats.skipped_types, 1);
}

#[test]
fn test_scalar_plans_iff_not_personalized() {
    let doc = document(vec![
        TypeRecord::new("DateTime", "GraphQLScalarType"),
        TypeRecord::new("Fancy", "GraphQLScalarType"),
    ]);

    let (collector, _) = run(&doc);
    let per_type = per_type_plans(&collector);

    assert_eq!(per_type.len(), 1);
    assert_eq!(per_type[0].template, TemplateId::ScalarDefinition);
    assert_eq!(
        per_type[0].destination,
        PathBuf::from("src/graphql/types/fancy.ts")
    );
}

#[test]
fn test_planning_is_idempotent_and_order_stable() {
    let doc = document(vec![
        TypeRecord::new("Node", "GraphQLInterfaceType").with_fields(vec![Field::new("id", "ID")]),
        TypeRecord::new("User", "GraphQLObjectType")
            .with_fields(vec![Field::new("id", "ID"), Field::new("name", "String")])
            .with_interfaces(vec!["Node".to_string()]),
        TypeRecord::new("Status", "GraphQLEnumType").with_values(vec!["ACTIVE".to_string()]),
    ]);

    let (first, first_summary) = run(&doc);
    let (second, second_summary) = run(&doc);

    assert_eq!(first.plans(), second.plans());
    assert_eq!(first_summary.checksum, second_summary.checksum);
}

#[test]
fn test_unknown_kind_aborts_with_no_global_plans() {
    let doc = document(vec![TypeRecord::new("Choice", "GraphQLUnionType")]);

    let mut pipeline = Pipeline::new();
    let mut collector = PlanCollector::new();
    let err = pipeline.run(&doc, &mut collector).unwrap_err();

    assert!(matches!(err, ScaffoldError::UnhandledKind(ref k) if k == "GraphQLUnionType"));
    assert_eq!(pipeline.state(), PipelineState::Aborted);
    assert!(collector.plans().is_empty());
}

#[test]
fn test_empty_collection_still_plans_the_full_global_set() {
    let (collector, summary) = run(&document(Vec::new()));

    assert_eq!(collector.plans().len(), GLOBAL_PLAN_COUNT);
    assert_eq!(summary.stats.global, GLOBAL_PLAN_COUNT);
    assert_eq!(summary.stats.entities, 0);
    assert_eq!(summary.stats.fixtures, 0);

    // Entity lists are empty but present
    let handler = collector
        .plans()
        .iter()
        .find(|p| p.template == TemplateId::Handler)
        .unwrap();
    match &handler.context {
        PlanContext::TypeList { types } => assert!(types.is_empty()),
        other => panic!("Expected TypeList context, got {:?}", other),
    }
}

#[test]
fn test_user_scenario_plans_entity_fixtures_and_globals() {
    let user = TypeRecord::new("User", "GraphQLObjectType")
        .with_fields(vec![Field::new("id", "ID"), Field::new("email", "String")]);
    let doc = document(vec![user.clone()]);

    let (collector, _) = run(&doc);
    let plans = collector.plans();
    assert_eq!(plans.len(), 4 + GLOBAL_PLAN_COUNT);

    assert_eq!(plans[0].template, TemplateId::EntityModel);
    assert_eq!(
        plans[0].destination,
        PathBuf::from("src/typeorm/entities/User.ts")
    );
    match &plans[0].context {
        PlanContext::Entity { type_record } => assert_eq!(type_record, &user),
        other => panic!("Expected Entity context, got {:?}", other),
    }

    let fixture_destinations: Vec<_> = plans[1..4]
        .iter()
        .map(|p| p.destination.to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        fixture_destinations,
        vec![
            "events/createUser.json",
            "events/updateUser.json",
            "events/deleteUser.json"
        ]
    );
    for plan in &plans[1..4] {
        match &plan.context {
            PlanContext::Fixture { type_name, fields, .. } => {
                assert_eq!(type_name, "User");
                let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
                assert_eq!(names, vec!["id", "email"]);
            }
            other => panic!("Expected Fixture context, got {:?}", other),
        }
    }

    // The global handler lists User as the sole entity
    let handler = plans
        .iter()
        .find(|p| p.template == TemplateId::Handler)
        .unwrap();
    match &handler.context {
        PlanContext::TypeList { types } => {
            assert_eq!(types.len(), 1);
            assert_eq!(types[0].type_name, "User");
        }
        other => panic!("Expected TypeList context, got {:?}", other),
    }
}

#[test]
fn test_status_enum_scenario_plans_one_lowercased_artifact() {
    let doc = document(vec![TypeRecord::new("Status", "GraphQLEnumType")
        .with_values(vec!["ACTIVE".to_string(), "INACTIVE".to_string()])]);

    let (collector, _) = run(&doc);
    let per_type = per_type_plans(&collector);

    assert_eq!(per_type.len(), 1);
    assert_eq!(
        per_type[0].destination,
        PathBuf::from("src/graphql/types/status.ts")
    );
    match &per_type[0].context {
        PlanContext::EnumDefinition { enum_name, enum_values } => {
            assert_eq!(enum_name, "Status");
            assert_eq!(enum_values, &["ACTIVE", "INACTIVE"]);
        }
        other => panic!("Expected EnumDefinition context, got {:?}", other),
    }
}

#[test]
fn test_malformed_field_aborts_and_names_the_field() {
    let doc = document(vec![TypeRecord::new("User", "GraphQLObjectType")
        .with_fields(vec![Field::new("id", "ID"), Field::new("weird", "???")])]);

    let mut pipeline = Pipeline::new();
    let mut collector = PlanCollector::new();
    let err = pipeline.run(&doc, &mut collector).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("weird"), "error should name the field: {}", message);
    assert_eq!(pipeline.state(), PipelineState::Aborted);
}

#[test]
fn test_interface_participation_spans_the_whole_pass() {
    let doc = document(vec![
        TypeRecord::new("Node", "GraphQLInterfaceType").with_fields(vec![Field::new("id", "ID")]),
        TypeRecord::new("User", "GraphQLObjectType")
            .with_fields(vec![Field::new("id", "ID")])
            .with_interfaces(vec!["Node".to_string()]),
        TypeRecord::new("Post", "GraphQLObjectType").with_fields(vec![Field::new("id", "ID")]),
        TypeRecord::new("Comment", "GraphQLObjectType")
            .with_fields(vec![Field::new("id", "ID")])
            .with_interfaces(vec!["Node".to_string()]),
    ]);

    let (_, summary) = run(&doc);
    assert_eq!(
        summary.interface_participants,
        vec!["NodeType", "UserType", "CommentType"]
    );
}
