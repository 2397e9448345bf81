//! GraphQL Scaffold Planner
//!
//! A deterministic artifact planner for schema-driven project scaffolding:
//! given a parsed, validated GraphQL schema (type records plus project
//! metadata), it plans the full tree of generated artifacts - entity models,
//! GraphQL type definitions, CRUD test fixtures and deployment configuration -
//! and forwards each plan to a materialization collaborator.
//!
//! ## Features
//!
//! - **Closed kind dispatch**: the four structural kinds are a sum type with
//!   exhaustive matching; unrecognized kinds abort the pass at the boundary
//! - **Order-stable output**: plans are emitted in input order and the full
//!   sequence carries a SHA256 checksum, so regeneration is reproducible
//! - **Pure planning**: nothing is rendered or written here; the output
//!   boundary is a sink trait consuming (template, destination, context)
//!   triples
//!
//! ## Pipeline
//!
//! ```text
//! SchemaDocument
//!   └─> Pipeline (Uninitialized -> Running -> Completed | Aborted)
//!         ├─> classify() per type record, in input order
//!         ├─> InterfaceTracker bookkeeping
//!         ├─> TypePlanner: kind-specific artifact set
//!         └─> GlobalPlanner: cross-cutting artifacts, once
//!               └─> PlanSink (external materializer)
//! ```

pub mod checksum;
pub mod classify;
pub mod config;
pub mod error;
pub mod manifest;
pub mod names;
pub mod pipeline;
pub mod plan;
pub mod planner;
pub mod schema;
pub mod tracker;

pub use checksum::Checksum;
pub use classify::{classify, is_operation_root, ScalarRegistry, StructuralKind};
pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use manifest::PlanManifest;
pub use pipeline::{Pipeline, PipelineState, PlanStats, PlanSummary};
pub use plan::{ArtifactPlan, CrudOperation, PlanCollector, PlanContext, PlanSink, TemplateId};
pub use planner::{global::GlobalPlanner, OutputLayout, TypePlanner};
pub use schema::{Field, ProjectMetadata, SchemaDocument, TypeRecord};
pub use tracker::{InterfaceFanout, InterfaceTracker};
