//! Pipeline Driver
//!
//! Orchestrates one full planning pass: iterate the type records in input
//! order, classify each, perform interface bookkeeping, plan the kind-specific
//! artifact set, then plan the cross-cutting artifacts once the loop is done.
//! Every plan is forwarded to the [`PlanSink`] collaborator as it is produced.
//!
//! The driver is a small state machine:
//!
//! ```text
//! Uninitialized --run()--> Running --loop done--> Completed
//!                             |
//!                             +--classification/field error--> Aborted
//! ```
//!
//! Execution is single-threaded and synchronous; planning must observe input
//! order because interface bookkeeping depends on strict sequential
//! visitation. No plan already forwarded is retracted on abort.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::checksum::{Checksum, ChecksumBuilder};
use crate::classify::{classify, ScalarRegistry, StructuralKind};
use crate::error::Result;
use crate::plan::{ArtifactPlan, PlanSink, TemplateId};
use crate::planner::global::GlobalPlanner;
use crate::planner::{OutputLayout, TypePlanner};
use crate::schema::SchemaDocument;
use crate::tracker::InterfaceTracker;

/// Pipeline lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Uninitialized,
    Running,
    Completed,
    Aborted,
}

/// Per-category plan counts for one pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStats {
    /// Total plans forwarded
    pub total: usize,
    /// Entity model plans
    pub entities: usize,
    /// CRUD fixture plans
    pub fixtures: usize,
    /// Interface/enum/scalar definition plans
    pub type_definitions: usize,
    /// Project-level plans (handler, infra, manifests)
    pub global: usize,
    /// Types that planned nothing (operation roots, personalized scalars)
    pub skipped_types: usize,
}

impl PlanStats {
    fn count(&mut self, plan: &ArtifactPlan) {
        self.total += 1;
        match plan.template {
            TemplateId::EntityModel => self.entities += 1,
            TemplateId::CrudFixture => self.fixtures += 1,
            TemplateId::TypeDefinition
            | TemplateId::EnumDefinition
            | TemplateId::ScalarDefinition => self.type_definitions += 1,
            _ => self.global += 1,
        }
    }
}

/// Result of a completed pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Per-category counts
    pub stats: PlanStats,
    /// Checksum over the forwarded plan sequence; identical inputs produce
    /// identical checksums
    pub checksum: Checksum,
    /// Interface-backed type identifiers registered during the pass
    pub interface_participants: Vec<String>,
}

/// Drives one planning pass over a schema document
pub struct Pipeline {
    state: PipelineState,
    layout: OutputLayout,
    scalars: ScalarRegistry,
}

impl Pipeline {
    /// Pipeline with the default layout and scalar registry
    pub fn new() -> Self {
        Self::with_parts(OutputLayout::default(), ScalarRegistry::new())
    }

    /// Pipeline over an explicit layout and registry (from configuration)
    pub fn with_parts(layout: OutputLayout, scalars: ScalarRegistry) -> Self {
        Self {
            state: PipelineState::Uninitialized,
            layout,
            scalars,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Run one full pass, forwarding every plan to the sink in generation
    /// order. On the first error the pass aborts; plans already forwarded
    /// are not retracted.
    pub fn run(&mut self, document: &SchemaDocument, sink: &mut dyn PlanSink) -> Result<PlanSummary> {
        self.state = PipelineState::Running;
        info!(project = %document.project.name, types = document.types.len(), "planning pass started");
        debug!(names = ?document.type_names(), "input collection");

        match self.run_inner(document, sink) {
            Ok(summary) => {
                self.state = PipelineState::Completed;
                info!(
                    total = summary.stats.total,
                    checksum = %summary.checksum,
                    "planning pass completed"
                );
                Ok(summary)
            }
            Err(e) => {
                self.state = PipelineState::Aborted;
                Err(e)
            }
        }
    }

    fn run_inner(
        &self,
        document: &SchemaDocument,
        sink: &mut dyn PlanSink,
    ) -> Result<PlanSummary> {
        let mut tracker = InterfaceTracker::new();
        let mut stats = PlanStats::default();
        let mut checksum = ChecksumBuilder::new();
        let planner = TypePlanner::new(&self.layout, &self.scalars);

        for record in &document.types {
            let kind = classify(record)?;
            info!(type_name = %record.type_name, kind = kind.as_str(), "processing type");

            match kind {
                StructuralKind::Interface => tracker.record_interface(record),
                StructuralKind::Object => {
                    // The fan-out is scoped to this record; it is logged and
                    // dropped, never carried into later types.
                    if let Some(fanout) = tracker.record_object(record) {
                        debug!(
                            implementer = %fanout.implementer,
                            interfaces = ?fanout.interfaces,
                            "interface fan-out"
                        );
                    }
                }
                _ => {}
            }

            let plans = planner.plan(kind, record)?;
            if plans.is_empty() {
                stats.skipped_types += 1;
            }
            for plan in plans {
                checksum.add_plan(&plan)?;
                stats.count(&plan);
                sink.accept(plan)?;
            }
        }

        let global = GlobalPlanner::new(&self.layout);
        for plan in global.plan(document) {
            checksum.add_plan(&plan)?;
            stats.count(&plan);
            sink.accept(plan)?;
        }

        Ok(PlanSummary {
            stats,
            checksum: checksum.finish(),
            interface_participants: tracker.participants().to_vec(),
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
