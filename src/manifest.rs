//! Plan manifest
//!
//! The durable record of one planning pass: project metadata, generation
//! timestamp, the ordered plan list, per-category statistics and a checksum
//! over the sequence. Regenerating from the same schema reproduces the same
//! manifest contents (timestamp aside).

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checksum::Checksum;
use crate::error::Result;
use crate::pipeline::{PlanStats, PlanSummary};
use crate::plan::ArtifactPlan;
use crate::schema::ProjectMetadata;

/// Manifest for one completed planning pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanManifest {
    /// Project metadata the pass ran with
    pub project: ProjectMetadata,
    /// When the manifest was generated
    pub generated_at: DateTime<Utc>,
    /// Per-category plan counts
    pub stats: PlanStats,
    /// Checksum over the ordered plan sequence
    pub checksum: Checksum,
    /// The plans themselves, in generation order
    pub plans: Vec<ArtifactPlan>,
}

impl PlanManifest {
    /// Build a manifest from a completed pass
    pub fn new(project: ProjectMetadata, summary: &PlanSummary, plans: Vec<ArtifactPlan>) -> Self {
        Self {
            project,
            generated_at: Utc::now(),
            stats: summary.stats.clone(),
            checksum: summary.checksum.clone(),
            plans,
        }
    }

    /// Verify the recorded checksum against the recorded plans
    pub fn verify(&self) -> Result<bool> {
        self.checksum.verify_plans(&self.plans)
    }

    /// Write the manifest as pretty-printed JSON
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load a manifest from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;
    use crate::plan::PlanCollector;
    use crate::schema::{ProjectMetadata, SchemaDocument, TypeRecord};
    use tempfile::tempdir;

    fn run_pass() -> PlanManifest {
        let document = SchemaDocument::new(
            ProjectMetadata::new("blog"),
            vec![TypeRecord::new("Status", "GraphQLEnumType")
                .with_values(vec!["ACTIVE".to_string()])],
        );
        let mut pipeline = Pipeline::new();
        let mut sink = PlanCollector::new();
        let summary = pipeline.run(&document, &mut sink).unwrap();
        PlanManifest::new(document.project, &summary, sink.into_plans())
    }

    #[test]
    fn test_manifest_verifies() {
        let manifest = run_pass();
        assert!(manifest.verify().unwrap());
        assert_eq!(manifest.stats.total, manifest.plans.len());
    }

    #[test]
    fn test_manifest_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan-manifest.json");

        let manifest = run_pass();
        manifest.write(&path).unwrap();

        let loaded = PlanManifest::from_file(&path).unwrap();
        assert_eq!(loaded.checksum, manifest.checksum);
        assert_eq!(loaded.checksum.as_str().len(), 64);
        assert_eq!(loaded.plans, manifest.plans);
        assert!(loaded.verify().unwrap());
    }
}
