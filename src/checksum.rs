//! Checksums for plan determinism verification

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::Result;
use crate::plan::ArtifactPlan;

/// SHA256 checksum over an ordered plan sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum(String);

impl Checksum {
    /// Compute checksum over an ordered plan sequence
    pub fn of_plans(plans: &[ArtifactPlan]) -> Result<Self> {
        let mut builder = ChecksumBuilder::new();
        for plan in plans {
            builder.add_plan(plan)?;
        }
        Ok(builder.finish())
    }

    /// Get the hex string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify that a plan sequence matches this checksum
    pub fn verify_plans(&self, plans: &[ArtifactPlan]) -> Result<bool> {
        Ok(*self == Self::of_plans(plans)?)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Streaming checksum builder; plans are folded in forwarding order
#[derive(Debug, Default)]
pub struct ChecksumBuilder {
    hasher: Sha256,
}

impl ChecksumBuilder {
    /// Fresh builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one plan into the running checksum
    pub fn add_plan(&mut self, plan: &ArtifactPlan) -> Result<()> {
        let serialized = serde_json::to_string(plan)?;
        self.hasher.update(serialized.as_bytes());
        self.hasher.update(b"\n");
        Ok(())
    }

    /// Finish and produce the checksum
    pub fn finish(self) -> Checksum {
        Checksum(format!("{:x}", self.hasher.finalize()))
    }
}
