//! Interface Relationship Tracking
//!
//! Accumulates, over one pipeline pass, which types participate in interface
//! relationships. Two pieces of state with deliberately different lifetimes:
//!
//! - the participation set persists for the whole pass and is available to
//!   later consumers;
//! - the per-type interface fan-out is returned as a fresh value for each
//!   record and is never retained by the tracker. Later types cannot observe
//!   an earlier type's fan-out.

use crate::names::type_link;
use crate::schema::TypeRecord;

/// The interfaces referenced while processing a single type record.
///
/// Scoped to that record's processing step; callers log it and drop it.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceFanout {
    /// Derived identifier of the implementing type
    pub implementer: String,
    /// Derived identifiers of the interfaces it implements, in declaration order
    pub interfaces: Vec<String>,
}

/// Tracks interface participation across one pipeline pass
#[derive(Debug, Default)]
pub struct InterfaceTracker {
    participants: Vec<String>,
}

impl InterfaceTracker {
    /// Fresh tracker for a new pass
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an interface-kind record into the participation set
    pub fn record_interface(&mut self, record: &TypeRecord) {
        self.participants.push(type_link(&record.type_name));
    }

    /// Register an object-kind record. Types with a non-empty interface list
    /// join the participation set; the fan-out is returned by value and not
    /// kept by the tracker.
    pub fn record_object(&mut self, record: &TypeRecord) -> Option<InterfaceFanout> {
        if record.implemented_types.is_empty() {
            return None;
        }

        let implementer = type_link(&record.type_name);
        self.participants.push(implementer.clone());

        let interfaces = record
            .implemented_types
            .iter()
            .map(|name| type_link(name))
            .collect();

        Some(InterfaceFanout {
            implementer,
            interfaces,
        })
    }

    /// All interface-backed type identifiers registered so far, in
    /// registration order
    pub fn participants(&self) -> &[String] {
        &self.participants
    }
}
