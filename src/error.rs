//! Error types for the scaffolding planner

use thiserror::Error;

/// Result type for planning operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Scaffolding planner errors
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Unhandled GraphQL type kind: {0}")]
    UnhandledKind(String),

    #[error("Cannot plan field '{field}' on type '{type_name}': unrecognized shape '{declared}'")]
    MalformedField {
        type_name: String,
        field: String,
        declared: String,
    },

    #[error("Invalid schema document: {0}")]
    UpstreamValidation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Semver error: {0}")]
    Semver(#[from] semver::Error),
}
