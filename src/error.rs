//! Error types
//!
//! Mapping itself never fails; the only errors are those of the code renderer a caller
//! plugs in, which pass through untouched, and those of emitting the mapped tree.

use thiserror::Error;

/// Failures of the reference [SourceRenderer](crate::render::SourceRenderer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("comment at offset {offset} does not fall on a character boundary of {len}-byte example code")]
    CommentOutOfRange { offset: usize, len: usize },
}

/// Failures while serializing a mapped package.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
