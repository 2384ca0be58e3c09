//! Error types for the editor

use linkpage_model::BlockKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Block kind '{kind}' has no field '{field}'")]
    UnknownField { kind: BlockKind, field: String },

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Unsupported block type: {0}")]
    UnsupportedKind(String),

    #[error("Block kind cannot change while editing an existing block")]
    KindLocked,
}
