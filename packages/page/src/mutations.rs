//! # Page Mutations
//!
//! Every change to a page is expressible as a serializable
//! [`PageMutation`], so hosts can queue, log or replay them.
//!
//! ## Semantics
//!
//! - Targets are looked up by block id; a missing target is a no-op, never
//!   an error.
//! - `AddBlock` appends: the block's order becomes the collection size.
//! - `UpdateBlock` replaces the stored block wholesale but never changes
//!   its kind.

use linkpage_model::{Block, BlockId, Profile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PageMutation {
    AddBlock { block: Block },

    UpdateBlock { block: Block },

    DeleteBlock { id: BlockId },

    ToggleVisibility { id: BlockId },

    /// Single-field order change
    SetOrder { id: BlockId, order: i64 },

    UpdateProfile { profile: Profile },

    SetEditing { editing: bool },
}

impl PageMutation {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            PageMutation::AddBlock { .. } => "add-block",
            PageMutation::UpdateBlock { .. } => "update-block",
            PageMutation::DeleteBlock { .. } => "delete-block",
            PageMutation::ToggleVisibility { .. } => "toggle-visibility",
            PageMutation::SetOrder { .. } => "set-order",
            PageMutation::UpdateProfile { .. } => "update-profile",
            PageMutation::SetEditing { .. } => "set-editing",
        }
    }
}

/// Outcome of applying a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResult {
    /// Page version after the mutation
    pub version: u64,

    /// Whether the page actually changed
    pub changed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_wire_form() {
        let mutation = PageMutation::SetOrder {
            id: BlockId::from("b1"),
            order: 3,
        };

        let json = serde_json::to_value(&mutation).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "setOrder", "id": "b1", "order": 3 }));

        let parsed: PageMutation = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, mutation);
    }

    #[test]
    fn test_add_block_carries_tagged_block() {
        let json = r#"{
            "type": "addBlock",
            "block": { "id": "n", "kind": "text", "title": "Note", "content": "hi" }
        }"#;

        let parsed: PageMutation = serde_json::from_str(json).unwrap();
        match parsed {
            PageMutation::AddBlock { block } => {
                assert_eq!(block.kind_str(), "text");
                assert!(block.visible);
            }
            other => panic!("Expected AddBlock, got {:?}", other),
        }
    }
}
