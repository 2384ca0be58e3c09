//! # Editor Sessions
//!
//! A [`BlockEditor`] is one open create or edit form. It owns a draft that
//! may be incomplete; nothing reaches the page until [`BlockEditor::save`]
//! produces a finished [`Block`].

use crate::draft::ContentDraft;
use crate::errors::EditorError;
use crate::fields::{FieldInput, FieldSpec, FieldValue, SelectOption};
use linkpage_icons::{BuiltinIcons, IconCatalog};
use linkpage_model::{Block, BlockId, BlockKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorMode {
    /// New block; the kind may still change
    Create,
    /// Existing block; the kind is fixed
    Edit,
}

/// In-progress block value
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub title: String,
    pub visible: bool,
    pub order: i64,
    pub content: ContentDraft,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            visible: true,
            order: 0,
            content: ContentDraft::empty(BlockKind::Link),
        }
    }
}

impl Draft {
    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }
}

/// One open create or edit form
#[derive(Debug, Clone)]
pub struct BlockEditor {
    mode: EditorMode,
    /// Block being edited, in edit mode
    original: Option<Block>,
    draft: Draft,
}

impl BlockEditor {
    /// Open a creation form with a blank link draft
    pub fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            original: None,
            draft: Draft::default(),
        }
    }

    /// Open an edit form seeded from an existing block
    pub fn edit(block: &Block) -> Result<Self, EditorError> {
        let content = ContentDraft::from_content(&block.content)?;

        Ok(Self {
            mode: EditorMode::Edit,
            original: Some(block.clone()),
            draft: Draft {
                title: block.title.clone(),
                visible: block.visible,
                order: block.order,
                content,
            },
        })
    }

    /// Create when `existing` is `None`, edit otherwise
    pub fn open(existing: Option<&Block>) -> Result<Self, EditorError> {
        match existing {
            Some(block) => Self::edit(block),
            None => Ok(Self::create()),
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn kind(&self) -> BlockKind {
        self.draft.kind()
    }

    /// Id of the block being edited
    pub fn target(&self) -> Option<&BlockId> {
        self.original.as_ref().map(|block| &block.id)
    }

    /// Switch the draft's kind.
    ///
    /// Only allowed while creating. Switching to a different kind replaces
    /// the payload with that kind's blank draft; common fields are kept.
    pub fn set_kind(&mut self, kind: BlockKind) -> Result<(), EditorError> {
        if self.mode == EditorMode::Edit {
            return if kind == self.kind() {
                Ok(())
            } else {
                Err(EditorError::KindLocked)
            };
        }

        if kind != self.kind() {
            debug!(from = %self.kind(), to = %kind, "Switching draft kind");
            self.draft.content = ContentDraft::empty(kind);
        }
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.draft.visible = visible;
    }

    /// Set any form field by name, common or kind-specific
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), EditorError> {
        let value = value.into();
        match name {
            "kind" => {
                let kind = value
                    .as_text()
                    .parse::<BlockKind>()
                    .map_err(|err| EditorError::InvalidValue {
                        field: name.to_string(),
                        reason: err.to_string(),
                    })?;
                self.set_kind(kind)
            }
            "title" => {
                self.set_title(value.as_text());
                Ok(())
            }
            "visible" => {
                let visible = match value {
                    FieldValue::Flag(flag) => flag,
                    other => matches!(other.as_text().trim(), "true" | "on" | "yes" | "1"),
                };
                self.set_visible(visible);
                Ok(())
            }
            _ => self.draft.content.set_field(name, value),
        }
    }

    /// Form fields using the builtin icon catalog
    pub fn fields(&self) -> Vec<FieldSpec> {
        self.fields_with_icons(&BuiltinIcons)
    }

    /// Form fields: kind selector (create only), title, payload fields, visibility
    pub fn fields_with_icons(&self, icons: &dyn IconCatalog) -> Vec<FieldSpec> {
        let mut fields = Vec::new();

        if self.mode == EditorMode::Create {
            let options = BlockKind::ALL
                .iter()
                .map(|kind| SelectOption::new(kind.as_str(), kind.label()))
                .collect();
            fields.push(FieldSpec::new(
                "kind",
                "Content type",
                FieldInput::Select { options },
                FieldValue::Text(self.kind().as_str().to_string()),
            ));
        }

        fields.push(
            FieldSpec::new(
                "title",
                "Title",
                FieldInput::Text,
                FieldValue::Text(self.draft.title.clone()),
            )
            .with_placeholder("Block title"),
        );
        fields.extend(self.draft.content.fields(icons));
        fields.push(FieldSpec::new(
            "visible",
            "Visible",
            FieldInput::Checkbox,
            FieldValue::Flag(self.draft.visible),
        ));

        fields
    }

    /// Build the finished block.
    ///
    /// Fails with [`EditorError::EmptyTitle`] when the title is empty, leaving
    /// the session untouched so the user can correct it. Any non-empty title,
    /// whitespace included, is accepted.
    pub fn save(&self) -> Result<Block, EditorError> {
        if self.draft.title.is_empty() {
            debug!(mode = ?self.mode, "Rejecting save without a title");
            return Err(EditorError::EmptyTitle);
        }

        let (id, order) = match &self.original {
            Some(original) => (original.id.clone(), original.order),
            None => (BlockId::generate(), self.draft.order),
        };

        let block = Block {
            id,
            title: self.draft.title.clone(),
            visible: self.draft.visible,
            order,
            content: self.draft.content.to_content(),
        };

        info!(block_id = %block.id, kind = %self.kind(), mode = ?self.mode, "Saved block draft");
        Ok(block)
    }

    /// Close the form without committing anything
    pub fn cancel(self) {
        debug!(mode = ?self.mode, "Discarded block draft");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkpage_model::{BlockContent, LinkContent, TextContent};

    #[test]
    fn test_create_starts_with_blank_link() {
        let editor = BlockEditor::create();
        assert_eq!(editor.mode(), EditorMode::Create);
        assert_eq!(editor.kind(), BlockKind::Link);
        assert!(editor.draft().visible);
        assert_eq!(editor.draft().order, 0);
        assert_eq!(editor.draft().title, "");
    }

    #[test]
    fn test_empty_title_keeps_session_open() {
        let mut editor = BlockEditor::create();
        editor.set_field("url", "https://x.test").unwrap();

        assert_eq!(editor.save(), Err(EditorError::EmptyTitle));
        assert_eq!(editor.save(), Err(EditorError::EmptyTitle));

        editor.set_title("Site");
        let block = editor.save().unwrap();
        assert_eq!(block.title, "Site");
    }

    #[test]
    fn test_whitespace_title_is_not_empty() {
        let mut editor = BlockEditor::create();
        editor.set_field("url", "https://x.test").unwrap();
        editor.set_title("   ");

        let block = editor.save().unwrap();
        assert_eq!(block.title, "   ");
    }

    #[test]
    fn test_switching_kind_swaps_fields() {
        let mut editor = BlockEditor::create();
        editor.set_field("url", "https://x.test").unwrap();
        editor.set_title("Keep me");

        editor.set_field("kind", "text").unwrap();
        assert_eq!(editor.kind(), BlockKind::Text);
        assert_eq!(editor.draft().title, "Keep me");

        let names: Vec<_> = editor.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["kind", "title", "content", "style", "visible"]);
        assert!(editor.set_field("url", "https://x.test").is_err());
    }

    #[test]
    fn test_edit_preserves_id_and_order() {
        let original = Block::new(
            "block-7",
            "Note",
            BlockContent::Text(TextContent {
                content: "hi".to_string(),
                style: None,
            }),
        )
        .with_order(4);

        let mut editor = BlockEditor::edit(&original).unwrap();
        editor.set_field("content", "hello").unwrap();
        let saved = editor.save().unwrap();

        assert_eq!(saved.id, original.id);
        assert_eq!(saved.order, 4);
        match saved.content {
            BlockContent::Text(text) => assert_eq!(text.content, "hello"),
            other => panic!("Expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_locks_kind() {
        let original = Block::new(
            "l",
            "Site",
            BlockContent::Link(LinkContent {
                url: "https://x.test".to_string(),
                icon: "globe".to_string(),
                description: None,
            }),
        );
        let mut editor = BlockEditor::edit(&original).unwrap();

        assert_eq!(editor.set_kind(BlockKind::Text), Err(EditorError::KindLocked));
        assert!(editor.set_kind(BlockKind::Link).is_ok());
        assert!(editor.fields().iter().all(|f| f.name != "kind"));
    }

    #[test]
    fn test_create_assigns_fresh_ids() {
        let mut editor = BlockEditor::create();
        editor.set_title("A");

        let first = editor.save().unwrap();
        let second = editor.save().unwrap();
        assert_ne!(first.id, second.id);
    }
}
