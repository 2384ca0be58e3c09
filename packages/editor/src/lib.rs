//! # Linkpage Editor
//!
//! Create and edit forms for page blocks.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ page: "add block" / block edit control      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: BlockEditor session                 │
//! │  - draft seeded from a block or blank link  │
//! │  - per-kind field sets (FieldSet)           │
//! │  - save validates the title                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ page: add_block / update_block              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Drafts are private**: nothing is committed until `save` succeeds
//! 2. **Closed kinds**: a draft only holds one of the eight supported payloads
//! 3. **Fields by kind**: each payload accepts exactly its own field names
//!
//! ## Usage
//!
//! ```rust,ignore
//! use linkpage_editor::BlockEditor;
//!
//! let mut editor = BlockEditor::create();
//! editor.set_field("kind", "youtube")?;
//! editor.set_field("title", "Launch video")?;
//! editor.set_field("videoId", "dQw4w9WgXcQ")?;
//!
//! let block = editor.save()?;
//! page.add_block(block);
//! ```

mod draft;
mod errors;
mod fields;
mod session;

pub use draft::{field_names, ContentDraft, FieldSet, DEFAULT_LINK_ICON};
pub use errors::EditorError;
pub use fields::{FieldInput, FieldSpec, FieldValue, SelectOption};
pub use session::{BlockEditor, Draft, EditorMode};
