//! # Page Controller
//!
//! A [`Page`] owns the profile and the canonical block collection. All
//! changes go through its operations (or [`Page::apply`]); operations on a
//! missing block id are defined no-ops.
//!
//! Storage order is insertion order. Display order is `order` ascending,
//! with ties kept in insertion order.

use crate::mutations::{MutationResult, PageMutation};
use linkpage_model::{
    Block, BlockContent, BlockId, LinkContent, Profile, TextContent, TextStyle, YouTubeContent,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PageSnapshot")]
pub struct Page {
    profile: Profile,
    blocks: Vec<Block>,

    /// Page-wide edit mode
    #[serde(skip)]
    editing: bool,

    /// Increments on every change
    #[serde(skip)]
    version: u64,
}

/// Stored form of a page, before ids are checked
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PageSnapshot {
    profile: Profile,
    blocks: Vec<Block>,
}

impl From<PageSnapshot> for Page {
    fn from(snapshot: PageSnapshot) -> Self {
        Page::new(snapshot.profile, snapshot.blocks)
    }
}

impl Page {
    /// Page with the given profile and blocks in storage order.
    ///
    /// Block ids are unique within a page: a block repeating an earlier id
    /// is dropped with a warning.
    pub fn new(profile: Profile, blocks: Vec<Block>) -> Self {
        let mut unique: Vec<Block> = Vec::with_capacity(blocks.len());
        for block in blocks {
            if unique.iter().any(|kept| kept.id == block.id) {
                warn!(block_id = %block.id, title = %block.title, "Dropping block with duplicate id");
                continue;
            }
            unique.push(block);
        }

        Self {
            profile,
            blocks: unique,
            editing: false,
            version: 0,
        }
    }

    /// Page with a default profile and no blocks
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starter page: a link, a video and a highlighted note
    pub fn sample() -> Self {
        let blocks = vec![
            Block::new(
                "1",
                "My Portfolio",
                BlockContent::Link(LinkContent {
                    url: "https://example.com".to_string(),
                    icon: "globe".to_string(),
                    description: Some("Discover my projects".to_string()),
                }),
            )
            .with_order(0),
            Block::new(
                "2",
                "My latest video",
                BlockContent::YouTube(YouTubeContent {
                    video_id: "dQw4w9WgXcQ".to_string(),
                    autoplay: None,
                }),
            )
            .with_order(1),
            Block::new(
                "3",
                "Important note",
                BlockContent::Text(TextContent {
                    content: "Welcome to my page! You'll find all my favorite links and content here. Feel free to explore.".to_string(),
                    style: Some(TextStyle::Highlight),
                }),
            )
            .with_order(2),
        ];

        Self::new(Profile::default(), blocks)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Blocks in storage (insertion) order.
    ///
    /// This is not display order; use [`Page::visible_blocks`] for blocks
    /// sorted by `order`.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| &block.id == id)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Blocks to display: visible ones only unless editing, sorted by order
    pub fn visible_blocks(&self, edit_mode: bool) -> Vec<&Block> {
        let mut blocks: Vec<&Block> = self
            .blocks
            .iter()
            .filter(|block| block.visible || edit_mode)
            .collect();
        // sort_by_key is stable
        blocks.sort_by_key(|block| block.order);
        blocks
    }

    fn touch(&mut self, changed: bool) -> bool {
        if changed {
            self.version += 1;
        }
        changed
    }

    fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| &block.id == id)
    }

    /// Append a block; its order becomes the current collection size
    pub fn add_block(&mut self, mut block: Block) -> bool {
        if self.position(&block.id).is_some() {
            warn!(block_id = %block.id, "Block id already present, not adding");
            return false;
        }

        block.order = self.blocks.len() as i64;
        info!(block_id = %block.id, kind = block.kind_str(), order = block.order, "Added block");
        self.blocks.push(block);
        self.touch(true)
    }

    /// Replace the block with the same id; never changes its kind
    pub fn update_block(&mut self, block: Block) -> bool {
        let Some(index) = self.position(&block.id) else {
            debug!(block_id = %block.id, "Update target not found");
            return false;
        };

        let stored = &mut self.blocks[index];
        if stored.kind_str() != block.kind_str() {
            warn!(
                block_id = %block.id,
                stored = stored.kind_str(),
                incoming = block.kind_str(),
                "Ignoring update that would change block kind"
            );
            return false;
        }

        let changed = *stored != block;
        *stored = block;
        self.touch(changed)
    }

    pub fn delete_block(&mut self, id: &BlockId) -> bool {
        let Some(index) = self.position(id) else {
            debug!(block_id = %id, "Delete target not found");
            return false;
        };

        self.blocks.remove(index);
        info!(block_id = %id, "Deleted block");
        self.touch(true)
    }

    pub fn toggle_visibility(&mut self, id: &BlockId) -> bool {
        let Some(index) = self.position(id) else {
            debug!(block_id = %id, "Visibility target not found");
            return false;
        };

        let block = &mut self.blocks[index];
        block.visible = !block.visible;
        debug!(block_id = %id, visible = block.visible, "Toggled visibility");
        self.touch(true)
    }

    pub fn set_order(&mut self, id: &BlockId, order: i64) -> bool {
        let Some(index) = self.position(id) else {
            debug!(block_id = %id, "Order target not found");
            return false;
        };

        let block = &mut self.blocks[index];
        let changed = block.order != order;
        block.order = order;
        self.touch(changed)
    }

    pub fn update_profile(&mut self, profile: Profile) -> bool {
        let changed = self.profile != profile;
        self.profile = profile;
        self.touch(changed)
    }

    pub fn set_editing(&mut self, editing: bool) -> bool {
        let changed = self.editing != editing;
        self.editing = editing;
        self.touch(changed)
    }

    /// Apply a mutation
    #[instrument(level = "debug", skip(self, mutation), fields(mutation = mutation.name()))]
    pub fn apply(&mut self, mutation: PageMutation) -> MutationResult {
        let changed = match mutation {
            PageMutation::AddBlock { block } => self.add_block(block),
            PageMutation::UpdateBlock { block } => self.update_block(block),
            PageMutation::DeleteBlock { id } => self.delete_block(&id),
            PageMutation::ToggleVisibility { id } => self.toggle_visibility(&id),
            PageMutation::SetOrder { id, order } => self.set_order(&id, order),
            PageMutation::UpdateProfile { profile } => self.update_profile(profile),
            PageMutation::SetEditing { editing } => self.set_editing(editing),
        };

        MutationResult {
            version: self.version,
            changed,
        }
    }
}
