//! # Page Session
//!
//! A [`PageSession`] is one live page instance: the controller, a stateful
//! component per block, the open editor (if any) and the log of URLs the
//! user opened. Block events are routed back into controller operations.
//!
//! ## Event flow
//!
//! ```text
//! dispatch(id, event)
//!   → BlockComponent::activate   (view state, records callbacks)
//!   → RecordedActions            (edit / delete / toggle / open)
//!   → Page operations            (components resynced afterwards)
//! ```

use crate::mutations::{MutationResult, PageMutation};
use crate::page::Page;
use crate::view;
use linkpage_editor::{BlockEditor, EditorError, EditorMode};
use linkpage_model::{Block, BlockId, Profile};
use linkpage_renderer::{
    to_html_document, ActionCall, BlockComponent, Event, FeedItem, FeedRequest, HtmlOptions,
    RecordedActions, RenderContext, VNode,
};
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),

    #[error("No block editor is open")]
    NoEditorOpen,

    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// One live page instance
#[derive(Debug)]
pub struct PageSession {
    page: Page,
    components: Vec<BlockComponent>,
    editor: Option<BlockEditor>,
    navigation: Vec<String>,
}

impl Default for PageSession {
    fn default() -> Self {
        Self::new(Page::sample())
    }
}

impl PageSession {
    pub fn new(page: Page) -> Self {
        let mut session = Self {
            page,
            components: Vec::new(),
            editor: None,
            navigation: Vec::new(),
        };
        session.sync_components();
        session
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn into_page(self) -> Page {
        self.page
    }

    pub fn is_editing(&self) -> bool {
        self.page.is_editing()
    }

    /// URLs opened so far, oldest first
    pub fn navigation(&self) -> &[String] {
        &self.navigation
    }

    pub fn component(&self, id: &BlockId) -> Option<&BlockComponent> {
        self.components.iter().find(|component| component.id() == id)
    }

    fn component_mut(&mut self, id: &BlockId) -> Option<&mut BlockComponent> {
        self.components.iter_mut().find(|component| component.id() == id)
    }

    /// Rebuild the component list from the page, keeping state of surviving blocks
    fn sync_components(&mut self) {
        let mut previous = std::mem::take(&mut self.components);

        self.components = self
            .page
            .blocks()
            .iter()
            .map(|block| match previous.iter().position(|c| c.id() == &block.id) {
                Some(index) => {
                    let mut component = previous.swap_remove(index);
                    component.set_block(block.clone());
                    component
                }
                None => BlockComponent::new(block.clone()),
            })
            .collect();
    }

    /// Apply a mutation and resync components
    pub fn apply(&mut self, mutation: PageMutation) -> MutationResult {
        let result = self.page.apply(mutation);
        if result.changed {
            self.sync_components();
        }
        result
    }

    pub fn set_editing(&mut self, editing: bool) -> MutationResult {
        self.apply(PageMutation::SetEditing { editing })
    }

    pub fn toggle_editing(&mut self) -> MutationResult {
        self.set_editing(!self.is_editing())
    }

    pub fn add_block(&mut self, block: Block) -> MutationResult {
        self.apply(PageMutation::AddBlock { block })
    }

    pub fn update_block(&mut self, block: Block) -> MutationResult {
        self.apply(PageMutation::UpdateBlock { block })
    }

    pub fn delete_block(&mut self, id: &BlockId) -> MutationResult {
        self.apply(PageMutation::DeleteBlock { id: id.clone() })
    }

    pub fn toggle_visibility(&mut self, id: &BlockId) -> MutationResult {
        self.apply(PageMutation::ToggleVisibility { id: id.clone() })
    }

    pub fn set_order(&mut self, id: &BlockId, order: i64) -> MutationResult {
        self.apply(PageMutation::SetOrder {
            id: id.clone(),
            order,
        })
    }

    pub fn update_profile(&mut self, profile: Profile) -> MutationResult {
        self.apply(PageMutation::UpdateProfile { profile })
    }

    /// Profile name input
    pub fn set_profile_name(&mut self, name: impl Into<String>) -> MutationResult {
        let profile = Profile {
            name: name.into(),
            ..self.page.profile().clone()
        };
        self.update_profile(profile)
    }

    /// Profile bio input
    pub fn set_profile_bio(&mut self, bio: impl Into<String>) -> MutationResult {
        let profile = Profile {
            bio: bio.into(),
            ..self.page.profile().clone()
        };
        self.update_profile(profile)
    }

    // ---- Editor ----

    pub fn editor(&self) -> Option<&BlockEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut BlockEditor> {
        self.editor.as_mut()
    }

    /// Open the creation form ("add block"), replacing any open form
    pub fn open_create(&mut self) -> &mut BlockEditor {
        debug!("Opening block creation form");
        self.editor.insert(BlockEditor::create())
    }

    /// Open the edit form for a stored block
    pub fn open_edit(&mut self, id: &BlockId) -> Result<&mut BlockEditor, SessionError> {
        let block = self
            .page
            .block(id)
            .ok_or_else(|| SessionError::BlockNotFound(id.clone()))?;
        let editor = BlockEditor::edit(block)?;

        debug!(block_id = %id, "Opening block edit form");
        Ok(self.editor.insert(editor))
    }

    /// Save the open form into the page.
    ///
    /// On a validation error the form stays open with its draft intact.
    #[instrument(level = "debug", skip(self))]
    pub fn save_editor(&mut self) -> Result<MutationResult, SessionError> {
        let editor = self.editor.as_ref().ok_or(SessionError::NoEditorOpen)?;
        let block = editor.save()?;
        let mode = editor.mode();

        self.editor = None;
        Ok(match mode {
            EditorMode::Create => self.add_block(block),
            EditorMode::Edit => self.update_block(block),
        })
    }

    /// Close the open form without saving
    pub fn cancel_editor(&mut self) {
        if let Some(editor) = self.editor.take() {
            editor.cancel();
        }
    }

    // ---- Events ----

    fn context(&self) -> RenderContext<'static> {
        RenderContext::new(self.is_editing())
    }

    /// Deliver an event raised on a block's view.
    ///
    /// Returns false when the block is unknown or its view does not expose
    /// the event in the current mode.
    #[instrument(level = "debug", skip(self), fields(event = event.name()))]
    pub fn dispatch(&mut self, id: &BlockId, event: &Event) -> bool {
        let ctx = self.context();
        let mut actions = RecordedActions::new();

        let Some(component) = self.component_mut(id) else {
            debug!(block_id = %id, "Event for unknown block");
            return false;
        };
        if !component.activate(event, &ctx, &mut actions) {
            return false;
        }

        for call in actions.drain() {
            self.perform(call);
        }
        true
    }

    /// Click a block's main area
    pub fn click(&mut self, id: &BlockId) -> bool {
        let is_editing = self.is_editing();
        let Some(event) = self
            .component(id)
            .and_then(|component| component.primary_action(is_editing))
        else {
            return false;
        };
        self.dispatch(id, &event)
    }

    fn perform(&mut self, call: ActionCall) {
        match call {
            ActionCall::Edit(block) => {
                if let Err(err) = self.open_edit(&block.id) {
                    debug!(block_id = %block.id, error = %err, "Cannot edit block");
                }
            }
            ActionCall::Delete(id) => {
                self.delete_block(&id);
            }
            ActionCall::ToggleVisibility(id) => {
                self.toggle_visibility(&id);
            }
            ActionCall::OpenUrl(url) => {
                info!(url = %url, "Opening URL");
                self.navigation.push(url);
            }
        }
    }

    // ---- Feeds ----

    /// Issue requests for visible feed blocks that have not been populated
    pub fn feed_requests(&mut self) -> Vec<FeedRequest> {
        self.components
            .iter_mut()
            .filter_map(|component| component.feed_request())
            .collect()
    }

    /// Hand feed entries back to the block that asked for them.
    ///
    /// Results for deleted or hidden blocks and for superseded requests are
    /// dropped; returns whether they were applied.
    pub fn resolve_feed(&mut self, request: &FeedRequest, items: Vec<FeedItem>) -> bool {
        match self.component_mut(&request.block_id) {
            Some(component) => component.resolve_feed(request.generation, items),
            None => {
                debug!(block_id = %request.block_id, "Feed result for removed block");
                false
            }
        }
    }

    /// Report a failed request; the block asks again on the next refresh
    pub fn fail_feed(&mut self, request: &FeedRequest) -> bool {
        self.component_mut(&request.block_id)
            .is_some_and(|component| component.fail_feed(request.generation))
    }

    /// Populate every pending feed through `source`; returns how many applied
    #[cfg(feature = "async")]
    pub async fn refresh_feeds<S: linkpage_renderer::FeedSource>(&mut self, source: &S) -> usize {
        let mut applied = 0;
        for request in self.feed_requests() {
            match source.fetch(&request).await {
                Ok(items) => {
                    if self.resolve_feed(&request, items) {
                        applied += 1;
                    }
                }
                Err(err) => {
                    tracing::warn!(feed_url = %request.feed_url, error = %err, "Feed fetch failed");
                    self.fail_feed(&request);
                }
            }
        }
        applied
    }

    // ---- Rendering ----

    /// Render the whole page to a virtual DOM
    pub fn render(&self) -> VNode {
        let ctx = self.context();
        let is_editing = ctx.is_editing;

        let blocks = self
            .page
            .visible_blocks(is_editing)
            .into_iter()
            .filter_map(|block| self.component(&block.id))
            .filter_map(|component| component.render(&ctx))
            .enumerate()
            .map(|(index, node)| view::block_slot(index, node));

        let list = VNode::element("div")
            .with_class("blocks")
            .with_children(blocks)
            .with_optional_child(is_editing.then(view::add_block_card));

        let root = VNode::element("main")
            .with_class("linkpage")
            .with_child(view::toolbar(is_editing))
            .with_child(view::profile_card(self.page.profile(), is_editing))
            .with_child(list)
            .with_child(view::footer());

        if is_editing {
            root.with_class("editing")
        } else {
            root
        }
    }

    /// Render the page as a complete HTML document
    pub fn render_html(&self, options: &HtmlOptions) -> String {
        to_html_document(&self.page.profile().name, &[self.render()], options)
    }
}
