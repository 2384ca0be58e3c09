//! # Linkpage Renderer
//!
//! Turns blocks into virtual DOM views and views into HTML.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Block (kind + payload)               │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: exhaustive dispatch on kind       │
//! │  - one view per kind, shared chrome         │
//! │  - per-component view state                 │
//! │  - events routed to BlockActions            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ html: VNode → markup                        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use linkpage_renderer::{BlockComponent, RenderContext, RecordedActions};
//!
//! let mut component = BlockComponent::new(block);
//! let view = component.render(&RenderContext::new(false));
//!
//! if let Some(event) = component.primary_action(false) {
//!     component.activate(&event, &RenderContext::new(false), &mut actions);
//! }
//! ```

mod actions;
mod component;
mod feed;
mod html;
mod vdom;
mod views;

pub use actions::{ActionCall, BlockActions, Event, NoActions, RecordedActions};
pub use component::{
    ArticleState, BlockComponent, FeedState, RenderContext, VideoState, ViewState,
};
pub use feed::{
    placeholder_items, placeholder_items_now, FeedError, FeedItem, FeedRequest,
    PLACEHOLDER_DELAY_MS,
};
pub use html::{escape_html, to_html, to_html_document, HtmlOptions};
pub use vdom::VNode;
pub use views::{fallback_thumbnail_url, thumbnail_url, youtube_embed_url, IFRAME_SANDBOX};

#[cfg(feature = "async")]
pub use feed::{FeedSource, PlaceholderFeed};

use linkpage_model::Block;
use tracing::instrument;

/// Render a block with fresh view state.
///
/// Returns `None` when the block is hidden and the page is not in edit
/// mode. Unknown kinds render a placeholder instead of failing.
#[instrument(level = "trace", skip(block), fields(block_id = %block.id, kind = block.kind_str()))]
pub fn render(block: &Block, is_editing: bool) -> Option<VNode> {
    let state = ViewState::initial(&block.content);
    views::render_block(block, &state, &RenderContext::new(is_editing))
}

/// Render a block and dispatch a click on its main area, if it has one.
///
/// Returns the event that was dispatched.
pub fn click(block: &Block, is_editing: bool, actions: &mut dyn BlockActions) -> Option<Event> {
    let mut component = BlockComponent::new(block.clone());
    let event = component.primary_action(is_editing)?;
    component
        .activate(&event, &RenderContext::new(is_editing), actions)
        .then_some(event)
}
