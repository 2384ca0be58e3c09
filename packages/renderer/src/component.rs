//! Stateful block views.
//!
//! A [`BlockComponent`] pairs a block with the transient view state its
//! variant needs (video playing, broken images, feed entries). The state is
//! local to one component instance and is lost when the component is
//! recreated.

use crate::actions::{BlockActions, Event};
use crate::feed::{FeedItem, FeedRequest};
use crate::views;
use crate::vdom::VNode;
use linkpage_icons::{BuiltinIcons, IconCatalog};
use linkpage_model::{Block, BlockContent, BlockId};
use tracing::debug;

static BUILTIN_ICONS: BuiltinIcons = BuiltinIcons;

/// Inputs shared by every view in one render pass
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub is_editing: bool,
    pub icons: &'a dyn IconCatalog,
}

impl RenderContext<'static> {
    /// Context using the builtin icon catalog
    pub fn new(is_editing: bool) -> Self {
        Self {
            is_editing,
            icons: &BUILTIN_ICONS,
        }
    }
}

impl<'a> RenderContext<'a> {
    pub fn with_icons(is_editing: bool, icons: &'a dyn IconCatalog) -> Self {
        Self { is_editing, icons }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoState {
    pub playing: bool,
    pub thumbnail_failed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleState {
    pub image_hidden: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeedState {
    /// No request issued yet
    #[default]
    Idle,
    Loading { generation: u64 },
    Loaded { items: Vec<FeedItem> },
}

/// Per-variant transient view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Static,
    Video(VideoState),
    Article(ArticleState),
    Feed(FeedState),
}

impl ViewState {
    /// Fresh state for a payload
    pub fn initial(content: &BlockContent) -> Self {
        match content {
            BlockContent::YouTube(_) => ViewState::Video(VideoState::default()),
            BlockContent::Article(_) => ViewState::Article(ArticleState::default()),
            BlockContent::Rss(_) => ViewState::Feed(FeedState::default()),
            BlockContent::Link(_)
            | BlockContent::Spotify(_)
            | BlockContent::SoundCloud(_)
            | BlockContent::Iframe(_)
            | BlockContent::Text(_)
            | BlockContent::Unsupported(_) => ViewState::Static,
        }
    }

    pub fn video(&self) -> VideoState {
        match self {
            ViewState::Video(state) => state.clone(),
            _ => VideoState::default(),
        }
    }

    pub fn article(&self) -> ArticleState {
        match self {
            ViewState::Article(state) => state.clone(),
            _ => ArticleState::default(),
        }
    }

    pub fn feed(&self) -> Option<&FeedState> {
        match self {
            ViewState::Feed(state) => Some(state),
            _ => None,
        }
    }
}

/// A block together with its view state
#[derive(Debug, Clone)]
pub struct BlockComponent {
    block: Block,
    state: ViewState,
    next_generation: u64,
}

impl BlockComponent {
    pub fn new(block: Block) -> Self {
        let state = ViewState::initial(&block.content);
        Self {
            block,
            state,
            next_generation: 0,
        }
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn id(&self) -> &BlockId {
        &self.block.id
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Replace the block value, keeping view state where it still applies
    pub fn set_block(&mut self, block: Block) {
        if block.kind_str() != self.block.kind_str() {
            self.state = ViewState::initial(&block.content);
        } else if let (BlockContent::Rss(old), BlockContent::Rss(new)) =
            (&self.block.content, &block.content)
        {
            // Feed population reruns when the feed changes or the block reappears
            if old.feed_url != new.feed_url || (!self.block.visible && block.visible) {
                self.state = ViewState::Feed(FeedState::Idle);
            }
        }
        self.block = block;
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> Option<VNode> {
        views::render_block(&self.block, &self.state, ctx)
    }

    /// Event behind a click on the block's main area, if any
    pub fn primary_action(&self, is_editing: bool) -> Option<Event> {
        views::primary_action(&self.block, &self.state, is_editing)
    }

    /// Handle an event raised on this component's view.
    ///
    /// Only events the current view actually exposes are honored; anything
    /// else is ignored and `false` is returned.
    pub fn activate(
        &mut self,
        event: &Event,
        ctx: &RenderContext<'_>,
        actions: &mut dyn BlockActions,
    ) -> bool {
        let exposed = self
            .render(ctx)
            .map(|view| view.events().into_iter().any(|e| e == event))
            .unwrap_or(false);

        if !exposed {
            debug!(block_id = %self.block.id, event = event.name(), "Ignoring event not exposed by view");
            return false;
        }

        match event {
            Event::OpenUrl { url } => actions.open_url(url),
            Event::PlayVideo => {
                if let ViewState::Video(video) = &mut self.state {
                    video.playing = true;
                }
            }
            Event::ToggleVisibility => actions.toggle_visibility(&self.block.id),
            Event::Edit => actions.edit(&self.block),
            Event::Delete => actions.delete(&self.block.id),
            Event::MediaError => match &mut self.state {
                ViewState::Video(video) => video.thumbnail_failed = true,
                ViewState::Article(article) => article.image_hidden = true,
                ViewState::Static | ViewState::Feed(_) => {}
            },
        }

        true
    }

    /// Start populating a visible RSS block that has not been populated yet
    pub fn feed_request(&mut self) -> Option<FeedRequest> {
        let BlockContent::Rss(rss) = &self.block.content else {
            return None;
        };
        if !self.block.visible || self.state != ViewState::Feed(FeedState::Idle) {
            return None;
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        self.state = ViewState::Feed(FeedState::Loading { generation });

        Some(FeedRequest {
            block_id: self.block.id.clone(),
            generation,
            feed_url: rss.feed_url.clone(),
            max_items: rss.max_items(),
        })
    }

    /// Apply feed entries; stale or unwanted results are discarded
    pub fn resolve_feed(&mut self, generation: u64, items: Vec<FeedItem>) -> bool {
        let BlockContent::Rss(rss) = &self.block.content else {
            return false;
        };

        let current = matches!(
            self.state,
            ViewState::Feed(FeedState::Loading { generation: g }) if g == generation
        );
        if !current || !self.block.visible {
            debug!(block_id = %self.block.id, generation, "Discarding stale feed result");
            return false;
        }

        let items = items.into_iter().take(rss.max_items() as usize).collect();
        self.state = ViewState::Feed(FeedState::Loaded { items });
        true
    }

    /// Abandon a failed request so the next refresh issues a new one
    pub fn fail_feed(&mut self, generation: u64) -> bool {
        let current = matches!(
            self.state,
            ViewState::Feed(FeedState::Loading { generation: g }) if g == generation
        );
        if current {
            self.state = ViewState::Feed(FeedState::Idle);
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ActionCall, RecordedActions};
    use crate::feed::placeholder_items_now;
    use linkpage_model::{ArticleContent, LinkContent, RssContent, YouTubeContent};

    fn rss_block(max_items: Option<u32>) -> Block {
        Block::new(
            "feed",
            "Blog",
            BlockContent::Rss(RssContent {
                feed_url: "https://example.com/feed.xml".to_string(),
                max_items,
                show_description: None,
            }),
        )
    }

    #[test]
    fn test_open_url_only_outside_edit_mode() {
        let mut component = BlockComponent::new(Block::new(
            "l",
            "Site",
            BlockContent::Link(LinkContent {
                url: "https://x.test".to_string(),
                icon: "globe".to_string(),
                description: None,
            }),
        ));
        let event = Event::open("https://x.test");
        let mut actions = RecordedActions::new();

        assert!(!component.activate(&event, &RenderContext::new(true), &mut actions));
        assert!(actions.is_empty());

        assert!(component.activate(&event, &RenderContext::new(false), &mut actions));
        assert_eq!(actions.calls, vec![ActionCall::OpenUrl("https://x.test".to_string())]);
    }

    #[test]
    fn test_video_play_toggle_is_local() {
        let block = Block::new(
            "v",
            "Video",
            BlockContent::YouTube(YouTubeContent {
                video_id: "abc".to_string(),
                autoplay: None,
            }),
        );
        let mut component = BlockComponent::new(block.clone());

        assert!(component.activate(&Event::PlayVideo, &RenderContext::new(false), &mut RecordedActions::new()));
        assert!(component.state().video().playing);

        // A recreated component starts over
        let fresh = BlockComponent::new(block);
        assert!(!fresh.state().video().playing);
    }

    #[test]
    fn test_article_image_hidden_after_error() {
        let mut component = BlockComponent::new(Block::new(
            "a",
            "Post",
            BlockContent::Article(ArticleContent {
                url: "https://blog.test/post".to_string(),
                description: None,
                image: Some("https://blog.test/cover.png".to_string()),
                domain: None,
            }),
        ));
        let ctx = RenderContext::new(false);

        assert!(component.activate(&Event::MediaError, &ctx, &mut RecordedActions::new()));
        assert!(component.state().article().image_hidden);

        let view = component.render(&ctx).unwrap();
        assert!(view.find(&|n| n.tag() == Some("img")).is_none());
    }

    #[test]
    fn test_feed_request_issued_once() {
        let mut component = BlockComponent::new(rss_block(None));

        let request = component.feed_request().unwrap();
        assert_eq!(request.generation, 1);
        assert_eq!(request.max_items, 5);
        assert!(component.feed_request().is_none());
    }

    #[test]
    fn test_feed_result_truncated_to_max_items() {
        let mut component = BlockComponent::new(rss_block(Some(1)));
        let request = component.feed_request().unwrap();

        assert!(component.resolve_feed(request.generation, placeholder_items_now()));
        match component.state().feed() {
            Some(FeedState::Loaded { items }) => assert_eq!(items.len(), 1),
            other => panic!("Expected loaded feed, got {:?}", other),
        }
    }

    #[test]
    fn test_feed_result_discarded_when_hidden() {
        let mut component = BlockComponent::new(rss_block(None));
        let request = component.feed_request().unwrap();

        let hidden = component.block().clone().with_visible(false);
        component.set_block(hidden);

        assert!(!component.resolve_feed(request.generation, placeholder_items_now()));
    }

    #[test]
    fn test_failed_feed_request_can_be_reissued() {
        let mut component = BlockComponent::new(rss_block(None));
        let first = component.feed_request().unwrap();
        assert!(component.feed_request().is_none());

        assert!(!component.fail_feed(first.generation + 7));
        assert!(component.fail_feed(first.generation));
        assert_eq!(component.state().feed(), Some(&FeedState::Idle));

        let retry = component.feed_request().unwrap();
        assert_eq!(retry.generation, first.generation + 1);
        assert!(!component.resolve_feed(first.generation, placeholder_items_now()));
    }

    #[test]
    fn test_feed_reloads_when_url_changes() {
        let mut component = BlockComponent::new(rss_block(None));
        let first = component.feed_request().unwrap();

        let mut block = component.block().clone();
        if let BlockContent::Rss(rss) = &mut block.content {
            rss.feed_url = "https://other.test/rss".to_string();
        }
        component.set_block(block);

        let second = component.feed_request().unwrap();
        assert_eq!(second.generation, first.generation + 1);
        assert!(!component.resolve_feed(first.generation, placeholder_items_now()));
        assert!(component.resolve_feed(second.generation, placeholder_items_now()));
    }
}
