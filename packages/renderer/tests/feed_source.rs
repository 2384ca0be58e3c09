#![cfg(feature = "async")]

use linkpage_model::{Block, BlockContent, RssContent};
use linkpage_renderer::{BlockComponent, FeedSource, FeedState, PlaceholderFeed, RenderContext};
use std::time::Duration;

fn feed_block() -> Block {
    Block::new(
        "rss",
        "Blog",
        BlockContent::Rss(RssContent {
            feed_url: "https://blog.test/feed.xml".to_string(),
            max_items: Some(1),
            show_description: Some(false),
        }),
    )
}

#[tokio::test]
async fn test_placeholder_feed_populates_component() {
    let mut component = BlockComponent::new(feed_block());
    let source = PlaceholderFeed {
        delay: Duration::from_millis(5),
    };

    let request = component.feed_request().unwrap();
    let view = component.render(&RenderContext::new(false)).unwrap();
    assert!(view.text_content().contains("Loading feed..."));

    let items = source.fetch(&request).await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(component.resolve_feed(request.generation, items));

    match component.state().feed() {
        Some(FeedState::Loaded { items }) => assert_eq!(items.len(), 1),
        other => panic!("Expected loaded feed, got {:?}", other),
    }

    let view = component.render(&RenderContext::new(false)).unwrap();
    assert!(view.text_content().contains("Sample feed article"));
    assert!(view.find(&|n| n.has_class("rss-description")).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_placeholder_feed_waits_default_delay() {
    let source = PlaceholderFeed::default();
    let mut component = BlockComponent::new(feed_block());
    let request = component.feed_request().unwrap();

    let started = tokio::time::Instant::now();
    source.fetch(&request).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1000));
}
