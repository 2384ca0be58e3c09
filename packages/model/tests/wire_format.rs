//! Loading and saving blocks in their JSON wire form

use linkpage_model::{Block, BlockContent, BlockKind, RssContent, YouTubeContent};

#[test]
fn test_load_mixed_collection() {
    let json = r#"[
        { "id": "1", "kind": "link", "title": "Portfolio", "url": "https://example.com",
          "icon": "globe", "description": "My projects", "order": 0 },
        { "id": "2", "kind": "youtube", "title": "Latest video", "videoId": "dQw4w9WgXcQ", "order": 1 },
        { "id": "3", "kind": "rss", "title": "Blog", "feedUrl": "https://example.com/feed.xml",
          "maxItems": 3, "showDescription": true, "visible": false, "order": 2 }
    ]"#;

    let blocks: Vec<Block> = serde_json::from_str(json).unwrap();
    assert_eq!(blocks.len(), 3);

    assert_eq!(blocks[0].kind(), Some(BlockKind::Link));
    assert_eq!(
        blocks[1].content,
        BlockContent::YouTube(YouTubeContent {
            video_id: "dQw4w9WgXcQ".to_string(),
            autoplay: None,
        })
    );
    assert!(!blocks[2].visible);
    assert_eq!(
        blocks[2].content,
        BlockContent::Rss(RssContent {
            feed_url: "https://example.com/feed.xml".to_string(),
            max_items: Some(3),
            show_description: Some(true),
        })
    );
}

#[test]
fn test_unknown_kind_loads_as_unsupported() {
    let json = r#"{ "id": "9", "kind": "carousel", "title": "Photos", "images": ["a.png"] }"#;

    let block: Block = serde_json::from_str(json).unwrap();
    assert!(!block.is_supported());
    assert_eq!(block.kind_str(), "carousel");

    // Saved back unchanged
    let value = serde_json::to_value(&block).unwrap();
    assert_eq!(value["kind"], "carousel");
    assert_eq!(value["images"][0], "a.png");
}

#[test]
fn test_missing_kind_is_an_error() {
    let json = r#"{ "id": "1", "title": "No kind", "url": "https://x.test" }"#;
    assert!(serde_json::from_str::<Block>(json).is_err());
}

#[test]
fn test_missing_required_field_is_an_error() {
    let json = r#"{ "id": "1", "kind": "link", "title": "No url", "icon": "globe" }"#;
    assert!(serde_json::from_str::<Block>(json).is_err());
}

#[test]
fn test_save_then_load_preserves_block() {
    let json = r#"{ "id": "s", "kind": "spotify", "title": "Playlist",
                    "embedUrl": "https://open.spotify.com/embed/playlist/1", "height": 352,
                    "visible": true, "order": 4 }"#;

    let block: Block = serde_json::from_str(json).unwrap();
    let saved = serde_json::to_string(&block).unwrap();
    let reloaded: Block = serde_json::from_str(&saved).unwrap();
    assert_eq!(block, reloaded);
}
