//! View dispatch across every block kind

use linkpage_model::*;
use linkpage_renderer::{
    click, render, to_html, ActionCall, BlockComponent, Event, HtmlOptions, RecordedActions,
    RenderContext, VNode, IFRAME_SANDBOX,
};

fn all_kinds() -> Vec<Block> {
    vec![
        Block::new(
            "link",
            "Site",
            BlockContent::Link(LinkContent {
                url: "https://x.test".to_string(),
                icon: "globe".to_string(),
                description: Some("My site".to_string()),
            }),
        ),
        Block::new(
            "video",
            "Video",
            BlockContent::YouTube(YouTubeContent {
                video_id: "dQw4w9WgXcQ".to_string(),
                autoplay: Some(true),
            }),
        ),
        Block::new(
            "spotify",
            "Playlist",
            BlockContent::Spotify(SpotifyContent {
                embed_url: "https://open.spotify.com/embed/playlist/1".to_string(),
                height: None,
            }),
        ),
        Block::new(
            "soundcloud",
            "Track",
            BlockContent::SoundCloud(SoundCloudContent {
                embed_url: "https://w.soundcloud.com/player/?url=1".to_string(),
                height: None,
            }),
        ),
        Block::new(
            "iframe",
            "Widget",
            BlockContent::Iframe(IframeContent {
                url: "https://widget.test".to_string(),
                height: None,
                allow_fullscreen: Some(true),
            }),
        ),
        Block::new(
            "article",
            "Post",
            BlockContent::Article(ArticleContent {
                url: "https://blog.test/post".to_string(),
                description: Some("A long read".to_string()),
                image: Some("https://blog.test/cover.png".to_string()),
                domain: Some("blog.test".to_string()),
            }),
        ),
        Block::new(
            "rss",
            "Feed",
            BlockContent::Rss(RssContent {
                feed_url: "https://blog.test/feed.xml".to_string(),
                max_items: None,
                show_description: Some(true),
            }),
        ),
        Block::new(
            "text",
            "Note",
            BlockContent::Text(TextContent {
                content: "hello\n  world".to_string(),
                style: Some(TextStyle::Highlight),
            }),
        ),
    ]
}

fn find_tag<'a>(view: &'a VNode, tag: &str) -> Option<&'a VNode> {
    view.find(&|n| n.tag() == Some(tag))
}

#[test]
fn test_each_kind_selects_its_view() {
    for block in all_kinds() {
        let view = render(&block, false).expect("visible block renders");
        let class = format!("block-{}", block.kind_str());
        assert!(view.has_class(&class), "{} view missing class {}", block.id, class);
        assert_eq!(view.attr("data-block-id"), Some(block.id.as_str()));
        assert!(view.text_content().contains(&block.title));
    }
}

#[test]
fn test_hidden_blocks_render_nothing_outside_edit_mode() {
    for block in all_kinds() {
        let hidden = block.clone().with_visible(false);
        assert!(render(&block, false).is_some());
        assert!(render(&hidden, false).is_none(), "{} should be hidden", block.id);
    }
}

#[test]
fn test_edit_mode_shows_hidden_blocks_dimmed_with_controls() {
    for block in all_kinds() {
        let hidden = block.clone().with_visible(false);
        let view = render(&hidden, true).expect("edit mode shows hidden blocks");

        assert!(view.has_class("block-hidden"));
        let events = view.events();
        assert!(events.contains(&&Event::ToggleVisibility));
        assert!(events.contains(&&Event::Edit));
        assert!(events.contains(&&Event::Delete));
    }
}

#[test]
fn test_controls_absent_outside_edit_mode() {
    for block in all_kinds() {
        let view = render(&block, false).unwrap();
        assert!(!view.has_class("block-hidden"));
        assert!(view.find(&|n| n.has_class("block-controls")).is_none());
    }
}

#[test]
fn test_link_primary_action_opens_url() {
    let block = Block::new(
        "l",
        "X",
        BlockContent::Link(LinkContent {
            url: "https://x.test".to_string(),
            icon: "globe".to_string(),
            description: None,
        }),
    );

    let view = render(&block, false).unwrap();
    assert_eq!(view.click_event(), Some(&Event::open("https://x.test")));
    assert!(view.find(&|n| n.has_class("link-description")).is_none());

    let mut actions = RecordedActions::new();
    let event = click(&block, false, &mut actions);
    assert_eq!(event, Some(Event::open("https://x.test")));
    assert_eq!(actions.calls, vec![ActionCall::OpenUrl("https://x.test".to_string())]);

    // Editing disables navigation
    let mut actions = RecordedActions::new();
    assert_eq!(click(&block, true, &mut actions), None);
    assert!(actions.is_empty());
}

#[test]
fn test_link_icon_resolution_and_fallback() {
    let mut block = all_kinds().remove(0);
    let view = render(&block, false).unwrap();
    assert!(view.find(&|n| n.attr("data-icon") == Some("globe")).is_some());

    if let BlockContent::Link(link) = &mut block.content {
        link.icon = "no-such-icon".to_string();
    }
    let view = render(&block, false).unwrap();
    let icon = view.find(&|n| n.has_class("link-icon")).unwrap();
    assert!(icon.find(&|n| n.attr("data-icon") == Some("external-link")).is_some());
}

#[test]
fn test_youtube_thumbnail_fallback_then_player() {
    let block = all_kinds().remove(1);
    let mut component = BlockComponent::new(block);
    let ctx = RenderContext::new(false);
    let mut actions = RecordedActions::new();

    let view = component.render(&ctx).unwrap();
    let img = find_tag(&view, "img").unwrap();
    assert_eq!(
        img.attr("src"),
        Some("https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg")
    );

    assert!(component.activate(&Event::MediaError, &ctx, &mut actions));
    let view = component.render(&ctx).unwrap();
    let img = find_tag(&view, "img").unwrap();
    assert_eq!(
        img.attr("src"),
        Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
    );
    assert!(img.error_event().is_none());

    assert!(component.activate(&Event::PlayVideo, &ctx, &mut actions));
    let view = component.render(&ctx).unwrap();
    let player = find_tag(&view, "iframe").unwrap();
    assert_eq!(
        player.attr("src"),
        Some("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1")
    );
    assert!(actions.is_empty());
}

#[test]
fn test_youtube_cannot_play_while_editing() {
    let block = all_kinds().remove(1);
    let mut component = BlockComponent::new(block);

    let played = component.activate(
        &Event::PlayVideo,
        &RenderContext::new(true),
        &mut RecordedActions::new(),
    );
    assert!(!played);
    assert!(!component.state().video().playing);
}

#[test]
fn test_embeds_use_default_heights() {
    let blocks = all_kinds();

    let spotify = render(&blocks[2], false).unwrap();
    assert_eq!(find_tag(&spotify, "iframe").unwrap().attr("height"), Some("152"));

    let soundcloud = render(&blocks[3], false).unwrap();
    assert_eq!(find_tag(&soundcloud, "iframe").unwrap().attr("height"), Some("166"));

    let iframe = render(&blocks[4], false).unwrap();
    let frame = find_tag(&iframe, "iframe").unwrap();
    assert_eq!(frame.attr("height"), Some("400"));
    assert_eq!(frame.attr("sandbox"), Some(IFRAME_SANDBOX));
    assert_eq!(frame.attr("allowfullscreen"), Some("true"));
}

#[test]
fn test_iframe_open_button_works_in_edit_mode() {
    let block = all_kinds().remove(4);
    let mut component = BlockComponent::new(block);
    let mut actions = RecordedActions::new();

    assert!(component.activate(
        &Event::open("https://widget.test"),
        &RenderContext::new(true),
        &mut actions
    ));
    assert_eq!(actions.calls, vec![ActionCall::OpenUrl("https://widget.test".to_string())]);
}

#[test]
fn test_article_shows_domain_and_clamped_description() {
    let view = render(&all_kinds()[5], false).unwrap();

    let description = view.find(&|n| n.has_class("article-description")).unwrap();
    assert!(description.has_class("line-clamp-3"));
    let domain = view.find(&|n| n.has_class("article-domain")).unwrap();
    assert_eq!(domain.text_content(), "blog.test");
    assert_eq!(view.click_event(), Some(&Event::open("https://blog.test/post")));
}

#[test]
fn test_text_preserves_whitespace_in_html() {
    let view = render(&all_kinds()[7], false).unwrap();
    assert!(view.find(&|n| n.has_class("text-highlight")).is_some());

    let html = to_html(&view, &HtmlOptions::default());
    assert!(html.contains(">hello\n  world</div>"));
}

#[test]
fn test_controls_dispatch_to_actions() {
    let block = all_kinds().remove(7);
    let mut component = BlockComponent::new(block.clone());
    let ctx = RenderContext::new(true);
    let mut actions = RecordedActions::new();

    component.activate(&Event::ToggleVisibility, &ctx, &mut actions);
    component.activate(&Event::Edit, &ctx, &mut actions);
    component.activate(&Event::Delete, &ctx, &mut actions);

    assert_eq!(
        actions.calls,
        vec![
            ActionCall::ToggleVisibility(block.id.clone()),
            ActionCall::Edit(block.clone()),
            ActionCall::Delete(block.id.clone()),
        ]
    );
}

#[test]
fn test_unsupported_kind_renders_placeholder() {
    let block: Block = serde_json::from_str(
        r#"{ "id": "u", "kind": "carousel", "title": "Photos", "images": [] }"#,
    )
    .unwrap();

    let view = render(&block, false).unwrap();
    assert!(view.text_content().contains("Unsupported block type: carousel"));
    assert!(render(&block.clone().with_visible(false), false).is_none());

    let editing = render(&block, true).unwrap();
    let events = editing.events();
    assert!(events.contains(&&Event::Delete));
    assert!(!events.contains(&&Event::Edit));
}
