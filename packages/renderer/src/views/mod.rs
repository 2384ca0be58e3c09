//! Variant views and the dispatch that selects them.
//!
//! Every view shares the same chrome: a card carrying the block id, a header
//! with the title, and (in edit mode) the visibility / edit / delete
//! controls. Hidden blocks render nothing outside edit mode and render
//! dimmed inside it.

mod article;
mod embed;
mod iframe;
mod link;
mod rss;
mod text;
mod unsupported;
mod youtube;

use crate::actions::Event;
use crate::component::{RenderContext, ViewState};
use crate::vdom::VNode;
use linkpage_model::{Block, BlockContent};

pub use iframe::SANDBOX as IFRAME_SANDBOX;
pub use youtube::{embed_url as youtube_embed_url, fallback_thumbnail_url, thumbnail_url};

/// Select and render the view for a block
pub(crate) fn render_block(block: &Block, state: &ViewState, ctx: &RenderContext<'_>) -> Option<VNode> {
    if !block.visible && !ctx.is_editing {
        return None;
    }

    let primary = primary_action(block, state, ctx.is_editing);

    let view = match &block.content {
        BlockContent::Link(link) => link::render(block, link, primary, ctx),
        BlockContent::YouTube(video) => youtube::render(block, video, &state.video(), primary, ctx),
        BlockContent::Spotify(spotify) => {
            embed::render_spotify(block, spotify, ctx)
        }
        BlockContent::SoundCloud(soundcloud) => {
            embed::render_soundcloud(block, soundcloud, ctx)
        }
        BlockContent::Iframe(frame) => iframe::render(block, frame, ctx),
        BlockContent::Article(article) => {
            article::render(block, article, &state.article(), primary, ctx)
        }
        BlockContent::Rss(rss) => rss::render(block, rss, state.feed(), primary, ctx),
        BlockContent::Text(text) => text::render(block, text, ctx),
        BlockContent::Unsupported(unsupported) => unsupported::render(block, unsupported, ctx),
    };

    Some(view)
}

/// Action behind the block's main click area.
///
/// Editing disables it so blocks can be arranged without navigating away.
pub(crate) fn primary_action(block: &Block, state: &ViewState, is_editing: bool) -> Option<Event> {
    if is_editing || !block.visible {
        return None;
    }

    match &block.content {
        BlockContent::Link(link) => Some(Event::open(&link.url)),
        BlockContent::Article(article) => Some(Event::open(&article.url)),
        BlockContent::Rss(rss) => Some(Event::open(&rss.feed_url)),
        BlockContent::YouTube(_) => (!state.video().playing).then_some(Event::PlayVideo),
        BlockContent::Spotify(_)
        | BlockContent::SoundCloud(_)
        | BlockContent::Iframe(_)
        | BlockContent::Text(_)
        | BlockContent::Unsupported(_) => None,
    }
}

/// Outer card shared by all variants
fn card(block: &Block, ctx: &RenderContext<'_>) -> VNode {
    let card = VNode::element("div")
        .with_key(block.id.as_str())
        .with_class("block")
        .with_class(format!("block-{}", block.kind_str()))
        .with_attr("data-block-id", block.id.as_str());

    if ctx.is_editing && !block.visible {
        card.with_class("block-hidden")
    } else {
        card
    }
}

fn title(block: &Block) -> VNode {
    VNode::element("h3")
        .with_class("block-title")
        .with_child(VNode::text(&block.title))
}

fn icon(glyph: &str) -> VNode {
    VNode::element("span")
        .with_class("icon")
        .with_class(format!("icon-{}", glyph))
        .with_attr("data-icon", glyph)
        .with_attr("aria-hidden", "true")
}

fn button(class: &str, label: &str, glyph: &str, event: Event) -> VNode {
    VNode::element("button")
        .with_attr("type", "button")
        .with_attr("aria-label", label)
        .with_class("block-control")
        .with_class(class)
        .with_child(icon(glyph))
        .on_click(Some(event))
}

/// Visibility / edit / delete controls, present only while editing
fn controls(block: &Block, ctx: &RenderContext<'_>) -> Option<VNode> {
    if !ctx.is_editing {
        return None;
    }

    let (toggle_label, toggle_glyph) = if block.visible {
        ("Hide block", "eye")
    } else {
        ("Show block", "eye-off")
    };

    Some(
        VNode::element("div")
            .with_class("block-controls")
            .with_child(button(
                "control-visibility",
                toggle_label,
                toggle_glyph,
                Event::ToggleVisibility,
            ))
            .with_child(button("control-edit", "Edit block", "edit-3", Event::Edit))
            .with_child(button("control-delete", "Delete block", "trash-2", Event::Delete)),
    )
}

/// Header row: optional leading icon, title, extra nodes, then controls
fn header(
    block: &Block,
    leading: Option<VNode>,
    extra: Vec<VNode>,
    ctx: &RenderContext<'_>,
) -> VNode {
    let heading = VNode::element("div")
        .with_class("block-heading")
        .with_optional_child(leading)
        .with_child(title(block))
        .with_children(extra);

    VNode::element("div")
        .with_class("block-header")
        .with_child(heading)
        .with_optional_child(controls(block, ctx))
}

fn frame(src: &str, title: &str, height: u32) -> VNode {
    VNode::element("iframe")
        .with_attr("src", src)
        .with_attr("title", title)
        .with_attr("width", "100%")
        .with_attr("height", height.to_string())
        .with_attr("frameborder", "0")
        .with_attr("loading", "lazy")
}
