//! Spotify and SoundCloud players

use super::{card, frame, header};
use crate::component::RenderContext;
use crate::vdom::VNode;
use linkpage_model::{Block, SoundCloudContent, SpotifyContent};

pub(super) fn render_spotify(
    block: &Block,
    spotify: &SpotifyContent,
    ctx: &RenderContext<'_>,
) -> VNode {
    let player = frame(&spotify.embed_url, &block.title, spotify.height())
        .with_class("spotify-player")
        .with_attr(
            "allow",
            "autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture",
        );

    card(block, ctx)
        .with_child(header(block, Some(super::icon("music")), vec![], ctx))
        .with_child(VNode::element("div").with_class("embed-media").with_child(player))
}

pub(super) fn render_soundcloud(
    block: &Block,
    soundcloud: &SoundCloudContent,
    ctx: &RenderContext<'_>,
) -> VNode {
    let player = frame(&soundcloud.embed_url, &block.title, soundcloud.height())
        .with_class("soundcloud-player")
        .with_attr("scrolling", "no")
        .with_attr("allow", "autoplay");

    card(block, ctx)
        .with_child(header(block, Some(super::icon("music")), vec![], ctx))
        .with_child(VNode::element("div").with_class("embed-media").with_child(player))
}
