use super::{card, header};
use crate::actions::Event;
use crate::component::{RenderContext, VideoState};
use crate::vdom::VNode;
use linkpage_model::{Block, YouTubeContent};

pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}

/// Lower-resolution thumbnail every video has
pub fn fallback_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/hqdefault.jpg", video_id)
}

pub fn embed_url(video: &YouTubeContent) -> String {
    let autoplay = if video.autoplay.unwrap_or(false) {
        "?autoplay=1"
    } else {
        ""
    };
    format!("https://www.youtube.com/embed/{}{}", video.video_id, autoplay)
}

pub(super) fn render(
    block: &Block,
    video: &YouTubeContent,
    state: &VideoState,
    primary: Option<Event>,
    ctx: &RenderContext<'_>,
) -> VNode {
    let media = if state.playing {
        VNode::element("iframe")
            .with_class("youtube-player")
            .with_attr("src", embed_url(video))
            .with_attr("title", &block.title)
            .with_attr(
                "allow",
                "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
            )
            .with_attr("allowfullscreen", "true")
    } else {
        let (src, on_error) = if state.thumbnail_failed {
            (fallback_thumbnail_url(&video.video_id), None)
        } else {
            (thumbnail_url(&video.video_id), Some(Event::MediaError))
        };

        VNode::element("div")
            .with_class("youtube-thumbnail")
            .with_child(
                VNode::element("img")
                    .with_attr("src", src)
                    .with_attr("alt", &block.title)
                    .on_error(on_error),
            )
            .with_child(
                VNode::element("div")
                    .with_class("youtube-play")
                    .with_child(super::icon("play")),
            )
            .on_click(primary)
    };

    card(block, ctx)
        .with_child(header(block, None, vec![], ctx))
        .with_child(VNode::element("div").with_class("youtube-media").with_child(media))
}
