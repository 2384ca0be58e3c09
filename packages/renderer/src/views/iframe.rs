use super::{card, frame, header, icon};
use crate::actions::Event;
use crate::component::RenderContext;
use crate::vdom::VNode;
use linkpage_model::{Block, IframeContent};

/// Capabilities granted to embedded widgets
pub const SANDBOX: &str = "allow-scripts allow-same-origin allow-popups allow-forms";

pub(super) fn render(block: &Block, content: &IframeContent, ctx: &RenderContext<'_>) -> VNode {
    let open = VNode::element("button")
        .with_attr("type", "button")
        .with_attr("aria-label", "Open in new tab")
        .with_class("iframe-open")
        .with_child(icon("external-link"))
        .on_click(Some(Event::open(&content.url)));

    let mut widget = frame(&content.url, &block.title, content.height())
        .with_class("iframe-widget")
        .with_attr("sandbox", SANDBOX);
    if content.allow_fullscreen.unwrap_or(false) {
        widget = widget.with_attr("allowfullscreen", "true");
    }

    card(block, ctx)
        .with_child(header(block, None, vec![open], ctx))
        .with_child(VNode::element("div").with_class("iframe-media").with_child(widget))
}
