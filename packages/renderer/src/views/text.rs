use super::{card, header, icon};
use crate::component::RenderContext;
use crate::vdom::VNode;
use linkpage_model::{Block, TextContent, TextStyle};

pub(super) fn render(block: &Block, text: &TextContent, ctx: &RenderContext<'_>) -> VNode {
    let style_class = match text.style() {
        TextStyle::Normal => "text-normal",
        TextStyle::Highlight => "text-highlight",
        TextStyle::Quote => "text-quote",
    };

    let body = VNode::element("div")
        .with_class("text-body")
        .with_class(style_class)
        .with_child(
            VNode::element("div")
                .with_class("whitespace-pre-wrap")
                .with_attr("style", "white-space: pre-wrap")
                .with_child(VNode::text(&text.content)),
        );

    card(block, ctx)
        .with_child(header(block, Some(icon("type")), vec![], ctx))
        .with_child(body)
}
