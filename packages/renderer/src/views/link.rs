use super::{card, controls, icon, title};
use crate::actions::Event;
use crate::component::RenderContext;
use crate::vdom::VNode;
use linkpage_model::{Block, LinkContent};

pub(super) fn render(
    block: &Block,
    link: &LinkContent,
    primary: Option<Event>,
    ctx: &RenderContext<'_>,
) -> VNode {
    let handle = ctx.icons.resolve(&link.icon);

    let details = VNode::element("div")
        .with_class("link-details")
        .with_child(title(block))
        .with_optional_child(link.description.as_ref().map(|description| {
            VNode::element("p")
                .with_class("link-description")
                .with_child(VNode::text(description))
        }));

    let body = VNode::element("div")
        .with_class("link-body")
        .with_child(
            VNode::element("div")
                .with_class("link-icon")
                .with_child(icon(handle.glyph)),
        )
        .with_child(details);

    // The external-link hint only shows when the card is clickable
    let trailing = if primary.is_some() {
        Some(icon("external-link").with_class("link-hint"))
    } else {
        controls(block, ctx)
    };

    card(block, ctx)
        .with_attr("data-href", &link.url)
        .with_child(body.with_optional_child(trailing))
        .on_click(primary)
}
