use super::{card, controls, icon, title};
use crate::actions::Event;
use crate::component::{FeedState, RenderContext};
use crate::feed::FeedItem;
use crate::vdom::VNode;
use linkpage_model::{Block, RssContent};

pub(super) fn render(
    block: &Block,
    rss: &RssContent,
    state: Option<&FeedState>,
    primary: Option<Event>,
    ctx: &RenderContext<'_>,
) -> VNode {
    let heading = VNode::element("div")
        .with_class("block-heading")
        .with_class("rss-heading")
        .with_child(icon("rss"))
        .with_child(title(block))
        .on_click(primary);

    let header = VNode::element("div")
        .with_class("block-header")
        .with_child(heading)
        .with_optional_child(controls(block, ctx));

    let show_description = rss.show_description.unwrap_or(false);
    let entries: Vec<VNode> = match state {
        Some(FeedState::Loading { .. }) => vec![VNode::element("div")
            .with_class("rss-loading")
            .with_child(VNode::text("Loading feed..."))],
        Some(FeedState::Loaded { items }) => items
            .iter()
            .take(rss.max_items() as usize)
            .enumerate()
            .map(|(index, item)| entry(index, item, show_description))
            .collect(),
        Some(FeedState::Idle) | None => vec![],
    };

    card(block, ctx)
        .with_child(header)
        .with_child(VNode::element("div").with_class("rss-items").with_children(entries))
}

fn entry(index: usize, item: &FeedItem, show_description: bool) -> VNode {
    let description = item
        .description
        .as_ref()
        .filter(|_| show_description)
        .map(|description| {
            VNode::element("p")
                .with_class("rss-description")
                .with_child(VNode::text(description))
        });

    let date = item.pub_date.as_ref().map(|date| {
        VNode::element("span")
            .with_class("rss-date")
            .with_child(VNode::text(date))
    });

    VNode::element("div")
        .with_key(index.to_string())
        .with_class("rss-item")
        .with_attr("data-href", &item.link)
        .with_child(
            VNode::element("h4")
                .with_class("rss-title")
                .with_child(VNode::text(&item.title)),
        )
        .with_optional_child(description)
        .with_optional_child(date)
        .with_child(icon("external-link"))
        .on_click(Some(Event::open(&item.link)))
}
