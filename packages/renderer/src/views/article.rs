use super::{card, header, icon};
use crate::actions::Event;
use crate::component::{ArticleState, RenderContext};
use crate::vdom::VNode;
use linkpage_model::{ArticleContent, Block};

pub(super) fn render(
    block: &Block,
    article: &ArticleContent,
    state: &ArticleState,
    primary: Option<Event>,
    ctx: &RenderContext<'_>,
) -> VNode {
    // A broken image is hidden, not replaced
    let thumbnail = article
        .image
        .as_ref()
        .filter(|_| !state.image_hidden)
        .map(|src| {
            VNode::element("div").with_class("article-thumbnail").with_child(
                VNode::element("img")
                    .with_attr("src", src)
                    .with_attr("alt", &block.title)
                    .on_error(Some(Event::MediaError)),
            )
        });

    let description = article.description.as_ref().map(|description| {
        VNode::element("p")
            .with_class("article-description")
            .with_class("line-clamp-3")
            .with_child(VNode::text(description))
    });

    let domain = article.domain.as_ref().map(|domain| {
        VNode::element("span")
            .with_class("article-domain")
            .with_child(VNode::text(domain))
    });

    let footer = VNode::element("div")
        .with_class("article-footer")
        .with_optional_child(domain)
        .with_child(icon("external-link"));

    let summary = VNode::element("div")
        .with_class("article-summary")
        .with_optional_child(description)
        .with_child(footer);

    card(block, ctx)
        .with_attr("data-href", &article.url)
        .with_child(header(block, None, vec![], ctx))
        .with_child(
            VNode::element("div")
                .with_class("article-body")
                .with_optional_child(thumbnail)
                .with_child(summary),
        )
        .on_click(primary)
}
