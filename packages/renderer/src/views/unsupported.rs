use super::{button, card};
use crate::actions::Event;
use crate::component::RenderContext;
use crate::vdom::VNode;
use linkpage_model::{Block, UnsupportedContent};

/// Placeholder for a kind this build does not know.
///
/// Editing is not offered; the block can still be hidden or deleted.
pub(super) fn render(
    block: &Block,
    unsupported: &UnsupportedContent,
    ctx: &RenderContext<'_>,
) -> VNode {
    let controls = ctx.is_editing.then(|| {
        let (label, glyph) = if block.visible {
            ("Hide block", "eye")
        } else {
            ("Show block", "eye-off")
        };
        VNode::element("div")
            .with_class("block-controls")
            .with_child(button("control-visibility", label, glyph, Event::ToggleVisibility))
            .with_child(button("control-delete", "Delete block", "trash-2", Event::Delete))
    });

    card(block, ctx)
        .with_class("block-placeholder")
        .with_child(
            VNode::element("p")
                .with_class("unsupported-message")
                .with_child(VNode::text(format!(
                    "Unsupported block type: {}",
                    unsupported.kind
                ))),
        )
        .with_optional_child(controls)
}
