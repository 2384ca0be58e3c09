//! Page-level view: toolbar, profile card, block list, footer.
//!
//! Page controls have no block event; they carry a `data-page-action`
//! attribute that the host binds to the matching [`PageSession`] method.
//!
//! [`PageSession`]: crate::PageSession

use linkpage_model::Profile;
use linkpage_renderer::VNode;

pub const ACTION_TOGGLE_EDITING: &str = "toggle-editing";
pub const ACTION_ADD_BLOCK: &str = "add-block";
pub const FOOTER_BADGE: &str = "Powered by Linkpage ⚡";

fn page_button(action: &str, label: &str) -> VNode {
    VNode::element("button")
        .with_attr("type", "button")
        .with_attr("data-page-action", action)
        .with_child(VNode::text(label))
}

pub(crate) fn toolbar(is_editing: bool) -> VNode {
    let toggle = page_button(ACTION_TOGGLE_EDITING, if is_editing { "Done" } else { "Edit" })
        .with_class("edit-toggle");

    VNode::element("div")
        .with_class("page-toolbar")
        .with_child(if is_editing {
            toggle.with_class("active")
        } else {
            toggle
        })
}

pub(crate) fn profile_card(profile: &Profile, is_editing: bool) -> VNode {
    let avatar = VNode::element("div")
        .with_class("avatar")
        .with_child(
            VNode::element("img")
                .with_attr("src", &profile.avatar_url)
                .with_attr("alt", &profile.name),
        )
        .with_child(
            VNode::element("span")
                .with_class("avatar-fallback")
                .with_child(VNode::text(profile.initials())),
        );

    let details = if is_editing {
        VNode::element("div")
            .with_class("profile-fields")
            .with_child(
                VNode::element("input")
                    .with_class("profile-name")
                    .with_attr("name", "name")
                    .with_attr("value", &profile.name)
                    .with_attr("placeholder", "Your name"),
            )
            .with_child(
                VNode::element("textarea")
                    .with_class("profile-bio")
                    .with_attr("name", "bio")
                    .with_attr("rows", "2")
                    .with_attr("placeholder", "Your bio")
                    .with_child(VNode::text(&profile.bio)),
            )
    } else {
        VNode::element("div")
            .with_class("profile-details")
            .with_child(
                VNode::element("h1")
                    .with_class("profile-name")
                    .with_child(VNode::text(&profile.name)),
            )
            .with_child(
                VNode::element("p")
                    .with_class("profile-bio")
                    .with_child(VNode::text(&profile.bio)),
            )
    };

    let card = VNode::element("section")
        .with_class("profile-card")
        .with_child(avatar)
        .with_child(details);

    match &profile.background_url {
        Some(url) => card.with_attr("style", format!("background-image: url('{}')", url)),
        None => card,
    }
}

/// Wrap a block view with its staggered entrance delay
pub(crate) fn block_slot(index: usize, view: VNode) -> VNode {
    VNode::element("div")
        .with_class("block-slot")
        .with_attr("style", format!("animation-delay: {:.1}s", index as f64 * 0.1))
        .with_child(view)
}

pub(crate) fn add_block_card() -> VNode {
    VNode::element("div")
        .with_class("add-block")
        .with_attr("data-page-action", ACTION_ADD_BLOCK)
        .with_child(
            VNode::element("span")
                .with_class("icon")
                .with_class("icon-plus")
                .with_attr("data-icon", "plus")
                .with_attr("aria-hidden", "true"),
        )
        .with_child(VNode::element("span").with_child(VNode::text("Add a block")))
}

pub(crate) fn footer() -> VNode {
    VNode::element("footer").with_class("page-footer").with_child(
        VNode::element("span")
            .with_class("badge")
            .with_child(VNode::text(FOOTER_BADGE)),
    )
}
