//! Events exposed by block views and the capability they dispatch to.

use linkpage_model::{Block, BlockId};
use serde::{Deserialize, Serialize};

/// User interaction a view element can trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Event {
    /// Open a target in a new browsing context
    OpenUrl { url: String },
    /// Swap a video thumbnail for its player
    PlayVideo,
    ToggleVisibility,
    Edit,
    Delete,
    /// An image failed to load
    MediaError,
}

impl Event {
    pub fn open(url: impl Into<String>) -> Self {
        Event::OpenUrl { url: url.into() }
    }

    /// Name used in `data-action` attributes
    pub fn name(&self) -> &'static str {
        match self {
            Event::OpenUrl { .. } => "open-url",
            Event::PlayVideo => "play-video",
            Event::ToggleVisibility => "toggle-visibility",
            Event::Edit => "edit",
            Event::Delete => "delete",
            Event::MediaError => "media-error",
        }
    }
}

/// Callbacks a block view may invoke.
///
/// Every method defaults to a no-op, so implementors only provide the
/// callbacks they care about.
pub trait BlockActions {
    fn edit(&mut self, _block: &Block) {}

    fn delete(&mut self, _id: &BlockId) {}

    fn toggle_visibility(&mut self, _id: &BlockId) {}

    /// Open `url` in a new browsing context (fire-and-forget)
    fn open_url(&mut self, _url: &str) {}
}

/// Ignores every callback
#[derive(Debug, Default, Clone, Copy)]
pub struct NoActions;

impl BlockActions for NoActions {}

/// A single recorded callback invocation
#[derive(Debug, Clone, PartialEq)]
pub enum ActionCall {
    Edit(Block),
    Delete(BlockId),
    ToggleVisibility(BlockId),
    OpenUrl(String),
}

/// Records callbacks so they can be applied after the view is released
#[derive(Debug, Default, Clone)]
pub struct RecordedActions {
    pub calls: Vec<ActionCall>,
}

impl RecordedActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, ActionCall> {
        self.calls.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl BlockActions for RecordedActions {
    fn edit(&mut self, block: &Block) {
        self.calls.push(ActionCall::Edit(block.clone()));
    }

    fn delete(&mut self, id: &BlockId) {
        self.calls.push(ActionCall::Delete(id.clone()));
    }

    fn toggle_visibility(&mut self, id: &BlockId) {
        self.calls.push(ActionCall::ToggleVisibility(id.clone()));
    }

    fn open_url(&mut self, url: &str) {
        self.calls.push(ActionCall::OpenUrl(url.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_string(&Event::open("https://x.test")).unwrap();
        assert_eq!(json, r#"{"action":"openUrl","url":"https://x.test"}"#);

        let event: Event = serde_json::from_str(r#"{"action":"playVideo"}"#).unwrap();
        assert_eq!(event, Event::PlayVideo);
    }

    #[test]
    fn test_recorded_actions_drain() {
        let mut actions = RecordedActions::new();
        actions.delete(&BlockId::new("a"));
        actions.open_url("https://x.test");

        let calls: Vec<_> = actions.drain().collect();
        assert_eq!(calls.len(), 2);
        assert!(actions.is_empty());
    }
}
