use crate::content::BlockContent;
use crate::error::ModelError;
use crate::ids::BlockId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of block kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    #[default]
    Link,
    YouTube,
    Spotify,
    SoundCloud,
    Iframe,
    Article,
    Rss,
    Text,
}

impl BlockKind {
    pub const ALL: [BlockKind; 8] = [
        BlockKind::Link,
        BlockKind::YouTube,
        BlockKind::Spotify,
        BlockKind::SoundCloud,
        BlockKind::Iframe,
        BlockKind::Article,
        BlockKind::Rss,
        BlockKind::Text,
    ];

    /// Wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Link => "link",
            BlockKind::YouTube => "youtube",
            BlockKind::Spotify => "spotify",
            BlockKind::SoundCloud => "soundcloud",
            BlockKind::Iframe => "iframe",
            BlockKind::Article => "article",
            BlockKind::Rss => "rss",
            BlockKind::Text => "text",
        }
    }

    /// Human-readable label for kind selectors
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Link => "Link",
            BlockKind::YouTube => "YouTube video",
            BlockKind::Spotify => "Spotify",
            BlockKind::SoundCloud => "SoundCloud",
            BlockKind::Iframe => "Iframe / Widget",
            BlockKind::Article => "Article / Blog",
            BlockKind::Rss => "RSS feed",
            BlockKind::Text => "Text / Note",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownKind(s.to_string()))
    }
}

fn default_visible() -> bool {
    true
}

/// One content unit on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub title: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Sort key for display; ties keep insertion order
    #[serde(default)]
    pub order: i64,
    #[serde(flatten)]
    pub content: BlockContent,
}

impl Block {
    /// A visible block at order 0
    pub fn new(id: impl Into<BlockId>, title: impl Into<String>, content: BlockContent) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            visible: true,
            order: 0,
            content,
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn kind(&self) -> Option<BlockKind> {
        self.content.kind()
    }

    pub fn kind_str(&self) -> &str {
        self.content.kind_str()
    }

    pub fn is_supported(&self) -> bool {
        self.kind().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{LinkContent, TextContent, TextStyle};

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.as_str().parse::<BlockKind>().unwrap(), kind);
        }
        assert_eq!("YouTube".parse::<BlockKind>().unwrap(), BlockKind::YouTube);
        assert!(matches!(
            "carousel".parse::<BlockKind>(),
            Err(ModelError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_block_serializes_flat() {
        let block = Block::new(
            "1",
            "Portfolio",
            BlockContent::Link(LinkContent {
                url: "https://example.com".to_string(),
                icon: "globe".to_string(),
                description: None,
            }),
        );

        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["kind"], "link");
        assert_eq!(value["id"], "1");
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["visible"], true);
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_block_deserializes_with_defaults() {
        let json = r#"{
            "id": "n1",
            "kind": "text",
            "title": "Note",
            "content": "hello\nworld",
            "style": "quote"
        }"#;

        let block: Block = serde_json::from_str(json).unwrap();
        assert!(block.visible);
        assert_eq!(block.order, 0);
        assert_eq!(
            block.content,
            BlockContent::Text(TextContent {
                content: "hello\nworld".to_string(),
                style: Some(TextStyle::Quote),
            })
        );
    }
}
