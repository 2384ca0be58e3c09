//! Per-kind block payloads.
//!
//! Each payload struct rejects fields that do not belong to its kind, so a
//! block can never carry data for another kind.

use crate::block::BlockKind;
use crate::error::ModelError;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::str::FromStr;

pub const SPOTIFY_DEFAULT_HEIGHT: u32 = 152;
pub const SOUNDCLOUD_DEFAULT_HEIGHT: u32 = 166;
pub const IFRAME_DEFAULT_HEIGHT: u32 = 400;
pub const RSS_DEFAULT_MAX_ITEMS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LinkContent {
    pub url: String,
    /// Symbolic icon name resolved through the icon catalog
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct YouTubeContent {
    pub video_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpotifyContent {
    pub embed_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl SpotifyContent {
    pub fn height(&self) -> u32 {
        self.height.unwrap_or(SPOTIFY_DEFAULT_HEIGHT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SoundCloudContent {
    pub embed_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl SoundCloudContent {
    pub fn height(&self) -> u32 {
        self.height.unwrap_or(SOUNDCLOUD_DEFAULT_HEIGHT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IframeContent {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_fullscreen: Option<bool>,
}

impl IframeContent {
    pub fn height(&self) -> u32 {
        self.height.unwrap_or(IFRAME_DEFAULT_HEIGHT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArticleContent {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Thumbnail image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RssContent {
    pub feed_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_description: Option<bool>,
}

impl RssContent {
    pub fn max_items(&self) -> u32 {
        self.max_items.unwrap_or(RSS_DEFAULT_MAX_ITEMS)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    #[default]
    Normal,
    Highlight,
    Quote,
}

impl TextStyle {
    pub const ALL: [TextStyle; 3] = [TextStyle::Normal, TextStyle::Highlight, TextStyle::Quote];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextStyle::Normal => "normal",
            TextStyle::Highlight => "highlight",
            TextStyle::Quote => "quote",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextStyle::Normal => "Normal",
            TextStyle::Highlight => "Highlighted",
            TextStyle::Quote => "Quote",
        }
    }
}

impl FromStr for TextStyle {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownTextStyle(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl TextContent {
    pub fn style(&self) -> TextStyle {
        self.style.unwrap_or_default()
    }
}

/// A loaded block whose kind is outside the known set.
///
/// Kept verbatim so it survives a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedContent {
    pub kind: String,
    pub fields: Map<String, Value>,
}

/// Variant payload of a block
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Link(LinkContent),
    YouTube(YouTubeContent),
    Spotify(SpotifyContent),
    SoundCloud(SoundCloudContent),
    Iframe(IframeContent),
    Article(ArticleContent),
    Rss(RssContent),
    Text(TextContent),
    Unsupported(UnsupportedContent),
}

impl BlockContent {
    /// Known kind of this payload, `None` for unsupported payloads
    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            BlockContent::Link(_) => Some(BlockKind::Link),
            BlockContent::YouTube(_) => Some(BlockKind::YouTube),
            BlockContent::Spotify(_) => Some(BlockKind::Spotify),
            BlockContent::SoundCloud(_) => Some(BlockKind::SoundCloud),
            BlockContent::Iframe(_) => Some(BlockKind::Iframe),
            BlockContent::Article(_) => Some(BlockKind::Article),
            BlockContent::Rss(_) => Some(BlockKind::Rss),
            BlockContent::Text(_) => Some(BlockKind::Text),
            BlockContent::Unsupported(_) => None,
        }
    }

    /// Wire tag, including the raw tag of unsupported payloads
    pub fn kind_str(&self) -> &str {
        match self {
            BlockContent::Unsupported(unsupported) => &unsupported.kind,
            known => known.kind().map(|k| k.as_str()).unwrap_or_default(),
        }
    }

    /// Build a payload from its wire fields (without the `kind` tag)
    pub fn from_fields(kind: &str, fields: Map<String, Value>) -> Result<Self, ModelError> {
        let Ok(known) = kind.parse::<BlockKind>() else {
            return Ok(BlockContent::Unsupported(UnsupportedContent {
                kind: kind.to_string(),
                fields,
            }));
        };

        let value = Value::Object(fields);
        let invalid = |source: serde_json::Error| ModelError::InvalidPayload {
            kind: known.as_str().to_string(),
            source,
        };

        let content = match known {
            BlockKind::Link => BlockContent::Link(serde_json::from_value(value).map_err(invalid)?),
            BlockKind::YouTube => {
                BlockContent::YouTube(serde_json::from_value(value).map_err(invalid)?)
            }
            BlockKind::Spotify => {
                BlockContent::Spotify(serde_json::from_value(value).map_err(invalid)?)
            }
            BlockKind::SoundCloud => {
                BlockContent::SoundCloud(serde_json::from_value(value).map_err(invalid)?)
            }
            BlockKind::Iframe => {
                BlockContent::Iframe(serde_json::from_value(value).map_err(invalid)?)
            }
            BlockKind::Article => {
                BlockContent::Article(serde_json::from_value(value).map_err(invalid)?)
            }
            BlockKind::Rss => BlockContent::Rss(serde_json::from_value(value).map_err(invalid)?),
            BlockKind::Text => BlockContent::Text(serde_json::from_value(value).map_err(invalid)?),
        };

        Ok(content)
    }

    /// Wire fields of the payload (without the `kind` tag)
    pub fn to_fields(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let value = match self {
            BlockContent::Link(c) => serde_json::to_value(c)?,
            BlockContent::YouTube(c) => serde_json::to_value(c)?,
            BlockContent::Spotify(c) => serde_json::to_value(c)?,
            BlockContent::SoundCloud(c) => serde_json::to_value(c)?,
            BlockContent::Iframe(c) => serde_json::to_value(c)?,
            BlockContent::Article(c) => serde_json::to_value(c)?,
            BlockContent::Rss(c) => serde_json::to_value(c)?,
            BlockContent::Text(c) => serde_json::to_value(c)?,
            BlockContent::Unsupported(c) => return Ok(c.fields.clone()),
        };

        match value {
            Value::Object(fields) => Ok(fields),
            _ => Ok(Map::new()),
        }
    }
}

impl Serialize for BlockContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut fields = self.to_fields().map_err(S::Error::custom)?;
        fields.insert("kind".to_string(), Value::String(self.kind_str().to_string()));
        fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BlockContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;

        let kind = match fields.remove("kind") {
            Some(Value::String(kind)) => kind,
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "block kind must be a string, got {}",
                    other
                )))
            }
            None => return Err(D::Error::missing_field("kind")),
        };

        BlockContent::from_fields(&kind, fields).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_apply_when_absent() {
        let spotify = SpotifyContent {
            embed_url: "https://open.spotify.com/embed/x".to_string(),
            height: None,
        };
        assert_eq!(spotify.height(), 152);

        let soundcloud = SoundCloudContent {
            embed_url: "https://w.soundcloud.com/player/x".to_string(),
            height: None,
        };
        assert_eq!(soundcloud.height(), 166);

        let rss = RssContent {
            feed_url: "https://example.com/feed.xml".to_string(),
            max_items: None,
            show_description: None,
        };
        assert_eq!(rss.max_items(), 5);

        let text = TextContent {
            content: "hi".to_string(),
            style: None,
        };
        assert_eq!(text.style(), TextStyle::Normal);
    }

    #[test]
    fn test_payload_rejects_foreign_fields() {
        let mut fields = Map::new();
        fields.insert("url".to_string(), json!("https://x.test"));
        fields.insert("icon".to_string(), json!("globe"));
        fields.insert("videoId".to_string(), json!("abc"));

        let err = BlockContent::from_fields("link", fields).unwrap_err();
        assert!(matches!(err, ModelError::InvalidPayload { .. }));
    }

    #[test]
    fn test_unknown_kind_is_kept_verbatim() {
        let mut fields = Map::new();
        fields.insert("src".to_string(), json!("https://x.test/map"));

        let content = BlockContent::from_fields("map", fields.clone()).unwrap();
        assert_eq!(content.kind(), None);
        assert_eq!(content.kind_str(), "map");
        assert_eq!(content.to_fields().unwrap(), fields);
    }

    #[test]
    fn test_text_style_parsing() {
        assert_eq!("Quote".parse::<TextStyle>().unwrap(), TextStyle::Quote);
        assert!("bold".parse::<TextStyle>().is_err());
    }
}
