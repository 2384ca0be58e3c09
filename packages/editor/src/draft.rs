//! Per-kind drafts.
//!
//! Every payload type implements [`FieldSet`]: it lists exactly its own form
//! fields and accepts updates only for those fields. [`ContentDraft`] is the
//! closed set of payload drafts the editor can hold; unsupported kinds never
//! make it in here.

use crate::errors::EditorError;
use crate::fields::{FieldInput, FieldSpec, FieldValue, SelectOption};
use linkpage_icons::IconCatalog;
use linkpage_model::{
    ArticleContent, BlockContent, BlockKind, IframeContent, LinkContent, RssContent,
    SoundCloudContent, SpotifyContent, TextContent, TextStyle, YouTubeContent,
    IFRAME_DEFAULT_HEIGHT, RSS_DEFAULT_MAX_ITEMS, SOUNDCLOUD_DEFAULT_HEIGHT,
    SPOTIFY_DEFAULT_HEIGHT,
};

/// Icon preselected for new links
pub const DEFAULT_LINK_ICON: &str = "globe";

/// Form fields of one block payload
pub trait FieldSet: Sized {
    const KIND: BlockKind;

    /// Payload with every field blank or defaulted
    fn empty() -> Self;

    fn fields(&self, icons: &dyn IconCatalog) -> Vec<FieldSpec>;

    /// Update one field by name; names the kind lacks are rejected
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), EditorError>;
}

fn unknown_field<T: FieldSet>(name: &str) -> EditorError {
    EditorError::UnknownField {
        kind: T::KIND,
        field: name.to_string(),
    }
}

/// Blank text clears an optional field
fn optional_text(value: FieldValue) -> Option<String> {
    let text = value.as_text();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Integers typed as text; blank, zero or unparseable input falls back to the default
fn number(value: FieldValue, default: u32) -> Option<u32> {
    let parsed = match value {
        FieldValue::Number(n) => Some(n),
        FieldValue::Text(text) => text.trim().parse::<u32>().ok(),
        FieldValue::Flag(_) => None,
    };
    Some(parsed.filter(|n| *n > 0).unwrap_or(default))
}

fn flag(name: &str, value: FieldValue) -> Result<bool, EditorError> {
    match value {
        FieldValue::Flag(flag) => Ok(flag),
        FieldValue::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(true),
            "false" | "off" | "no" | "0" | "" => Ok(false),
            other => Err(EditorError::InvalidValue {
                field: name.to_string(),
                reason: format!("expected a boolean, got '{}'", other),
            }),
        },
        FieldValue::Number(n) => Err(EditorError::InvalidValue {
            field: name.to_string(),
            reason: format!("expected a boolean, got {}", n),
        }),
    }
}

fn text_value(text: &str) -> FieldValue {
    FieldValue::Text(text.to_string())
}

fn optional_value(text: &Option<String>) -> FieldValue {
    FieldValue::Text(text.clone().unwrap_or_default())
}

fn number_value(n: Option<u32>) -> FieldValue {
    n.map(FieldValue::Number)
        .unwrap_or_else(|| FieldValue::Text(String::new()))
}

fn flag_value(flag: Option<bool>) -> FieldValue {
    FieldValue::Flag(flag.unwrap_or(false))
}

impl FieldSet for LinkContent {
    const KIND: BlockKind = BlockKind::Link;

    fn empty() -> Self {
        LinkContent {
            url: String::new(),
            icon: DEFAULT_LINK_ICON.to_string(),
            description: None,
        }
    }

    fn fields(&self, icons: &dyn IconCatalog) -> Vec<FieldSpec> {
        let options = icons
            .options()
            .into_iter()
            .map(|option| SelectOption::new(option.name, option.label))
            .collect();

        vec![
            FieldSpec::new("url", "URL", FieldInput::Url, text_value(&self.url))
                .with_placeholder("https://..."),
            FieldSpec::new("icon", "Icon", FieldInput::Select { options }, text_value(&self.icon)),
            FieldSpec::new(
                "description",
                "Description (optional)",
                FieldInput::Text,
                optional_value(&self.description),
            )
            .with_placeholder("Link description..."),
        ]
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), EditorError> {
        match name {
            "url" => self.url = value.as_text(),
            "icon" => self.icon = value.as_text(),
            "description" => self.description = optional_text(value),
            _ => return Err(unknown_field::<Self>(name)),
        }
        Ok(())
    }
}

impl FieldSet for YouTubeContent {
    const KIND: BlockKind = BlockKind::YouTube;

    fn empty() -> Self {
        YouTubeContent {
            video_id: String::new(),
            autoplay: None,
        }
    }

    fn fields(&self, _icons: &dyn IconCatalog) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("videoId", "YouTube video ID", FieldInput::Text, text_value(&self.video_id))
                .with_placeholder("dQw4w9WgXcQ"),
            FieldSpec::new("autoplay", "Autoplay", FieldInput::Checkbox, flag_value(self.autoplay)),
        ]
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), EditorError> {
        match name {
            "videoId" => self.video_id = value.as_text().trim().to_string(),
            "autoplay" => self.autoplay = Some(flag(name, value)?),
            _ => return Err(unknown_field::<Self>(name)),
        }
        Ok(())
    }
}

impl FieldSet for SpotifyContent {
    const KIND: BlockKind = BlockKind::Spotify;

    fn empty() -> Self {
        SpotifyContent {
            embed_url: String::new(),
            height: None,
        }
    }

    fn fields(&self, _icons: &dyn IconCatalog) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("embedUrl", "Spotify embed URL", FieldInput::Url, text_value(&self.embed_url))
                .with_placeholder("https://open.spotify.com/embed/..."),
            FieldSpec::new("height", "Height (px)", FieldInput::Number, number_value(self.height))
                .with_placeholder("152"),
        ]
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), EditorError> {
        match name {
            "embedUrl" => self.embed_url = value.as_text(),
            "height" => self.height = number(value, SPOTIFY_DEFAULT_HEIGHT),
            _ => return Err(unknown_field::<Self>(name)),
        }
        Ok(())
    }
}

impl FieldSet for SoundCloudContent {
    const KIND: BlockKind = BlockKind::SoundCloud;

    fn empty() -> Self {
        SoundCloudContent {
            embed_url: String::new(),
            height: None,
        }
    }

    fn fields(&self, _icons: &dyn IconCatalog) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new(
                "embedUrl",
                "SoundCloud embed URL",
                FieldInput::Url,
                text_value(&self.embed_url),
            )
            .with_placeholder("https://w.soundcloud.com/player/..."),
            FieldSpec::new("height", "Height (px)", FieldInput::Number, number_value(self.height))
                .with_placeholder("166"),
        ]
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), EditorError> {
        match name {
            "embedUrl" => self.embed_url = value.as_text(),
            "height" => self.height = number(value, SOUNDCLOUD_DEFAULT_HEIGHT),
            _ => return Err(unknown_field::<Self>(name)),
        }
        Ok(())
    }
}

impl FieldSet for IframeContent {
    const KIND: BlockKind = BlockKind::Iframe;

    fn empty() -> Self {
        IframeContent {
            url: String::new(),
            height: None,
            allow_fullscreen: None,
        }
    }

    fn fields(&self, _icons: &dyn IconCatalog) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("url", "Widget URL", FieldInput::Url, text_value(&self.url))
                .with_placeholder("https://..."),
            FieldSpec::new("height", "Height (px)", FieldInput::Number, number_value(self.height))
                .with_placeholder("400"),
            FieldSpec::new(
                "allowFullscreen",
                "Allow fullscreen",
                FieldInput::Checkbox,
                flag_value(self.allow_fullscreen),
            ),
        ]
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), EditorError> {
        match name {
            "url" => self.url = value.as_text(),
            "height" => self.height = number(value, IFRAME_DEFAULT_HEIGHT),
            "allowFullscreen" => self.allow_fullscreen = Some(flag(name, value)?),
            _ => return Err(unknown_field::<Self>(name)),
        }
        Ok(())
    }
}

impl FieldSet for ArticleContent {
    const KIND: BlockKind = BlockKind::Article;

    fn empty() -> Self {
        ArticleContent {
            url: String::new(),
            description: None,
            image: None,
            domain: None,
        }
    }

    fn fields(&self, _icons: &dyn IconCatalog) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("url", "Article URL", FieldInput::Url, text_value(&self.url))
                .with_placeholder("https://..."),
            FieldSpec::new(
                "description",
                "Description",
                FieldInput::TextArea,
                optional_value(&self.description),
            )
            .with_placeholder("Article description..."),
            FieldSpec::new("image", "Image (URL)", FieldInput::Url, optional_value(&self.image))
                .with_placeholder("https://..."),
            FieldSpec::new("domain", "Domain", FieldInput::Text, optional_value(&self.domain))
                .with_placeholder("example.com"),
        ]
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), EditorError> {
        match name {
            "url" => self.url = value.as_text(),
            "description" => self.description = optional_text(value),
            "image" => self.image = optional_text(value),
            "domain" => self.domain = optional_text(value),
            _ => return Err(unknown_field::<Self>(name)),
        }
        Ok(())
    }
}

impl FieldSet for RssContent {
    const KIND: BlockKind = BlockKind::Rss;

    fn empty() -> Self {
        RssContent {
            feed_url: String::new(),
            max_items: None,
            show_description: None,
        }
    }

    fn fields(&self, _icons: &dyn IconCatalog) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("feedUrl", "RSS feed URL", FieldInput::Url, text_value(&self.feed_url))
                .with_placeholder("https://example.com/feed.xml"),
            FieldSpec::new(
                "maxItems",
                "Number of articles",
                FieldInput::Number,
                number_value(self.max_items),
            )
            .with_placeholder("5"),
            FieldSpec::new(
                "showDescription",
                "Show descriptions",
                FieldInput::Checkbox,
                flag_value(self.show_description),
            ),
        ]
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), EditorError> {
        match name {
            "feedUrl" => self.feed_url = value.as_text(),
            "maxItems" => self.max_items = number(value, RSS_DEFAULT_MAX_ITEMS),
            "showDescription" => self.show_description = Some(flag(name, value)?),
            _ => return Err(unknown_field::<Self>(name)),
        }
        Ok(())
    }
}

impl FieldSet for TextContent {
    const KIND: BlockKind = BlockKind::Text;

    fn empty() -> Self {
        TextContent {
            content: String::new(),
            style: None,
        }
    }

    fn fields(&self, _icons: &dyn IconCatalog) -> Vec<FieldSpec> {
        let options = TextStyle::ALL
            .iter()
            .map(|style| SelectOption::new(style.as_str(), style.label()))
            .collect();

        vec![
            FieldSpec::new("content", "Content", FieldInput::TextArea, text_value(&self.content))
                .with_placeholder("Your text here..."),
            FieldSpec::new(
                "style",
                "Style",
                FieldInput::Select { options },
                text_value(self.style().as_str()),
            ),
        ]
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), EditorError> {
        match name {
            "content" => self.content = value.as_text(),
            "style" => {
                let style = value
                    .as_text()
                    .parse::<TextStyle>()
                    .map_err(|err| EditorError::InvalidValue {
                        field: name.to_string(),
                        reason: err.to_string(),
                    })?;
                self.style = Some(style);
            }
            _ => return Err(unknown_field::<Self>(name)),
        }
        Ok(())
    }
}

/// Payload draft for one of the supported kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ContentDraft {
    Link(LinkContent),
    YouTube(YouTubeContent),
    Spotify(SpotifyContent),
    SoundCloud(SoundCloudContent),
    Iframe(IframeContent),
    Article(ArticleContent),
    Rss(RssContent),
    Text(TextContent),
}

impl ContentDraft {
    /// Blank draft for a kind
    pub fn empty(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Link => ContentDraft::Link(LinkContent::empty()),
            BlockKind::YouTube => ContentDraft::YouTube(YouTubeContent::empty()),
            BlockKind::Spotify => ContentDraft::Spotify(SpotifyContent::empty()),
            BlockKind::SoundCloud => ContentDraft::SoundCloud(SoundCloudContent::empty()),
            BlockKind::Iframe => ContentDraft::Iframe(IframeContent::empty()),
            BlockKind::Article => ContentDraft::Article(ArticleContent::empty()),
            BlockKind::Rss => ContentDraft::Rss(RssContent::empty()),
            BlockKind::Text => ContentDraft::Text(TextContent::empty()),
        }
    }

    /// Seed a draft from stored content
    pub fn from_content(content: &BlockContent) -> Result<Self, EditorError> {
        Ok(match content {
            BlockContent::Link(c) => ContentDraft::Link(c.clone()),
            BlockContent::YouTube(c) => ContentDraft::YouTube(c.clone()),
            BlockContent::Spotify(c) => ContentDraft::Spotify(c.clone()),
            BlockContent::SoundCloud(c) => ContentDraft::SoundCloud(c.clone()),
            BlockContent::Iframe(c) => ContentDraft::Iframe(c.clone()),
            BlockContent::Article(c) => ContentDraft::Article(c.clone()),
            BlockContent::Rss(c) => ContentDraft::Rss(c.clone()),
            BlockContent::Text(c) => ContentDraft::Text(c.clone()),
            BlockContent::Unsupported(unsupported) => {
                return Err(EditorError::UnsupportedKind(unsupported.kind.clone()))
            }
        })
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            ContentDraft::Link(_) => BlockKind::Link,
            ContentDraft::YouTube(_) => BlockKind::YouTube,
            ContentDraft::Spotify(_) => BlockKind::Spotify,
            ContentDraft::SoundCloud(_) => BlockKind::SoundCloud,
            ContentDraft::Iframe(_) => BlockKind::Iframe,
            ContentDraft::Article(_) => BlockKind::Article,
            ContentDraft::Rss(_) => BlockKind::Rss,
            ContentDraft::Text(_) => BlockKind::Text,
        }
    }

    pub fn fields(&self, icons: &dyn IconCatalog) -> Vec<FieldSpec> {
        match self {
            ContentDraft::Link(c) => c.fields(icons),
            ContentDraft::YouTube(c) => c.fields(icons),
            ContentDraft::Spotify(c) => c.fields(icons),
            ContentDraft::SoundCloud(c) => c.fields(icons),
            ContentDraft::Iframe(c) => c.fields(icons),
            ContentDraft::Article(c) => c.fields(icons),
            ContentDraft::Rss(c) => c.fields(icons),
            ContentDraft::Text(c) => c.fields(icons),
        }
    }

    pub fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), EditorError> {
        match self {
            ContentDraft::Link(c) => c.set_field(name, value),
            ContentDraft::YouTube(c) => c.set_field(name, value),
            ContentDraft::Spotify(c) => c.set_field(name, value),
            ContentDraft::SoundCloud(c) => c.set_field(name, value),
            ContentDraft::Iframe(c) => c.set_field(name, value),
            ContentDraft::Article(c) => c.set_field(name, value),
            ContentDraft::Rss(c) => c.set_field(name, value),
            ContentDraft::Text(c) => c.set_field(name, value),
        }
    }

    pub fn to_content(&self) -> BlockContent {
        match self {
            ContentDraft::Link(c) => BlockContent::Link(c.clone()),
            ContentDraft::YouTube(c) => BlockContent::YouTube(c.clone()),
            ContentDraft::Spotify(c) => BlockContent::Spotify(c.clone()),
            ContentDraft::SoundCloud(c) => BlockContent::SoundCloud(c.clone()),
            ContentDraft::Iframe(c) => BlockContent::Iframe(c.clone()),
            ContentDraft::Article(c) => BlockContent::Article(c.clone()),
            ContentDraft::Rss(c) => BlockContent::Rss(c.clone()),
            ContentDraft::Text(c) => BlockContent::Text(c.clone()),
        }
    }
}

/// Names of the payload fields a kind accepts
pub fn field_names(kind: BlockKind, icons: &dyn IconCatalog) -> Vec<&'static str> {
    ContentDraft::empty(kind)
        .fields(icons)
        .into_iter()
        .map(|field| field.name)
        .collect()
}
