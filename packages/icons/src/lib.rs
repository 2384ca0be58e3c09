//! # Linkpage Icons
//!
//! Maps the symbolic icon names stored on link blocks to displayable
//! glyphs. Unknown names resolve to the generic external-link glyph.

use serde::Serialize;

/// Glyph used when a name is not in the catalog
pub const FALLBACK_GLYPH: &str = "external-link";

/// Displayable icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IconHandle {
    /// Glyph identifier understood by the icon font / sprite sheet
    pub glyph: &'static str,
}

impl IconHandle {
    pub const fn new(glyph: &'static str) -> Self {
        Self { glyph }
    }

    pub const fn fallback() -> Self {
        Self::new(FALLBACK_GLYPH)
    }
}

/// One entry of an icon selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconOption {
    pub name: &'static str,
    pub label: String,
    pub handle: IconHandle,
}

/// Lookup from symbolic name to icon
pub trait IconCatalog {
    /// Resolve a name, falling back to the external-link icon
    fn resolve(&self, name: &str) -> IconHandle;

    /// All selectable icons, in display order
    fn options(&self) -> Vec<IconOption>;
}

const BUILTIN: &[(&str, &str)] = &[
    ("github", "github"),
    ("twitter", "twitter"),
    ("instagram", "instagram"),
    ("linkedin", "linkedin"),
    ("youtube", "youtube"),
    ("globe", "globe"),
    ("mail", "mail"),
    ("phone", "phone"),
    ("external", "external-link"),
    ("message", "message-circle"),
    ("location", "map-pin"),
    ("music", "music"),
    ("camera", "camera"),
    ("code", "code"),
    ("heart", "heart"),
    ("star", "star"),
    ("zap", "zap"),
    ("coffee", "coffee"),
    ("book", "book"),
    ("briefcase", "briefcase"),
    ("user", "user"),
    ("home", "home"),
    ("settings", "settings"),
];

/// The fixed catalog shipped with the page builder
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinIcons;

impl BuiltinIcons {
    pub fn contains(&self, name: &str) -> bool {
        BUILTIN.iter().any(|(n, _)| *n == name)
    }
}

impl IconCatalog for BuiltinIcons {
    fn resolve(&self, name: &str) -> IconHandle {
        BUILTIN
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, glyph)| IconHandle::new(glyph))
            .unwrap_or_else(IconHandle::fallback)
    }

    fn options(&self) -> Vec<IconOption> {
        BUILTIN
            .iter()
            .map(|&(name, glyph)| IconOption {
                name,
                label: capitalize(name),
                handle: IconHandle::new(glyph),
            })
            .collect()
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_name() {
        assert_eq!(BuiltinIcons.resolve("location").glyph, "map-pin");
        assert_eq!(BuiltinIcons.resolve("globe").glyph, "globe");
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(BuiltinIcons.resolve("myspace"), IconHandle::fallback());
        assert_eq!(BuiltinIcons.resolve(""), IconHandle::fallback());
    }

    #[test]
    fn test_options_have_capitalized_labels() {
        let options = BuiltinIcons.options();
        assert_eq!(options.len(), 23);
        assert_eq!(options[0].name, "github");
        assert_eq!(options[0].label, "Github");
        assert!(options.iter().all(|o| BuiltinIcons.contains(o.name)));
    }
}
