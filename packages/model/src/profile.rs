use serde::{Deserialize, Serialize};

pub const DEFAULT_PROFILE_NAME: &str = "Your Name";
pub const DEFAULT_PROFILE_BIO: &str = "Build your own link page with all your favorite content...";
pub const DEFAULT_AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";

/// Page owner profile shown above the blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub avatar_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_url: Option<String>,
}

impl Profile {
    /// Avatar fallback text: first character of each word of the name
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROFILE_NAME.to_string(),
            bio: DEFAULT_PROFILE_BIO.to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
            background_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let profile = Profile {
            name: "Ada  Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.initials(), "AL");

        let empty = Profile {
            name: String::new(),
            ..Default::default()
        };
        assert_eq!(empty.initials(), "");
    }

    #[test]
    fn test_partial_profile_uses_defaults() {
        let profile: Profile = serde_json::from_str(r#"{ "name": "Sam" }"#).unwrap();
        assert_eq!(profile.name, "Sam");
        assert_eq!(profile.bio, DEFAULT_PROFILE_BIO);
        assert_eq!(profile.background_url, None);
    }
}
