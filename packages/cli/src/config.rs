use anyhow::Context;
use linkpage_model::{Block, Profile};
use linkpage_page::Page;
use linkpage_renderer::HtmlOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "linkpage.config.json";

/// Linkpage configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Profile shown above the blocks
    #[serde(default)]
    pub profile: Profile,

    /// Blocks in storage order
    #[serde(default)]
    pub blocks: Vec<Block>,

    /// HTML output options
    #[serde(default)]
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    #[serde(default = "default_indent")]
    pub indent: String,
}

fn default_pretty() -> bool {
    true
}

fn default_indent() -> String {
    "  ".to_string()
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            indent: default_indent(),
        }
    }
}

impl Config {
    /// Path of the config file inside a directory
    pub fn path_in(dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(DEFAULT_CONFIG_NAME)
    }

    /// Load config from a directory
    pub fn load(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_path = Self::path_in(dir);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config in {}", config_path.display()))?;
            Ok(config)
        } else {
            // Sample page if none exists
            tracing::debug!(path = %config_path.display(), "No config file, using sample page");
            Ok(Config::default())
        }
    }

    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            pretty: self.html.pretty,
            indent: self.html.indent.clone(),
        }
    }

    pub fn into_page(self) -> Page {
        Page::new(self.profile, self.blocks)
    }
}

impl Default for Config {
    fn default() -> Self {
        let sample = Page::sample();
        Self {
            profile: sample.profile().clone(),
            blocks: sample.blocks().to_vec(),
            html: HtmlConfig::default(),
        }
    }
}
