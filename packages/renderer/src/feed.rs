//! RSS preview population.
//!
//! A visible RSS block issues a [`FeedRequest`]; whoever drives the page
//! resolves it (asynchronously) and hands the entries back to the block
//! component. Results for a request that is no longer current are dropped.

use chrono::{Duration as DateDuration, Local, NaiveDate};
use linkpage_model::BlockId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulated latency of the placeholder feed, in milliseconds
pub const PLACEHOLDER_DELAY_MS: u64 = 1000;

/// One preview entry of a feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
}

/// Pending population of one RSS block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRequest {
    pub block_id: BlockId,
    /// Distinguishes successive requests from the same block
    pub generation: u64,
    pub feed_url: String,
    pub max_items: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Feed unavailable: {0}")]
    Unavailable(String),
}

/// Fixed stand-in entries used until real feed retrieval exists
pub fn placeholder_items(today: NaiveDate) -> Vec<FeedItem> {
    let yesterday = today - DateDuration::days(1);

    vec![
        FeedItem {
            title: "Sample feed article".to_string(),
            link: "https://example.com/article1".to_string(),
            description: Some("Article description...".to_string()),
            pub_date: Some(today.format("%Y-%m-%d").to_string()),
        },
        FeedItem {
            title: "Another article from the feed".to_string(),
            link: "https://example.com/article2".to_string(),
            description: Some("Another description...".to_string()),
            pub_date: Some(yesterday.format("%Y-%m-%d").to_string()),
        },
    ]
}

/// Placeholder entries dated today
pub fn placeholder_items_now() -> Vec<FeedItem> {
    placeholder_items(Local::now().date_naive())
}

#[cfg(feature = "async")]
pub use source::{FeedSource, PlaceholderFeed};

#[cfg(feature = "async")]
mod source {
    use super::*;
    use std::future::Future;
    use std::time::Duration;

    /// Retrieves preview entries for a feed
    pub trait FeedSource {
        fn fetch(
            &self,
            request: &FeedRequest,
        ) -> impl Future<Output = Result<Vec<FeedItem>, FeedError>> + Send;
    }

    /// Answers every request with the placeholder entries after a fixed delay
    #[derive(Debug, Clone)]
    pub struct PlaceholderFeed {
        pub delay: Duration,
    }

    impl Default for PlaceholderFeed {
        fn default() -> Self {
            Self {
                delay: Duration::from_millis(PLACEHOLDER_DELAY_MS),
            }
        }
    }

    impl FeedSource for PlaceholderFeed {
        fn fetch(
            &self,
            request: &FeedRequest,
        ) -> impl Future<Output = Result<Vec<FeedItem>, FeedError>> + Send {
            let delay = self.delay;
            let feed_url = request.feed_url.clone();
            async move {
                tracing::debug!(feed_url = %feed_url, "Serving placeholder feed");
                tokio::time::sleep(delay).await;
                Ok(placeholder_items_now())
            }
        }
    }
}
