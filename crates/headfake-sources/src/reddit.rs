//! Reddit listing API source.
//!
//! Pulls post titles from public subreddit listings, by default the real
//! side from r/nottheonion and the fake side from r/TheOnion.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use headfake_core::model::{BatchKind, GameSettings};
use headfake_core::traits::{HeadlineSource, RawHeadline};

use crate::error::SourceError;

const DEFAULT_BASE_URL: &str = "https://www.reddit.com";
// Reddit throttles generic library user agents hard; a descriptive one is
// required by their API rules.
const DEFAULT_USER_AGENT: &str = "headfake/0.1 (terminal headline quiz)";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Reddit caps listing pages at 100 posts.
const PAGE_LIMIT: u32 = 100;

/// Listing sorts reddit accepts.
pub const LISTING_SORTS: &[&str] = &["hot", "new", "top", "rising", "controversial"];

/// Headline source backed by the reddit listing API.
pub struct RedditSource {
    base_url: String,
    real_subreddit: String,
    fake_subreddit: String,
    client: reqwest::Client,
}

impl RedditSource {
    pub fn new(
        base_url: Option<String>,
        user_agent: Option<String>,
        real_subreddit: &str,
        fake_subreddit: &str,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            real_subreddit: real_subreddit.to_string(),
            fake_subreddit: fake_subreddit.to_string(),
            client,
        }
    }

    async fn fetch_page(&self, url: &str) -> anyhow::Result<Listing> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout(DEFAULT_TIMEOUT_SECS)
            } else {
                SourceError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(5)
                * 1000;
            return Err(SourceError::RateLimited {
                retry_after_ms: retry_after,
            }
            .into());
        }
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::ApiError {
                status,
                message: body,
            }
            .into());
        }

        let listing: Listing = response.json().await.map_err(|e| SourceError::ApiError {
            status: 0,
            message: format!("failed to parse listing: {e}"),
        })?;
        Ok(listing)
    }
}

#[derive(Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
    #[serde(default)]
    after: Option<String>,
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Deserialize)]
struct ListingChild {
    data: PostData,
}

#[derive(Deserialize)]
struct PostData {
    title: String,
    /// A URL, or a marker like "self" / "default" for posts without one.
    #[serde(default)]
    thumbnail: String,
}

#[async_trait]
impl HeadlineSource for RedditSource {
    fn name(&self) -> &str {
        "reddit"
    }

    #[instrument(skip(self, settings), fields(sort = %settings.sort_by, bank_size = settings.bank_size))]
    async fn fetch(
        &self,
        kind: BatchKind,
        settings: &GameSettings,
    ) -> anyhow::Result<Vec<RawHeadline>> {
        let subreddit = match kind {
            BatchKind::Real => &self.real_subreddit,
            BatchKind::Fake => &self.fake_subreddit,
        };

        let mut items: Vec<RawHeadline> = Vec::new();
        let mut after: Option<String> = None;

        while (items.len() as u32) < settings.bank_size {
            let remaining = settings.bank_size - items.len() as u32;
            let limit = remaining.min(PAGE_LIMIT);
            let mut url = format!(
                "{}/r/{}/{}.json?limit={}&raw_json=1",
                self.base_url, subreddit, settings.sort_by, limit
            );
            if let Some(token) = &after {
                url.push_str(&format!("&after={token}"));
            }

            let page = self.fetch_page(&url).await?;
            let fetched = page.data.children.len();
            items.extend(page.data.children.into_iter().map(|child| RawHeadline {
                title: child.data.title,
                thumbnail_url: child.data.thumbnail,
            }));
            tracing::debug!(subreddit, fetched, total = items.len(), "listing page");

            if fetched == 0 {
                break;
            }
            match page.data.after {
                Some(token) if !token.is_empty() => after = Some(token),
                _ => break,
            }
        }

        items.truncate(settings.bank_size as usize);
        Ok(items)
    }
}
