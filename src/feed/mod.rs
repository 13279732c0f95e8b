//! RSS/Atom feed search.

use feed_rs::parser;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to fetch feed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to parse feed: {0}")]
    Parse(#[from] parser::ParseFeedError),
}

/// One matching feed entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeedHit {
    pub title: String,
    pub url: String,
}

/// Searches syndication feeds by substring match on entry text.
#[derive(Clone)]
pub struct FeedClient {
    http: reqwest::Client,
}

impl FeedClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch `feed_url` and return entries whose title (or description,
    /// when `search_descriptions` is set) contains `query`,
    /// case-insensitively. Scanning stops once `max_results` entries
    /// match; hits keep feed order.
    pub async fn search(
        &self,
        feed_url: &str,
        query: &str,
        max_results: usize,
        search_descriptions: bool,
    ) -> Result<Vec<FeedHit>, FeedError> {
        let body = self
            .http
            .get(feed_url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let feed = parser::parse(body.as_ref())?;
        let needle = query.to_lowercase();

        let mut hits = Vec::new();
        for entry in feed.entries {
            let title = entry.title.map(|t| t.content).unwrap_or_default();
            let description = entry.summary.map(|t| t.content).unwrap_or_default();

            let matched = title.to_lowercase().contains(&needle)
                || (search_descriptions && description.to_lowercase().contains(&needle));
            if matched {
                let url = entry
                    .links
                    .first()
                    .map(|link| link.href.clone())
                    .unwrap_or_default();
                hits.push(FeedHit { title, url });
            }
            if hits.len() >= max_results {
                break;
            }
        }

        Ok(hits)
    }
}
