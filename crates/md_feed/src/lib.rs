use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use tracing::{debug, info};

use md_core::{Article, ArticleSource, Error, FeedConfig, Result};

const STREAM_CONTENTS_PATH: &str = "/reader/api/0/stream/contents";

/// Client for the Google Reader compatible read API exposed by FreshRSS.
/// One request fetches the service's candidate set; no pagination.
pub struct FeedClient {
    client: reqwest::Client,
    config: FeedConfig,
}

#[derive(Debug, Deserialize)]
struct StreamContents {
    #[serde(default)]
    items: Vec<StreamItem>,
}

#[derive(Debug, Deserialize)]
struct StreamItem {
    title: String,
    /// Publish time in epoch seconds
    published: i64,
    #[serde(default)]
    alternate: Vec<Alternate>,
}

#[derive(Debug, Deserialize)]
struct Alternate {
    href: String,
}

impl FeedClient {
    pub fn new(config: FeedConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn fetch_stream(&self) -> Result<StreamContents> {
        let url = format!("{}{}", self.config.base_url, STREAM_CONTENTS_PATH);
        debug!("Fetching stream contents from {}", url);

        let response = self
            .client
            .get(&url)
            .header(
                "Authorization",
                format!("GoogleLogin auth={}", self.config.auth_token),
            )
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Auth(
                "feed service rejected the auth token".to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Fetch(format!(
                "feed service returned {}: {}",
                status, body
            )));
        }

        Ok(response.json::<StreamContents>().await?)
    }
}

#[async_trait]
impl ArticleSource for FeedClient {
    async fn fetch_todays_articles(&self) -> Result<Vec<Article>> {
        let stream = self.fetch_stream().await?;
        let today = Local::now().date_naive();
        let articles = articles_published_on(stream.items, today);
        info!("📰 {} articles published today", articles.len());
        Ok(articles)
    }
}

/// Local calendar date of an epoch-seconds publish time.
fn local_date(epoch_secs: i64) -> Option<NaiveDate> {
    Local
        .timestamp_opt(epoch_secs, 0)
        .single()
        .map(|dt| dt.date_naive())
}

/// Keeps items whose local publish date matches `date`, preserving the
/// upstream order. Items without an alternate link are dropped.
fn articles_published_on(items: Vec<StreamItem>, date: NaiveDate) -> Vec<Article> {
    items
        .into_iter()
        .filter(|item| local_date(item.published) == Some(date))
        .filter_map(|item| {
            let href = item.alternate.into_iter().next()?.href;
            let published_at: DateTime<Utc> = Utc.timestamp_opt(item.published, 0).single()?;
            Some(Article {
                title: item.title,
                url: href,
                published_at,
            })
        })
        .collect()
}
