use crate::config::NewsConfig;
use anyhow::{Result, anyhow};
use chrono::{Local, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Shown in place of the article image when the API returns no `urlToImage`.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://salonlfc.com/wp-content/uploads/2018/01/image-not-found-1-scaled-1150x647.png";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A news article as returned by the NewsAPI search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Article {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn source_name(&self) -> &str {
        self.source.name.as_deref().unwrap_or("")
    }

    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }

    pub fn published_at(&self) -> &str {
        self.published_at.as_deref().unwrap_or("")
    }

    /// Image to render for this article, falling back to the placeholder.
    pub fn image_url(&self) -> &str {
        match self.url_to_image.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => PLACEHOLDER_IMAGE_URL,
        }
    }
}

// Search API response structure
#[derive(Debug, Deserialize)]
struct SearchResponse {
    articles: Vec<Article>,
}

/// Parse a search endpoint response body into its articles.
pub fn parse_articles(body: &str) -> Result<Vec<Article>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.articles)
}

/// The day before `today`; both ends of the one-day search window.
pub fn yesterday(today: NaiveDate) -> NaiveDate {
    today.pred_opt().unwrap_or(today)
}

/// Query parameters for one headline search, minus the API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineQuery {
    pub q: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub sort_by: String,
    pub page_size: u32,
}

impl HeadlineQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.q.clone()),
            ("from", self.from.format("%Y-%m-%d").to_string()),
            ("to", self.to.format("%Y-%m-%d").to_string()),
            ("sortBy", self.sort_by.clone()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct NewsClient {
    client: Client,
    config: NewsConfig,
}

impl NewsClient {
    pub fn new(config: &NewsConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the search for the single-day window ending yesterday.
    pub fn headlines_request(&self, today: NaiveDate) -> HeadlineQuery {
        let day = yesterday(today);
        HeadlineQuery {
            q: self.config.query.clone(),
            from: day,
            to: day,
            sort_by: self.config.sort_by.clone(),
            page_size: self.config.page_size,
        }
    }

    /// Fetch yesterday's headlines. Network, status and parse failures all
    /// come back as the same error.
    pub async fn fetch_headlines(&self) -> Result<Vec<Article>> {
        let query = self.headlines_request(Local::now().date_naive());
        self.fetch(&query).await
    }

    pub async fn fetch(&self, query: &HeadlineQuery) -> Result<Vec<Article>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow!("No NewsAPI key configured (set NEWS_API_KEY)"))?;

        let mut params = query.params();
        params.push(("apiKey", api_key.to_string()));

        debug!(q = %query.q, from = %query.from, page_size = query.page_size, "Requesting headlines");

        // Strip the URL from reqwest errors so the key never reaches the UI or the log.
        let body = self
            .client
            .get(&self.config.endpoint)
            .query(&params)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?
            .error_for_status()
            .map_err(reqwest::Error::without_url)?
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;

        let articles = parse_articles(&body)?;
        info!(count = articles.len(), q = %query.q, "Fetched headlines");
        Ok(articles)
    }
}
