//! Retrieve the source text: HTTP(S) via reqwest, or a local file.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use async_trait::async_trait;
use scraper::{Html, Selector};
use url::Url;

use crate::error::FetchError;

/// Where the text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(Url),
    Local(PathBuf),
}

impl FromStr for Source {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FetchError::InvalidSource(s.to_string()));
        }
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Source::Remote(url)),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(Source::Local)
                .map_err(|_| FetchError::InvalidSource(s.to_string())),
            _ => Ok(Source::Local(PathBuf::from(s))),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote(url) => write!(f, "{url}"),
            Source::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, source: &Source) -> Result<String, FetchError>;
}

/// Fetches remote sources over HTTP and local ones from disk.
#[derive(Debug, Clone, Default)]
pub struct SourceFetcher {
    client: reqwest::Client,
    extract_html: bool,
}

impl SourceFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat fetched text as HTML and keep only its body text.
    pub fn extract_html(mut self, yes: bool) -> Self {
        self.extract_html = yes;
        self
    }

    async fn fetch_url(&self, url: &Url) -> Result<String, FetchError> {
        let request_error = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        response.text().await.map_err(request_error)
    }
}

#[async_trait]
impl Fetch for SourceFetcher {
    async fn fetch(&self, source: &Source) -> Result<String, FetchError> {
        let text = match source {
            Source::Remote(url) => self.fetch_url(url).await?,
            Source::Local(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| FetchError::Read {
                        path: path.clone(),
                        source,
                    })?
            }
        };
        if self.extract_html {
            body_text(&text)
        } else {
            Ok(text)
        }
    }
}

/// Text content of the document body, or of the whole document if there is no body.
fn body_text(html: &str) -> Result<String, FetchError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("body").map_err(|e| FetchError::Html(e.to_string()))?;
    let text = match document.select(&selector).next() {
        Some(body) => body.text().collect::<Vec<_>>().join(" "),
        None => document.root_element().text().collect::<Vec<_>>().join(" "),
    };
    Ok(text.trim().to_string())
}
