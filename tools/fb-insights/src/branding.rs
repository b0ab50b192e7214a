//! Branding logo fetch.
//!
//! The header shows the logo's alt text once the image has been fetched.
//! A failed fetch leaves the header without a logo and is only logged; the
//! dashboard never waits for it.

use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client};
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{info, warn};

/// Errors that can occur while fetching the logo.
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected content type '{0}'")]
    NotAnImage(String),
    #[error("empty response body")]
    Empty,
}

/// A successfully fetched logo. Only metadata is kept; the terminal cannot
/// draw the image itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    pub content_type: String,
    pub size_bytes: usize,
}

/// Logo state shown by the header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogoStatus {
    /// Fetch in flight; nothing is shown.
    #[default]
    Pending,
    Loaded(LogoImage),
    /// Fetch failed; nothing is shown.
    Unavailable(String),
    /// Fetching is turned off in the configuration.
    Disabled,
}

impl LogoStatus {
    /// Convert a fetch outcome, logging failures.
    pub fn from_result(result: Result<LogoImage, LogoError>) -> Self {
        match result {
            Ok(image) => {
                info!(
                    content_type = %image.content_type,
                    size_bytes = image.size_bytes,
                    "logo loaded"
                );
                LogoStatus::Loaded(image)
            }
            Err(e) => {
                warn!("logo unavailable, rendering without it: {}", e);
                LogoStatus::Unavailable(e.to_string())
            }
        }
    }

    /// Whether the header should draw the logo slot.
    pub fn is_visible(&self) -> bool {
        matches!(self, LogoStatus::Loaded(_))
    }
}

/// HTTP client for the logo URL.
pub struct LogoFetcher {
    client: Client,
    url: String,
}

impl LogoFetcher {
    pub fn new(url: impl Into<String>) -> Result<Self, LogoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Use a preconfigured client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the logo and check that it looks like an image.
    pub async fn fetch(&self) -> Result<LogoImage, LogoError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LogoError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.starts_with("image/") {
            return Err(LogoError::NotAnImage(content_type));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(LogoError::Empty);
        }

        Ok(LogoImage {
            content_type,
            size_bytes: body.len(),
        })
    }
}

/// Fetch the logo in the background. The receiver yields exactly one status.
pub fn spawn_fetch(fetcher: LogoFetcher) -> oneshot::Receiver<LogoStatus> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let result = fetcher.fetch().await;
        // receiver may be gone if the user already quit
        let _ = tx.send(LogoStatus::from_result(result));
    });
    rx
}
