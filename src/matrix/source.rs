use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::core::error::SimilarityError;

/// One retrievable tabular resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched over HTTP(S)
    Http(String),
    /// Read from the local filesystem
    File(PathBuf),
}

impl DataSource {
    /// Interpret a location string as a URL or a file path
    #[must_use]
    pub fn parse(location: &str) -> Self {
        if is_url(location) {
            Self::Http(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    /// Resolve `name` relative to a base directory or base URL.
    ///
    /// A `name` that is already a URL or an absolute path is used as is.
    #[must_use]
    pub fn resolve(base: &str, name: &str) -> Self {
        if is_url(name) || Path::new(name).is_absolute() {
            return Self::parse(name);
        }

        if is_url(base) {
            Self::Http(format!("{}/{}", base.trim_end_matches('/'), name))
        } else {
            Self::File(Path::new(base).join(name))
        }
    }

    /// Human readable location for logs and errors
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            Self::Http(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.location())
    }
}

fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Retrieves the text of a [`DataSource`] within a time bound
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl Fetcher {
    /// Create a fetcher whose requests give up after `timeout`
    ///
    /// # Errors
    ///
    /// Returns `SimilarityError::SourceUnavailable` if the HTTP client
    /// cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, SimilarityError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SimilarityError::source_unavailable("http client", e))?;

        Ok(Self { client, timeout })
    }

    /// Fetch the full text of a source.
    ///
    /// # Errors
    ///
    /// Returns `SimilarityError::SourceUnavailable` on IO or network failure,
    /// a non-success HTTP status, or a timeout.
    pub async fn fetch_text(&self, source: &DataSource) -> Result<String, SimilarityError> {
        debug!("Fetching {source}");

        let text = match source {
            DataSource::Http(url) => self.fetch_http(url).await?,
            DataSource::File(path) => self.read_file(path).await?,
        };

        debug!("Fetched {} bytes from {source}", text.len());
        Ok(text)
    }

    async fn fetch_http(&self, url: &str) -> Result<String, SimilarityError> {
        let unavailable = |e: reqwest::Error| SimilarityError::source_unavailable(url, e);

        self.client
            .get(url)
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?
            .text()
            .await
            .map_err(unavailable)
    }

    async fn read_file(&self, path: &Path) -> Result<String, SimilarityError> {
        let location = path.display().to_string();

        match tokio::time::timeout(self.timeout, tokio::fs::read_to_string(path)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(SimilarityError::source_unavailable(location, e)),
            Err(_) => Err(SimilarityError::source_unavailable(
                location,
                format!("timed out after {}s", self.timeout.as_secs()),
            )),
        }
    }
}
