use bytes::Bytes;
use reqwest::{Client, Response};
use thiserror::Error;
use url::Url;

use super::models::{FetcherConfig, ImageHeaders};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// A response whose status was a success, with the body not yet read
pub struct PendingImage {
    /// The URL as requested, before any redirect
    pub url: Url,
    pub headers: ImageHeaders,
    response: Response,
}

impl PendingImage {
    /// Reads the whole body in one go
    pub async fn body(self) -> Result<Bytes> {
        Ok(self.response.bytes().await?)
    }
}

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
}

impl ImageClient {
    /// The timeout bounds connecting and each read, not the whole transfer
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.timeout)
            .read_timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }

    /// Issues a GET and fails on any non-success status
    pub async fn get(&self, url: &str) -> Result<PendingImage> {
        let url = Url::parse(url)?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let headers = ImageHeaders::from_header_map(response.headers());

        Ok(PendingImage {
            url,
            headers,
            response,
        })
    }
}
