use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, CONTENT_LENGTH, CONTENT_TYPE};

/// Headers the pipeline decides on, as declared by the server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageHeaders {
    pub content_type: Option<String>,
    pub content_length: Option<String>,
}

impl ImageHeaders {
    pub fn from_header_map(headers: &HeaderMap) -> Self {
        let read = |name: HeaderName| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(|value| value.to_string())
        };

        Self {
            content_type: read(CONTENT_TYPE),
            content_length: read(CONTENT_LENGTH),
        }
    }
}

/// Configuration for the fetcher
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub destination_dir: PathBuf,
    pub timeout: Duration,
    /// Ceiling on the declared Content-Length, in bytes
    pub max_content_length: u64,
    pub default_filename: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            destination_dir: PathBuf::from("Fetched_Images"),
            timeout: Duration::from_secs(10),
            max_content_length: 5_000_000,
            default_filename: "downloaded_image.jpg".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_headers_from_map() {
        let mut map = HeaderMap::new();
        map.insert(CONTENT_TYPE, HeaderValue::from_static("image/png"));
        map.insert(CONTENT_LENGTH, HeaderValue::from_static("1234"));

        let headers = ImageHeaders::from_header_map(&map);
        assert_eq!(headers.content_type.as_deref(), Some("image/png"));
        assert_eq!(headers.content_length.as_deref(), Some("1234"));
    }

    #[test]
    fn test_missing_headers() {
        let headers = ImageHeaders::from_header_map(&HeaderMap::new());
        assert_eq!(headers, ImageHeaders::default());
    }

    #[test]
    fn test_default_config() {
        let config = FetcherConfig::default();
        assert_eq!(config.destination_dir, PathBuf::from("Fetched_Images"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_content_length, 5_000_000);
        assert_eq!(config.default_filename, "downloaded_image.jpg");
    }
}
