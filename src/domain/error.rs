use thiserror::Error;

use crate::api::FetchError;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    Network(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid Content-Length header: {0:?}")]
    InvalidContentLength(String),

    #[error("Could not set up the HTTP client: {0}")]
    ClientSetup(String),
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::ClientBuild(detail) => AppError::ClientSetup(detail),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_build_failure_is_not_a_network_error() {
        let err = AppError::from(FetchError::ClientBuild("no TLS backend".to_string()));
        assert!(matches!(err, AppError::ClientSetup(ref detail) if detail == "no TLS backend"));
    }

    #[test]
    fn test_bad_url_is_reported_as_network_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = AppError::from(FetchError::InvalidUrl(parse_err));
        assert!(matches!(err, AppError::Network(_)));
    }
}
