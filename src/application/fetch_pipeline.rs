use std::io::ErrorKind;
use std::path::Path;

use tokio::io::AsyncWriteExt;
use url::Url;

use crate::{
    api::{FetcherConfig, ImageClient, ImageHeaders},
    domain::{AppError, FetchOutcome, RunSummary},
    utils::filename_from_url,
};

/// Verdict on the declared headers of a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    Accept,
    NotImage,
    TooLarge,
}

/// Decide from the declared headers alone whether a response may be saved.
///
/// The content type must start with `image/`. The declared length, when
/// present, must not exceed `max_content_length`; a missing or empty
/// Content-Length skips the size check.
pub fn check_headers(
    headers: &ImageHeaders,
    max_content_length: u64,
) -> Result<HeaderCheck, AppError> {
    let is_image = headers
        .content_type
        .as_deref()
        .is_some_and(|content_type| content_type.starts_with("image/"));
    if !is_image {
        return Ok(HeaderCheck::NotImage);
    }

    let declared = match headers.content_length.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<u64>()
                .map_err(|_| AppError::InvalidContentLength(raw.to_string()))?,
        ),
    };

    match declared {
        Some(length) if length > max_content_length => Ok(HeaderCheck::TooLarge),
        _ => Ok(HeaderCheck::Accept),
    }
}

/// Fetches URLs one at a time and saves the images into the destination directory
#[derive(Clone)]
pub struct FetchPipeline {
    client: ImageClient,
    config: FetcherConfig,
}

impl FetchPipeline {
    pub fn new(config: FetcherConfig) -> Result<Self, AppError> {
        let client = ImageClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// Process every URL in order, handing each outcome to `on_outcome` as soon as it is known
    pub async fn run<F>(&self, urls: &[String], mut on_outcome: F) -> RunSummary
    where
        F: FnMut(&str, &FetchOutcome),
    {
        let mut summary = RunSummary::default();
        for url in urls {
            let outcome = self.process(url).await;
            summary.record(&outcome);
            on_outcome(url, &outcome);
        }

        tracing::info!(
            saved = summary.saved,
            skipped = summary.skipped,
            failed = summary.failed,
            total = summary.total(),
            "Run finished"
        );
        summary
    }

    /// Fetch, validate and save a single URL. Never fails; every error becomes an outcome.
    pub async fn process(&self, url: &str) -> FetchOutcome {
        match self.try_process(url).await {
            Ok(outcome) => outcome,
            Err(err @ AppError::Network(_)) => {
                tracing::warn!(%url, error = %err, "Network failure");
                FetchOutcome::NetworkError(err)
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "Unexpected failure");
                FetchOutcome::OtherError(err)
            }
        }
    }

    async fn try_process(&self, url: &str) -> Result<FetchOutcome, AppError> {
        tracing::debug!(%url, "Fetching");
        let pending = self.client.get(url).await?;

        match check_headers(&pending.headers, self.config.max_content_length)? {
            HeaderCheck::Accept => {}
            HeaderCheck::NotImage => {
                tracing::debug!(%url, content_type = ?pending.headers.content_type, "Not an image");
                return Ok(FetchOutcome::SkippedNotImage);
            }
            HeaderCheck::TooLarge => {
                tracing::debug!(%url, content_length = ?pending.headers.content_length, "Too large");
                return Ok(FetchOutcome::SkippedTooLarge);
            }
        }

        tokio::fs::create_dir_all(&self.config.destination_dir).await?;

        let filename = self.derive_filename(&pending.url);
        let path = self.config.destination_dir.join(&filename);

        if tokio::fs::try_exists(&path).await? {
            return Ok(FetchOutcome::SkippedDuplicate { filename });
        }

        let body = pending.body().await?;

        match write_new_file(&path, &body).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Ok(FetchOutcome::SkippedDuplicate { filename });
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(path = %path.display(), bytes = body.len(), "Saved image");
        Ok(FetchOutcome::Saved { filename, path })
    }

    fn derive_filename(&self, url: &Url) -> String {
        filename_from_url(url).unwrap_or_else(|| self.config.default_filename.clone())
    }
}

/// Write `body` to a file that must not exist yet. A failed write leaves nothing behind.
async fn write_new_file(path: &Path, body: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;

    let written = async {
        file.write_all(body).await?;
        file.sync_all().await
    }
    .await;

    if let Err(e) = written {
        drop(file);
        if let Err(remove_err) = tokio::fs::remove_file(path).await {
            tracing::warn!(path = %path.display(), error = %remove_err, "Failed to remove partial file");
        }
        return Err(e);
    }

    Ok(())
}
