//! HTTP infrastructure: implements `ArtifactFetcher` with `reqwest`.
//!
//! The body is streamed chunk by chunk into `<dest>.partial`, which is
//! synced and renamed onto `<dest>` only once the whole body has arrived.
//! Any failure removes the partial file, so `<dest>` is never truncated.
//! A connection that closes before the body is complete (short
//! `Content-Length` or a chunked body cut inside a chunk) is a transport
//! failure.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use sha2::{Digest, Sha256};
use tokio::io::{AsyncWriteExt as _, BufWriter};

use crate::application::ports::ArtifactFetcher;
use crate::domain::artifact::{ArtifactHandle, hex_encode};
use crate::domain::config::DownloadSettings;
use crate::domain::error::FetchError;

/// Write buffer size for the partial file.
pub const CHUNK_SIZE: usize = 8 * 1024;

const USER_AGENT: &str = concat!("agentprov/", env!("CARGO_PKG_VERSION"));

/// Production `ArtifactFetcher` backed by a `reqwest` client.
pub struct HttpFetcher {
    client: reqwest::Client,
    read_timeout: Duration,
    show_progress: bool,
}

impl HttpFetcher {
    /// Build a fetcher with the configured timeouts.
    ///
    /// `show_progress` draws a byte progress bar on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(settings: &DownloadSettings, show_progress: bool) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout())
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            read_timeout: settings.read_timeout(),
            show_progress,
        })
    }

    /// Await one network step, bounded by the read timeout.
    async fn within<T>(
        &self,
        step: impl Future<Output = reqwest::Result<T>>,
    ) -> Result<T, FetchError> {
        match tokio::time::timeout(self.read_timeout, step).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(transport_failed(e)),
            Err(_) => Err(FetchError::TransportFailed(format!(
                "no data received for {}s",
                self.read_timeout.as_secs()
            ))),
        }
    }

    /// Copy the response body into a fresh `partial` file, then fsync it.
    async fn stream_to_file(
        &self,
        response: &mut reqwest::Response,
        partial: &Path,
        expected: Option<u64>,
    ) -> Result<(u64, String), FetchError> {
        let write_failed = |source: std::io::Error| FetchError::WriteFailed {
            path: partial.to_path_buf(),
            source,
        };

        let file = tokio::fs::File::create(partial)
            .await
            .map_err(write_failed)?;
        let mut out = BufWriter::with_capacity(CHUNK_SIZE, file);
        let pb = make_progress_bar(self.show_progress, expected);
        let mut hasher = Sha256::new();
        let mut written = 0u64;

        let copied = loop {
            let chunk = match self.within(response.chunk()).await {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break Ok(()),
                Err(e) => break Err(e),
            };
            if let Err(e) = out.write_all(&chunk).await {
                break Err(write_failed(e));
            }
            hasher.update(&chunk);
            written += chunk.len() as u64;
            pb.inc(chunk.len() as u64);
        };
        pb.finish_and_clear();
        copied?;

        if let Some(total) = expected
            && total != written
        {
            return Err(FetchError::TransportFailed(format!(
                "transfer ended after {written} of {total} bytes"
            )));
        }

        out.flush().await.map_err(write_failed)?;
        out.get_ref().sync_all().await.map_err(write_failed)?;
        Ok((written, hex_encode(&hasher.finalize())))
    }
}

impl ArtifactFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, destination: &Path) -> Result<ArtifactHandle, FetchError> {
        tracing::debug!(url, dest = %destination.display(), "requesting artifact");
        let mut response = self.within(self.client.get(url).send()).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let expected = response.content_length();
        let partial = partial_path(destination);

        let (byte_count, sha256) =
            match self.stream_to_file(&mut response, &partial, expected).await {
                Ok(done) => done,
                Err(e) => {
                    tokio::fs::remove_file(&partial).await.ok();
                    return Err(e);
                }
            };

        if let Err(source) = tokio::fs::rename(&partial, destination).await {
            tokio::fs::remove_file(&partial).await.ok();
            return Err(FetchError::WriteFailed {
                path: destination.to_path_buf(),
                source,
            });
        }

        tracing::debug!(bytes = byte_count, dest = %destination.display(), "artifact written");
        Ok(ArtifactHandle {
            local_path: destination.to_path_buf(),
            byte_count,
            sha256,
        })
    }
}

/// `<dest>.partial`
#[must_use]
pub fn partial_path(dest: &Path) -> PathBuf {
    let mut s = dest.as_os_str().to_owned();
    s.push(".partial");
    PathBuf::from(s)
}

/// Flatten a `reqwest` error and its causes into one line.
fn transport_failed(e: reqwest::Error) -> FetchError {
    FetchError::TransportFailed(format!("{:#}", anyhow::Error::from(e)))
}

fn make_progress_bar(show: bool, total: Option<u64>) -> indicatif::ProgressBar {
    if !show {
        return indicatif::ProgressBar::hidden();
    }
    if let Some(t) = total {
        let pb = indicatif::ProgressBar::new(t);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("    {bar:40.cyan/dim} {percent}%  {bytes}/{total_bytes}")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
                .progress_chars("━━─"),
        );
        pb
    } else {
        indicatif::ProgressBar::new_spinner()
    }
}
