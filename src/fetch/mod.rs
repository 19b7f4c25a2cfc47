// src/fetch/mod.rs

pub mod archive;

use crate::config::Config;
use crate::error::FetchError;
use reqwest::blocking::Client;
use std::time::Instant;
use tracing::{info, instrument};
use url::Url;

pub use archive::{decode_single_entry, split_lines, RawDocument};

/// Anything that can hand back the raw bytes of the compressed archive.
///
/// The production implementation is [`HttpSource`]; tests plug in a fixed
/// in-memory payload instead.
pub trait ArchiveSource {
    fn fetch_archive(&self) -> Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP download of a single archive URL. No retries.
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| FetchError::Request {
                url: config.url.to_string(),
                source,
            })?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

impl ArchiveSource for HttpSource {
    #[instrument(level = "info", skip(self), fields(url = %self.url))]
    fn fetch_archive(&self) -> Result<Vec<u8>, FetchError> {
        let start = Instant::now();
        let request_err = |source: reqwest::Error| FetchError::Request {
            url: self.url.to_string(),
            source,
        };

        let resp = self
            .client
            .get(self.url.as_str())
            .send()
            .map_err(request_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().map_err(request_err)?;
        info!(bytes = bytes.len(), elapsed = ?start.elapsed(), "downloaded");
        Ok(bytes.to_vec())
    }
}

/// Fetch the archive from `source` and decode its single entry.
pub fn fetch_document(source: &dyn ArchiveSource) -> crate::error::Result<RawDocument> {
    let bytes = source.fetch_archive()?;
    Ok(decode_single_entry(&bytes)?)
}
