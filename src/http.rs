//! HTTP transport for probing hosts, scraping pages and downloading assets.
//!
//! The pipeline only talks to the network through [`HttpTransport`], which
//! lets tests drive it with canned pages.

use std::path::Path;

use async_trait::async_trait;
use reqwest::Client;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::{config, error::CoverError};

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a plain GET. Succeeds whenever the host answered at all,
    /// whatever the status code.
    async fn probe(&self, url: &str) -> Result<(), CoverError>;

    /// Fetches a page and returns its body as text. The status is not
    /// checked; an error page simply parses to no matches.
    async fn get_text(&self, url: &str) -> Result<String, CoverError>;

    /// Streams `url` into the file at `dest` and returns the number of bytes
    /// written.
    ///
    /// Fails with [`CoverError::AssetNotFound`] on a non-success status,
    /// before `dest` is created.
    async fn download(&self, url: &str, dest: &Path) -> Result<u64, CoverError>;
}

pub struct ReqwestTransport {
    client: Client,
    chunk_size: usize,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, CoverError> {
        Self::with_chunk_size(config::chunk_size())
    }

    /// Transport writing downloads through a buffer of `chunk_size` bytes.
    pub fn with_chunk_size(chunk_size: usize) -> Result<Self, CoverError> {
        let client = Client::builder().user_agent(config::user_agent()).build()?;
        Ok(Self {
            client,
            chunk_size: chunk_size.clamp(1, config::MAX_CHUNK_SIZE),
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn probe(&self, url: &str) -> Result<(), CoverError> {
        self.client.get(url).send().await?;
        Ok(())
    }

    async fn get_text(&self, url: &str) -> Result<String, CoverError> {
        let response = self.client.get(url).send().await?;
        Ok(response.text().await?)
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<u64, CoverError> {
        let mut response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoverError::AssetNotFound {
                url: url.to_string(),
                status,
            });
        }

        let file = tokio::fs::File::create(dest).await?;
        let mut writer = BufWriter::with_capacity(self.chunk_size, file);

        let streamed: Result<u64, CoverError> = async {
            let mut written: u64 = 0;
            while let Some(chunk) = response.chunk().await? {
                writer.write_all(&chunk).await?;
                written += chunk.len() as u64;
            }
            writer.flush().await?;
            Ok(written)
        }
        .await;

        // A half-written asset is worse than none.
        if streamed.is_err() {
            drop(writer);
            let _ = async_fs::remove_file(dest).await;
        }
        streamed
    }
}
