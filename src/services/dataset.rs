// src/services/dataset.rs
use std::time::Duration;

use async_trait::async_trait;

use crate::error::AppError;
use crate::http_client;

/// Somewhere a server-side dataset excerpt can be pulled from.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn excerpt(&self) -> Result<String, AppError>;
}

/// Fixed CSV file on a public static host.
#[derive(Debug, Clone)]
pub struct RemoteDataset {
    url: String,
    max_lines: usize,
    timeout: Option<Duration>,
}

impl RemoteDataset {
    pub fn new(url: impl Into<String>, max_lines: usize, timeout: Option<Duration>) -> Self {
        Self {
            url: url.into(),
            max_lines,
            timeout,
        }
    }
}

pub fn first_lines(text: &str, max_lines: usize) -> String {
    text.split('\n').take(max_lines).collect::<Vec<_>>().join("\n")
}

#[async_trait]
impl DatasetSource for RemoteDataset {
    async fn excerpt(&self) -> Result<String, AppError> {
        let response = http_client::client(self.timeout)?
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        Ok(first_lines(&text, self.max_lines))
    }
}
