use crate::config::ImportConfig;
use crate::error::ImportError;
use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;

/// Fetches pages with a browser User-Agent and a bounded timeout.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> Result<Self, ImportError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(15));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &ImportConfig) -> Result<Self, ImportError> {
        Self::new(
            Some(Duration::from_secs(config.timeout_secs)),
            &config.user_agent,
        )
    }

    /// Body of `url`; non-success statuses are errors.
    pub async fn fetch(&self, url: &str) -> Result<String, ImportError> {
        let parsed = Url::parse(url).map_err(|_| ImportError::InvalidUrl(url.to_string()))?;
        debug!("Fetching {}", parsed);
        let response = self.client.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
