//! Listing page retrieval.
//!
//! [`Fetcher`] is the seam between the scan loop and the network; tests and
//! alternative transports implement it directly.

use crate::error::{Result, ScanError};
use crate::url_builder::build_search_url;
use async_trait::async_trait;
use milk_core::{config::CODE_PLACEHOLDER, AreaCode, ScanningConfig};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Retrieves the listing page for an area code.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the raw response body for `code`.
    async fn fetch(&self, code: &AreaCode) -> Result<Vec<u8>>;
}

/// HTTP fetcher issuing one `GET` per area code.
#[derive(Debug)]
pub struct HttpFetcher {
    client: Client,
    url_template: String,
    timeout_secs: u64,
}

impl HttpFetcher {
    /// Create a fetcher from the scanning settings.
    ///
    /// # Errors
    /// Returns error if the URL template lacks the code placeholder or the
    /// HTTP client cannot be created.
    pub fn new(settings: &ScanningConfig) -> Result<Self> {
        if !settings.url_template.contains(CODE_PLACEHOLDER) {
            return Err(ScanError::InvalidTemplate {
                template: settings.url_template.clone(),
                reason: format!("missing {CODE_PLACEHOLDER} placeholder"),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| ScanError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url_template: settings.url_template.clone(),
            timeout_secs: settings.timeout_secs,
        })
    }

    fn request_error(&self, code: &AreaCode, error: &reqwest::Error) -> ScanError {
        if error.is_timeout() {
            ScanError::Timeout {
                code: code.clone(),
                seconds: self.timeout_secs,
            }
        } else {
            ScanError::Network {
                code: code.clone(),
                reason: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, code: &AreaCode) -> Result<Vec<u8>> {
        let url = build_search_url(&self.url_template, code);
        debug!(%code, %url, "fetching listing page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.request_error(code, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::HttpStatus {
                code: code.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.request_error(code, &e))?;

        debug!(%code, bytes = body.len(), "listing page received");
        Ok(body.to_vec())
    }
}
