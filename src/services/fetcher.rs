use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::domain::PollError;

/// Plain GET against the places endpoint. No extra headers, no retries.
pub struct Fetcher {
    client: Client,
    url: Url,
}

impl Fetcher {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, PollError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| PollError::Network {
                url: url.to_string(),
                source,
            })?;

        Ok(Fetcher { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn fetch_snapshot(&self) -> Result<String, PollError> {
        let network_err = |source| PollError::Network {
            url: self.url.to_string(),
            source,
        };

        let res = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(network_err)?;

        let status = res.status();
        if !status.is_success() {
            return Err(PollError::Status {
                url: self.url.to_string(),
                status,
            });
        }

        let page_source = res.text().await.map_err(network_err)?;
        log::debug!("Fetched {} bytes from {}", page_source.len(), self.url);

        Ok(page_source)
    }
}
