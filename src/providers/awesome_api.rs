use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::rate::{QuoteBook, QuoteSource, RateProvider, Rates};

const QUOTES_ENDPOINT: &str = "/last/USD-BRL,EUR-BRL";

// AwesomeApiProvider fetches the latest USD-BRL and EUR-BRL quotes in one request
pub struct AwesomeApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl AwesomeApiProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("cambio/1.0")
            .timeout(timeout)
            .build()?;
        Ok(AwesomeApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl QuoteSource for AwesomeApiProvider {
    #[instrument(name = "AwesomeApiFetch", skip(self))]
    async fn fetch_quotes(&self) -> Result<QuoteBook> {
        let url = format!("{}{}", self.base_url, QUOTES_ENDPOINT);
        debug!("Requesting quotes from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for quotes URL: {}",
                response.status(),
                url
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read quote response body: {}", e))?;

        let quotes: QuoteBook = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse quote response JSON: {}", e))?;
        debug!(pairs = quotes.len(), "Received quotes");
        Ok(quotes)
    }
}

#[async_trait]
impl RateProvider for AwesomeApiProvider {
    async fn get_rates(&self) -> Result<Rates> {
        let quotes = self.fetch_quotes().await?;
        Rates::from_quotes(&quotes)
    }
}
