use crate::domain::model::Card;
use crate::domain::ports::CardSource;
use crate::utils::error::{DealError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// `CardSource` backed by Scryfall's random-card endpoint (or any endpoint
/// returning a single card object per GET).
#[derive(Debug, Clone)]
pub struct ScryfallSource {
    client: Client,
    endpoint: String,
}

impl ScryfallSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CardSource for ScryfallSource {
    async fn fetch_random(&self) -> Result<Card> {
        tracing::debug!("Requesting random card from {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("Provider response status: {}", status);
        if !status.is_success() {
            return Err(DealError::ProviderError { status });
        }

        // Read the full body before decoding so read failures and parse
        // failures surface as distinct errors.
        let body = response.text().await?;
        let card: Card = serde_json::from_str(&body)?;

        tracing::debug!("Fetched card: {}", card.name);
        Ok(card)
    }
}
