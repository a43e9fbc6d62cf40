use crate::adapters::http::join_base;
use crate::core::{CardResolver, ConfigProvider, ResolvedCard, ScryfallCard};
use crate::utils::error::{RecsError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Error object Scryfall sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ScryfallErrorBody {
    #[serde(default)]
    details: Option<String>,
}

pub struct ScryfallResolver {
    client: Client,
    base_url: String,
}

impl ScryfallResolver {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(client: Client, config: &C) -> Self {
        Self::new(client, config.scryfall_base_url())
    }
}

#[async_trait]
impl CardResolver for ScryfallResolver {
    async fn resolve(&self, query: &str) -> Result<ResolvedCard> {
        let url = join_base(&self.base_url, "cards/named");

        tracing::debug!("Making Scryfall request to: {} (fuzzy={})", url, query);
        let response = self
            .client
            .get(&url)
            .query(&[("fuzzy", query)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Scryfall response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            if let Ok(body) = response.json::<ScryfallErrorBody>().await {
                if let Some(details) = body.details {
                    tracing::debug!("Scryfall: {}", details);
                }
            }
            return Err(RecsError::CardNotFound {
                query: query.to_string(),
            });
        }

        if !status.is_success() {
            return Err(RecsError::UpstreamStatusError {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        let card: ScryfallCard = serde_json::from_str(&body)?;

        if let Some(partner) = card.partner() {
            tracing::info!("Partner found: {}", partner.name);
        }

        Ok(ResolvedCard::from(card))
    }
}
