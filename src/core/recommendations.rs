use crate::adapters::http::join_base;
use crate::core::{ConfigProvider, RecommendationSet, RecommendationSource, ResolvedCard};
use crate::utils::error::{RecsError, Result};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// EDHREC rejects requests that do not look like they come from a browser.
pub const DEFAULT_BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

pub struct EdhrecSource {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl EdhrecSource {
    pub fn new(client: Client, base_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            user_agent: user_agent.into(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(client: Client, config: &C) -> Self {
        Self::new(
            client,
            config.edhrec_base_url(),
            config.browser_user_agent(),
        )
    }

    pub fn page_url(&self, slug: &str) -> String {
        join_base(&self.base_url, &format!("pages/commanders/{}.json", slug))
    }
}

#[async_trait]
impl RecommendationSource for EdhrecSource {
    async fn fetch_recommendations(&self, resolved: &ResolvedCard) -> Result<RecommendationSet> {
        let slug = resolved.lookup_key();
        let url = self.page_url(&slug);
        tracing::info!("Formatted name: \"{}\". Fetching from: {}", slug, url);

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("EDHREC response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(RecsError::RecommendationsNotFound { slug });
        }

        if !status.is_success() {
            return Err(RecsError::UpstreamStatusError {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let page: Value = serde_json::from_str(&body)?;
        let names = extract_card_names(&page);

        tracing::debug!("Extracted {} recommendations for {}", names.len(), slug);
        Ok(names)
    }
}

/// Flattens `container.json_dict.cardlists[].cardviews[].name` into an
/// ordered set. Missing levels and entries without a string name are
/// treated as empty.
pub fn extract_card_names(page: &Value) -> RecommendationSet {
    let cardlists = page
        .get("container")
        .and_then(|container| container.get("json_dict"))
        .and_then(|json_dict| json_dict.get("cardlists"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    cardlists
        .iter()
        .filter_map(|list| list.get("cardviews").and_then(Value::as_array))
        .flatten()
        .filter_map(|card| card.get("name").and_then(Value::as_str))
        .collect()
}
