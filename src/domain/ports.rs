use crate::domain::model::{RecommendationSet, ResolvedCard};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn scryfall_base_url(&self) -> &str;
    fn edhrec_base_url(&self) -> &str;
    fn browser_user_agent(&self) -> &str;
    fn request_timeout_seconds(&self) -> Option<u64>;
}

/// Maps a possibly misspelled card name onto a canonical card.
#[async_trait]
pub trait CardResolver: Send + Sync {
    async fn resolve(&self, query: &str) -> Result<ResolvedCard>;
}

#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn fetch_recommendations(&self, resolved: &ResolvedCard) -> Result<RecommendationSet>;
}
