use crate::core::{CardResolver, RecommendationSource};
use crate::utils::error::RecsError;
use reqwest::StatusCode;

/// Failure already translated into what the caller gets to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerError {
    pub status: StatusCode,
    pub message: String,
}

impl HandlerError {
    fn from_lookup(query: &str, err: &RecsError) -> Self {
        if err.is_not_found() {
            tracing::warn!(
                "Card \"{}\" was not found on Scryfall or has no EDHREC page: {}",
                query,
                err
            );
            Self {
                status: StatusCode::NOT_FOUND,
                message: format!(
                    "Card \"{}\" was not found or has no recommendations. Check the name.",
                    query
                ),
            }
        } else {
            tracing::error!(
                "Backend lookup failed for \"{}\": {} ({:?})",
                query,
                err,
                err.category()
            );
            Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!(
                    "Failed to process the request for \"{}\". EDHREC may be offline or the commander name is invalid.",
                    query
                ),
            }
        }
    }

    fn no_recommendations(query: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("No recommendations found for \"{}\" on EDHREC.", query),
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for HandlerError {}

/// Runs the card lookup followed by the recommendation lookup.
pub struct RecommendationService<R: CardResolver, S: RecommendationSource> {
    resolver: R,
    source: S,
}

impl<R: CardResolver, S: RecommendationSource> RecommendationService<R, S> {
    pub fn new(resolver: R, source: S) -> Self {
        Self { resolver, source }
    }

    pub async fn handle(&self, query: &str) -> Result<Vec<String>, HandlerError> {
        tracing::info!("Received lookup for: {}", query);

        let resolved = self
            .resolver
            .resolve(query)
            .await
            .map_err(|e| HandlerError::from_lookup(query, &e))?;

        tracing::debug!("Resolved \"{}\" to {:?}", query, resolved);

        let recommendations = self
            .source
            .fetch_recommendations(&resolved)
            .await
            .map_err(|e| HandlerError::from_lookup(query, &e))?;

        if recommendations.is_empty() {
            tracing::warn!("No recommendations in EDHREC page for \"{}\"", query);
            return Err(HandlerError::no_recommendations(query));
        }

        tracing::info!(
            "Returning {} recommendations for \"{}\"",
            recommendations.len(),
            query
        );
        Ok(recommendations.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RecommendationSet, ResolvedCard};
    use crate::utils::error::Result;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    enum Lookup {
        Card(ResolvedCard),
        Missing,
        Down,
    }

    struct StubResolver(Lookup);

    #[async_trait]
    impl CardResolver for StubResolver {
        async fn resolve(&self, query: &str) -> Result<ResolvedCard> {
            match &self.0 {
                Lookup::Card(card) => Ok(card.clone()),
                Lookup::Missing => Err(RecsError::CardNotFound {
                    query: query.to_string(),
                }),
                Lookup::Down => Err(RecsError::UpstreamStatusError {
                    status: 502,
                    url: "http://scryfall.test/cards/named".to_string(),
                }),
            }
        }
    }

    #[derive(Clone)]
    struct StubSource {
        names: Option<Vec<&'static str>>,
        seen_keys: Arc<Mutex<Vec<String>>>,
    }

    impl StubSource {
        fn returning(names: Option<Vec<&'static str>>) -> Self {
            Self {
                names,
                seen_keys: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl RecommendationSource for StubSource {
        async fn fetch_recommendations(&self, resolved: &ResolvedCard) -> Result<RecommendationSet> {
            let slug = resolved.lookup_key();
            self.seen_keys.lock().unwrap().push(slug.clone());
            match &self.names {
                Some(names) => Ok(names.iter().copied().collect()),
                None => Err(RecsError::RecommendationsNotFound { slug }),
            }
        }
    }

    #[tokio::test]
    async fn test_handle_returns_names_in_order() {
        let source = StubSource::returning(Some(vec!["Sol Ring", "Mana Vault", "Sol Ring"]));
        let service = RecommendationService::new(
            StubResolver(Lookup::Card(ResolvedCard::new("Urza, Lord High Artificer"))),
            source.clone(),
        );

        let names = service.handle("Urza").await.unwrap();

        assert_eq!(names, vec!["Sol Ring", "Mana Vault"]);
        assert_eq!(
            *source.seen_keys.lock().unwrap(),
            vec!["urza-lord-high-artificer".to_string()]
        );
    }

    #[tokio::test]
    async fn test_handle_passes_partner_pair() {
        let source = StubSource::returning(Some(vec!["Hardened Scales"]));
        let resolved = ResolvedCard::new("X").with_partner("Y");
        let service = RecommendationService::new(StubResolver(Lookup::Card(resolved)), source.clone());

        service.handle("x").await.unwrap();

        assert_eq!(*source.seen_keys.lock().unwrap(), vec!["x-y".to_string()]);
    }

    #[tokio::test]
    async fn test_handle_card_not_found_is_404() {
        let source = StubSource::returning(Some(vec!["Sol Ring"]));
        let service = RecommendationService::new(StubResolver(Lookup::Missing), source.clone());

        let err = service.handle("Xyzzy").await.unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(err.message.contains("Xyzzy"));
        assert!(source.seen_keys.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_handle_missing_page_is_404() {
        let service = RecommendationService::new(
            StubResolver(Lookup::Card(ResolvedCard::new("Urza"))),
            StubSource::returning(None),
        );

        let err = service.handle("urza").await.unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(err.message.contains("\"urza\""));
    }

    #[tokio::test]
    async fn test_handle_empty_recommendations_is_404() {
        let service = RecommendationService::new(
            StubResolver(Lookup::Card(ResolvedCard::new("Urza"))),
            StubSource::returning(Some(vec![])),
        );

        let err = service.handle("urza").await.unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "No recommendations found for \"urza\" on EDHREC.");
    }

    #[tokio::test]
    async fn test_handle_upstream_failure_is_500() {
        let service = RecommendationService::new(
            StubResolver(Lookup::Down),
            StubSource::returning(Some(vec!["Sol Ring"])),
        );

        let err = service.handle("Urza").await.unwrap_err();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.contains("Urza"));
    }
}
