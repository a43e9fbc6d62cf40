use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::core::handler::{HandlerError, RecommendationService};
use crate::core::{CardResolver, RecommendationSource};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

/// `GET /recommendations/:commanderName`
///
/// 200 with a JSON array of card names, otherwise `{ "error": ... }`.
pub async fn recommendations_handler<R, S>(
    State(service): State<Arc<RecommendationService<R, S>>>,
    Path(commander_name): Path<String>,
) -> Result<Json<Vec<String>>, HandlerError>
where
    R: CardResolver + 'static,
    S: RecommendationSource + 'static,
{
    service.handle(&commander_name).await.map(Json)
}
