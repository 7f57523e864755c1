use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::AppError,
    middleware::RequestId,
    models::PreferenceSet,
    services::{normalize::normalize_opt, rank},
};

use super::AppState;

/// Query string of the recommendations endpoint
///
/// e.g. `?genres=Action,Drama&type=movies&era=new&mood=dark and mysterious`
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationQuery {
    pub genres: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub era: Option<String>,
    pub mood: Option<String>,
}

impl From<RecommendationQuery> for PreferenceSet {
    fn from(query: RecommendationQuery) -> Self {
        let genres = query
            .genres
            .as_deref()
            .map(PreferenceSet::split_genres)
            .unwrap_or_default();

        PreferenceSet::new(
            genres,
            &normalize_opt(query.content_type.as_deref()),
            &normalize_opt(query.era.as_deref()),
            query.mood.as_deref().unwrap_or_default(),
        )
    }
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Greeting used by the frontend to check connectivity
pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from featured-recs" }))
}

/// The whole featured catalog, in catalog order
pub async fn featured_movies(State(state): State<AppState>) -> Response {
    Json(state.catalog.as_ref()).into_response()
}

/// Ranks the catalog against the query's preferences
pub async fn recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RecommendationQuery>,
) -> Response {
    let prefs = PreferenceSet::from(query);

    tracing::info!(
        request_id = %request_id,
        genres = prefs.genres.len(),
        content_type = %prefs.content_type,
        era = %prefs.era,
        "Processing recommendation request"
    );

    let results = rank(state.catalog.entries(), &prefs);

    tracing::info!(
        request_id = %request_id,
        results = results.len(),
        "Recommendations ranked"
    );

    Json(results).into_response()
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
