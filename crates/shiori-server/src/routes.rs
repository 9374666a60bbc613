use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use shiori_api::error::USAGE_HINT;
use shiori_api::{GraphQlTransport, MetadataQuery, MetadataResponse, MetadataService};
use tower_http::trace::TraceLayer;

use crate::error::{AppError, AppResult};

/// Shared handler state. One transport (and connection pool) for all requests.
pub struct AppState<T> {
    pub transport: Arc<T>,
}

impl<T> AppState<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

pub fn router<T: GraphQlTransport + 'static>(state: AppState<T>) -> Router {
    Router::new()
        .route("/api/{kind}/{method}", get(metadata::<T>))
        .route("/health", get(health))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /api/{kind}/{method}?name=..&id=..`
async fn metadata<T: GraphQlTransport + 'static>(
    State(state): State<AppState<T>>,
    Path((kind, method)): Path<(String, String)>,
    query: Result<Query<MetadataQuery>, QueryRejection>,
) -> AppResult<Json<MetadataResponse>> {
    let Query(query) = query.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let service = MetadataService::new(&kind, Arc::clone(&state.transport))?;
    let response = service.handle(&method, &query).await.inspect_err(|e| {
        tracing::debug!(%kind, %method, error = %e, "metadata request rejected");
    })?;
    Ok(Json(response))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn fallback() -> AppError {
    AppError::not_found(USAGE_HINT)
}
