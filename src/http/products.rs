//! Product route handlers.
//!
//! Each handler forwards to the product service and relays the upstream
//! status and body verbatim, success or not. Only a transport failure
//! produces a proxy-owned 500 with the operation's fixed error payload.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::http::server::AppState;
use crate::upstream::UpstreamError;

// GET /api/products
pub async fn list(State(state): State<AppState>) -> Response {
    match state.upstream.list_products().await {
        Ok(reply) => reply.into_response(),
        Err(err) => transport_failure("GET /api/products", err, "Failed to load products."),
    }
}

// POST /api/products
pub async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    match state.upstream.create_product(&body).await {
        Ok(reply) => reply.into_response(),
        Err(err) => transport_failure("POST /api/products", err, "Failed to create product."),
    }
}

// PUT /api/products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    match state.upstream.update_product(&id, &body).await {
        Ok(reply) => reply.into_response(),
        Err(err) => transport_failure("PUT /api/products/{id}", err, "Failed to update product."),
    }
}

// DELETE /api/products/{id}
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.upstream.delete_product(&id).await {
        Ok(reply) => reply.into_response(),
        Err(err) => {
            transport_failure("DELETE /api/products/{id}", err, "Failed to delete product.")
        }
    }
}

/// 500 with a fixed per-operation payload. Upstream-reported statuses never
/// land here; this path is for requests that never got a response.
pub(crate) fn transport_failure(route: &str, err: UpstreamError, message: &str) -> Response {
    tracing::error!(route, error = %err, "Error proxying to upstream");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}
