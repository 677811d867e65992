//! Order route handlers.
//!
//! Same relay contract as the product handlers; orders are read-only apart
//! from status updates.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::http::products::transport_failure;
use crate::http::server::AppState;

// GET /api/orders
pub async fn list(State(state): State<AppState>) -> Response {
    match state.upstream.list_orders().await {
        Ok(reply) => reply.into_response(),
        Err(err) => transport_failure("GET /api/orders", err, "Failed to fetch orders."),
    }
}

// PATCH /api/orders/{id}/status and PATCH /api/orders/{id}
// Both map to PATCH {ORDER_BASE}/{id}; the order service has no /status path.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    match state.upstream.update_order(&id, &body).await {
        Ok(reply) => reply.into_response(),
        Err(err) => transport_failure(
            "PATCH /api/orders/{id}",
            err,
            "Failed to update order status.",
        ),
    }
}
