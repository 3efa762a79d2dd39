//! REST endpoints for bookings and the consultant profile.
//!
//! Errors leave as `{"message": "..."}` bodies so clients can surface the
//! text verbatim.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::booking::model::BookingDraft;
use crate::booking::validate::{email_error, validate_draft};
use crate::profile::model::ConsultantProfile;

use super::store::MemoryStore;

/// Shared state for the API routes.
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<MemoryStore>,
}

fn message_body(message: &str) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": message }))
}

/// POST /api/bookings
///
/// Validates the payload server-side with the same rules as the form and
/// returns 201 with the created record, or 400 with a message.
async fn create_booking(
    State(state): State<ApiState>,
    Json(draft): Json<BookingDraft>,
) -> impl IntoResponse {
    let errors = validate_draft(&draft);
    if let Some(message) = errors.first_message() {
        debug!(%message, "Rejecting booking payload");
        return (StatusCode::BAD_REQUEST, message_body(message)).into_response();
    }

    let record = state.store.insert_booking(&draft).await;
    (StatusCode::CREATED, Json(record)).into_response()
}

/// GET /api/bookings
async fn list_bookings(State(state): State<ApiState>) -> impl IntoResponse {
    Json(state.store.list_bookings().await)
}

/// GET /api/consultant
async fn get_consultant(State(state): State<ApiState>) -> impl IntoResponse {
    Json(state.store.get_consultant().await)
}

/// PUT /api/consultant
async fn update_consultant(
    State(state): State<ApiState>,
    Json(profile): Json<ConsultantProfile>,
) -> impl IntoResponse {
    if let Some(message) = email_error(&profile.email) {
        debug!(%message, "Rejecting consultant payload");
        return (StatusCode::BAD_REQUEST, message_body(&message)).into_response();
    }

    let updated = state.store.replace_consultant(profile).await;
    Json(updated).into_response()
}

/// Build the REST routes. CORS is permissive — the web client is served
/// from a different origin in development.
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route("/api/consultant", get(get_consultant).put(update_consultant))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
