//! Health check endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    /// Stored contacts, absent when the store cannot be reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<i64>,
}

/// Reports `ok` with the contact count, or 503 when the store is unreachable.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    match state.contacts.count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(Health {
                status: "ok",
                contacts: Some(count),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Health {
                    status: "unavailable",
                    contacts: None,
                }),
            )
        }
    }
}
