//! Reservation Handlers

use axum::{body::Bytes, extract::State, Json};
use tracing::info;
use wishlist_core::Reservations;

use crate::error::AppError;
use crate::state::AppState;

pub async fn get_reservations(
    State(state): State<AppState>,
) -> Result<Json<Reservations>, AppError> {
    Ok(Json(state.reservations.load().await?))
}

/// Replace the whole map and echo it back
pub async fn save_reservations(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Reservations>, AppError> {
    let reservations: Reservations =
        serde_json::from_slice(&body).map_err(|_| AppError::MalformedPayload)?;

    state.reservations.replace(&reservations).await?;
    info!(entries = reservations.len(), "reservations saved");
    Ok(Json(reservations))
}
