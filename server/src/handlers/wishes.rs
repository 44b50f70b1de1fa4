//! Wish Handlers
//!
//! Public listing plus the admin create/update/delete endpoints.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use wishlist_core::Wish;

use crate::error::AppError;
use crate::repository::Repository;
use crate::state::AppState;

/// Decode an incoming wish body
fn parse_wish(body: &[u8]) -> Result<Wish, AppError> {
    serde_json::from_slice(body).map_err(|_| AppError::MalformedPayload)
}

/// Ids are single path segments; a percent-encoded slash does not make one
fn path_id(id: String) -> Result<String, AppError> {
    if id.is_empty() || id.contains('/') {
        return Err(AppError::InvalidWishId);
    }
    Ok(id)
}

pub async fn list_wishes(State(state): State<AppState>) -> Result<Json<Vec<Wish>>, AppError> {
    Ok(Json(state.wishes.list().await?))
}

pub async fn create_wish(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Wish>), AppError> {
    let mut wish = parse_wish(&body)?;
    wish.sanitize();
    wish.validate()?;

    let created = state.wishes.create(&wish).await?;
    info!(id = %created.id, owner = %created.owner, "wish created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// The path id wins over any id in the body
pub async fn update_wish(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Wish>, AppError> {
    let id = path_id(id)?;
    let mut wish = parse_wish(&body)?;
    wish.id = id;
    wish.sanitize();
    wish.validate()?;

    let updated = state.wishes.update(&wish).await?;
    info!(id = %updated.id, "wish updated");
    Ok(Json(updated))
}

pub async fn delete_wish(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = path_id(id)?;
    state.wishes.delete(&id).await?;
    info!(id = %id, "wish deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT or DELETE on the collection path
pub async fn missing_wish_id() -> AppError {
    AppError::InvalidWishId
}
