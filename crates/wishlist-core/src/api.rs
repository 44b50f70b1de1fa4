//! Wishlist API
//!
//! Transport seam between the page view-models and the wish store.
//! The browser build talks HTTP; tests use an in-memory fake.

use async_trait::async_trait;
use thiserror::Error;

use crate::{Reservations, Wish, WishDraft};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the plain-text body
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Network(String),
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for an inline form status.
    ///
    /// Server messages are shown verbatim; an empty body falls back to the
    /// action's default text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } if message.trim().is_empty() => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

/// Wish store operations used by the public page and the admin console.
///
/// Futures are not `Send`: implementations run on the browser main thread.
#[async_trait(?Send)]
pub trait WishlistApi {
    /// `GET /api/wishes`
    async fn wishes(&self) -> ApiResult<Vec<Wish>>;

    /// `GET /api/reservation`
    async fn reservations(&self) -> ApiResult<Reservations>;

    /// `POST /api/reservation`, replacing the whole map
    async fn save_reservations(&self, reservations: &Reservations) -> ApiResult<()>;

    /// `GET /api/admin/wishes/`
    async fn admin_wishes(&self) -> ApiResult<Vec<Wish>>;

    /// `POST /api/admin/wishes/`
    async fn create_wish(&self, draft: &WishDraft) -> ApiResult<Wish>;

    /// `PUT /api/admin/wishes/{id}`
    async fn update_wish(&self, id: &str, draft: &WishDraft) -> ApiResult<Wish>;

    /// `DELETE /api/admin/wishes/{id}`
    async fn delete_wish(&self, id: &str) -> ApiResult<()>;
}
