use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use wishlist_core::ValidationError;

use crate::domain::StoreError;

/// Handler failures, rendered as a status code with a plain-text body
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid JSON payload")]
    MalformedPayload,

    #[error("invalid wish id")]
    InvalidWishId,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("wish not found")]
    NotFound,

    #[error("{0}")]
    Store(StoreError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound,
            other => AppError::Store(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload | AppError::InvalidWishId | AppError::Invalid(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("{self}");
        }

        (status, self.to_string()).into_response()
    }
}
