//! HTTP Command Wrappers
//!
//! Frontend bindings to the wish store endpoints, organized by domain.

mod reservation;
mod wish;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use wishlist_core::{ApiError, ApiResult, Reservations, Wish, WishDraft, WishlistApi};

/// Client for the wish store at `base`
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Store served from the page's own origin
    pub fn from_location() -> Self {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        Self::new(origin)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Send a request; non-2xx answers become `ApiError::Status` with the body text
async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message: message.trim().to_string(),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl WishlistApi for HttpApi {
    async fn wishes(&self) -> ApiResult<Vec<Wish>> {
        wish::list_wishes(self).await
    }

    async fn reservations(&self) -> ApiResult<Reservations> {
        reservation::get_reservations(self).await
    }

    async fn save_reservations(&self, reservations: &Reservations) -> ApiResult<()> {
        reservation::save_reservations(self, reservations).await
    }

    async fn admin_wishes(&self) -> ApiResult<Vec<Wish>> {
        wish::list_admin_wishes(self).await
    }

    async fn create_wish(&self, draft: &WishDraft) -> ApiResult<Wish> {
        wish::create_wish(self, draft).await
    }

    async fn update_wish(&self, id: &str, draft: &WishDraft) -> ApiResult<Wish> {
        wish::update_wish(self, id, draft).await
    }

    async fn delete_wish(&self, id: &str) -> ApiResult<()> {
        wish::delete_wish(self, id).await
    }
}
