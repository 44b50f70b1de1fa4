//! Wish Commands
//!
//! Public listing and the admin CRUD endpoints.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wishlist_core::{ApiResult, Wish, WishDraft};

use super::{decode, send, HttpApi};

/// Characters left as-is in an id path segment
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn wish_path(id: &str) -> String {
    format!("/api/admin/wishes/{}", utf8_percent_encode(id, ID_SEGMENT))
}

pub async fn list_wishes(api: &HttpApi) -> ApiResult<Vec<Wish>> {
    let response = send(api.client.get(api.url("/api/wishes"))).await?;
    decode(response).await
}

pub async fn list_admin_wishes(api: &HttpApi) -> ApiResult<Vec<Wish>> {
    let response = send(api.client.get(api.url("/api/admin/wishes/"))).await?;
    decode(response).await
}

pub async fn create_wish(api: &HttpApi, draft: &WishDraft) -> ApiResult<Wish> {
    let response = send(api.client.post(api.url("/api/admin/wishes/")).json(draft)).await?;
    decode(response).await
}

pub async fn update_wish(api: &HttpApi, id: &str, draft: &WishDraft) -> ApiResult<Wish> {
    let response = send(api.client.put(api.url(&wish_path(id))).json(draft)).await?;
    decode(response).await
}

pub async fn delete_wish(api: &HttpApi, id: &str) -> ApiResult<()> {
    send(api.client.delete(api.url(&wish_path(id)))).await?;
    Ok(())
}
