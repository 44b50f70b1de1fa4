//! Reservation Commands

use wishlist_core::{ApiResult, Reservations};

use super::{decode, send, HttpApi};

pub async fn get_reservations(api: &HttpApi) -> ApiResult<Reservations> {
    let response = send(api.client.get(api.url("/api/reservation"))).await?;
    decode(response).await
}

/// Replace the stored map; the echoed body is not needed
pub async fn save_reservations(api: &HttpApi, reservations: &Reservations) -> ApiResult<()> {
    send(api.client.post(api.url("/api/reservation")).json(reservations)).await?;
    Ok(())
}
