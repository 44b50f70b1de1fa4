//! Reservation Repository
//!
//! The reservation map, always read and replaced as a whole.

use wishlist_core::Reservations;

use super::json_file::JsonFile;
use crate::domain::StoreResult;

pub struct ReservationRepository {
    file: JsonFile,
}

impl ReservationRepository {
    pub fn new(file: JsonFile) -> Self {
        Self { file }
    }

    pub async fn load(&self) -> StoreResult<Reservations> {
        let _guard = self.file.lock().await;
        self.file.read().await
    }

    /// Replace the stored map with `reservations`
    pub async fn replace(&self, reservations: &Reservations) -> StoreResult<()> {
        let _guard = self.file.lock().await;
        self.file.write(reservations).await
    }
}
