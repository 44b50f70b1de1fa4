use std::sync::Arc;

use crate::config::Config;
use crate::repository::{JsonFile, ReservationRepository, WishRepository};

#[derive(Clone)]
pub struct AppState {
    pub wishes: Arc<WishRepository>,
    pub reservations: Arc<ReservationRepository>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            wishes: Arc::new(WishRepository::new(JsonFile::new(config.wishes_path()))),
            reservations: Arc::new(ReservationRepository::new(JsonFile::new(
                config.reservations_path(),
            ))),
        }
    }
}
