//! HTTP Handlers
//!
//! Thin axum handlers over the repositories.

mod reservation;
mod wishes;

pub use reservation::{get_reservations, save_reservations};
pub use wishes::{create_wish, delete_wish, list_wishes, missing_wish_id, update_wish};
