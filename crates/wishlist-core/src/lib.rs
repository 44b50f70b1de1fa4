//! Wishlist Core
//!
//! Platform-free pieces of the family wishlist:
//! - model: wishes, members and the reservation map
//! - api: the transport seam used by both pages
//! - dialog: async name prompt and confirmation abstractions
//! - wishlist / admin: page view-models holding all mutable page state

mod member;
mod wish;
mod reservation;
mod api;
mod dialog;
mod hooks;
mod wishlist;
pub mod admin;

#[cfg(test)]
mod testing;

pub use member::{owner_label, Member};
pub use wish::{ValidationError, Wish, WishDraft};
pub use reservation::{NameError, Reservation, Reservations, ReserverName, MIN_NAME_CHARS};
pub use api::{ApiError, ApiResult, WishlistApi};
pub use dialog::{ConfirmDialog, NameDialog, NameModal, NamePrompt, PromptFuture};
pub use hooks::ViewHooks;
pub use wishlist::{PublicWishlist, ToggleOutcome, WishCard, WishDetails, WishlistController};
pub use admin::{AdminConsole, AdminState};
