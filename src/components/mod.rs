//! UI Components
//!
//! Leptos components of the public wishlist and the admin page.

mod fade;

// Public page
mod description_modal;
mod name_modal;
mod portrait_gallery;
mod wish_card;
mod wish_grid;

// Admin page
mod admin_menu;
mod delete_wish_form;
mod edit_wish_form;
mod form_status;
mod new_wish_form;
mod wish_fields;
mod wish_select;

pub use fade::use_fade;

pub use description_modal::DescriptionModal;
pub use name_modal::NameModalView;
pub use portrait_gallery::PortraitGallery;
pub use wish_card::WishCardView;
pub use wish_grid::WishGrid;

pub use admin_menu::AdminMenu;
pub use delete_wish_form::DeleteWishForm;
pub use edit_wish_form::EditWishForm;
pub use form_status::FormStatusLine;
pub use new_wish_form::NewWishForm;
pub use wish_fields::{DraftSlot, WishFields};
pub use wish_select::WishSelectView;
