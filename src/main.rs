//! Wishlist Frontend Entry Point

mod admin_app;
mod app;
mod commands;
mod components;
mod context;
mod dialog;
mod logging;

use admin_app::AdminApp;
use app::WishlistApp;
use leptos::prelude::*;

fn is_admin_page() -> bool {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .is_some_and(|path| path.starts_with("/admin"))
}

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    if is_admin_page() {
        mount_to_body(AdminApp);
    } else {
        mount_to_body(WishlistApp);
    }
}
