//! Wishlist App
//!
//! Public page: portraits, the selected owner's wish grid and the modals.

use leptos::ev;
use leptos::prelude::*;

use crate::commands::HttpApi;
use crate::components::{DescriptionModal, NameModalView, PortraitGallery, WishGrid};
use crate::context::{PageHooks, Wishlist, WishlistContext};
use crate::dialog::ModalNameDialog;

#[component]
pub fn WishlistApp() -> impl IntoView {
    let hooks = PageHooks::new();
    let dialog = ModalNameDialog::new(hooks);
    let ctx = WishlistContext::new(
        Wishlist::new(HttpApi::from_location(), dialog, hooks),
        dialog,
        hooks,
    );
    provide_context(ctx);

    // Load wishes and reservations once
    ctx.spawn(|wishlist| async move { wishlist.load().await });

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && ctx.read(|state| state.description().is_some()) {
            ctx.act(|wishlist| wishlist.close_description());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <main class="wishlist-page">
            <h1>"Wunschliste"</h1>
            <PortraitGallery />
            <WishGrid />
            <NameModalView />
            <DescriptionModal />
        </main>
    }
}
