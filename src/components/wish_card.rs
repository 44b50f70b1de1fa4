//! Wish Card Component
//!
//! A single wish with shop link and the reserve toggle.

use leptos::prelude::*;
use wishlist_core::Wish;

use crate::context::WishlistContext;

#[component]
pub fn WishCardView(wish: Wish) -> impl IntoView {
    let ctx = use_context::<WishlistContext>().expect("WishlistContext should be provided");

    let has_details = wish.has_description();
    let card = {
        let wish = wish.clone();
        Memo::new(move |_| ctx.read(|state| state.card(&wish)))
    };
    let reserve_id = wish.id.clone();
    let details_id = wish.id.clone();

    let toggle = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let id = reserve_id.clone();
        ctx.spawn(move |wishlist| async move {
            wishlist.toggle_reservation(&id).await;
        });
    };

    view! {
        <article
            class=move || if card.with(|card| card.reserved) { "wish-card reserved" } else { "wish-card" }
            data-wish-id=wish.id.clone()
        >
            <div
                class="wish-card-clickable"
                on:click=move |_| ctx.act(|wishlist| wishlist.show_description(&details_id))
            >
                {(!wish.image.is_empty()).then(|| view! { <img src=wish.image.clone() alt=wish.title.clone() /> })}
                <div class="wish-body">
                    <p class="wish-title">{wish.title.clone()}</p>
                    {(!wish.price.is_empty()).then(|| view! { <span class="wish-price">{wish.price.clone()}</span> })}
                    {has_details.then(|| view! { <span class="wish-has-description">"ℹ️ Klicken für Details"</span> })}
                </div>
            </div>
            <div class="wish-actions">
                <a class="btn btn-primary" href=wish.url.clone() target="_blank" rel="noopener noreferrer">"Webshop"</a>
                <button class="btn btn-outline" type="button" aria-pressed=move || card.with(|card| card.reserved.to_string()) on:click=toggle>
                    {move || card.with(|card| card.button_label)}
                </button>
            </div>
            <span class="reserve-status" aria-live="polite">{move || card.with(|card| card.status.clone())}</span>
        </article>
    }
}
