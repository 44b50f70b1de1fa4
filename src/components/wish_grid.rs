//! Wish Grid Component

use leptos::prelude::*;

use super::WishCardView;
use crate::context::WishlistContext;

/// Cards of the selected owner; hidden when nobody is selected or the owner has no wishes
#[component]
pub fn WishGrid() -> impl IntoView {
    let ctx = use_context::<WishlistContext>().expect("WishlistContext should be provided");
    // Reservation changes re-render inside the cards, not the whole grid
    let visible = Memo::new(move |_| ctx.read(|state| state.visible_wishes().to_vec()));

    view! {
        <section id="wish-grid" class="wish-grid" hidden=move || ctx.read(|state| state.grid_hidden())>
            {move || {
                visible
                    .get()
                    .into_iter()
                    .map(|wish| view! { <WishCardView wish=wish /> })
                    .collect_view()
            }}
        </section>
    }
}
