//! Portrait Gallery Component
//!
//! One button per family member; clicking toggles that member's wish grid.

use leptos::prelude::*;
use wishlist_core::Member;

use crate::context::WishlistContext;

#[component]
pub fn PortraitGallery() -> impl IntoView {
    let ctx = use_context::<WishlistContext>().expect("WishlistContext should be provided");

    view! {
        <nav class="portrait-gallery">
            {Member::ALL.into_iter().map(|member| {
                let value = member.value();
                let is_current = move || ctx.read(|state| state.current_owner() == Some(value));
                view! {
                    <button
                        type="button"
                        class=move || if is_current() { "portrait active" } else { "portrait" }
                        data-member=value
                        aria-pressed=move || is_current().to_string()
                        on:click=move |_| ctx.act(|wishlist| wishlist.select_owner(value))
                    >
                        <img src=format!("media/{}.jpg", value) alt=member.label() />
                        <span class="portrait-name">{member.label()}</span>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
