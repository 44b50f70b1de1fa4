//! Description Modal Component
//!
//! Extended details of a wish, opened by clicking its card.

use leptos::prelude::*;

use super::use_fade;
use crate::context::WishlistContext;

#[component]
pub fn DescriptionModal() -> impl IntoView {
    let ctx = use_context::<WishlistContext>().expect("WishlistContext should be provided");

    let details = Signal::derive(move || ctx.read(|state| state.description()));
    let open = Signal::derive(move || details.with(Option::is_some));
    let hidden = use_fade(open);
    let close = move |_: web_sys::MouseEvent| ctx.act(|wishlist| wishlist.close_description());

    view! {
        <div
            id="description-modal"
            class=move || if open.get() { "modal is-visible" } else { "modal" }
            hidden=move || hidden.get()
            role="dialog"
            aria-modal="true"
        >
            <div id="description-content" class="modal-content">
                {move || details.get().map(|details| {
                    let wish = details.wish.clone();
                    let text = details.description_text().to_string();
                    let described = wish.has_description();
                    view! {
                        {(!wish.image.is_empty()).then(|| view! {
                            <img src=wish.image.clone() alt=wish.title.clone() class="modal-wish-image" />
                        })}
                        <h2>{wish.title.clone()}</h2>
                        {(!wish.price.is_empty()).then(|| view! { <p class="modal-price">{wish.price.clone()}</p> })}
                        {details.reserved_line.clone().map(|line| view! { <p class="modal-reserved">{line}</p> })}
                        {if described {
                            view! { <div class="modal-description">{text}</div> }.into_any()
                        } else {
                            view! { <p class="modal-no-description">{text}</p> }.into_any()
                        }}
                        <div class="modal-actions">
                            <a class="btn btn-primary" href=wish.url.clone() target="_blank" rel="noopener noreferrer">
                                "Zum Webshop"
                            </a>
                            <button type="button" class="btn btn-outline" on:click=close>"Schließen"</button>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
