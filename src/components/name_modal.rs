//! Name Modal Component
//!
//! Asks who is reserving a wish. Short names keep the modal open.

use leptos::html;
use leptos::prelude::*;
use wishlist_core::MIN_NAME_CHARS;

use super::use_fade;
use crate::context::WishlistContext;

#[component]
pub fn NameModalView() -> impl IntoView {
    let ctx = use_context::<WishlistContext>().expect("WishlistContext should be provided");
    let dialog = ctx.dialog;

    let open = Signal::derive(move || dialog.is_open());
    let hidden = use_fade(open);
    let input_ref = NodeRef::<html::Input>::new();

    // Fresh, focused input every time the modal opens
    Effect::new(move |_| {
        if open.get() {
            if let Some(input) = input_ref.get() {
                input.set_value("");
                let _ = input.focus();
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        dialog.submit();
    };

    view! {
        <div
            id="name-modal"
            class=move || if open.get() { "modal is-visible" } else { "modal" }
            hidden=move || hidden.get()
            role="dialog"
            aria-modal="true"
        >
            <form id="name-form" class="modal-content" on:submit=on_submit>
                <label for="reserver-name">"Wer reserviert diesen Wunsch?"</label>
                <input
                    id="reserver-name"
                    type="text"
                    autocomplete="name"
                    node_ref=input_ref
                    on:input=move |ev| dialog.set_input(event_target_value(&ev))
                />
                {move || dialog.error().map(|_| view! {
                    <p class="modal-error">{format!("Bitte mindestens {} Zeichen eingeben.", MIN_NAME_CHARS)}</p>
                })}
                <div class="modal-actions">
                    <button type="submit" class="btn btn-primary">"Reservieren"</button>
                    <button type="button" class="btn btn-outline" data-role="cancel" on:click=move |_| dialog.cancel()>
                        "Abbrechen"
                    </button>
                </div>
            </form>
        </div>
    }
}
