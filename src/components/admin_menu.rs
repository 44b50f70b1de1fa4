//! Admin Menu Component
//!
//! Burger menu revealing the create, edit and delete panels.

use leptos::prelude::*;

use crate::context::AdminContext;

#[component]
pub fn AdminMenu() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext should be provided");
    let menu_open = move || ctx.read(|state| state.panels.menu_open);

    view! {
        <div class="page-menu-wrapper" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
            <button
                type="button"
                class="burger"
                data-role="menu-toggle"
                aria-expanded=move || menu_open().to_string()
                on:click=move |_| ctx.act(|console| console.toggle_menu())
            >
                "☰"
            </button>
            <nav class="page-menu" hidden=move || !menu_open()>
                <button type="button" on:click=move |_| ctx.act(|console| console.open_create())>
                    "Neuer Wunsch"
                </button>
                <button type="button" on:click=move |_| ctx.spawn(|console| async move { console.open_editor().await })>
                    "Wunsch bearbeiten"
                </button>
                <button type="button" on:click=move |_| ctx.spawn(|console| async move { console.open_delete().await })>
                    "Wunsch löschen"
                </button>
            </nav>
        </div>
    }
}
