//! Admin App
//!
//! Admin page: burger menu plus the create, edit and delete panels.

use leptos::ev;
use leptos::prelude::*;

use crate::commands::HttpApi;
use crate::components::{AdminMenu, DeleteWishForm, EditWishForm, NewWishForm};
use crate::context::{AdminContext, Console, PageHooks};
use crate::dialog::BrowserConfirm;

#[component]
pub fn AdminApp() -> impl IntoView {
    let hooks = PageHooks::new();
    let ctx = AdminContext::new(
        Console::new(HttpApi::from_location(), BrowserConfirm, hooks),
        hooks,
    );
    provide_context(ctx);

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ctx.act(|console| console.escape());
        }
    });
    // Clicks inside the menu stop propagating, so any click reaching the window is outside
    let outside_click = window_event_listener(ev::click, move |_| {
        if ctx.read(|state| state.panels.menu_open) {
            ctx.act(|console| console.close_menu());
        }
    });
    on_cleanup(move || {
        escape.remove();
        outside_click.remove();
    });

    view! {
        <main class="admin-page">
            <header class="admin-header">
                <h1>"Wünsche verwalten"</h1>
                <AdminMenu />
            </header>
            <NewWishForm />
            <EditWishForm />
            <DeleteWishForm />
        </main>
    }
}
