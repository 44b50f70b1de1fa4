//! Fade-out helper for modals and admin panels.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Length of the CSS fade-out transition
const FADE_MS: u32 = 200;

/// `hidden` state for an element whose `is-visible` class follows `open`.
///
/// Opening unhides at once; closing sets `hidden` after the fade, unless the
/// element was reopened meanwhile.
pub fn use_fade(open: Signal<bool>) -> ReadSignal<bool> {
    let (hidden, set_hidden) = signal(!open.get_untracked());

    Effect::new(move |_| {
        if open.get() {
            set_hidden.set(false);
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(FADE_MS).await;
            if !open.get_untracked() {
                set_hidden.set(true);
            }
        });
    });

    hidden
}
