//! Application Context
//!
//! Page controllers and their render trigger, provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wishlist_core::{AdminConsole, AdminState, PublicWishlist, ViewHooks, WishlistController};

use crate::commands::HttpApi;
use crate::dialog::{BrowserConfirm, ModalNameDialog};

const RESERVED_SOUND: &str = "media/reserved.mp3";

/// Bridges controller callbacks into the reactive graph
#[derive(Clone, Copy)]
pub struct PageHooks {
    /// Bumped whenever controller state changed
    pub version: RwSignal<u64>,
}

impl PageHooks {
    pub fn new() -> Self {
        Self {
            version: RwSignal::new(0),
        }
    }
}

impl ViewHooks for PageHooks {
    fn refresh(&self) {
        self.version.update(|v| *v += 1);
    }

    fn reserved(&self) {
        let played = web_sys::HtmlAudioElement::new_with_src(RESERVED_SOUND)
            .and_then(|audio| audio.play());
        if let Err(err) = played {
            log::warn!("Could not play reserve sound: {:?}", err);
        }
    }
}

pub type Wishlist = WishlistController<HttpApi, ModalNameDialog, PageHooks>;
pub type Console = AdminConsole<HttpApi, BrowserConfirm, PageHooks>;

/// Public page context
#[derive(Clone, Copy)]
pub struct WishlistContext {
    controller: StoredValue<Rc<Wishlist>, LocalStorage>,
    pub dialog: ModalNameDialog,
    hooks: PageHooks,
}

impl WishlistContext {
    pub fn new(controller: Wishlist, dialog: ModalNameDialog, hooks: PageHooks) -> Self {
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
            dialog,
            hooks,
        }
    }

    /// Read page state, re-running the caller on every change
    pub fn read<R>(&self, f: impl FnOnce(&PublicWishlist) -> R) -> R {
        self.hooks.version.track();
        self.controller.with_value(|controller| f(&controller.state()))
    }

    /// Run a synchronous controller action
    pub fn act(&self, f: impl FnOnce(&Wishlist)) {
        self.controller.with_value(|controller| f(controller));
    }

    /// Spawn an async controller action
    pub fn spawn<Fut>(&self, f: impl FnOnce(Rc<Wishlist>) -> Fut)
    where
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(f(self.controller.get_value()));
    }
}

/// Admin page context
#[derive(Clone, Copy)]
pub struct AdminContext {
    console: StoredValue<Rc<Console>, LocalStorage>,
    hooks: PageHooks,
}

impl AdminContext {
    pub fn new(console: Console, hooks: PageHooks) -> Self {
        Self {
            console: StoredValue::new_local(Rc::new(console)),
            hooks,
        }
    }

    /// Read admin state, re-running the caller on every change
    pub fn read<R>(&self, f: impl FnOnce(&AdminState) -> R) -> R {
        self.hooks.version.track();
        self.console.with_value(|console| f(&console.state()))
    }

    /// Field input: update state without re-rendering the form
    pub fn modify(&self, f: impl FnOnce(&mut AdminState)) {
        self.console.with_value(|console| console.modify(f));
    }

    pub fn act(&self, f: impl FnOnce(&Console)) {
        self.console.with_value(|console| f(console));
    }

    pub fn spawn<Fut>(&self, f: impl FnOnce(Rc<Console>) -> Fut)
    where
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(f(self.console.get_value()));
    }
}
