//! Browser Dialogs
//!
//! The name-capture modal and the native confirmation box behind the
//! controller dialog traits.

use std::cell::RefCell;

use async_trait::async_trait;
use leptos::prelude::*;
use wishlist_core::{ConfirmDialog, NameDialog, NameError, NameModal, NamePrompt, ViewHooks};

use crate::context::PageHooks;

/// Name prompt rendered by the `NameModalView` component
#[derive(Clone, Copy)]
pub struct ModalNameDialog {
    modal: StoredValue<RefCell<NameModal>, LocalStorage>,
    hooks: PageHooks,
}

impl ModalNameDialog {
    pub fn new(hooks: PageHooks) -> Self {
        Self {
            modal: StoredValue::new_local(RefCell::new(NameModal::new())),
            hooks,
        }
    }

    pub fn is_open(&self) -> bool {
        self.hooks.version.track();
        self.modal.with_value(|modal| modal.borrow().is_open())
    }

    pub fn error(&self) -> Option<NameError> {
        self.hooks.version.track();
        self.modal.with_value(|modal| modal.borrow().error())
    }

    pub fn input(&self) -> String {
        self.modal.with_value(|modal| modal.borrow().input().to_string())
    }

    pub fn set_input(&self, value: String) {
        self.modal.with_value(|modal| modal.borrow_mut().set_input(value));
    }

    /// Resolve the prompt if the name is long enough, otherwise show the error
    pub fn submit(&self) {
        let _ = self.modal.with_value(|modal| modal.borrow_mut().submit());
        self.hooks.refresh();
    }

    pub fn cancel(&self) {
        self.modal.with_value(|modal| modal.borrow_mut().cancel());
        self.hooks.refresh();
    }
}

#[async_trait(?Send)]
impl NameDialog for ModalNameDialog {
    async fn ask_name(&self) -> NamePrompt {
        let answer = self.modal.with_value(|modal| modal.borrow_mut().open());
        self.hooks.refresh();
        answer.await
    }
}

/// `window.confirm`
#[derive(Clone, Copy, Default)]
pub struct BrowserConfirm;

#[async_trait(?Send)]
impl ConfirmDialog for BrowserConfirm {
    async fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
