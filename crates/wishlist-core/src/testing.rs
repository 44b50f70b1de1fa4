//! In-memory test doubles for the view-model tests

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures_channel::oneshot;

use crate::{
    ApiError, ApiResult, ConfirmDialog, NameDialog, NameModal, NamePrompt, Reservations,
    ViewHooks, Wish, WishDraft, WishlistApi,
};

pub fn wish(id: &str, owner: &str, title: &str) -> Wish {
    Wish {
        id: id.to_string(),
        owner: owner.to_string(),
        title: title.to_string(),
        url: format!("https://shop.example/{id}"),
        ..Default::default()
    }
}

/// Wish store held in memory, recording every call
#[derive(Default)]
pub struct FakeApi {
    pub wishes: RefCell<Vec<Wish>>,
    pub reservations: RefCell<Reservations>,
    pub calls: RefCell<Vec<String>>,
    pub saved: RefCell<Vec<Reservations>>,
    /// Returned by the next call instead of doing anything
    pub fail_next: RefCell<Option<ApiError>>,
    /// Holds `create_wish` open until the sender fires or drops
    pub gate: RefCell<Option<oneshot::Receiver<()>>>,
    next_id: Cell<u32>,
}

impl FakeApi {
    pub fn with_wishes(wishes: Vec<Wish>) -> Self {
        let api = Self::default();
        *api.wishes.borrow_mut() = wishes;
        api
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: String) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl WishlistApi for Rc<FakeApi> {
    async fn wishes(&self) -> ApiResult<Vec<Wish>> {
        self.record("wishes".to_string())?;
        Ok(self.wishes.borrow().clone())
    }

    async fn reservations(&self) -> ApiResult<Reservations> {
        self.record("reservations".to_string())?;
        Ok(self.reservations.borrow().clone())
    }

    async fn save_reservations(&self, reservations: &Reservations) -> ApiResult<()> {
        self.record("save_reservations".to_string())?;
        self.saved.borrow_mut().push(reservations.clone());
        *self.reservations.borrow_mut() = reservations.clone();
        Ok(())
    }

    async fn admin_wishes(&self) -> ApiResult<Vec<Wish>> {
        self.record("admin_wishes".to_string())?;
        Ok(self.wishes.borrow().clone())
    }

    async fn create_wish(&self, draft: &WishDraft) -> ApiResult<Wish> {
        self.record("create_wish".to_string())?;
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.next_id.set(self.next_id.get() + 1);
        let created = Wish::from_draft(format!("new-{}", self.next_id.get()), draft.clone());
        self.wishes.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_wish(&self, id: &str, draft: &WishDraft) -> ApiResult<Wish> {
        self.record(format!("update_wish {id}"))?;
        let updated = Wish::from_draft(id, draft.clone());
        let mut wishes = self.wishes.borrow_mut();
        match wishes.iter_mut().find(|wish| wish.id == id) {
            Some(slot) => {
                *slot = updated.clone();
                Ok(updated)
            }
            None => Err(ApiError::Status {
                status: 404,
                message: "wish not found".to_string(),
            }),
        }
    }

    async fn delete_wish(&self, id: &str) -> ApiResult<()> {
        self.record(format!("delete_wish {id}"))?;
        self.wishes.borrow_mut().retain(|wish| wish.id != id);
        Ok(())
    }
}

/// Counts refreshes and chimes
#[derive(Default)]
pub struct CountingHooks {
    pub refreshes: Cell<u32>,
    pub chimes: Cell<u32>,
}

impl ViewHooks for Rc<CountingHooks> {
    fn refresh(&self) {
        self.refreshes.set(self.refreshes.get() + 1);
    }

    fn reserved(&self) {
        self.chimes.set(self.chimes.get() + 1);
    }
}

/// Name dialog answering from a script
#[derive(Default)]
pub struct ScriptedNames(pub RefCell<VecDeque<NamePrompt>>);

#[async_trait(?Send)]
impl NameDialog for Rc<ScriptedNames> {
    async fn ask_name(&self) -> NamePrompt {
        self.0
            .borrow_mut()
            .pop_front()
            .unwrap_or(NamePrompt::Cancelled)
    }
}

/// Name dialog backed by a real modal the test drives by hand
pub struct ModalNames(pub Rc<RefCell<NameModal>>);

#[async_trait(?Send)]
impl NameDialog for ModalNames {
    async fn ask_name(&self) -> NamePrompt {
        let answer = self.0.borrow_mut().open();
        answer.await
    }
}

/// Confirmation dialog with a fixed answer, remembering the questions
#[derive(Default)]
pub struct FixedConfirm {
    pub answer: Cell<bool>,
    pub asked: RefCell<Vec<String>>,
}

#[async_trait(?Send)]
impl ConfirmDialog for Rc<FixedConfirm> {
    async fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}
