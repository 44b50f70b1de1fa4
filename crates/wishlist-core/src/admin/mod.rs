//! Admin Console
//!
//! View-model of the admin page. Holds the wish cache and the state of the
//! create, edit and delete forms; every mutating action goes through the
//! [`WishlistApi`] and reports back as inline form status.

mod forms;
mod panels;
mod select;

use std::cell::{Ref, RefCell};

use log::{error, info};

use crate::{ApiResult, ConfirmDialog, ViewHooks, Wish, WishlistApi};

pub use forms::{preview_text, CreateForm, DeleteForm, EditForm, FormStatus, StatusTone};
pub use panels::{Panel, Panels};
pub use select::{option_label, WishOption, WishSelect};

use forms::{
    MSG_FILL_REQUIRED, MSG_LOADING, MSG_LOAD_FAILED, MSG_NOT_FOUND, MSG_NO_WISHES,
    MSG_SELECT_FIRST, MSG_SELECT_ONE,
};

/// Everything the admin page renders
#[derive(Debug, Clone, Default)]
pub struct AdminState {
    /// Cached wish list; empty means "fetch on next need"
    pub wishes: Vec<Wish>,
    pub create: CreateForm,
    pub edit: EditForm,
    pub delete: DeleteForm,
    pub panels: Panels,
}

impl AdminState {
    pub fn find(&self, id: &str) -> Option<&Wish> {
        self.wishes.iter().find(|wish| wish.id == id)
    }

    /// Replace a cached wish by id, appending unknown ones
    fn merge(&mut self, updated: Wish) {
        match self.wishes.iter_mut().find(|wish| wish.id == updated.id) {
            Some(slot) => *slot = updated,
            None => self.wishes.push(updated),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormKind {
    Create,
    Edit,
    Delete,
}

impl FormKind {
    fn busy_mut(self, state: &mut AdminState) -> &mut bool {
        match self {
            FormKind::Create => &mut state.create.busy,
            FormKind::Edit => &mut state.edit.busy,
            FormKind::Delete => &mut state.delete.busy,
        }
    }

    fn status_mut(self, state: &mut AdminState) -> &mut Option<FormStatus> {
        match self {
            FormKind::Create => &mut state.create.status,
            FormKind::Edit => &mut state.edit.status,
            FormKind::Delete => &mut state.delete.status,
        }
    }
}

/// Re-enables a form's submit control when dropped, whatever the outcome
struct SubmitGuard<'a, H: ViewHooks> {
    state: &'a RefCell<AdminState>,
    hooks: &'a H,
    form: FormKind,
}

impl<H: ViewHooks> Drop for SubmitGuard<'_, H> {
    fn drop(&mut self) {
        match self.state.try_borrow_mut() {
            Ok(mut state) => *self.form.busy_mut(&mut state) = false,
            Err(err) => error!("{:?} form left busy, state still borrowed: {}", self.form, err),
        }
        self.hooks.refresh();
    }
}

pub struct AdminConsole<A, C, H> {
    api: A,
    confirm: C,
    hooks: H,
    state: RefCell<AdminState>,
}

impl<A, C, H> AdminConsole<A, C, H>
where
    A: WishlistApi,
    C: ConfirmDialog,
    H: ViewHooks,
{
    pub fn new(api: A, confirm: C, hooks: H) -> Self {
        Self {
            api,
            confirm,
            hooks,
            state: RefCell::new(AdminState::default()),
        }
    }

    pub fn state(&self) -> Ref<'_, AdminState> {
        self.state.borrow()
    }

    /// Mutate state without re-rendering, e.g. for field input
    pub fn modify<R>(&self, f: impl FnOnce(&mut AdminState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    /// Mutate state and re-render
    fn update<R>(&self, f: impl FnOnce(&mut AdminState) -> R) -> R {
        let result = f(&mut self.state.borrow_mut());
        self.hooks.refresh();
        result
    }

    fn set_status(&self, form: FormKind, status: FormStatus) {
        self.update(|state| *form.status_mut(state) = Some(status));
    }

    /// Mark a form busy with a progress message; `None` if it already is
    fn begin(&self, form: FormKind, progress: &str) -> Option<SubmitGuard<'_, H>> {
        let started = self.update(|state| {
            let busy = form.busy_mut(state);
            if *busy {
                return false;
            }
            *busy = true;
            *form.status_mut(state) = Some(FormStatus::success(progress));
            true
        });
        started.then(|| SubmitGuard {
            state: &self.state,
            hooks: &self.hooks,
            form,
        })
    }

    /// Cached wishes, fetched when the cache is empty or `force` is set
    pub async fn refresh_cache(&self, force: bool) -> ApiResult<Vec<Wish>> {
        {
            let state = self.state.borrow();
            if !force && !state.wishes.is_empty() {
                return Ok(state.wishes.clone());
            }
        }
        let wishes = self.api.admin_wishes().await?;
        self.state.borrow_mut().wishes = wishes.clone();
        Ok(wishes)
    }

    // ========================
    // Panels & menu
    // ========================

    pub fn open_create(&self) {
        self.update(|state| state.panels.open(Panel::Create));
    }

    pub async fn open_editor(&self) {
        self.update(|state| state.panels.open(Panel::Edit));
        self.load_editor_data().await;
    }

    pub async fn open_delete(&self) {
        self.update(|state| state.panels.open(Panel::Delete));
        self.load_delete_data().await;
    }

    pub fn close_panel(&self, panel: Panel) {
        self.update(|state| state.panels.close(panel));
    }

    pub fn escape(&self) {
        self.update(|state| state.panels.escape());
    }

    pub fn toggle_menu(&self) {
        self.update(|state| state.panels.toggle_menu());
    }

    pub fn close_menu(&self) {
        self.update(|state| state.panels.close_menu());
    }

    // ========================
    // Create
    // ========================

    pub async fn submit_create(&self) {
        let draft = self.state.borrow().create.fields.trimmed();
        if !draft.is_complete() {
            self.set_status(FormKind::Create, FormStatus::error(MSG_FILL_REQUIRED));
            return;
        }

        let Some(_guard) = self.begin(FormKind::Create, "Speichere …") else {
            return;
        };

        match self.api.create_wish(&draft).await {
            Ok(created) => {
                info!("Created wish {}", created.id);
                self.update(|state| {
                    state.create.reset();
                    state.create.status = Some(FormStatus::success("Gespeichert!"));
                    state.wishes.clear();
                });
            }
            Err(err) => {
                error!("Creating wish failed: {}", err);
                self.set_status(
                    FormKind::Create,
                    FormStatus::error(err.user_message("Speichern fehlgeschlagen.")),
                );
            }
        }
    }

    // ========================
    // Edit
    // ========================

    pub async fn load_editor_data(&self) {
        self.set_status(FormKind::Edit, FormStatus::success(MSG_LOADING));

        match self.refresh_cache(true).await {
            Ok(wishes) => self.update(|state| {
                state.edit.select.populate(&wishes, None);
                state.edit.status = Some(FormStatus::success(if wishes.is_empty() {
                    MSG_NO_WISHES
                } else {
                    "Wunsch auswählen und bearbeiten."
                }));
            }),
            Err(err) => {
                error!("Loading wishes failed: {}", err);
                self.set_status(FormKind::Edit, FormStatus::error(err.user_message(MSG_LOAD_FAILED)));
            }
        }
    }

    /// Edit dropdown changed
    pub fn select_for_edit(&self, id: &str) {
        self.update(|state| {
            state.edit.select.select(Some(id));
            if id.is_empty() {
                state.edit.fill(None);
                state.edit.status = Some(FormStatus::error(MSG_SELECT_ONE));
                return;
            }

            let wish = state.find(id).cloned();
            state.edit.fill(wish.as_ref());
            state.edit.status = Some(match wish {
                Some(_) => {
                    FormStatus::success("Wunsch geladen. Änderungen speichern mit „Aktualisieren“.")
                }
                None => FormStatus::error(MSG_NOT_FOUND),
            });
        });
    }

    pub async fn submit_edit(&self) {
        let (id, draft) = {
            let state = self.state.borrow();
            (state.edit.wish_id.trim().to_string(), state.edit.fields.trimmed())
        };
        if id.is_empty() {
            self.set_status(FormKind::Edit, FormStatus::error(MSG_SELECT_FIRST));
            return;
        }
        if !draft.is_complete() {
            self.set_status(FormKind::Edit, FormStatus::error(MSG_FILL_REQUIRED));
            return;
        }

        let Some(_guard) = self.begin(FormKind::Edit, "Aktualisiere …") else {
            return;
        };

        match self.api.update_wish(&id, &draft).await {
            Ok(updated) => {
                info!("Updated wish {}", updated.id);
                self.update(|state| {
                    state.merge(updated.clone());
                    let wishes = state.wishes.clone();
                    state.edit.select.populate(&wishes, Some(&updated.id));
                    state.edit.fill(Some(&updated));
                    state.edit.status = Some(FormStatus::success("Aktualisiert!"));
                });
            }
            Err(err) => {
                error!("Updating wish {} failed: {}", id, err);
                self.set_status(
                    FormKind::Edit,
                    FormStatus::error(err.user_message("Aktualisierung fehlgeschlagen.")),
                );
            }
        }
    }

    // ========================
    // Delete
    // ========================

    pub async fn load_delete_data(&self) {
        self.update(|state| {
            state.delete.fill_preview(None);
            state.delete.status = Some(FormStatus::success(MSG_LOADING));
        });

        match self.refresh_cache(true).await {
            Ok(wishes) => self.update(|state| {
                state.delete.select.populate(&wishes, None);
                state.delete.status = Some(FormStatus::success(if wishes.is_empty() {
                    MSG_NO_WISHES
                } else {
                    "Wunsch auswählen und löschen."
                }));
            }),
            Err(err) => {
                error!("Loading wishes failed: {}", err);
                self.set_status(
                    FormKind::Delete,
                    FormStatus::error(err.user_message(MSG_LOAD_FAILED)),
                );
            }
        }
    }

    /// Delete dropdown changed
    pub fn select_for_delete(&self, id: &str) {
        self.update(|state| {
            state.delete.select.select(Some(id));
            if id.is_empty() {
                state.delete.fill_preview(None);
                state.delete.status = Some(FormStatus::error(MSG_SELECT_ONE));
                return;
            }

            let wish = state.find(id).cloned();
            state.delete.fill_preview(wish.as_ref());
            state.delete.status = Some(match wish {
                Some(_) => FormStatus::success("Bereit zum Löschen. Vorgang mit „Löschen“ bestätigen."),
                None => FormStatus::error(MSG_NOT_FOUND),
            });
        });
    }

    pub async fn submit_delete(&self) {
        let (id, title) = {
            let state = self.state.borrow();
            let id = state.delete.select.selected().unwrap_or_default().trim().to_string();
            let title = state
                .find(&id)
                .map(|wish| wish.title.clone())
                .unwrap_or_else(|| id.clone());
            (id, title)
        };
        if id.is_empty() {
            self.set_status(FormKind::Delete, FormStatus::error(MSG_SELECT_FIRST));
            return;
        }

        let question = format!("Soll \"{}\" dauerhaft gelöscht werden?", title);
        if !self.confirm.confirm(&question).await {
            self.set_status(FormKind::Delete, FormStatus::success("Löschen abgebrochen."));
            return;
        }

        let Some(_guard) = self.begin(FormKind::Delete, "Lösche …") else {
            return;
        };

        match self.api.delete_wish(&id).await {
            Ok(()) => {
                info!("Deleted wish {}", id);
                self.update(|state| {
                    state.wishes.retain(|wish| wish.id != id);
                    let wishes = state.wishes.clone();

                    state.delete.select.populate(&wishes, None);
                    state.delete.select.select(None);
                    state.delete.fill_preview(None);
                    state.delete.status = Some(FormStatus::success("Wunsch gelöscht."));

                    state.edit.select.populate(&wishes, None);
                    if state.edit.wish_id == id {
                        state.edit.fill(None);
                        state.edit.status = Some(FormStatus::error("Wunsch wurde gelöscht."));
                    }
                });
            }
            Err(err) => {
                error!("Deleting wish {} failed: {}", id, err);
                self.set_status(
                    FormKind::Delete,
                    FormStatus::error(err.user_message("Löschen fehlgeschlagen.")),
                );
            }
        }
    }
}
