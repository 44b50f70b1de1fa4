//! Admin Form State
//!
//! Field values, inline status and busy flags of the three admin forms.

use crate::{owner_label, Member, Wish, WishDraft};

use super::select::WishSelect;

pub const MSG_FILL_REQUIRED: &str = "Bitte Besitzer*in, Titel und Link ausfüllen.";
pub const MSG_SELECT_FIRST: &str = "Bitte zuerst einen Wunsch auswählen.";
pub const MSG_SELECT_ONE: &str = "Bitte einen Wunsch auswählen.";
pub const MSG_NOT_FOUND: &str = "Wunsch nicht gefunden.";
pub const MSG_LOADING: &str = "Lade Wünsche …";
pub const MSG_NO_WISHES: &str = "Noch keine Wünsche vorhanden.";
pub const MSG_LOAD_FAILED: &str = "Wünsche konnten nicht geladen werden.";
pub const MSG_NO_PREVIEW: &str = "Noch kein Wunsch ausgewählt.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
}

impl StatusTone {
    /// Value of the status element's `data-status` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Success => "success",
            StatusTone::Error => "error",
        }
    }
}

/// Inline status text below a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub message: String,
    pub tone: StatusTone,
}

impl FormStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: StatusTone::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: StatusTone::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.tone == StatusTone::Error
    }
}

/// "New wish" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateForm {
    pub fields: WishDraft,
    pub status: Option<FormStatus>,
    /// Submit control disabled while a request is in flight
    pub busy: bool,
}

impl Default for CreateForm {
    fn default() -> Self {
        Self {
            fields: WishDraft::with_owner(Member::ALL[0].value()),
            status: None,
            busy: false,
        }
    }
}

impl CreateForm {
    /// Back to the initial field values, keeping status and busy flag
    pub fn reset(&mut self) {
        self.fields = CreateForm::default().fields;
    }
}

/// "Edit wish" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub select: WishSelect,
    /// Id of the wish currently loaded into the fields, empty when none
    pub wish_id: String,
    pub fields: WishDraft,
    pub status: Option<FormStatus>,
    pub busy: bool,
}

impl EditForm {
    /// Load a wish into the fields, or clear them with `None`
    pub fn fill(&mut self, wish: Option<&Wish>) {
        match wish {
            Some(wish) => {
                self.wish_id = wish.id.clone();
                self.fields = WishDraft::from(wish);
            }
            None => {
                self.wish_id.clear();
                self.fields = WishDraft::default();
            }
        }
    }
}

/// "Delete wish" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteForm {
    pub select: WishSelect,
    pub preview: String,
    pub status: Option<FormStatus>,
    pub busy: bool,
}

impl Default for DeleteForm {
    fn default() -> Self {
        Self {
            select: WishSelect::default(),
            preview: MSG_NO_PREVIEW.to_string(),
            status: None,
            busy: false,
        }
    }
}

impl DeleteForm {
    pub fn fill_preview(&mut self, wish: Option<&Wish>) {
        self.preview = match wish {
            Some(wish) => preview_text(wish),
            None => MSG_NO_PREVIEW.to_string(),
        };
    }
}

/// "{owner} · {title}[ · {price}]"
pub fn preview_text(wish: &Wish) -> String {
    let mut text = format!("{} · {}", owner_label(&wish.owner), wish.title);
    if !wish.price.is_empty() {
        text.push_str(" · ");
        text.push_str(&wish.price);
    }
    text
}
