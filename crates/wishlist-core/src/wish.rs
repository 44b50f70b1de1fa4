//! Wish Entity
//!
//! A single gift-list entry and the payload used to create or update one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A gift-list entry owned by one family member.
///
/// Optional display fields are empty strings when unset and are left out of
/// the JSON encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wish {
    /// Server-assigned unique id
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Shop link
    #[serde(default)]
    pub url: String,
    /// Display price, free text
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub price: String,
    /// Owner value, see [`crate::Member`]
    #[serde(default)]
    pub owner: String,
    /// Image URL
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Presence check failures, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,
    #[error("url is required")]
    MissingUrl,
    #[error("owner is required")]
    MissingOwner,
}

impl Wish {
    /// Trim every text field and lowercase the owner.
    pub fn sanitize(&mut self) {
        trim_in_place(&mut self.title);
        trim_in_place(&mut self.url);
        trim_in_place(&mut self.price);
        self.owner = self.owner.trim().to_lowercase();
        trim_in_place(&mut self.image);
        trim_in_place(&mut self.description);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.url.is_empty() {
            return Err(ValidationError::MissingUrl);
        }
        if self.owner.is_empty() {
            return Err(ValidationError::MissingOwner);
        }
        Ok(())
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    /// Build a wish from a draft under the given id
    pub fn from_draft(id: impl Into<String>, draft: WishDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            url: draft.url,
            price: draft.price,
            owner: draft.owner,
            image: draft.image,
            description: draft.description,
        }
    }
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Create/update payload: every wish field except the id.
///
/// Also serves as the raw field state of the admin forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishDraft {
    pub owner: String,
    pub title: String,
    pub url: String,
    pub price: String,
    pub image: String,
    pub description: String,
}

impl WishDraft {
    /// Empty draft preselecting an owner
    pub fn with_owner(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..Default::default()
        }
    }

    /// Copy of the draft with every field trimmed
    pub fn trimmed(&self) -> Self {
        Self {
            owner: self.owner.trim().to_string(),
            title: self.title.trim().to_string(),
            url: self.url.trim().to_string(),
            price: self.price.trim().to_string(),
            image: self.image.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }

    /// Client-side presence check: owner, title and link must be filled in
    pub fn is_complete(&self) -> bool {
        !self.owner.trim().is_empty() && !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }
}

impl From<&Wish> for WishDraft {
    fn from(wish: &Wish) -> Self {
        Self {
            owner: wish.owner.to_lowercase(),
            title: wish.title.clone(),
            url: wish.url.clone(),
            price: wish.price.clone(),
            image: wish.image.clone(),
            description: wish.description.clone(),
        }
    }
}
