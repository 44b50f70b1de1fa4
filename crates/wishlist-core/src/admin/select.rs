//! Wish Dropdown
//!
//! Option list shared by the edit and delete forms, sorted by owner then title.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::{owner_label, Wish};

/// One dropdown entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishSelect {
    options: Vec<WishOption>,
    selected: Option<String>,
}

impl WishSelect {
    /// Rebuild the options from `wishes`.
    ///
    /// Keeps `preferred` (or the current selection when `None`) if that wish is
    /// still listed, otherwise falls back to the placeholder.
    pub fn populate(&mut self, wishes: &[Wish], preferred: Option<&str>) {
        let current = preferred
            .map(str::to_string)
            .or_else(|| self.selected.take());

        self.options = sorted(wishes)
            .into_iter()
            .map(|wish| WishOption {
                id: wish.id.clone(),
                label: option_label(wish),
            })
            .collect();

        self.selected = current.filter(|id| self.options.iter().any(|option| &option.id == id));
    }

    pub fn options(&self) -> &[WishOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Set the selection; an empty id selects the placeholder
    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.filter(|id| !id.is_empty()).map(str::to_string);
    }

    pub fn placeholder(&self) -> &'static str {
        if self.options.is_empty() {
            "Keine Wünsche vorhanden"
        } else {
            "Wunsch auswählen"
        }
    }
}

/// "{owner label} · {title}"
pub fn option_label(wish: &Wish) -> String {
    format!("{} · {}", owner_label(&wish.owner), wish.title)
}

/// Wishes ordered by owner, then title
pub fn sorted(wishes: &[Wish]) -> Vec<&Wish> {
    let mut sorted: Vec<&Wish> = wishes.iter().collect();
    sorted.sort_by(|a, b| {
        compare_text(&a.owner, &b.owner).then_with(|| compare_text(&a.title, &b.title))
    });
    sorted
}

/// Dictionary order: base letters first, ignoring case and accents, so "Äpfel"
/// sorts with "Apfel". Lowercase and then raw text break ties.
fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Lowercased base letters: decompose, drop combining marks
fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
