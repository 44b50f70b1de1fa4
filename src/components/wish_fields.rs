//! Wish Fields Component
//!
//! Owner, title, link, price, image and description inputs shared by the
//! create and edit forms.

use leptos::prelude::*;
use wishlist_core::admin::AdminState;
use wishlist_core::{Member, WishDraft};

use crate::context::AdminContext;

/// Which form's draft the fields edit
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum DraftSlot {
    Create,
    Edit,
}

impl DraftSlot {
    fn prefix(self) -> &'static str {
        match self {
            DraftSlot::Create => "new",
            DraftSlot::Edit => "edit",
        }
    }

    fn draft(self, state: &AdminState) -> &WishDraft {
        match self {
            DraftSlot::Create => &state.create.fields,
            DraftSlot::Edit => &state.edit.fields,
        }
    }

    fn draft_mut(self, state: &mut AdminState) -> &mut WishDraft {
        match self {
            DraftSlot::Create => &mut state.create.fields,
            DraftSlot::Edit => &mut state.edit.fields,
        }
    }
}

#[derive(Clone, Copy)]
enum Field {
    Title,
    Url,
    Price,
    Image,
    Description,
}

impl Field {
    fn get(self, draft: &WishDraft) -> &String {
        match self {
            Field::Title => &draft.title,
            Field::Url => &draft.url,
            Field::Price => &draft.price,
            Field::Image => &draft.image,
            Field::Description => &draft.description,
        }
    }

    fn get_mut(self, draft: &mut WishDraft) -> &mut String {
        match self {
            Field::Title => &mut draft.title,
            Field::Url => &mut draft.url,
            Field::Price => &mut draft.price,
            Field::Image => &mut draft.image,
            Field::Description => &mut draft.description,
        }
    }
}

#[component]
pub fn WishFields(slot: DraftSlot) -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext should be provided");
    let prefix = slot.prefix();

    let value = move |field: Field| ctx.read(|state| field.get(slot.draft(state)).clone());
    let set = move |field: Field, text: String| {
        ctx.modify(|state| *field.get_mut(slot.draft_mut(state)) = text)
    };

    let text_input = move |field: Field, name: &'static str, label: &'static str, kind: &'static str| {
        let id = format!("{prefix}-{name}");
        view! {
            <label for=id.clone()>{label}</label>
            <input
                id=id
                name=name
                type=kind
                prop:value=move || value(field)
                on:input=move |ev| set(field, event_target_value(&ev))
            />
        }
    };

    view! {
        <label for=format!("{prefix}-owner")>"Besitzer*in"</label>
        <select
            id=format!("{prefix}-owner")
            name="owner"
            on:change=move |ev| ctx.modify(|state| slot.draft_mut(state).owner = event_target_value(&ev))
        >
            {Member::ALL.into_iter().map(|member| {
                let selected = move || ctx.read(|state| slot.draft(state).owner == member.value());
                view! {
                    <option value=member.value() prop:selected=selected>{member.label()}</option>
                }
            }).collect_view()}
        </select>
        {text_input(Field::Title, "title", "Titel", "text")}
        {text_input(Field::Url, "url", "Link", "url")}
        {text_input(Field::Price, "price", "Preis", "text")}
        {text_input(Field::Image, "image", "Bild-URL", "url")}
        <label for=format!("{prefix}-description")>"Beschreibung"</label>
        <textarea
            id=format!("{prefix}-description")
            name="description"
            rows="4"
            prop:value=move || value(Field::Description)
            on:input=move |ev| set(Field::Description, event_target_value(&ev))
        ></textarea>
    }
}
