//! Wish Dropdown Component

use leptos::prelude::*;
use wishlist_core::admin::WishSelect;

/// Sorted wish dropdown with a disabled placeholder entry
#[component]
pub fn WishSelectView(
    #[prop(into)] id: String,
    #[prop(into)] select: Signal<WishSelect>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select id=id on:change=move |ev| on_change.run(event_target_value(&ev))>
            {move || {
                let select = select.get();
                let placeholder_selected = select.selected().is_none();
                let options = select
                    .options()
                    .iter()
                    .map(|option| {
                        let selected = select.selected() == Some(option.id.as_str());
                        view! {
                            <option value=option.id.clone() prop:selected=selected>
                                {option.label.clone()}
                            </option>
                        }
                    })
                    .collect_view();
                view! {
                    <option value="" disabled=true prop:selected=placeholder_selected>
                        {select.placeholder()}
                    </option>
                    {options}
                }
            }}
        </select>
    }
}
