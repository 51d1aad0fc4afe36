//! Tri-state checkbox in the table header for page-wide selection.
//!
//! Checked when every row on the current page is selected, indeterminate
//! when only some are. Clicking always routes through the caller's toggle
//! so the indeterminate case clears rather than selecting.

use contracts::domain::orders::{header_state, HeaderState};
use leptos::prelude::*;
use std::collections::HashSet;
use wasm_bindgen::JsCast;

#[component]
pub fn TableHeaderCheckbox(
    /// Row uids on the current page, in display order
    #[prop(into)]
    page_uids: Signal<Vec<u32>>,

    /// Selected row uids across all pages
    #[prop(into)]
    selected: Signal<HashSet<u32>>,

    /// Callback when the checkbox is clicked
    on_toggle: Callback<()>,
) -> impl IntoView {
    let checkbox_state =
        Signal::derive(move || selected.with(|sel| header_state(&page_uids.get(), sel)));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // The indeterminate flag only exists as a DOM property
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                let is_indeterminate = matches!(checkbox_state.get(), HeaderState::Indeterminate);
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <th class="orders-table__th orders-table__th--check">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="row-checkbox"
                prop:checked=move || matches!(checkbox_state.get(), HeaderState::Checked)
                on:change=move |_| on_toggle.run(())
            />
        </th>
    }
}
