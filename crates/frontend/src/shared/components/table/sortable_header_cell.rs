//! Sortable table header cell.
//!
//! Shows the column label with a sort arrow: up or down when the column
//! drives the current sort, a dimmed both-ways arrow otherwise.

use contracts::domain::orders::{SortDir, SortKey};
use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn SortableHeaderCell(
    /// Column label
    #[prop(into)]
    label: String,

    /// Sort key this column toggles
    sort_key: SortKey,

    /// Currently active sort key
    #[prop(into)]
    active_key: Signal<SortKey>,

    /// Current sort direction
    #[prop(into)]
    direction: Signal<SortDir>,

    /// Callback when the header is clicked
    on_sort: Callback<SortKey>,
) -> impl IntoView {
    let title = format!("Sort by {label}");

    let arrow = move || {
        if active_key.get() == sort_key {
            match direction.get() {
                SortDir::Asc => view! { <span class="sort-arrow">{icon("arrow-up")}</span> },
                SortDir::Desc => view! { <span class="sort-arrow">{icon("arrow-down")}</span> },
            }
        } else {
            view! { <span class="sort-arrow sort-arrow--idle">{icon("arrow-up-down")}</span> }
        }
    };

    view! {
        <th class="orders-table__th">
            <button class="orders-table__sort-btn" title=title on:click=move |_| on_sort.run(sort_key)>
                {label}
                {arrow}
            </button>
        </th>
    }
}
