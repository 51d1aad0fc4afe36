//! Order list screen: toolbar, sortable multi-select table, pagination.
//!
//! All list behavior is driven by one [`state::OrderListState`] signal. A
//! memo feeds it through `contracts::domain::orders::run_query`, and the
//! table renders whatever page comes back. Selection lives in the state as
//! a uid set, so it survives sorting, filtering and page flips.

pub mod state;

use crate::shared::components::table::{SortableHeaderCell, TableHeaderCheckbox};
use crate::shared::components::ui::{Avatar, IconButton, RowCheckbox, StatusPill};
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::orders::{
    run_query, set_row_selected, toggle_page_selection, OrderStatus, SortKey, BASE_ROWS,
    DATE_LABELS,
};
use leptos::prelude::*;

use state::create_state;

#[component]
pub fn OrderList() -> impl IntoView {
    let state = create_state();

    let page_data =
        Memo::new(move |_| state.with(|s| run_query(&BASE_ROWS, &s.to_query(), Utc::now())));

    // When a shrinking result set strands the requested page past the end,
    // write the clamped effective page back into the state.
    Effect::new(move |_| {
        let (effective, total) = page_data.with(|p| (p.page, p.total_pages));
        if state.with_untracked(|s| s.page) > total {
            state.update(|s| s.page = effective);
        }
    });

    let filter_menu_open = RwSignal::new(false);

    let active_key = Signal::derive(move || state.with(|s| s.sort_key));
    let direction = Signal::derive(move || state.with(|s| s.sort_dir));
    let on_sort = Callback::new(move |key: SortKey| state.update(|s| s.toggle_sort(key)));

    let page_uids = Signal::derive(move || page_data.with(|p| p.uids()));
    let selected = Signal::derive(move || state.with(|s| s.selected.clone()));
    let on_header_toggle = Callback::new(move |()| {
        let uids = page_data.with(|p| p.uids());
        state.update(|s| toggle_page_selection(&mut s.selected, &uids));
    });

    let current_page = Signal::derive(move || page_data.with(|p| p.page));
    let total_pages = Signal::derive(move || page_data.with(|p| p.total_pages));
    let on_page_change = Callback::new(move |page: usize| state.update(|s| s.set_page(page)));

    view! {
        <div class="orders">
            <h2 class="orders__heading">"Order List"</h2>

            <div class="orders-toolbar">
                <div class="orders-toolbar__group">
                    <IconButton icon="plus" title="Add order" />
                    <div class="orders-toolbar__filter">
                        <IconButton
                            icon="list-filter"
                            title="Filter"
                            on_click=Callback::new(move |_| {
                                filter_menu_open.update(|open| *open = !*open)
                            })
                        />
                        <Show when=move || filter_menu_open.get()>
                            <div class="orders-toolbar__menu">
                                <div class="orders-toolbar__menu-heading">"Date"</div>
                                <button
                                    class="orders-toolbar__menu-item"
                                    class:orders-toolbar__menu-item--active=move || {
                                        state.with(|s| s.date_filter.is_none())
                                    }
                                    on:click=move |_| {
                                        state.update(|s| s.set_date_filter(None));
                                        filter_menu_open.set(false);
                                    }
                                >
                                    "All Dates"
                                </button>
                                {DATE_LABELS
                                    .iter()
                                    .map(|label| {
                                        let label: &'static str = label;
                                        view! {
                                            <button
                                                class="orders-toolbar__menu-item"
                                                class:orders-toolbar__menu-item--active=move || {
                                                    state.with(|s| s.date_filter.as_deref() == Some(label))
                                                }
                                                on:click=move |_| {
                                                    state.update(|s| s.set_date_filter(Some(label.to_string())));
                                                    filter_menu_open.set(false);
                                                }
                                            >
                                                {label}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                                <div class="orders-toolbar__menu-sep"></div>
                                <div class="orders-toolbar__menu-heading">"Status"</div>
                                <button
                                    class="orders-toolbar__menu-item"
                                    class:orders-toolbar__menu-item--active=move || {
                                        state.with(|s| s.status_filter.is_none())
                                    }
                                    on:click=move |_| {
                                        state.update(|s| s.set_status_filter(None));
                                        filter_menu_open.set(false);
                                    }
                                >
                                    "All Status"
                                </button>
                                {OrderStatus::ALL
                                    .iter()
                                    .map(|status| {
                                        let status = *status;
                                        view! {
                                            <button
                                                class="orders-toolbar__menu-item"
                                                class:orders-toolbar__menu-item--active=move || {
                                                    state.with(|s| s.status_filter == Some(status))
                                                }
                                                on:click=move |_| {
                                                    state.update(|s| s.set_status_filter(Some(status)));
                                                    filter_menu_open.set(false);
                                                }
                                            >
                                                {status.label()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>
                    <IconButton
                        icon="arrow-up-down"
                        title="Toggle sort direction"
                        on_click=Callback::new(move |_| {
                            state.update(|s| {
                                let key = s.sort_key;
                                s.toggle_sort(key);
                            })
                        })
                    />
                </div>
                <div class="orders-toolbar__search">
                    {icon("search")}
                    <input
                        type="text"
                        class="orders-toolbar__search-input"
                        placeholder="Search"
                        prop:value=move || state.with(|s| s.search.clone())
                        on:input=move |ev| {
                            state.update(|s| s.set_search(event_target_value(&ev)))
                        }
                    />
                </div>
            </div>

            <div class="orders-table-wrap">
                <table class="orders-table">
                    <thead>
                        <tr>
                            <TableHeaderCheckbox
                                page_uids=page_uids
                                selected=selected
                                on_toggle=on_header_toggle
                            />
                            <SortableHeaderCell
                                label="Order ID"
                                sort_key=SortKey::Id
                                active_key=active_key
                                direction=direction
                                on_sort=on_sort
                            />
                            <SortableHeaderCell
                                label="User"
                                sort_key=SortKey::User
                                active_key=active_key
                                direction=direction
                                on_sort=on_sort
                            />
                            <SortableHeaderCell
                                label="Project"
                                sort_key=SortKey::Project
                                active_key=active_key
                                direction=direction
                                on_sort=on_sort
                            />
                            <SortableHeaderCell
                                label="Address"
                                sort_key=SortKey::Address
                                active_key=active_key
                                direction=direction
                                on_sort=on_sort
                            />
                            <SortableHeaderCell
                                label="Date"
                                sort_key=SortKey::Date
                                active_key=active_key
                                direction=direction
                                on_sort=on_sort
                            />
                            <SortableHeaderCell
                                label="Status"
                                sort_key=SortKey::Status
                                active_key=active_key
                                direction=direction
                                on_sort=on_sort
                            />
                            <th class="orders-table__th orders-table__th--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            page_data
                                .get()
                                .rows
                                .into_iter()
                                .map(|row| {
                                    let uid = row.uid;
                                    let user_name = row.user.name.clone();
                                    let avatar_src = row.user.avatar.clone();
                                    let row_checked =
                                        Signal::derive(move || {
                                            state.with(|s| s.selected.contains(&uid))
                                        });
                                    view! {
                                        <tr class="orders-table__row">
                                            <td class="orders-table__check-cell">
                                                <RowCheckbox
                                                    checked=row_checked
                                                    on_change=Callback::new(move |checked| {
                                                        state.update(|s| {
                                                            set_row_selected(&mut s.selected, uid, checked)
                                                        })
                                                    })
                                                />
                                            </td>
                                            <td>{row.id}</td>
                                            <td>
                                                <div class="orders-table__user">
                                                    <Avatar src=avatar_src name=user_name.clone() />
                                                    <span>{user_name}</span>
                                                </div>
                                            </td>
                                            <td>{row.project}</td>
                                            <td>{row.address}</td>
                                            <td>
                                                <span class="orders-table__date">
                                                    {icon("calendar")}
                                                    <span>{row.date_label}</span>
                                                </span>
                                            </td>
                                            <td>
                                                <StatusPill status=row.status />
                                            </td>
                                            <td class="orders-table__actions-cell">
                                                <IconButton
                                                    icon="more-horizontal"
                                                    title="Actions"
                                                    class="orders-table__actions-btn"
                                                />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                on_page_change=on_page_change
            />
        </div>
    }
}
