use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
///
/// Prev/next chevrons around one numbered button per page. Pages are
/// 1-based to match the query model.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                (1..=total_pages.get().max(1))
                    .map(|page| {
                        let active = move || current_page.get() == page;
                        view! {
                            <button
                                class=move || {
                                    if active() {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                }
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
