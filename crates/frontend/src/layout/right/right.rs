use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Right zone wrapper. Slides the notification panel out of view when
/// toggled off; the panel content stays mounted.
#[component]
pub fn Right(children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div
            data-zone="right"
            class="right-panel"
            class:right-panel--hidden=move || !ctx.right_open.get()
        >
            {children()}
        </div>
    }
}
