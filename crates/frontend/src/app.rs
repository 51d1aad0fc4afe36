use crate::dashboards::EcommerceDashboard;
use crate::domain::orders::ui::list::OrderList;
use crate::layout::global_context::{provide_app_context, ViewMode};
use crate::layout::left::Sidebar;
use crate::layout::right::panel::InfoPanel;
use crate::layout::Shell;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Shared UI state for the whole tree, with the active view mirrored
    // into the URL query string.
    let ctx = provide_app_context();

    let center = move || {
        view! {
            <div class="view-fade" class:view-fade--out=move || ctx.view_fading().get()>
                {move || match ctx.view.get() {
                    ViewMode::Dashboard => view! { <EcommerceDashboard /> }.into_any(),
                    ViewMode::OrderHistory => view! { <OrderList /> }.into_any(),
                }}
            </div>
        }
        .into_any()
    };

    view! {
        <ThemeProvider>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=center
                right=|| view! { <InfoPanel /> }.into_any()
            />
        </ThemeProvider>
    }
}
