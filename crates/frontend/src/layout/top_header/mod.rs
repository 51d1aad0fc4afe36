//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Toggle buttons for sidebar and right panel
//! - Breadcrumb trail back to the default dashboard
//! - Decorative search field
//! - Theme toggle and order history shortcut

use crate::layout::global_context::{use_app_context, ViewMode};
use crate::shared::icons::icon;
use crate::shared::theme::{use_theme, Theme};
use leptos::prelude::*;

/// TopHeader component - main application top bar.
///
/// Uses AppGlobalContext for sidebar/panel visibility and view switching.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let theme = use_theme();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let toggle_right_panel = move |_| {
        ctx.toggle_right();
    };

    let toggle_history = move |_| {
        ctx.toggle_view();
    };

    let toggle_theme = move |_| {
        theme.toggle_theme();
    };

    view! {
        <div class="top-header">
            // Left section - sidebar toggle and breadcrumb
            <div class="top-header__brand">
                <button
                    class="icon-btn"
                    on:click=toggle_sidebar
                    title="Toggle sidebar"
                >
                    {icon("panel-left")}
                </button>
                <button class="icon-btn" title="Favorites">
                    {icon("star")}
                </button>
                <nav class="top-header__breadcrumb">
                    <a
                        class="top-header__crumb top-header__crumb--link"
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.set_view(ViewMode::Dashboard);
                        }
                    >
                        "Dashboards"
                    </a>
                    <span class="top-header__crumb-sep">"/"</span>
                    <span class="top-header__crumb">
                        {move || match ctx.view.get() {
                            ViewMode::Dashboard => "Default",
                            ViewMode::OrderHistory => "Order List",
                        }}
                    </span>
                </nav>
            </div>

            // Right section - actions
            <div class="top-header__actions">
                // Decorative search field
                <div class="top-header__search">
                    {icon("search")}
                    <input class="top-header__search-input" type="text" placeholder="Search"/>
                    <span class="top-header__search-kbd">
                        <kbd>"\u{2318}"</kbd>
                        <span>"/"</span>
                    </span>
                </div>

                // Theme toggle
                <button class="icon-btn" on:click=toggle_theme title="Toggle theme">
                    {move || match theme.theme.get() {
                        Theme::Light => icon("sun"),
                        Theme::Dark => icon("moon"),
                    }}
                </button>

                // Order history view
                <button
                    class="icon-btn"
                    on:click=toggle_history
                    title="Order history"
                >
                    {icon("history")}
                </button>

                // Notifications
                <button class="icon-btn" title="Notifications">
                    {icon("bell")}
                </button>

                // Right panel toggle
                <button
                    class="icon-btn"
                    on:click=toggle_right_panel
                    title="Toggle right panel"
                >
                    {icon("panel-right")}
                </button>
            </div>
        </div>
    }
}
