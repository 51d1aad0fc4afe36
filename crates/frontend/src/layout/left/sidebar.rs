//! Sidebar component with the navigation tree.
//!
//! Only the "Default" dashboard entry is wired to a view; the remaining
//! entries are static navigation chrome.

use crate::layout::global_context::{use_app_context, ViewMode};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
struct NavEntry {
    label: &'static str,
    icon: &'static str,
}

const DASHBOARD_LINKS: [NavEntry; 3] = [
    NavEntry {
        label: "eCommerce",
        icon: "shopping-bag",
    },
    NavEntry {
        label: "Projects",
        icon: "folder",
    },
    NavEntry {
        label: "Online Courses",
        icon: "book-open",
    },
];

const PAGE_LINKS: [NavEntry; 4] = [
    NavEntry {
        label: "Account",
        icon: "contact",
    },
    NavEntry {
        label: "Corporate",
        icon: "users-round",
    },
    NavEntry {
        label: "Blog",
        icon: "book-text",
    },
    NavEntry {
        label: "Social",
        icon: "message-circle",
    },
];

const PROFILE_SUB: [&str; 5] = ["Overview", "Projects", "Campaigns", "Documents", "Followers"];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    // User Profile starts expanded
    let profile_open = RwSignal::new(true);

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <img class="app-sidebar__brand-avatar" src="/static/profile.png" alt="profile"/>
                <span class="app-sidebar__brand-name">"ByeWind"</span>
            </div>

            <div class="app-sidebar__section">
                <div class="app-sidebar__tabs">
                    <button class="app-sidebar__tab">"Favorites"</button>
                    <button class="app-sidebar__tab app-sidebar__tab--dim">"Recently"</button>
                </div>
                <ul class="app-sidebar__bullets">
                    <li>"Overview"</li>
                    <li>"Projects"</li>
                </ul>
            </div>

            <div class="app-sidebar__section">
                <div class="app-sidebar__heading">"Dashboards"</div>
                <button
                    class="app-sidebar__item app-sidebar__item--indent"
                    class:app-sidebar__item--active=move || ctx.view.get() == ViewMode::Dashboard
                    on:click=move |_| ctx.set_view(ViewMode::Dashboard)
                >
                    {icon("pie-chart")}
                    <span>"Default"</span>
                </button>
                {DASHBOARD_LINKS
                    .iter()
                    .map(|entry| {
                        view! {
                            <button class="app-sidebar__item">
                                <span class="app-sidebar__chevron">{icon("chevron-right")}</span>
                                {icon(entry.icon)}
                                <span>{entry.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="app-sidebar__section">
                <div class="app-sidebar__heading">"Pages"</div>
                <button
                    class="app-sidebar__item"
                    on:click=move |_| profile_open.update(|open| *open = !*open)
                >
                    <span
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--open=move || profile_open.get()
                    >
                        {icon("chevron-right")}
                    </span>
                    {icon("square-user")}
                    <span>"User Profile"</span>
                </button>
                <Show when=move || profile_open.get()>
                    <ul class="app-sidebar__sub">
                        {PROFILE_SUB
                            .iter()
                            .map(|label| view! { <li>{*label}</li> })
                            .collect_view()}
                    </ul>
                </Show>
                {PAGE_LINKS
                    .iter()
                    .map(|entry| {
                        view! {
                            <button class="app-sidebar__item">
                                <span class="app-sidebar__chevron">{icon("chevron-right")}</span>
                                {icon(entry.icon)}
                                <span>{entry.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
