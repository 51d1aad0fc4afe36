//! Right-hand info panel: notifications, activity feed and contacts.
//!
//! All content is static display data; only the panel visibility is
//! interactive and that lives in the `Right` zone wrapper.

use crate::shared::components::ui::Avatar;
use crate::shared::icons::icon;
use leptos::prelude::*;

const NOTIFICATIONS: [(&str, &str, &str); 4] = [
    ("bug", "You have a bug that needs...", "Just now"),
    ("user-round", "New user registered", "59 minutes ago"),
    ("bug", "You have a bug that needs...", "12 hours ago"),
    ("radio", "Andi Lane subscribed to you", "Today, 11:59 AM"),
];

const ACTIVITIES: [(&str, &str); 5] = [
    ("You have a bug that needs...", "Just now"),
    ("Released a new version", "59 minutes ago"),
    ("Submitted a bug", "12 hours ago"),
    ("Modified A data in Page X", "Today, 11:59 AM"),
    ("Deleted a page in Project X", "Feb 2, 2023"),
];

const CONTACTS: [&str; 6] = [
    "Natali Craig",
    "Drew Cano",
    "Orlando Diggs",
    "Andi Lane",
    "Kate Morrison",
    "Koray Okumus",
];

#[component]
pub fn InfoPanel() -> impl IntoView {
    let notifications = NOTIFICATIONS
        .iter()
        .map(|(icon_name, title, time)| {
            view! {
                <li class="info-panel__row">
                    <span class="info-panel__bubble">{icon(icon_name)}</span>
                    <span class="info-panel__text">
                        <span class="info-panel__title">{*title}</span>
                        <span class="info-panel__time">{*time}</span>
                    </span>
                </li>
            }
        })
        .collect_view();

    let last = ACTIVITIES.len() - 1;
    let activities = ACTIVITIES
        .iter()
        .enumerate()
        .map(|(i, (title, time))| {
            let src = format!("/static/activities/mascot-{}.png", i + 1);
            view! {
                <li class="info-panel__row">
                    <span class="info-panel__activity-avatar">
                        <img src=src alt=""/>
                        <Show when=move || i != last>
                            <span class="info-panel__connector"></span>
                        </Show>
                    </span>
                    <span class="info-panel__text">
                        <span class="info-panel__title">{*title}</span>
                        <span class="info-panel__time">{*time}</span>
                    </span>
                </li>
            }
        })
        .collect_view();

    let contacts = CONTACTS
        .iter()
        .map(|name| {
            let file = name
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_lowercase();
            view! {
                <li class="info-panel__row info-panel__row--contact">
                    <Avatar src=format!("/static/contacts/{file}.png") name=*name/>
                    <span class="info-panel__title">{*name}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="info-panel">
            <section class="info-panel__section">
                <h2 class="info-panel__heading">"Notifications"</h2>
                <ul class="info-panel__list">{notifications}</ul>
            </section>

            <section class="info-panel__section">
                <h2 class="info-panel__heading">"Activities"</h2>
                <ul class="info-panel__list info-panel__list--activities">{activities}</ul>
            </section>

            <section class="info-panel__section">
                <h2 class="info-panel__heading">"Contacts"</h2>
                <ul class="info-panel__list info-panel__list--contacts">{contacts}</ul>
            </section>
        </div>
    }
}
